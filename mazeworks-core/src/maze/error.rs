//! Error types for maze construction and carving.

use thiserror::Error;

use crate::error::{CollectionError, GraphError, define_error_codes};

use super::Room;

/// An error produced while building, carving or solving a maze.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum MazeError {
    /// The grid has a zero dimension or too many rooms to index.
    #[error("maze dimensions {width}x{height} are invalid")]
    InvalidDimensions {
        /// Requested number of columns.
        width: usize,
        /// Requested number of rows.
        height: usize,
    },
    /// A room lies outside the grid.
    #[error("room {room} is outside the maze")]
    UnknownRoom {
        /// The offending room.
        room: Room,
    },
    /// The candidate walls do not connect every room.
    #[error("candidate walls leave the rooms disconnected")]
    Disconnected,
    /// A collection rejected an operation while carving or solving.
    #[error("collection failure: {source}")]
    Collection {
        /// Underlying collection error.
        #[from]
        source: CollectionError,
    },
    /// The wall graph could not be built.
    #[error("graph construction failure: {source}")]
    Graph {
        /// Underlying graph error.
        #[from]
        source: GraphError,
    },
}

define_error_codes! {
    /// Stable codes describing [`MazeError`] variants.
    enum MazeErrorCode for MazeError {
        /// The grid has a zero dimension or too many rooms to index.
        InvalidDimensions => InvalidDimensions { .. } => "MAZE_INVALID_DIMENSIONS",
        /// A room lies outside the grid.
        UnknownRoom => UnknownRoom { .. } => "MAZE_UNKNOWN_ROOM",
        /// The candidate walls do not connect every room.
        Disconnected => Disconnected => "MAZE_DISCONNECTED",
        /// A collection rejected an operation.
        Collection => Collection { .. } => "MAZE_COLLECTION_FAILURE",
        /// The wall graph could not be built.
        Graph => Graph { .. } => "MAZE_GRAPH_FAILURE",
    }
}

impl MazeError {
    /// Retrieve the inner [`crate::CollectionErrorCode`] when a collection
    /// rejected the operation.
    #[must_use]
    pub const fn collection_code(&self) -> Option<crate::CollectionErrorCode> {
        match self {
            Self::Collection { source } => Some(source.code()),
            _ => None,
        }
    }
}
