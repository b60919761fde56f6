//! Benchmark setup error type.
//!
//! Collects the failures that can occur while preparing benchmark inputs so
//! setup functions can use `?` instead of `.expect()`.

use mazeworks_core::{CollectionError, GraphError, MazeError};

use crate::graphs::SyntheticGraphError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticGraphError),
    /// A priority queue or disjoint-set operation failed.
    #[error("collection operation failed: {0}")]
    Collection(#[from] CollectionError),
    /// Graph construction failed.
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),
    /// Maze construction failed.
    #[error("maze construction failed: {0}")]
    Maze(#[from] MazeError),
}
