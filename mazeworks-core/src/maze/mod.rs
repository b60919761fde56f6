//! Perfect mazes carved from a room grid.
//!
//! A [`MazeGrid`] lists rooms and the candidate walls between neighbours.
//! [`KruskalMazeCarver`] gives every wall an independent random weight and
//! removes exactly the walls on a minimum spanning tree of the room graph,
//! which leaves one path between any two rooms. The resulting [`Maze`] can
//! be queried for passages and solved with Dijkstra's algorithm.

#[cfg(feature = "rng")]
mod carver;
mod error;
mod geometry;

use std::collections::HashSet;

#[cfg(feature = "rng")]
pub use self::carver::KruskalMazeCarver;
pub use self::{
    error::{MazeError, MazeErrorCode},
    geometry::{MazeGrid, Room, Wall},
};

use crate::{
    graph::{AdjacencyListGraph, WeightedEdge},
    shortest_path::{ShortestPath, find_shortest_path},
};

/// Path through a maze; edges carry the wall that was removed to open them.
pub type MazePath = ShortestPath<Room, WeightedEdge<Room, Wall>>;

/// A grid together with the walls removed from it.
#[derive(Clone, Debug, PartialEq)]
pub struct Maze {
    grid: MazeGrid,
    removed_walls: Vec<Wall>,
    open: HashSet<Wall>,
}

impl Maze {
    /// Builds a maze from `grid` with `removed_walls` opened.
    ///
    /// Removed walls are kept sorted and deduplicated.
    ///
    /// # Errors
    /// Returns [`MazeError::UnknownRoom`] when a wall touches a room outside
    /// the grid.
    pub fn new(
        grid: MazeGrid,
        removed_walls: impl IntoIterator<Item = Wall>,
    ) -> Result<Self, MazeError> {
        let mut walls: Vec<Wall> = removed_walls.into_iter().collect();
        for wall in &walls {
            let (first, second) = wall.rooms();
            grid.require(first)?;
            grid.require(second)?;
        }
        walls.sort_unstable();
        walls.dedup();
        let open = walls.iter().copied().collect();
        Ok(Self {
            grid,
            removed_walls: walls,
            open,
        })
    }

    /// The underlying grid.
    #[must_use]
    #[rustfmt::skip]
    pub fn grid(&self) -> &MazeGrid { &self.grid }

    /// Walls that were removed, in ascending order.
    #[must_use]
    #[rustfmt::skip]
    pub fn removed_walls(&self) -> &[Wall] { &self.removed_walls }

    /// Candidate walls that are still standing.
    pub fn remaining_walls(&self) -> impl Iterator<Item = Wall> + '_ {
        self.grid
            .walls()
            .iter()
            .copied()
            .filter(|wall| !self.open.contains(wall))
    }

    /// Returns `true` when `left` and `right` are neighbours with no wall
    /// between them.
    #[must_use]
    pub fn has_passage(&self, left: Room, right: Room) -> bool {
        Wall::new(left, right).is_some_and(|wall| self.open.contains(&wall))
    }

    /// Builds the undirected unit-weight graph of open passages.
    ///
    /// Every room is a vertex, including rooms with no open side.
    ///
    /// # Errors
    /// Propagates [`MazeError::Graph`]; unit weights never trigger it.
    pub fn passage_graph(&self) -> Result<AdjacencyListGraph<Room, Wall>, MazeError> {
        let mut graph = AdjacencyListGraph::new();
        for room in self.grid.rooms() {
            graph.add_vertex(*room);
        }
        for wall in &self.removed_walls {
            let (first, second) = wall.rooms();
            graph.add_undirected_edge_with_data(first, second, 1.0, *wall)?;
        }
        Ok(graph)
    }

    /// Finds the route from `start` to `end` through open passages.
    ///
    /// # Errors
    /// Returns [`MazeError::UnknownRoom`] when either room lies outside the
    /// grid, and [`MazeError::Collection`] if the search rejects a distance.
    pub fn solve(&self, start: Room, end: Room) -> Result<MazePath, MazeError> {
        self.grid.require(start)?;
        self.grid.require(end)?;
        let graph = self.passage_graph()?;
        Ok(find_shortest_path(&graph, &start, &end)?)
    }
}
