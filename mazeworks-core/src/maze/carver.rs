//! Randomised Kruskal carving.

use rand::{Rng, SeedableRng, distributions::Standard, rngs::SmallRng};
use tracing::{debug, instrument};

use crate::{
    graph::AdjacencyListGraph,
    mst::{MinimumSpanningTree, kruskal},
};

use super::{Maze, MazeError, MazeGrid, Room, Wall};

/// Carves mazes by running Kruskal's algorithm over randomly weighted walls.
///
/// Each wall receives a fresh uniform draw in `[0, 1)`, so the carved maze is
/// a random spanning tree of the room graph. Seeding the carver makes the
/// output reproducible.
///
/// # Examples
/// ```
/// use mazeworks_core::{KruskalMazeCarver, MazeGrid, Room};
///
/// let grid = MazeGrid::new(4, 3)?;
/// let maze = KruskalMazeCarver::with_seed(7).carve(&grid)?;
/// assert_eq!(maze.removed_walls().len(), 4 * 3 - 1);
/// let path = maze.solve(Room::new(0, 0), Room::new(3, 2))?;
/// assert!(path.exists());
/// # Ok::<(), mazeworks_core::MazeError>(())
/// ```
#[derive(Clone, Debug)]
pub struct KruskalMazeCarver<R = SmallRng> {
    rng: R,
}

impl KruskalMazeCarver<SmallRng> {
    /// Creates a carver seeded from operating system entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }

    /// Creates a carver whose output is fully determined by `seed`.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }
}

impl Default for KruskalMazeCarver<SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> KruskalMazeCarver<R> {
    /// Creates a carver drawing weights from `rng`.
    #[must_use]
    pub const fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Chooses the walls to remove so that every room becomes reachable.
    ///
    /// `rooms` lists every room that must be connected; endpoints of
    /// `walls` missing from it are added automatically.
    ///
    /// # Errors
    /// Returns [`MazeError::Disconnected`] when the walls cannot connect
    /// every room.
    pub fn choose_walls_to_remove(
        &mut self,
        rooms: &[Room],
        walls: &[Wall],
    ) -> Result<Vec<Wall>, MazeError> {
        let mut graph: AdjacencyListGraph<Room, Wall> = AdjacencyListGraph::new();
        for room in rooms {
            graph.add_vertex(*room);
        }
        for wall in walls {
            let (first, second) = wall.rooms();
            let weight: f64 = self.rng.sample(Standard);
            graph.add_undirected_edge_with_data(first, second, weight, *wall)?;
        }

        match kruskal(&graph)? {
            MinimumSpanningTree::Success(edges) => {
                Ok(edges.iter().map(|edge| *edge.data()).collect())
            }
            MinimumSpanningTree::Failure => Err(MazeError::Disconnected),
        }
    }

    /// Carves a perfect maze out of `grid`.
    ///
    /// # Errors
    /// Propagates the errors of [`Self::choose_walls_to_remove`]; a full
    /// grid is always connected, so carving a [`MazeGrid`] only fails on
    /// internal errors.
    #[instrument(
        name = "maze.carve",
        level = "debug",
        skip(self, grid),
        fields(width = grid.width(), height = grid.height()),
    )]
    pub fn carve(&mut self, grid: &MazeGrid) -> Result<Maze, MazeError> {
        let removed = self.choose_walls_to_remove(grid.rooms(), grid.walls())?;
        debug!(
            removed = removed.len(),
            candidates = grid.walls().len(),
            "maze carved"
        );
        Maze::new(grid.clone(), removed)
    }
}
