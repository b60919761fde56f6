//! Benchmark parameter types.
//!
//! Implementations of [`fmt::Display`] become Criterion benchmark ids.

use std::fmt;

/// Parameters for a graph algorithm benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct GraphBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Average number of undirected edges per vertex.
    pub degree: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},d={}", self.vertex_count, self.degree)
    }
}

/// Parameters for a maze carving benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct MazeBenchParams {
    /// Number of room columns.
    pub width: usize,
    /// Number of room rows.
    pub height: usize,
}

impl fmt::Display for MazeBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
