//! Seeded synthetic graphs for benchmarking.
//!
//! Every generated graph contains a random spanning path, so it is always
//! connected, plus extra random edges up to the requested average degree.
//! Weights are uniform in `[0, 1)`.

use mazeworks_core::{AdjacencyListGraph, GraphError};
use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};

use crate::params::GraphBenchParams;

/// Errors that may occur during synthetic graph generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq)]
pub enum SyntheticGraphError {
    /// The requested vertex count was below two.
    #[error("vertex count must be at least two (got {got})")]
    TooFewVertices {
        /// The rejected vertex count.
        got: usize,
    },
    /// Building the graph failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Generates a connected undirected graph over `0..vertex_count`.
///
/// # Errors
/// Returns [`SyntheticGraphError::TooFewVertices`] when fewer than two
/// vertices are requested.
///
/// # Examples
///
/// ```
/// use mazeworks_benches::{graphs::connected_graph, params::GraphBenchParams};
/// use mazeworks_core::KruskalGraph;
///
/// let params = GraphBenchParams { vertex_count: 50, degree: 3 };
/// let graph = connected_graph(&params, 7).expect("valid params");
/// assert_eq!(graph.all_vertices().len(), 50);
/// assert_eq!(graph.all_edges().len(), 150);
/// ```
pub fn connected_graph(
    params: &GraphBenchParams,
    seed: u64,
) -> Result<AdjacencyListGraph<usize>, SyntheticGraphError> {
    let vertex_count = params.vertex_count;
    if vertex_count < 2 {
        return Err(SyntheticGraphError::TooFewVertices { got: vertex_count });
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut order: Vec<usize> = (0..vertex_count).collect();
    order.shuffle(&mut rng);

    let mut graph = AdjacencyListGraph::new();
    for vertex in 0..vertex_count {
        graph.add_vertex(vertex);
    }
    for pair in order.windows(2) {
        if let &[from, to] = pair {
            graph.add_undirected_edge(from, to, rng.gen_range(0.0..1.0))?;
        }
    }

    let target = vertex_count.saturating_mul(params.degree.max(1));
    let extra = target.saturating_sub(vertex_count - 1);
    for _ in 0..extra {
        let from = rng.gen_range(0..vertex_count);
        let to = rng.gen_range(0..vertex_count);
        graph.add_undirected_edge(from, to, rng.gen_range(0.0..1.0))?;
    }
    Ok(graph)
}
