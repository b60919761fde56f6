//! Type definitions for MST property-based tests.

use test_strategy::Arbitrary;

/// Weight distribution strategy for generated graphs.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum WeightDistribution {
    /// Each edge has a weight drawn from a continuous range.
    Unique,
    /// Weights come from a tiny set of integers, stressing ties.
    ManyIdentical,
    /// A spanning path plus a few extra edges.
    Sparse,
    /// Two or more components with no edges between them.
    Disconnected,
}

/// Fixture for MST property tests.
///
/// Vertices are `0..vertex_count`; edges are undirected `(from, to, weight)`
/// triples in generation order.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Generated undirected edges.
    pub edges: Vec<(usize, usize, f64)>,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}
