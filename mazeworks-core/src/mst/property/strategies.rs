//! Strategy builders for MST property-based tests.
//!
//! Graphs stay small enough for the exhaustive oracle: at most
//! [`MAX_VERTICES`] vertices and [`ORACLE_MAX_EDGES`] edges.

use proptest::prelude::*;
use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};

use super::{
    oracle::ORACLE_MAX_EDGES,
    types::{MstFixture, WeightDistribution},
};

const MAX_VERTICES: usize = 7;

/// Generates MST fixtures covering every weight distribution.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Builds a fixture for `distribution` from `rng`.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    let (vertex_count, edges) = match distribution {
        WeightDistribution::Unique => {
            let vertex_count = rng.gen_range(1..=MAX_VERTICES);
            let edges: Vec<(usize, usize, f64)> = random_pairs(rng, vertex_count, ORACLE_MAX_EDGES)
                .into_iter()
                .map(|(from, to)| (from, to, rng.gen_range(-10.0..100.0)))
                .collect();
            (vertex_count, edges)
        }
        WeightDistribution::ManyIdentical => {
            let vertex_count = rng.gen_range(2..=MAX_VERTICES);
            let edges: Vec<(usize, usize, f64)> = random_pairs(rng, vertex_count, ORACLE_MAX_EDGES)
                .into_iter()
                .map(|(from, to)| (from, to, f64::from(rng.gen_range(1_u8..=2))))
                .collect();
            (vertex_count, edges)
        }
        WeightDistribution::Sparse => sparse_edges(rng),
        WeightDistribution::Disconnected => disconnected_edges(rng),
    };
    MstFixture {
        vertex_count,
        edges,
        distribution,
    }
}

/// Picks up to `limit` distinct vertex pairs, occasionally adding a self-loop.
fn random_pairs(rng: &mut SmallRng, vertex_count: usize, limit: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for from in 0..vertex_count {
        for to in (from + 1)..vertex_count {
            pairs.push((from, to));
        }
    }
    pairs.shuffle(rng);
    let keep = rng.gen_range(0..=pairs.len().min(limit));
    pairs.truncate(keep);
    if keep < limit && rng.gen_bool(0.2) {
        let vertex = rng.gen_range(0..vertex_count);
        pairs.push((vertex, vertex));
    }
    pairs
}

/// A random spanning path plus a couple of chords.
fn sparse_edges(rng: &mut SmallRng) -> (usize, Vec<(usize, usize, f64)>) {
    let vertex_count = rng.gen_range(2..=MAX_VERTICES);
    let mut order: Vec<usize> = (0..vertex_count).collect();
    order.shuffle(rng);
    let mut edges: Vec<(usize, usize, f64)> = order
        .windows(2)
        .map(|pair| (pair[0], pair[1], rng.gen_range(0.0..50.0)))
        .collect();
    let extra = rng.gen_range(0..=2);
    for _ in 0..extra {
        let from = rng.gen_range(0..vertex_count);
        let to = rng.gen_range(0..vertex_count);
        edges.push((from, to, rng.gen_range(0.0..50.0)));
    }
    edges.shuffle(rng);
    (vertex_count, edges)
}

/// Two blocks of vertices with edges only inside each block.
fn disconnected_edges(rng: &mut SmallRng) -> (usize, Vec<(usize, usize, f64)>) {
    let vertex_count = rng.gen_range(2..=MAX_VERTICES);
    let split = rng.gen_range(1..vertex_count);
    let mut edges = Vec::new();
    for from in 0..vertex_count {
        for to in (from + 1)..vertex_count {
            let same_block = (from < split) == (to < split);
            if same_block && edges.len() < ORACLE_MAX_EDGES && rng.gen_bool(0.7) {
                edges.push((from, to, rng.gen_range(0.0..10.0)));
            }
        }
    }
    (vertex_count, edges)
}
