//! Exhaustive spanning tree oracle.
//!
//! Enumerates every subset of `vertex_count - 1` edges and keeps the lightest
//! one that connects all vertices. Only usable on small graphs, which is what
//! the strategies generate.

use super::types::MstFixture;

/// Largest edge count the oracle will enumerate.
pub(super) const ORACLE_MAX_EDGES: usize = 14;

/// Returns the weight of a minimum spanning tree, or `None` if the graph is
/// disconnected.
pub(super) fn brute_force_minimum_weight(fixture: &MstFixture) -> Option<f64> {
    let vertex_count = fixture.vertex_count;
    if vertex_count <= 1 {
        return Some(0.0);
    }
    let edge_count = fixture.edges.len();
    assert!(
        edge_count <= ORACLE_MAX_EDGES,
        "oracle limited to {ORACLE_MAX_EDGES} edges, got {edge_count}"
    );

    let wanted = vertex_count - 1;
    let mut best: Option<f64> = None;
    for mask in 0_u32..(1 << edge_count) {
        if mask.count_ones() as usize != wanted {
            continue;
        }
        let chosen: Vec<&(usize, usize, f64)> = fixture
            .edges
            .iter()
            .enumerate()
            .filter(|(index, _)| mask & (1 << index) != 0)
            .map(|(_, edge)| edge)
            .collect();
        if !connects_all(vertex_count, &chosen) {
            continue;
        }
        let weight: f64 = chosen.iter().map(|edge| edge.2).sum();
        best = Some(best.map_or(weight, |current| current.min(weight)));
    }
    best
}

/// Flood fill over the chosen edges starting at vertex 0.
fn connects_all(vertex_count: usize, edges: &[&(usize, usize, f64)]) -> bool {
    let mut reached = vec![false; vertex_count];
    let mut frontier = vec![0_usize];
    reached[0] = true;
    while let Some(vertex) = frontier.pop() {
        for &&(from, to, _) in edges {
            let next = if from == vertex {
                to
            } else if to == vertex {
                from
            } else {
                continue;
            };
            if !reached[next] {
                reached[next] = true;
                frontier.push(next);
            }
        }
    }
    reached.into_iter().all(|seen| seen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mst::property::types::WeightDistribution;

    fn fixture(vertex_count: usize, edges: Vec<(usize, usize, f64)>) -> MstFixture {
        MstFixture {
            vertex_count,
            edges,
            distribution: WeightDistribution::Unique,
        }
    }

    #[test]
    fn oracle_triangle() {
        let triangle = fixture(3, vec![(0, 1, 1.0), (1, 2, 2.0), (0, 2, 3.0)]);
        assert_eq!(brute_force_minimum_weight(&triangle), Some(3.0));
    }

    #[test]
    fn oracle_disconnected() {
        let split = fixture(4, vec![(0, 1, 1.0), (2, 3, 1.0)]);
        assert_eq!(brute_force_minimum_weight(&split), None);
    }

    #[test]
    fn oracle_single_vertex() {
        assert_eq!(brute_force_minimum_weight(&fixture(1, Vec::new())), Some(0.0));
    }
}
