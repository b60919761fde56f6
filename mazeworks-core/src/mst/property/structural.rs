//! Structural checks applied to every spanning tree the solver returns.

use crate::{
    disjoint_set::DisjointSets,
    graph::{Edge, WeightedEdge},
};

use super::types::MstFixture;

/// Verifies that `tree` is a spanning tree of the fixture's vertex set.
///
/// Returns a description of the first violated property.
pub(super) fn check_spanning_tree(
    fixture: &MstFixture,
    tree: &[WeightedEdge<usize>],
) -> Result<(), String> {
    let expected = fixture.vertex_count.saturating_sub(1);
    if tree.len() != expected {
        return Err(format!(
            "expected {expected} edges for {} vertices, got {}",
            fixture.vertex_count,
            tree.len()
        ));
    }

    let mut sets = DisjointSets::with_capacity(fixture.vertex_count);
    for vertex in 0..fixture.vertex_count {
        sets.make_set(vertex).map_err(|err| err.to_string())?;
    }
    for edge in tree {
        let merged = sets
            .union(edge.from(), edge.to())
            .map_err(|err| err.to_string())?;
        if !merged {
            return Err(format!(
                "edge {} -> {} closes a cycle",
                edge.from(),
                edge.to()
            ));
        }
    }
    if fixture.vertex_count > 0 && sets.set_count() != 1 {
        return Err(format!("tree leaves {} components", sets.set_count()));
    }
    Ok(())
}

/// Every tree edge must appear in the fixture with the same weight.
pub(super) fn check_edges_come_from_graph(
    fixture: &MstFixture,
    tree: &[WeightedEdge<usize>],
) -> Result<(), String> {
    for edge in tree {
        let listed = fixture.edges.iter().any(|&(from, to, weight)| {
            from == *edge.from() && to == *edge.to() && weight.total_cmp(&edge.weight()).is_eq()
        });
        if !listed {
            return Err(format!(
                "edge {} -> {} ({}) is not in the graph",
                edge.from(),
                edge.to(),
                edge.weight()
            ));
        }
    }
    Ok(())
}
