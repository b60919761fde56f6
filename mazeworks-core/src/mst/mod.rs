//! Minimum spanning tree construction with Kruskal's algorithm.
//!
//! Edges are visited in ascending weight order and kept whenever they join
//! two components of a [`DisjointSets`] seeded with one singleton per vertex.
//! A disconnected input is a valid but unsolvable request and is reported as
//! [`MinimumSpanningTree::Failure`], not as an error.

use tracing::{debug, instrument};

use crate::{
    disjoint_set::DisjointSets,
    error::{CollectionError, Result},
    graph::{Edge, KruskalGraph},
};

/// Outcome of a spanning tree computation.
#[derive(Clone, Debug, PartialEq)]
pub enum MinimumSpanningTree<E> {
    /// The edges of a minimum spanning tree over every vertex.
    Success(Vec<E>),
    /// The graph is disconnected, so no spanning tree exists.
    Failure,
}

impl<E> MinimumSpanningTree<E> {
    /// Returns the tree edges; empty for [`MinimumSpanningTree::Failure`].
    #[must_use]
    pub fn edges(&self) -> &[E] {
        match self {
            Self::Success(edges) => edges,
            Self::Failure => &[],
        }
    }

    /// Consumes the result, returning the tree edges if one was found.
    #[must_use]
    pub fn into_edges(self) -> Option<Vec<E>> {
        match self {
            Self::Success(edges) => Some(edges),
            Self::Failure => None,
        }
    }

    /// Returns `true` when a spanning tree was found.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl<E: Edge> MinimumSpanningTree<E> {
    /// Sums the weights of the tree edges.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.edges().iter().map(Edge::weight).sum()
    }
}

/// Computes a minimum spanning tree of `graph`.
///
/// Edges are ordered by [`f64::total_cmp`] with a stable sort, so equal
/// weights keep the order reported by [`KruskalGraph::all_edges`] and the
/// result is deterministic for a fixed input. Self-loops are never selected.
///
/// A graph with at most one vertex and no edges yields an empty
/// [`MinimumSpanningTree::Success`].
///
/// # Errors
/// Returns [`crate::CollectionError::DuplicateItem`] when a vertex is listed
/// twice and [`crate::CollectionError::ItemNotFound`] when an edge endpoint is
/// missing from the vertex set.
///
/// # Examples
/// ```
/// use mazeworks_core::{AdjacencyListGraph, kruskal};
///
/// let mut graph = AdjacencyListGraph::new();
/// graph.add_undirected_edge('a', 'b', 1.0)?;
/// graph.add_undirected_edge('b', 'c', 2.0)?;
/// graph.add_undirected_edge('a', 'c', 3.0)?;
/// let tree = kruskal(&graph)?;
/// assert!(tree.is_success());
/// assert_eq!(tree.total_weight(), 3.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "mst.kruskal",
    level = "debug",
    skip(graph),
    fields(
        vertices = graph.all_vertices().len(),
        edges = graph.all_edges().len()
    ),
)]
pub fn kruskal<G>(graph: &G) -> Result<MinimumSpanningTree<G::Edge>>
where
    G: KruskalGraph,
    G::Edge: Clone,
{
    let vertices = graph.all_vertices();
    let mut sets = DisjointSets::with_capacity(vertices.len());
    for vertex in vertices {
        sets.make_set(vertex.clone())?;
    }

    let mut edges: Vec<&G::Edge> = graph.all_edges().iter().collect();
    for edge in &edges {
        ensure_registered(&sets, edge.from())?;
        ensure_registered(&sets, edge.to())?;
    }

    if edges.is_empty() {
        if vertices.len() <= 1 {
            return Ok(MinimumSpanningTree::Success(Vec::new()));
        }
        debug!(vertices = vertices.len(), "graph has no edges");
        return Ok(MinimumSpanningTree::Failure);
    }

    edges.sort_by(|left, right| left.weight().total_cmp(&right.weight()));

    let mut tree = Vec::with_capacity(vertices.len().saturating_sub(1));
    for edge in edges {
        if sets.union(edge.to(), edge.from())? {
            tree.push(edge.clone());
        }
        if is_tree_complete(&sets) {
            break;
        }
    }

    if !spans_all_vertices(&mut sets, vertices)? {
        debug!(
            components = sets.set_count(),
            selected = tree.len(),
            "graph is disconnected"
        );
        return Ok(MinimumSpanningTree::Failure);
    }

    debug!(selected = tree.len(), "spanning tree complete");
    Ok(MinimumSpanningTree::Success(tree))
}

/// Fails when `vertex` is missing from the vertex set.
fn ensure_registered<V>(sets: &DisjointSets<V>, vertex: &V) -> Result<()>
where
    V: Eq + std::hash::Hash,
{
    if sets.contains(vertex) {
        Ok(())
    } else {
        Err(CollectionError::ItemNotFound {
            structure: "disjoint sets",
        })
    }
}

const fn is_tree_complete<V>(sets: &DisjointSets<V>) -> bool
where
    V: Eq + std::hash::Hash,
{
    sets.set_count() == 1
}

/// Checks that every vertex resolves to the same root as the first one.
fn spans_all_vertices<V>(sets: &mut DisjointSets<V>, vertices: &[V]) -> Result<bool>
where
    V: Eq + std::hash::Hash,
{
    let Some(first) = vertices.first() else {
        return Ok(true);
    };
    let reference = sets.find_set(first)?;
    for vertex in vertices {
        if sets.find_set(vertex)? != reference {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod property;
