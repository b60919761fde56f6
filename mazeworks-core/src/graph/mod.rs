//! Graph capabilities consumed by the spanning-tree and shortest-path solvers.
//!
//! The algorithms are written against two small traits rather than a
//! concrete representation: [`Graph`] for outgoing-edge traversal and
//! [`KruskalGraph`] for whole-graph enumeration. [`AdjacencyListGraph`]
//! implements both.

use std::{collections::HashMap, hash::Hash};

use crate::error::GraphError;

/// A weighted edge between two vertices.
pub trait Edge {
    /// Vertex type joined by the edge.
    type Vertex;

    /// Vertex the edge leaves.
    fn from(&self) -> &Self::Vertex;

    /// Vertex the edge enters.
    fn to(&self) -> &Self::Vertex;

    /// Weight used as the sort or distance key.
    fn weight(&self) -> f64;
}

/// A graph that can enumerate the edges leaving a vertex.
pub trait Graph {
    /// Vertex identity.
    type Vertex: Clone + Eq + Hash;
    /// Edge type, leaving [`Edge::from`] and entering [`Edge::to`].
    type Edge: Edge<Vertex = Self::Vertex>;

    /// Returns every edge whose [`Edge::from`] is `vertex`.
    ///
    /// Unknown vertices have no outgoing edges.
    fn outgoing_edges_from(&self, vertex: &Self::Vertex) -> &[Self::Edge];
}

/// A graph that exposes its complete vertex and edge sets.
pub trait KruskalGraph {
    /// Vertex identity.
    type Vertex: Clone + Eq + Hash;
    /// Edge type; undirected graphs list each edge once.
    type Edge: Edge<Vertex = Self::Vertex>;

    /// Returns every vertex exactly once.
    fn all_vertices(&self) -> &[Self::Vertex];

    /// Returns every edge.
    fn all_edges(&self) -> &[Self::Edge];
}

/// An edge carrying an optional payload alongside its weight.
///
/// The payload lets callers recover domain objects (such as a maze wall)
/// from the edges an algorithm selects.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightedEdge<V, D = ()> {
    from: V,
    to: V,
    weight: f64,
    data: D,
}

impl<V> WeightedEdge<V> {
    /// Creates an edge without a payload.
    #[must_use]
    pub const fn new(from: V, to: V, weight: f64) -> Self {
        Self::with_data(from, to, weight, ())
    }
}

impl<V, D> WeightedEdge<V, D> {
    /// Creates an edge carrying `data`.
    #[must_use]
    pub const fn with_data(from: V, to: V, weight: f64, data: D) -> Self {
        Self {
            from,
            to,
            weight,
            data,
        }
    }

    /// Returns the payload.
    #[must_use]
    #[rustfmt::skip]
    pub const fn data(&self) -> &D { &self.data }

    /// Returns the same edge pointing the other way.
    #[must_use]
    pub fn reversed(&self) -> Self
    where
        V: Clone,
        D: Clone,
    {
        Self::with_data(self.to.clone(), self.from.clone(), self.weight, self.data.clone())
    }
}

impl<V, D> Edge for WeightedEdge<V, D> {
    type Vertex = V;

    #[rustfmt::skip]
    fn from(&self) -> &V { &self.from }

    #[rustfmt::skip]
    fn to(&self) -> &V { &self.to }

    #[rustfmt::skip]
    fn weight(&self) -> f64 { self.weight }
}

/// A directed graph stored as per-vertex outgoing edge lists.
///
/// Undirected edges are added with [`AdjacencyListGraph::add_undirected_edge`]:
/// they appear once in [`KruskalGraph::all_edges`] and in both directions in
/// [`Graph::outgoing_edges_from`].
///
/// # Examples
/// ```
/// use mazeworks_core::{AdjacencyListGraph, Graph, KruskalGraph};
///
/// let mut graph = AdjacencyListGraph::new();
/// graph.add_undirected_edge("a", "b", 1.5)?;
/// graph.add_vertex("c");
/// assert_eq!(graph.all_vertices(), &["a", "b", "c"]);
/// assert_eq!(graph.all_edges().len(), 1);
/// assert_eq!(graph.outgoing_edges_from(&"b").len(), 1);
/// assert!(graph.outgoing_edges_from(&"c").is_empty());
/// # Ok::<(), mazeworks_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct AdjacencyListGraph<V, D = ()> {
    vertices: Vec<V>,
    edges: Vec<WeightedEdge<V, D>>,
    outgoing: HashMap<V, Vec<WeightedEdge<V, D>>>,
}

impl<V, D> Default for AdjacencyListGraph<V, D> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            outgoing: HashMap::new(),
        }
    }
}

impl<V, D> AdjacencyListGraph<V, D>
where
    V: Clone + Eq + Hash,
    D: Clone,
{
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `vertex`; returns `false` if it was already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.outgoing.contains_key(&vertex) {
            return false;
        }
        self.outgoing.insert(vertex.clone(), Vec::new());
        self.vertices.push(vertex);
        true
    }

    /// Adds a directed edge, registering unknown endpoints.
    ///
    /// # Errors
    /// Returns [`GraphError::NonFiniteWeight`] for NaN or infinite weights.
    pub fn add_edge(&mut self, edge: WeightedEdge<V, D>) -> Result<(), GraphError> {
        validate_weight(edge.weight)?;
        self.register_endpoints(&edge);
        self.push_outgoing(edge.clone());
        self.edges.push(edge);
        Ok(())
    }

    /// Adds an undirected edge, registering unknown endpoints.
    ///
    /// # Errors
    /// Returns [`GraphError::NonFiniteWeight`] for NaN or infinite weights.
    pub fn add_undirected_edge_with_data(
        &mut self,
        from: V,
        to: V,
        weight: f64,
        data: D,
    ) -> Result<(), GraphError> {
        validate_weight(weight)?;
        let edge = WeightedEdge::with_data(from, to, weight, data);
        self.register_endpoints(&edge);
        self.push_outgoing(edge.reversed());
        self.push_outgoing(edge.clone());
        self.edges.push(edge);
        Ok(())
    }

    /// Returns the number of vertices.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges listed by [`KruskalGraph::all_edges`].
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn register_endpoints(&mut self, edge: &WeightedEdge<V, D>) {
        self.add_vertex(edge.from.clone());
        self.add_vertex(edge.to.clone());
    }

    fn push_outgoing(&mut self, edge: WeightedEdge<V, D>) {
        self.outgoing.entry(edge.from.clone()).or_default().push(edge);
    }
}

impl<V> AdjacencyListGraph<V>
where
    V: Clone + Eq + Hash,
{
    /// Adds an undirected edge without a payload.
    ///
    /// # Errors
    /// Returns [`GraphError::NonFiniteWeight`] for NaN or infinite weights.
    pub fn add_undirected_edge(&mut self, from: V, to: V, weight: f64) -> Result<(), GraphError> {
        self.add_undirected_edge_with_data(from, to, weight, ())
    }
}

impl<V, D> Graph for AdjacencyListGraph<V, D>
where
    V: Clone + Eq + Hash,
{
    type Vertex = V;
    type Edge = WeightedEdge<V, D>;

    fn outgoing_edges_from(&self, vertex: &V) -> &[WeightedEdge<V, D>] {
        self.outgoing.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl<V, D> KruskalGraph for AdjacencyListGraph<V, D>
where
    V: Clone + Eq + Hash,
{
    type Vertex = V;
    type Edge = WeightedEdge<V, D>;

    fn all_vertices(&self) -> &[V] {
        &self.vertices
    }

    fn all_edges(&self) -> &[WeightedEdge<V, D>] {
        &self.edges
    }
}

const fn validate_weight(weight: f64) -> Result<(), GraphError> {
    if weight.is_finite() {
        Ok(())
    } else {
        Err(GraphError::NonFiniteWeight { weight })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::nan(f64::NAN)]
    #[case::infinite(f64::INFINITY)]
    fn rejects_non_finite_weights(#[case] weight: f64) {
        let mut graph = AdjacencyListGraph::<u8>::new();
        let err = graph
            .add_edge(WeightedEdge::new(0, 1, weight))
            .expect_err("non-finite weights must be rejected");
        assert!(matches!(err, GraphError::NonFiniteWeight { .. }));
        assert_eq!(graph.vertex_count(), 0);
    }

    #[test]
    fn directed_edges_only_leave_their_source() {
        let mut graph = AdjacencyListGraph::new();
        graph
            .add_edge(WeightedEdge::new('a', 'b', 2.0))
            .expect("finite weight");
        assert_eq!(graph.outgoing_edges_from(&'a').len(), 1);
        assert!(graph.outgoing_edges_from(&'b').is_empty());
        assert!(graph.outgoing_edges_from(&'z').is_empty());
        assert_eq!(graph.all_vertices(), &['a', 'b']);
    }

    #[test]
    fn undirected_edges_are_listed_once() {
        let mut graph = AdjacencyListGraph::new();
        graph
            .add_undirected_edge_with_data(1_u32, 2, 0.5, "wall")
            .expect("finite weight");
        assert_eq!(graph.edge_count(), 1);
        let back = &graph.outgoing_edges_from(&2)[0];
        assert_eq!((*back.from(), *back.to()), (2, 1));
        assert_eq!(back.data(), &"wall");
        assert!(!graph.add_vertex(1));
    }
}
