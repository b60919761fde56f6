//! Single-pair shortest paths with Dijkstra's algorithm.
//!
//! The search runs in two steps. [`shortest_path_tree`] explores the graph
//! from `start` and records, for every vertex it reaches, the edge through
//! which it was best reached. The search stops as soon as `end` is settled,
//! so vertices farther away than the target are usually absent.
//! [`extract_shortest_path`] then walks that tree backwards from `end`.
//!
//! Edge weights must be non-negative. Negative weights are not detected; the
//! result is then unspecified.

use std::collections::HashMap;

use tracing::{debug, instrument, trace};

use crate::{
    error::Result,
    graph::{Edge, Graph},
    priority_queue::IndexedMinPriorityQueue,
};

/// Outcome of a single-pair shortest path search.
#[derive(Clone, Debug, PartialEq)]
pub enum ShortestPath<V, E> {
    /// `start` and `end` coincide; the path has no edges.
    SingleVertex(V),
    /// Edges from `start` to `end`, in travel order.
    Success(Vec<E>),
    /// `end` cannot be reached from `start`.
    Failure,
}

impl<V, E> ShortestPath<V, E>
where
    V: Clone,
    E: Edge<Vertex = V>,
{
    /// Returns the path edges in travel order.
    #[must_use]
    pub fn edges(&self) -> &[E] {
        match self {
            Self::Success(edges) => edges,
            Self::SingleVertex(_) | Self::Failure => &[],
        }
    }

    /// Returns the visited vertices, starting with `start` and ending with
    /// `end`. Empty for [`ShortestPath::Failure`].
    #[must_use]
    pub fn vertices(&self) -> Vec<V> {
        match self {
            Self::SingleVertex(vertex) => vec![vertex.clone()],
            Self::Success(edges) => {
                let mut vertices = Vec::with_capacity(edges.len() + 1);
                if let Some(first) = edges.first() {
                    vertices.push(first.from().clone());
                }
                vertices.extend(edges.iter().map(|edge| edge.to().clone()));
                vertices
            }
            Self::Failure => Vec::new(),
        }
    }

    /// Sums the weights of the path edges; zero for a single vertex.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.edges().iter().map(Edge::weight).sum()
    }

    /// Returns `true` unless the search failed.
    #[must_use]
    #[rustfmt::skip]
    pub const fn exists(&self) -> bool { !matches!(self, Self::Failure) }
}

/// Builds the shortest-path tree from `start`, stopping once `end` is settled.
///
/// The returned map holds, for each reached vertex other than `start`, the
/// edge by which it is best reached. When `start == end` the map is empty.
/// A missing entry for `end` means it is unreachable.
///
/// # Errors
/// Returns [`crate::CollectionError::InvalidPriority`] when an edge weight
/// makes a tentative distance NaN. Well-formed graphs never fail.
#[instrument(name = "shortest_path.dijkstra", level = "debug", skip_all)]
#[expect(
    clippy::float_arithmetic,
    reason = "tentative distances add edge weights"
)]
pub fn shortest_path_tree<G>(
    graph: &G,
    start: &G::Vertex,
    end: &G::Vertex,
) -> Result<HashMap<G::Vertex, G::Edge>>
where
    G: Graph,
    G::Edge: Clone,
{
    let mut tree = HashMap::new();
    if start == end {
        debug!("start and end coincide");
        return Ok(tree);
    }

    let mut distances = HashMap::from([(start.clone(), 0.0)]);
    let mut frontier = IndexedMinPriorityQueue::new();
    frontier.add(start.clone(), 0.0)?;

    let mut settled = 0_usize;
    while !frontier.is_empty() {
        let vertex = frontier.remove_min()?;
        settled += 1;
        if vertex == *end {
            debug!(settled, reached = tree.len(), "target settled");
            return Ok(tree);
        }
        // Every vertex enters the frontier together with its distance.
        debug_assert!(
            distances.contains_key(&vertex),
            "queued vertex has no recorded distance"
        );
        let Some(&base) = distances.get(&vertex) else {
            continue;
        };

        for edge in graph.outgoing_edges_from(&vertex) {
            let neighbour = edge.to();
            let candidate = base + edge.weight();
            match distances.get(neighbour).copied() {
                None => {
                    distances.insert(neighbour.clone(), candidate);
                    tree.insert(neighbour.clone(), edge.clone());
                    frontier.add(neighbour.clone(), candidate)?;
                }
                Some(best) if candidate < best => {
                    trace!(previous = best, candidate, "shorter route found");
                    distances.insert(neighbour.clone(), candidate);
                    tree.insert(neighbour.clone(), edge.clone());
                    if frontier.contains(neighbour) {
                        frontier.change_priority(neighbour, candidate)?;
                    } else {
                        frontier.add(neighbour.clone(), candidate)?;
                    }
                }
                Some(_) => {}
            }
        }
    }

    debug!(settled, reached = tree.len(), "target unreachable");
    Ok(tree)
}

/// Reads the `start`-to-`end` path out of a shortest-path tree.
///
/// The backward walk takes at most one step per tree entry, so a tree whose
/// links never lead back to `start` yields [`ShortestPath::Failure`] rather
/// than looping.
#[must_use]
pub fn extract_shortest_path<V, E>(
    tree: &HashMap<V, E>,
    start: &V,
    end: &V,
) -> ShortestPath<V, E>
where
    V: Clone + Eq + std::hash::Hash,
    E: Edge<Vertex = V> + Clone,
{
    if start == end {
        return ShortestPath::SingleVertex(start.clone());
    }

    let mut edges = Vec::new();
    let mut current = end;
    while current != start {
        if edges.len() >= tree.len() {
            return ShortestPath::Failure;
        }
        let Some(edge) = tree.get(current) else {
            return ShortestPath::Failure;
        };
        edges.push(edge.clone());
        current = edge.from();
    }
    edges.reverse();
    ShortestPath::Success(edges)
}

/// Finds a shortest path from `start` to `end`.
///
/// # Errors
/// Propagates the errors of [`shortest_path_tree`].
///
/// # Examples
/// ```
/// use mazeworks_core::{AdjacencyListGraph, ShortestPath, WeightedEdge, find_shortest_path};
///
/// let mut graph = AdjacencyListGraph::new();
/// graph.add_edge(WeightedEdge::new('a', 'b', 1.0))?;
/// graph.add_edge(WeightedEdge::new('b', 'c', 2.0))?;
/// graph.add_edge(WeightedEdge::new('a', 'c', 4.0))?;
/// let path = find_shortest_path(&graph, &'a', &'c')?;
/// assert_eq!(path.vertices(), vec!['a', 'b', 'c']);
/// assert_eq!(path.total_weight(), 3.0);
/// assert_eq!(find_shortest_path(&graph, &'c', &'a')?, ShortestPath::Failure);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn find_shortest_path<G>(
    graph: &G,
    start: &G::Vertex,
    end: &G::Vertex,
) -> Result<ShortestPath<G::Vertex, G::Edge>>
where
    G: Graph,
    G::Edge: Clone,
{
    let tree = shortest_path_tree(graph, start, end)?;
    Ok(extract_shortest_path(&tree, start, end))
}
