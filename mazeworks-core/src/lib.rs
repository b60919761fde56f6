//! Mazeworks core library.
//!
//! Classical graph building blocks and the maze generator built on them:
//!
//! - [`IndexedMinPriorityQueue`], a binary min-heap with priority updates;
//! - [`DisjointSets`], union-by-size with path compression;
//! - [`kruskal`] for minimum spanning trees;
//! - [`find_shortest_path`] for Dijkstra single-pair searches;
//! - [`KruskalMazeCarver`], which turns a [`MazeGrid`] into a perfect [`Maze`].
#![cfg_attr(docsrs, feature(doc_cfg))]

mod disjoint_set;
mod error;
mod graph;
mod maze;
mod mst;
mod priority_queue;
mod shortest_path;
#[cfg(test)]
mod test_utils;

#[cfg(feature = "rng")]
#[cfg_attr(docsrs, doc(cfg(feature = "rng")))]
pub use crate::maze::KruskalMazeCarver;
pub use crate::{
    disjoint_set::DisjointSets,
    error::{CollectionError, CollectionErrorCode, GraphError, GraphErrorCode, Result},
    graph::{AdjacencyListGraph, Edge, Graph, KruskalGraph, WeightedEdge},
    maze::{Maze, MazeError, MazeErrorCode, MazeGrid, MazePath, Room, Wall},
    mst::{MinimumSpanningTree, kruskal},
    priority_queue::IndexedMinPriorityQueue,
    shortest_path::{ShortestPath, extract_shortest_path, find_shortest_path, shortest_path_tree},
};
