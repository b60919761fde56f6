//! Benchmark support crate for mazeworks.
//!
//! Provides seeded synthetic graphs and parameter types shared by the
//! Criterion benchmarks for the priority queue, Kruskal, Dijkstra and maze
//! carving.

pub mod error;
pub mod graphs;
pub mod params;
