//! Property-based tests for the Kruskal minimum spanning tree.
//!
//! Checks the solver against an exhaustive oracle on small graphs and
//! validates the structure of every returned tree (edge count, acyclicity,
//! coverage) across several weight distributions.

mod oracle;
mod strategies;
mod structural;
mod types;
