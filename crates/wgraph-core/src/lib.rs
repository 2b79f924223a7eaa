//! wgraph Core Library
//!
//! Weighted undirected graphs in two immutable representations, plus
//! Dijkstra shortest paths and Kruskal minimum spanning trees over them.

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
pub mod solver;
