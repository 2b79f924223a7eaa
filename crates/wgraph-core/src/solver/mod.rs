//! Graph solvers
//!
//! - [`DijkstraPathCalculator`]: single-source shortest paths
//! - [`KruskalMstCalculator`]: minimum spanning tree / forest
//! - [`groups`]: disjoint-set strategies used by Kruskal
//!
//! Solvers borrow the graph immutably and keep their working state local to
//! each call, so one instance can serve any number of calls, including
//! concurrent ones.

pub mod dijkstra;
pub mod groups;
pub mod kruskal;

pub use dijkstra::{DijkstraPathCalculator, ShortestPath};
pub use groups::{DisjointGroups, GroupList, UnionFind};
pub use kruskal::{KruskalMstCalculator, SpanningForest};

use crate::error::Result;
use crate::graph::{ImmutableGraph, Node};

/// Computes a path between two nodes of a graph
pub trait PathCalculator<N: Node> {
    /// Nodes from `start` to `end`, both inclusive, along a shortest path
    fn calculate_path(&self, start: &N, end: &N) -> Result<Vec<N>>;
}

/// Computes a minimum spanning tree of a graph
pub trait MstCalculator<N: Node> {
    /// A graph over all input nodes holding only the spanning edges.
    ///
    /// For disconnected input this is a minimum spanning forest.
    fn calculate_mst(&self) -> Result<ImmutableGraph<N>>;
}
