//! Graph representations
//!
//! Provides the graph abstraction shared by the solvers:
//! - [`Graph`]: read contract (nodes, edges, incident edges) plus conversions
//! - [`AdjacencyGraph`]: immutable, backed by an [`AdjacencyMatrix`]
//! - [`BasicGraph`]: immutable, backed by a node to incident-edge map
//! - [`MutableGraph`]: editable graph used for conversions
//! - [`ImmutableGraph`]: either immutable representation, chosen at runtime

pub mod adjacency;
pub mod basic;
pub mod edge;
pub mod immutable;
pub mod matrix;
pub mod mutable;
mod validate;

pub use adjacency::AdjacencyGraph;
pub use basic::BasicGraph;
pub use edge::{Edge, Weight};
pub use immutable::ImmutableGraph;
pub use matrix::AdjacencyMatrix;
pub use mutable::MutableGraph;

use crate::error::Result;
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt::Debug;
use std::hash::Hash;

/// Identifier of a graph vertex.
///
/// Any cloneable, totally ordered, hashable and printable type qualifies.
/// The `Ord` implementation is the canonical node order used for index
/// assignment and every deterministic tie-break.
pub trait Node: Clone + Ord + Hash + Debug {}

impl<T: Clone + Ord + Hash + Debug> Node for T {}

/// An undirected, weighted graph without parallel edges.
///
/// Every edge's endpoints are members of [`Graph::nodes`].
pub trait Graph<N: Node> {
    /// Immutable snapshot type produced by [`Graph::to_immutable`]
    type Immutable: Graph<N>;

    fn nodes(&self) -> &BTreeSet<N>;

    fn edges(&self) -> &BTreeSet<Edge<N>>;

    /// Edges incident to `node`.
    ///
    /// Fails with [`crate::error::GraphError::NodeNotFound`] when `node` is
    /// not part of the graph.
    fn adjacent_edges(&self, node: &N) -> Result<Cow<'_, BTreeSet<Edge<N>>>>;

    fn contains_node(&self, node: &N) -> bool {
        self.nodes().contains(node)
    }

    /// Copy this graph into an editable [`MutableGraph`]
    fn to_mutable(&self) -> MutableGraph<N> {
        MutableGraph::from_parts(self.nodes().clone(), self.edges().clone())
    }

    /// Immutable view of this graph; a plain copy for graphs that are already immutable
    fn to_immutable(&self) -> Self::Immutable;
}
