use super::validate::validate;
use super::{AdjacencyMatrix, Edge, Graph, Node};
use crate::error::{GraphError, Result};
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};

/// Immutable graph stored as a dense [`AdjacencyMatrix`].
///
/// Each node owns a distinct index in `[0, nodes.len())`, assigned in
/// canonical node order. `index_nodes` is the single source of truth for
/// that assignment; `node_indices` is derived from it and is its exact
/// inverse.
///
/// Incident edges are rebuilt from the matrix on every query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyGraph<N: Node> {
    matrix: AdjacencyMatrix,
    index_nodes: Vec<N>,
    node_indices: BTreeMap<N, usize>,
    nodes: BTreeSet<N>,
    edges: BTreeSet<Edge<N>>,
}

impl<N: Node> AdjacencyGraph<N> {
    /// Build a graph, rejecting edges with unknown endpoints and parallel edges
    #[tracing::instrument(skip_all, fields(nodes = nodes.len(), edges = edges.len()))]
    pub fn try_new(nodes: BTreeSet<N>, edges: BTreeSet<Edge<N>>) -> Result<Self> {
        validate(&nodes, &edges)?;
        Ok(Self::from_valid(nodes, edges))
    }

    pub(crate) fn from_valid(nodes: BTreeSet<N>, edges: BTreeSet<Edge<N>>) -> Self {
        let index_nodes: Vec<N> = nodes.iter().cloned().collect();
        let node_indices: BTreeMap<N, usize> = index_nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (node.clone(), index))
            .collect();

        let mut matrix = AdjacencyMatrix::new(index_nodes.len());
        for edge in &edges {
            matrix.add_edge(node_indices[edge.a()], node_indices[edge.b()], edge.weight());
        }

        Self {
            matrix,
            index_nodes,
            node_indices,
            nodes,
            edges,
        }
    }

    /// Matrix index assigned to `node`
    pub fn index_of(&self, node: &N) -> Result<usize> {
        self.node_indices
            .get(node)
            .copied()
            .ok_or_else(|| GraphError::node_not_found(node))
    }

    /// Node stored at matrix index `index`
    pub fn node_at(&self, index: usize) -> Option<&N> {
        self.index_nodes.get(index)
    }

    pub fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }
}

impl<N: Node> Graph<N> for AdjacencyGraph<N> {
    type Immutable = AdjacencyGraph<N>;

    fn nodes(&self) -> &BTreeSet<N> {
        &self.nodes
    }

    fn edges(&self) -> &BTreeSet<Edge<N>> {
        &self.edges
    }

    fn adjacent_edges(&self, node: &N) -> Result<Cow<'_, BTreeSet<Edge<N>>>> {
        let index = self.index_of(node)?;
        let adjacent = self
            .matrix
            .neighbors(index)
            .map(|(other, weight)| {
                Edge::new(node.clone(), self.index_nodes[other].clone(), weight)
            })
            .collect();
        Ok(Cow::Owned(adjacent))
    }

    fn to_immutable(&self) -> AdjacencyGraph<N> {
        self.clone()
    }
}
