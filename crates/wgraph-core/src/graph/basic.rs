use super::validate::validate;
use super::{Edge, Graph, Node};
use crate::error::{GraphError, Result};
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};

/// Immutable graph storing, for every node, the set of edges incident to it.
///
/// Nodes without edges map to an empty set, so every member of the node set
/// has an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicGraph<N: Node> {
    nodes: BTreeSet<N>,
    edges: BTreeSet<Edge<N>>,
    incident: BTreeMap<N, BTreeSet<Edge<N>>>,
}

impl<N: Node> BasicGraph<N> {
    /// Build a graph, rejecting edges with unknown endpoints and parallel edges
    #[tracing::instrument(skip_all, fields(nodes = nodes.len(), edges = edges.len()))]
    pub fn try_new(nodes: BTreeSet<N>, edges: BTreeSet<Edge<N>>) -> Result<Self> {
        validate(&nodes, &edges)?;
        Ok(Self::from_valid(nodes, edges))
    }

    /// Graph with no nodes and no edges
    pub fn empty() -> Self {
        Self::from_valid(BTreeSet::new(), BTreeSet::new())
    }

    /// Build from parts already known to satisfy the graph invariants
    pub(crate) fn from_valid(nodes: BTreeSet<N>, edges: BTreeSet<Edge<N>>) -> Self {
        let mut incident: BTreeMap<N, BTreeSet<Edge<N>>> = nodes
            .iter()
            .map(|node| (node.clone(), BTreeSet::new()))
            .collect();

        for edge in &edges {
            for endpoint in [edge.a(), edge.b()] {
                if let Some(set) = incident.get_mut(endpoint) {
                    set.insert(edge.clone());
                }
            }
        }

        Self {
            nodes,
            edges,
            incident,
        }
    }
}

impl<N: Node> Default for BasicGraph<N> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<N: Node> Graph<N> for BasicGraph<N> {
    type Immutable = BasicGraph<N>;

    fn nodes(&self) -> &BTreeSet<N> {
        &self.nodes
    }

    fn edges(&self) -> &BTreeSet<Edge<N>> {
        &self.edges
    }

    fn adjacent_edges(&self, node: &N) -> Result<Cow<'_, BTreeSet<Edge<N>>>> {
        self.incident
            .get(node)
            .map(Cow::Borrowed)
            .ok_or_else(|| GraphError::node_not_found(node))
    }

    fn to_immutable(&self) -> BasicGraph<N> {
        self.clone()
    }
}
