use super::validate::check_endpoints;
use super::{BasicGraph, Edge, Graph, Node};
use crate::error::{GraphError, Result};
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};

/// Editable graph keyed by node, keeping the same invariants as the
/// immutable representations after every operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutableGraph<N: Node> {
    nodes: BTreeSet<N>,
    edges: BTreeSet<Edge<N>>,
    incident: BTreeMap<N, BTreeSet<Edge<N>>>,
}

impl<N: Node> MutableGraph<N> {
    pub fn new() -> Self {
        Self {
            nodes: BTreeSet::new(),
            edges: BTreeSet::new(),
            incident: BTreeMap::new(),
        }
    }

    pub(crate) fn from_parts(nodes: BTreeSet<N>, edges: BTreeSet<Edge<N>>) -> Self {
        let mut graph = Self::new();
        for node in nodes {
            graph.add_node(node);
        }
        for edge in edges {
            graph.insert_edge(edge);
        }
        graph
    }

    /// Add a node; returns `false` if it was already present
    pub fn add_node(&mut self, node: N) -> bool {
        if !self.nodes.insert(node.clone()) {
            return false;
        }
        self.incident.insert(node, BTreeSet::new());
        true
    }

    /// Remove a node together with every edge incident to it
    pub fn remove_node(&mut self, node: &N) -> Result<BTreeSet<Edge<N>>> {
        let Some(incident) = self.incident.remove(node) else {
            crate::bail_node_not_found!(node);
        };
        self.nodes.remove(node);
        for edge in &incident {
            self.edges.remove(edge);
            if let Some(other) = edge.other(node) {
                if let Some(set) = self.incident.get_mut(other) {
                    set.remove(edge);
                }
            }
        }
        Ok(incident)
    }

    /// Add an edge between two existing nodes.
    ///
    /// Fails if an endpoint is unknown or the pair is already connected.
    pub fn add_edge(&mut self, edge: Edge<N>) -> Result<()> {
        check_endpoints(&self.nodes, &edge)?;
        let (a, _) = edge.canonical();
        let connected = self
            .incident
            .get(a)
            .is_some_and(|set| set.iter().any(|existing| existing.same_pair(&edge)));
        if connected {
            return Err(GraphError::parallel_edge(&edge));
        }
        self.insert_edge(edge);
        Ok(())
    }

    /// Remove an edge; returns `false` if it was not part of the graph
    pub fn remove_edge(&mut self, edge: &Edge<N>) -> bool {
        if !self.edges.remove(edge) {
            return false;
        }
        for endpoint in [edge.a(), edge.b()] {
            if let Some(set) = self.incident.get_mut(endpoint) {
                set.remove(edge);
            }
        }
        true
    }

    fn insert_edge(&mut self, edge: Edge<N>) {
        for endpoint in [edge.a(), edge.b()] {
            if let Some(set) = self.incident.get_mut(endpoint) {
                set.insert(edge.clone());
            }
        }
        self.edges.insert(edge);
    }
}

impl<N: Node> Default for MutableGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Node> Graph<N> for MutableGraph<N> {
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
        BasicGraph::from_valid(self.nodes.clone(), self.edges.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MutableGraph<&'static str> {
        let mut graph = MutableGraph::new();
        for node in ["a", "b", "c"] {
            graph.add_node(node);
        }
        graph.add_edge(Edge::new("a", "b", 1)).unwrap();
        graph.add_edge(Edge::new("b", "c", 2)).unwrap();
        graph
    }

    #[test]
    fn test_add_node_twice() {
        let mut graph = sample();
        assert!(!graph.add_node("a"));
        assert_eq!(graph.nodes().len(), 3);
    }

    #[test]
    fn test_add_edge_rejects_unknown_endpoint() {
        let mut graph = sample();
        let err = graph.add_edge(Edge::new("a", "q", 1)).unwrap_err();
        assert!(matches!(err, GraphError::UnknownEndpoint { .. }));
    }

    #[test]
    fn test_add_edge_rejects_parallel_edge() {
        let mut graph = sample();
        let err = graph.add_edge(Edge::new("b", "a", 7)).unwrap_err();
        assert!(matches!(err, GraphError::ParallelEdge { .. }));
        assert_eq!(graph.edges().len(), 2);
    }

    #[test]
    fn test_remove_node_drops_incident_edges() {
        let mut graph = sample();
        let removed = graph.remove_node(&"b").unwrap();
        assert_eq!(removed.len(), 2);
        assert!(graph.edges().is_empty());
        assert!(graph.adjacent_edges(&"a").unwrap().is_empty());
        assert!(graph.adjacent_edges(&"b").is_err());
    }

    #[test]
    fn test_remove_missing_node() {
        let mut graph = sample();
        assert!(matches!(
            graph.remove_node(&"z"),
            Err(GraphError::NodeNotFound { .. })
        ));
    }

    #[test]
    fn test_remove_edge() {
        let mut graph = sample();
        assert!(graph.remove_edge(&Edge::new("b", "a", 1)));
        assert!(!graph.remove_edge(&Edge::new("b", "a", 1)));
        assert!(graph.adjacent_edges(&"a").unwrap().is_empty());
        assert_eq!(graph.adjacent_edges(&"b").unwrap().len(), 1);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let graph = sample();
        let snapshot = graph.to_immutable();
        assert_eq!(snapshot.nodes(), graph.nodes());
        assert_eq!(snapshot.edges(), graph.edges());
        assert_eq!(snapshot.to_mutable(), graph);
    }
}
