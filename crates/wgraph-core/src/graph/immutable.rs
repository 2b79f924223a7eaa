use super::{AdjacencyGraph, BasicGraph, Edge, Graph, Node};
use crate::config::Representation;
use crate::error::Result;
use std::borrow::Cow;
use std::collections::BTreeSet;

/// An immutable graph in either representation.
///
/// Solvers return this type so the representation of their output can be
/// picked through [`crate::config::SolverConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImmutableGraph<N: Node> {
    Basic(BasicGraph<N>),
    Adjacency(AdjacencyGraph<N>),
}

impl<N: Node> ImmutableGraph<N> {
    /// Build a validated graph in the requested representation
    pub fn build(
        representation: Representation,
        nodes: BTreeSet<N>,
        edges: BTreeSet<Edge<N>>,
    ) -> Result<Self> {
        Ok(match representation {
            Representation::Basic => ImmutableGraph::Basic(BasicGraph::try_new(nodes, edges)?),
            Representation::Adjacency => {
                ImmutableGraph::Adjacency(AdjacencyGraph::try_new(nodes, edges)?)
            }
        })
    }

    pub fn representation(&self) -> Representation {
        match self {
            ImmutableGraph::Basic(_) => Representation::Basic,
            ImmutableGraph::Adjacency(_) => Representation::Adjacency,
        }
    }

    /// Sum of all edge weights
    pub fn total_weight(&self) -> i64 {
        self.edges().iter().map(|edge| i64::from(edge.weight())).sum()
    }
}

impl<N: Node> From<BasicGraph<N>> for ImmutableGraph<N> {
    fn from(graph: BasicGraph<N>) -> Self {
        ImmutableGraph::Basic(graph)
    }
}

impl<N: Node> From<AdjacencyGraph<N>> for ImmutableGraph<N> {
    fn from(graph: AdjacencyGraph<N>) -> Self {
        ImmutableGraph::Adjacency(graph)
    }
}

impl<N: Node> Graph<N> for ImmutableGraph<N> {
    type Immutable = ImmutableGraph<N>;

    fn nodes(&self) -> &BTreeSet<N> {
        match self {
            ImmutableGraph::Basic(graph) => graph.nodes(),
            ImmutableGraph::Adjacency(graph) => graph.nodes(),
        }
    }

    fn edges(&self) -> &BTreeSet<Edge<N>> {
        match self {
            ImmutableGraph::Basic(graph) => graph.edges(),
            ImmutableGraph::Adjacency(graph) => graph.edges(),
        }
    }

    fn adjacent_edges(&self, node: &N) -> Result<Cow<'_, BTreeSet<Edge<N>>>> {
        match self {
            ImmutableGraph::Basic(graph) => graph.adjacent_edges(node),
            ImmutableGraph::Adjacency(graph) => graph.adjacent_edges(node),
        }
    }

    fn to_immutable(&self) -> ImmutableGraph<N> {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_each_representation() {
        for representation in Representation::ALL {
            let graph = ImmutableGraph::build(
                representation,
                [1, 2, 3].into_iter().collect(),
                [Edge::new(1, 2, 4), Edge::new(2, 3, -1)].into_iter().collect(),
            )
            .unwrap();
            assert_eq!(graph.representation(), representation);
            assert_eq!(graph.total_weight(), 3);
            assert_eq!(graph.adjacent_edges(&2).unwrap().len(), 2);
        }
    }

    #[test]
    fn test_build_validates() {
        let err = ImmutableGraph::build(
            Representation::Adjacency,
            [1].into_iter().collect(),
            [Edge::new(1, 2, 4)].into_iter().collect(),
        )
        .unwrap_err();
        assert!(err.is_construction_error());
    }

    #[test]
    fn test_from_conversions() {
        let graph: ImmutableGraph<u8> = BasicGraph::empty().into();
        assert_eq!(graph.representation(), Representation::Basic);
        assert_eq!(graph.to_immutable(), graph);
    }
}
