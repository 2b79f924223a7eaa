use super::groups::{DisjointGroups, GroupList, UnionFind};
use super::MstCalculator;
use crate::config::{Grouping, SolverConfig};
use crate::error::Result;
use crate::graph::{Edge, Graph, ImmutableGraph, Node};
use crate::logging::SolverMetrics;
use std::collections::BTreeSet;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Instant;

/// Result of a Kruskal run with the facts callers usually need next
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningForest<N: Node> {
    /// All input nodes and the accepted edges
    pub graph: ImmutableGraph<N>,
    /// Sum of the accepted edge weights
    pub total_weight: i64,
    /// Number of trees in the forest (connected components of the input)
    pub components: usize,
}

impl<N: Node> SpanningForest<N> {
    /// Whether the input was connected, i.e. the forest is a single tree
    pub fn is_spanning_tree(&self) -> bool {
        self.components <= 1
    }
}

/// Kruskal's minimum spanning tree algorithm.
///
/// Edges are scanned in ascending [`crate::graph::Edge`] order (weight, then
/// canonical endpoints); an edge is accepted when its endpoints are still in
/// different groups.
pub struct KruskalMstCalculator<'g, N: Node, G: Graph<N>> {
    graph: &'g G,
    config: SolverConfig,
    metrics: Arc<SolverMetrics>,
    _node: PhantomData<fn() -> N>,
}

impl<'g, N: Node, G: Graph<N>> KruskalMstCalculator<'g, N, G> {
    pub fn new(graph: &'g G) -> Self {
        Self {
            graph,
            config: SolverConfig::default(),
            metrics: Arc::new(SolverMetrics::new()),
            _node: PhantomData,
        }
    }

    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Report counters into a shared metrics instance
    pub fn with_metrics(mut self, metrics: Arc<SolverMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn metrics(&self) -> &SolverMetrics {
        &self.metrics
    }

    /// Minimum spanning forest plus its weight and component count
    #[tracing::instrument(level = "debug", skip(self), fields(grouping = %self.config.grouping, representation = %self.config.representation))]
    pub fn spanning_forest(&self) -> Result<SpanningForest<N>> {
        let started = Instant::now();
        let nodes = self.graph.nodes();

        let (accepted, components) = match self.config.grouping {
            Grouping::UnionFind => self.select_edges(UnionFind::new(nodes)),
            Grouping::GroupList => self.select_edges(GroupList::new(nodes)),
        };

        let total_weight: i64 = accepted.iter().map(|edge| i64::from(edge.weight())).sum();
        let graph = ImmutableGraph::build(self.config.representation, nodes.clone(), accepted)?;
        self.metrics.record_run();
        crate::log_solver_metrics!(self.metrics, "kruskal");

        tracing::debug!(
            edges = graph.edges().len(),
            total_weight,
            components,
            "spanning forest built"
        );
        crate::trace_time!(started, "kruskal", scanned = self.graph.edges().len());
        Ok(SpanningForest {
            graph,
            total_weight,
            components,
        })
    }

    /// Scan edges in ascending order, keeping those that join two groups
    fn select_edges<D: DisjointGroups<N>>(
        &self,
        mut groups: D,
    ) -> (BTreeSet<Edge<N>>, usize) {
        let mut accepted = BTreeSet::new();

        for edge in self.graph.edges() {
            if groups.merge(edge.a(), edge.b()) {
                tracing::trace!(edge = %edge, "accepted");
                self.metrics.record_accepted();
                accepted.insert(edge.clone());
            } else {
                tracing::trace!(edge = %edge, "would close a cycle");
                self.metrics.record_rejected();
            }
        }

        (accepted, groups.group_count())
    }
}

impl<N: Node, G: Graph<N>> MstCalculator<N> for KruskalMstCalculator<'_, N, G> {
    fn calculate_mst(&self) -> Result<ImmutableGraph<N>> {
        self.spanning_forest().map(|forest| forest.graph)
    }
}
