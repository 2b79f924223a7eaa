use super::PathCalculator;
use crate::error::{GraphError, Result};
use crate::graph::{Graph, Node, Weight};
use crate::logging::SolverMetrics;
use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Instant;

/// A shortest path together with its total weight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath<N> {
    /// Nodes from start to end, both inclusive
    pub nodes: Vec<N>,
    /// Sum of the edge weights along `nodes`
    pub distance: i64,
}

impl<N> ShortestPath<N> {
    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// Min-heap entry ordered by distance, then by node for deterministic ties
#[derive(Debug, Clone, PartialEq, Eq)]
struct HeapEntry<N> {
    distance: i64,
    node: N,
}

impl<N: Node> PartialOrd for HeapEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: Node> Ord for HeapEntry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// State of one Dijkstra run.
///
/// A node missing from `distances` has not been reached yet, which stands in
/// for an infinite distance.
struct DijkstraState<N: Node> {
    distances: BTreeMap<N, i64>,
    predecessors: BTreeMap<N, N>,
    settled: BTreeSet<N>,
    heap: BinaryHeap<Reverse<HeapEntry<N>>>,
}

impl<N: Node> DijkstraState<N> {
    fn new(start: &N) -> Self {
        let mut state = Self {
            distances: BTreeMap::new(),
            predecessors: BTreeMap::new(),
            settled: BTreeSet::new(),
            heap: BinaryHeap::new(),
        };
        state.distances.insert(start.clone(), 0);
        state.heap.push(Reverse(HeapEntry {
            distance: 0,
            node: start.clone(),
        }));
        state
    }

    /// Pop the closest node that is not settled yet
    fn extract_min(&mut self) -> Option<N> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            if self.settled.contains(&entry.node) {
                continue;
            }
            // Entries superseded by a later relaxation are skipped
            if self.distances.get(&entry.node) != Some(&entry.distance) {
                continue;
            }
            self.settled.insert(entry.node.clone());
            return Some(entry.node);
        }
        None
    }

    /// Route `to` through `from` if that is shorter; settled nodes are final
    fn relax(&mut self, from: &N, to: &N, weight: Weight) -> bool {
        if self.settled.contains(to) {
            return false;
        }
        let Some(&from_distance) = self.distances.get(from) else {
            return false;
        };
        let candidate = from_distance + i64::from(weight);
        if self
            .distances
            .get(to)
            .is_some_and(|&current| current <= candidate)
        {
            return false;
        }

        self.distances.insert(to.clone(), candidate);
        self.predecessors.insert(to.clone(), from.clone());
        self.heap.push(Reverse(HeapEntry {
            distance: candidate,
            node: to.clone(),
        }));
        tracing::trace!(from = ?from, to = ?to, distance = candidate, "relaxed");
        true
    }

    /// Walk predecessors back from `end`.
    ///
    /// The walk is bounded by the node count, so a broken chain can never
    /// loop; failing to reach `start` means `end` is unreachable.
    fn reconstruct_path(&self, start: &N, end: &N, node_count: usize) -> Result<Vec<N>> {
        let mut path = vec![end.clone()];
        let mut current = end;

        for _ in 0..node_count {
            if current == start {
                path.reverse();
                return Ok(path);
            }
            match self.predecessors.get(current) {
                Some(predecessor) => {
                    path.push(predecessor.clone());
                    current = predecessor;
                }
                None => break,
            }
        }

        Err(GraphError::no_path(start, end))
    }
}

/// Dijkstra's single-source shortest path algorithm.
///
/// Edge weights are assumed non-negative; this is not enforced. Equal
/// distances are resolved in canonical node order.
pub struct DijkstraPathCalculator<'g, N: Node, G: Graph<N>> {
    graph: &'g G,
    metrics: Arc<SolverMetrics>,
    _node: PhantomData<fn() -> N>,
}

impl<'g, N: Node, G: Graph<N>> DijkstraPathCalculator<'g, N, G> {
    pub fn new(graph: &'g G) -> Self {
        Self {
            graph,
            metrics: Arc::new(SolverMetrics::new()),
            _node: PhantomData,
        }
    }

    /// Report counters into a shared metrics instance
    pub fn with_metrics(mut self, metrics: Arc<SolverMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn metrics(&self) -> &SolverMetrics {
        &self.metrics
    }

    fn ensure_node(&self, node: &N) -> Result<()> {
        if !self.graph.contains_node(node) {
            crate::bail_node_not_found!(node);
        }
        Ok(())
    }

    /// Settle every node reachable from `start`
    fn run(&self, start: &N) -> Result<DijkstraState<N>> {
        self.ensure_node(start)?;
        let mut state = DijkstraState::new(start);

        while let Some(node) = state.extract_min() {
            self.metrics.record_settled();
            for edge in self.graph.adjacent_edges(&node)?.iter() {
                for (from, to) in [(edge.a(), edge.b()), (edge.b(), edge.a())] {
                    if state.relax(from, to, edge.weight()) {
                        self.metrics.record_relaxation();
                    }
                }
            }
        }

        self.metrics.record_run();
        crate::log_solver_metrics!(self.metrics, "dijkstra");
        Ok(state)
    }

    /// Shortest path from `start` to `end` together with its total weight
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn shortest_path(&self, start: &N, end: &N) -> Result<ShortestPath<N>> {
        let started = Instant::now();
        self.ensure_node(end)?;
        let state = self.run(start)?;
        let nodes = state.reconstruct_path(start, end, self.graph.nodes().len())?;
        let distance = state.distances.get(end).copied().unwrap_or_default();

        tracing::debug!(hops = nodes.len() - 1, distance, "shortest path found");
        crate::trace_time!(started, "dijkstra", settled = state.settled.len());
        Ok(ShortestPath { nodes, distance })
    }

    /// Distance from `start` to every reachable node; unreachable nodes are absent
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn distances(&self, start: &N) -> Result<BTreeMap<N, i64>> {
        let state = self.run(start)?;
        tracing::debug!(reachable = state.distances.len(), "distances computed");
        Ok(state.distances)
    }
}

impl<N: Node, G: Graph<N>> PathCalculator<N> for DijkstraPathCalculator<'_, N, G> {
    fn calculate_path(&self, start: &N, end: &N) -> Result<Vec<N>> {
        self.shortest_path(start, end).map(|path| path.nodes)
    }
}
