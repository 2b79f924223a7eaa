//! Construction-time checks shared by every graph representation

use super::{Edge, Node};
use crate::error::{GraphError, Result};
use std::collections::BTreeSet;

/// Check a single edge against the node set
pub(crate) fn check_endpoints<N: Node>(nodes: &BTreeSet<N>, edge: &Edge<N>) -> Result<()> {
    for endpoint in [edge.a(), edge.b()] {
        if !nodes.contains(endpoint) {
            crate::bail_unknown_endpoint!(edge, endpoint);
        }
    }
    Ok(())
}

/// Validate a node set and edge set before building a graph.
///
/// Every endpoint must be a member of `nodes`, and no two edges may connect
/// the same unordered pair of nodes.
pub(crate) fn validate<N: Node>(nodes: &BTreeSet<N>, edges: &BTreeSet<Edge<N>>) -> Result<()> {
    let mut pairs = BTreeSet::new();
    for edge in edges {
        check_endpoints(nodes, edge)?;
        if !pairs.insert(edge.canonical()) {
            return Err(GraphError::parallel_edge(edge));
        }
    }
    Ok(())
}
