//! Error types for wgraph
//!
//! Every recoverable failure of graph construction, adjacency queries and
//! the solvers surfaces as a [`GraphError`]. Node identities are captured
//! through their `Debug` rendering so the error type stays non-generic.
//!
//! Internal invariant violations (for example, a node that belongs to no
//! disjoint group during Kruskal) are panics and never appear here.

mod macros;

use std::fmt::Debug;
use thiserror::Error;

/// Errors that can occur during wgraph operations
#[derive(Error, Debug)]
pub enum GraphError {
    // Query errors
    #[error("node not found: {node}")]
    NodeNotFound { node: String },

    #[error("no path exists from {from} to {to}")]
    NoPath { from: String, to: String },

    // Construction errors
    #[error("edge {edge} references unknown node {node}")]
    UnknownEndpoint { edge: String, node: String },

    #[error("parallel edge {edge}: another edge already connects these nodes")]
    ParallelEdge { edge: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Configuration I/O
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

impl GraphError {
    /// Create an error for a node that is not part of the graph
    pub fn node_not_found(node: &impl Debug) -> Self {
        GraphError::NodeNotFound {
            node: format!("{:?}", node),
        }
    }

    /// Create an error for an unreachable target
    pub fn no_path(from: &impl Debug, to: &impl Debug) -> Self {
        GraphError::NoPath {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }

    /// Create an error for an edge whose endpoint is missing from the node set
    pub fn unknown_endpoint(edge: impl std::fmt::Display, node: &impl Debug) -> Self {
        GraphError::UnknownEndpoint {
            edge: edge.to_string(),
            node: format!("{:?}", node),
        }
    }

    /// Create an error for a second edge over an already connected pair
    pub fn parallel_edge(edge: impl std::fmt::Display) -> Self {
        GraphError::ParallelEdge {
            edge: edge.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Whether the error was raised while building a graph
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            GraphError::UnknownEndpoint { .. } | GraphError::ParallelEdge { .. }
        )
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::NodeNotFound { .. } => "node_not_found",
            GraphError::NoPath { .. } => "no_path",
            GraphError::UnknownEndpoint { .. } => "unknown_endpoint",
            GraphError::ParallelEdge { .. } => "parallel_edge",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::Io(_) => "io_error",
            GraphError::TomlDe(_) | GraphError::TomlSer(_) => "toml_error",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for wgraph operations
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_not_found_uses_debug_rendering() {
        let err = GraphError::node_not_found(&"A");
        assert_eq!(err.to_string(), "node not found: \"A\"");
        assert_eq!(err.error_type(), "node_not_found");
    }

    #[test]
    fn test_no_path_message() {
        let err = GraphError::no_path(&1, &7);
        assert_eq!(err.to_string(), "no path exists from 1 to 7");
        assert!(!err.is_construction_error());
    }

    #[test]
    fn test_construction_errors_are_flagged() {
        assert!(GraphError::parallel_edge("a -[1]- b").is_construction_error());
        assert!(GraphError::unknown_endpoint("a -[1]- b", &"b").is_construction_error());
    }

    #[test]
    fn test_to_json_shape() {
        let json = GraphError::invalid_value("grouping", "fastest").to_json();
        assert_eq!(json["error"]["type"], "invalid_value");
        assert_eq!(json["error"]["message"], "invalid grouping: fastest");
    }
}
