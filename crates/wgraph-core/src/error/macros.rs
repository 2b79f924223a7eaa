//! Error macros for wgraph

/// Macro for returning a node-not-found error
#[macro_export]
macro_rules! bail_node_not_found {
    ($node:expr) => {
        return Err($crate::error::GraphError::node_not_found($node))
    };
}

/// Macro for returning an unknown-endpoint error
#[macro_export]
macro_rules! bail_unknown_endpoint {
    ($edge:expr, $node:expr) => {
        return Err($crate::error::GraphError::unknown_endpoint($edge, $node))
    };
}

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::GraphError::invalid_value($context, $value))
    };
}
