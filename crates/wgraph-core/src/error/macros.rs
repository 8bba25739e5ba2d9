//! Error macros for wgraph

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::GraphError::invalid_value($context, $value))
    };
}

/// Macro for rejecting a node id outside `0..$node_count`
#[macro_export]
macro_rules! ensure_node {
    ($node:expr, $node_count:expr) => {
        if $node >= $node_count {
            return Err($crate::error::GraphError::invalid_node($node, $node_count));
        }
    };
}
