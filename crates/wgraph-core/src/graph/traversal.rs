use crate::graph::types::{NodeId, Weight};

/// Trait for providing graph adjacency to the traversal algorithms
pub trait Neighbors {
    fn node_count(&self) -> usize;

    /// Outgoing neighbours of `node` with their edge weights.
    ///
    /// Order must be deterministic; traversal output depends on it.
    /// Callers guarantee `node < node_count()`.
    fn neighbors(&self, node: NodeId) -> Vec<(NodeId, Weight)>;
}
