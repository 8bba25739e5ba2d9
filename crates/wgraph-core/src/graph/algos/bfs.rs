use std::collections::VecDeque;

use serde::Serialize;

use crate::error::Result;
use crate::graph::traversal::Neighbors;
use crate::graph::types::NodeId;

/// Output of a breadth-first search
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BfsResult {
    pub root: NodeId,
    /// Nodes in discovery order
    pub order: Vec<NodeId>,
    /// Hop count from the root, `None` if never discovered
    pub distance: Vec<Option<usize>>,
    /// Node that discovered each node
    pub parent: Vec<Option<NodeId>>,
}

impl BfsResult {
    /// Fewest-hop path from the root, empty if `target` was not discovered
    pub fn path_to(&self, target: NodeId) -> Vec<NodeId> {
        if self.distance.get(target).copied().flatten().is_none() {
            return Vec::new();
        }

        let mut path = vec![target];
        let mut current = target;
        while let Some(prev) = self.parent[current] {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        path
    }
}

/// Breadth-first search from `root`, visiting neighbours in adjacency order
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn bfs<G: Neighbors + ?Sized>(graph: &G, root: NodeId) -> Result<BfsResult> {
    let node_count = graph.node_count();
    crate::ensure_node!(root, node_count);

    let mut order = Vec::with_capacity(node_count);
    let mut distance = vec![None; node_count];
    let mut parent = vec![None; node_count];
    let mut queue = VecDeque::new();

    distance[root] = Some(0);
    queue.push_back(root);

    while let Some(current) = queue.pop_front() {
        order.push(current);
        let next_hop = distance[current].map_or(0, |d: usize| d + 1);

        for (neighbor, _) in graph.neighbors(current) {
            if distance[neighbor].is_none() {
                distance[neighbor] = Some(next_hop);
                parent[neighbor] = Some(current);
                queue.push_back(neighbor);
            }
        }
    }

    tracing::debug!(visited = order.len(), "bfs finished");
    Ok(BfsResult {
        root,
        order,
        distance,
        parent,
    })
}
