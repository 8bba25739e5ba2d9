use crate::error::Result;
use crate::graph::traversal::Neighbors;
use crate::graph::types::NodeId;

/// Iterative depth-first search from `root`.
///
/// Nodes are marked when popped, and undiscovered neighbours are pushed in
/// adjacency order, so the last neighbour listed is explored first.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn dfs<G: Neighbors + ?Sized>(graph: &G, root: NodeId) -> Result<Vec<NodeId>> {
    let node_count = graph.node_count();
    crate::ensure_node!(root, node_count);

    let mut discovered = vec![false; node_count];
    let mut stack = vec![root];
    let mut order = Vec::with_capacity(node_count);

    while let Some(current) = stack.pop() {
        if discovered[current] {
            continue;
        }
        discovered[current] = true;
        order.push(current);

        stack.extend(
            graph
                .neighbors(current)
                .into_iter()
                .map(|(neighbor, _)| neighbor)
                .filter(|neighbor| !discovered[*neighbor]),
        );
    }

    tracing::debug!(visited = order.len(), "dfs finished");
    Ok(order)
}
