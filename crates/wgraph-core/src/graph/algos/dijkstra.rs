use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::str::FromStr;
use std::time::Instant;

use serde::Serialize;

use crate::error::{GraphError, Result};
use crate::graph::matrix::MatrixGraph;
use crate::graph::types::{NodeId, Weight};

/// How the next node to settle is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Linear scan over all unvisited nodes each round, O(N^2)
    #[default]
    DenseScan,
    /// Lazy-deletion binary heap, O((N + E) log N)
    BinaryHeap,
}

impl FromStr for Strategy {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "dense" | "dense-scan" => Ok(Strategy::DenseScan),
            "heap" | "binary-heap" => Ok(Strategy::BinaryHeap),
            other => Err(GraphError::invalid_value(
                "strategy (expected: dense, heap)",
                other,
            )),
        }
    }
}

/// Min-heap entry ordered by accumulated cost, then by node index so that
/// ties settle in the same order as the dense scan.
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry {
    pub node: NodeId,
    pub cost: Weight,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .value()
            .total_cmp(&other.cost.value())
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// Best-known distances and predecessors from one source
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceTable {
    source: NodeId,
    distances: Vec<Weight>,
    predecessors: Vec<Option<NodeId>>,
    settled_order: Vec<NodeId>,
    relaxed: usize,
}

/// One row of a [`DistanceTable`], for output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceEntry {
    pub node: NodeId,
    /// `None` when the node is unreachable
    pub distance: Option<Weight>,
    pub predecessor: Option<NodeId>,
}

impl DistanceTable {
    fn new(node_count: usize, source: NodeId) -> Self {
        let mut distances = vec![Weight::INFINITY; node_count];
        distances[source] = Weight::ZERO;
        DistanceTable {
            source,
            distances,
            predecessors: vec![None; node_count],
            settled_order: Vec::with_capacity(node_count),
            relaxed: 0,
        }
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn node_count(&self) -> usize {
        self.distances.len()
    }

    /// Shortest distance to `node`, `None` if unreachable or out of range
    pub fn distance(&self, node: NodeId) -> Option<Weight> {
        self.distances
            .get(node)
            .copied()
            .filter(|distance| distance.is_finite())
    }

    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors.get(node).copied().flatten()
    }

    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.distance(node).is_some()
    }

    /// Nodes in the order their distance became final
    pub fn settled_order(&self) -> &[NodeId] {
        &self.settled_order
    }

    /// Number of successful relaxations performed
    pub fn relaxed_count(&self) -> usize {
        self.relaxed
    }

    /// Walk predecessors back from `target`.
    ///
    /// Returns the nodes in source-to-target order, or an empty vector
    /// when the walk does not end at the source. The walk is bounded by
    /// the node count.
    pub fn path_to(&self, target: NodeId) -> Vec<NodeId> {
        if !self.is_reachable(target) {
            return Vec::new();
        }

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            match self.predecessor(current) {
                Some(prev) if path.len() < self.node_count() => {
                    path.push(prev);
                    current = prev;
                }
                _ => return Vec::new(),
            }
        }

        path.reverse();
        path
    }

    pub fn entries(&self) -> Vec<DistanceEntry> {
        (0..self.node_count())
            .map(|node| DistanceEntry {
                node,
                distance: self.distance(node),
                predecessor: self.predecessor(node),
            })
            .collect()
    }

    /// Tentative-distance improvement; returns whether it applied.
    /// `from` is settled, so its distance is finite and the saturated sum
    /// always beats the sentinel of an undiscovered node.
    fn relax(&mut self, from: NodeId, to: NodeId, weight: Weight) -> bool {
        let candidate = self.distances[from].saturating_add(weight);
        if candidate < self.distances[to] {
            self.distances[to] = candidate;
            self.predecessors[to] = Some(from);
            self.relaxed += 1;
            true
        } else {
            false
        }
    }
}

/// Path between two nodes together with its total weight
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    pub source: NodeId,
    pub target: NodeId,
    pub found: bool,
    /// Empty when `found` is false
    pub path: Vec<NodeId>,
    pub distance: Option<Weight>,
    pub path_length: usize,
}

/// Lowest-distance unvisited node with a finite distance; ties go to the
/// lowest index.
fn find_min_unvisited(distances: &[Weight], visited: &[bool]) -> Option<NodeId> {
    let mut best: Option<NodeId> = None;
    for node in 0..distances.len() {
        if visited[node] || !distances[node].is_finite() {
            continue;
        }
        match best {
            Some(current) if distances[current] <= distances[node] => {}
            _ => best = Some(node),
        }
    }
    best
}

fn run_dense_scan(graph: &MatrixGraph, table: &mut DistanceTable) {
    let mut visited = vec![false; graph.node_count()];

    while let Some(selected) = find_min_unvisited(&table.distances, &visited) {
        visited[selected] = true;
        table.settled_order.push(selected);

        for (neighbor, weight) in graph.row(selected) {
            if !visited[neighbor] {
                table.relax(selected, neighbor, weight);
            }
        }
    }
}

fn run_binary_heap(graph: &MatrixGraph, table: &mut DistanceTable) {
    let mut visited = vec![false; graph.node_count()];
    let mut heap = BinaryHeap::new();
    heap.push(Reverse(HeapEntry {
        node: table.source,
        cost: Weight::ZERO,
    }));

    while let Some(Reverse(HeapEntry { node: selected, .. })) = heap.pop() {
        // Stale entry left behind by a later improvement
        if visited[selected] {
            continue;
        }
        visited[selected] = true;
        table.settled_order.push(selected);

        for (neighbor, weight) in graph.row(selected) {
            if !visited[neighbor] && table.relax(selected, neighbor, weight) {
                heap.push(Reverse(HeapEntry {
                    node: neighbor,
                    cost: table.distances[neighbor],
                }));
            }
        }
    }
}

/// Single-source shortest distances using the default strategy
pub fn dijkstra(graph: &MatrixGraph, source: NodeId) -> Result<DistanceTable> {
    dijkstra_with(graph, source, Strategy::default())
}

/// Single-source shortest distances.
///
/// Edge weights are assumed non-negative; with negative weights the
/// result is unspecified.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn dijkstra_with(
    graph: &MatrixGraph,
    source: NodeId,
    strategy: Strategy,
) -> Result<DistanceTable> {
    crate::ensure_node!(source, graph.node_count());
    let start = Instant::now();

    let mut table = DistanceTable::new(graph.node_count(), source);
    match strategy {
        Strategy::DenseScan => run_dense_scan(graph, &mut table),
        Strategy::BinaryHeap => run_binary_heap(graph, &mut table),
    }

    tracing::debug!(
        settled = table.settled_order.len(),
        relaxed = table.relaxed,
        unreachable = graph.node_count() - table.settled_order.len(),
        "dijkstra finished"
    );
    crate::trace_time!(start, "dijkstra");
    Ok(table)
}

/// Shortest path from `source` to `target`, empty if `target` is unreachable
pub fn shortest_path(graph: &MatrixGraph, source: NodeId, target: NodeId) -> Result<Vec<NodeId>> {
    Ok(shortest_path_with_cost(graph, source, target, Strategy::default())?.path)
}

/// Shortest path plus its total weight
pub fn shortest_path_with_cost(
    graph: &MatrixGraph,
    source: NodeId,
    target: NodeId,
    strategy: Strategy,
) -> Result<PathResult> {
    crate::ensure_node!(target, graph.node_count());
    let table = dijkstra_with(graph, source, strategy)?;

    let path = table.path_to(target);
    let found = !path.is_empty();
    if !found {
        tracing::debug!(source, target, "target unreachable");
    }

    Ok(PathResult {
        source,
        target,
        found,
        path_length: path.len().saturating_sub(1),
        distance: if found { table.distance(target) } else { None },
        path,
    })
}

impl MatrixGraph {
    /// Shortest path from `source` to `target`, empty if unreachable
    pub fn shortest_path(&self, source: NodeId, target: NodeId) -> Result<Vec<NodeId>> {
        shortest_path(self, source, target)
    }

    /// Full distance table from `source`
    pub fn distances(&self, source: NodeId) -> Result<DistanceTable> {
        dijkstra(self, source)
    }
}
