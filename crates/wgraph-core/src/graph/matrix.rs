//! Dense adjacency-matrix graph store
//!
//! Every cell records edge presence explicitly, so a zero-weight edge is
//! distinguishable from a missing one. Read-only queries report a missing
//! edge as weight `0`, and the diagnostic dump prints `0` for it.

use std::fmt;

use crate::error::{GraphError, Result};
use crate::graph::traversal::Neighbors;
use crate::graph::types::{Edge, GraphOptions, NodeId, Weight};

/// Weighted graph over a fixed node set, backed by an N x N matrix
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixGraph {
    node_count: usize,
    options: GraphOptions,
    /// Row-major cells: `cells[from * node_count + to]`
    cells: Vec<Option<Weight>>,
}

impl MatrixGraph {
    /// Build a graph with `number_of_nodes` nodes and apply each edge in order
    pub fn new<I, E>(number_of_nodes: usize, edges: I, options: GraphOptions) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let mut graph = MatrixGraph {
            node_count: number_of_nodes,
            options,
            cells: allocate_cells(number_of_nodes)?,
        };
        for edge in edges {
            graph.add_edge(edge.into())?;
        }
        tracing::debug!(
            nodes = graph.node_count,
            edges = graph.edge_count(),
            directed = options.directed,
            "built matrix graph"
        );
        Ok(graph)
    }

    /// Weighted directed graph
    pub fn directed<I, E>(number_of_nodes: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        Self::new(number_of_nodes, edges, GraphOptions::directed())
    }

    /// Weighted undirected graph
    pub fn undirected<I, E>(number_of_nodes: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        Self::new(number_of_nodes, edges, GraphOptions::undirected())
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn options(&self) -> GraphOptions {
        self.options
    }

    pub fn is_directed(&self) -> bool {
        self.options.directed
    }

    /// Number of edges; an undirected edge counts once
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    fn check_node(&self, node: NodeId) -> Result<()> {
        crate::ensure_node!(node, self.node_count);
        Ok(())
    }

    fn index(&self, from: NodeId, to: NodeId) -> usize {
        from * self.node_count + to
    }

    /// Insert or overwrite an edge. Both endpoints are validated before
    /// anything is written.
    pub fn add_edge(&mut self, edge: Edge) -> Result<()> {
        self.check_node(edge.from)?;
        self.check_node(edge.to)?;
        if !edge.weight.is_finite() {
            return Err(GraphError::InvalidWeight {
                weight: edge.weight.value(),
            });
        }
        if edge.weight.is_negative() {
            tracing::warn!(
                from = edge.from,
                to = edge.to,
                weight = edge.weight.value(),
                "negative edge weight; shortest paths through it are not reliable"
            );
        }

        let weight = self.options.effective_weight(edge.weight);
        let forward = self.index(edge.from, edge.to);
        self.cells[forward] = Some(weight);
        if !self.options.directed {
            let backward = self.index(edge.to, edge.from);
            self.cells[backward] = Some(weight);
        }
        Ok(())
    }

    /// Remove an edge. Removing a missing edge is a no-op.
    pub fn remove_edge(&mut self, from: NodeId, to: NodeId) -> Result<()> {
        self.check_node(from)?;
        self.check_node(to)?;

        let forward = self.index(from, to);
        self.cells[forward] = None;
        if !self.options.directed {
            let backward = self.index(to, from);
            self.cells[backward] = None;
        }
        Ok(())
    }

    /// Edge weight if the edge exists
    pub fn edge_weight(&self, from: NodeId, to: NodeId) -> Result<Option<Weight>> {
        self.check_node(from)?;
        self.check_node(to)?;
        Ok(self.cells[self.index(from, to)])
    }

    /// Weight of the edge, or `0` when there is none
    pub fn weight_between(&self, from: NodeId, to: NodeId) -> Result<Weight> {
        Ok(self.edge_weight(from, to)?.unwrap_or(Weight::ZERO))
    }

    pub fn has_edge(&self, from: NodeId, to: NodeId) -> Result<bool> {
        Ok(self.edge_weight(from, to)?.is_some())
    }

    /// Row `from` of the matrix: every present edge in ascending target order
    pub(crate) fn row(&self, from: NodeId) -> impl Iterator<Item = (NodeId, Weight)> + '_ {
        let start = from * self.node_count;
        self.cells[start..start + self.node_count]
            .iter()
            .enumerate()
            .filter_map(|(to, cell)| cell.map(|weight| (to, weight)))
    }

    /// All edges in row-major order. For undirected graphs each edge is
    /// reported once, with `from <= to`.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.node_count).flat_map(move |from| {
            self.row(from)
                .filter(move |(to, _)| self.options.directed || from <= *to)
                .map(move |(to, weight)| Edge { from, to, weight })
        })
    }

    /// Tab-separated dump of the matrix, for diagnostics only
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

/// Empty N x N cell storage. A node count whose matrix cannot be sized or
/// allocated is rejected rather than panicking.
fn allocate_cells(number_of_nodes: usize) -> Result<Vec<Option<Weight>>> {
    let too_large =
        || GraphError::invalid_value("node count (matrix too large)", number_of_nodes);
    let len = number_of_nodes
        .checked_mul(number_of_nodes)
        .ok_or_else(too_large)?;

    let mut cells = Vec::new();
    cells.try_reserve_exact(len).map_err(|_| too_large())?;
    cells.resize(len, None);
    Ok(cells)
}

impl Neighbors for MatrixGraph {
    fn node_count(&self) -> usize {
        self.node_count
    }

    fn neighbors(&self, node: NodeId) -> Vec<(NodeId, Weight)> {
        self.row(node).collect()
    }
}

impl fmt::Display for MatrixGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: Vec<String> = (0..self.node_count).map(|i| i.to_string()).collect();
        write!(f, "\t{}\n\n", header.join("\t"))?;

        for from in 0..self.node_count {
            if from > 0 {
                writeln!(f)?;
            }
            let start = from * self.node_count;
            let row: Vec<String> = self.cells[start..start + self.node_count]
                .iter()
                .map(|cell| cell.unwrap_or(Weight::ZERO).to_string())
                .collect();
            write!(f, "{}\t{}", from, row.join("\t"))?;
        }
        Ok(())
    }
}
