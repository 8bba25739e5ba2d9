//! Adjacency-list graph store
//!
//! Each node keeps a vector of `(neighbour, weight)` entries in insertion
//! order. Duplicate edges are kept as separate entries.

use std::fmt;

use crate::error::{GraphError, Result};
use crate::graph::traversal::Neighbors;
use crate::graph::types::{Edge, GraphOptions, NodeId, Weight};

#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyList {
    options: GraphOptions,
    data: Vec<Vec<(NodeId, Weight)>>,
}

impl AdjacencyList {
    pub fn new<I, E>(number_of_nodes: usize, edges: I, options: GraphOptions) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let mut data = Vec::new();
        data.try_reserve_exact(number_of_nodes)
            .map_err(|_| GraphError::invalid_value("node count (list too large)", number_of_nodes))?;
        data.resize_with(number_of_nodes, Vec::new);

        let mut graph = AdjacencyList { options, data };
        for edge in edges {
            graph.add_edge(edge.into())?;
        }
        Ok(graph)
    }

    /// Unweighted, undirected list: the classic textbook form
    pub fn unweighted<I, E>(number_of_nodes: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        Self::new(number_of_nodes, edges, GraphOptions::default())
    }

    pub fn node_count(&self) -> usize {
        self.data.len()
    }

    pub fn options(&self) -> GraphOptions {
        self.options
    }

    fn check_node(&self, node: NodeId) -> Result<()> {
        crate::ensure_node!(node, self.data.len());
        Ok(())
    }

    pub fn add_edge(&mut self, edge: Edge) -> Result<()> {
        self.check_node(edge.from)?;
        self.check_node(edge.to)?;
        if !edge.weight.is_finite() {
            return Err(GraphError::InvalidWeight {
                weight: edge.weight.value(),
            });
        }

        let weight = self.options.effective_weight(edge.weight);
        self.data[edge.from].push((edge.to, weight));
        if !self.options.directed {
            self.data[edge.to].push((edge.from, weight));
        }
        Ok(())
    }

    /// Remove one occurrence of the edge. A missing edge is a no-op.
    pub fn remove_edge(&mut self, from: NodeId, to: NodeId) -> Result<()> {
        self.check_node(from)?;
        self.check_node(to)?;

        let removed = remove_first(&mut self.data[from], to);
        if removed && !self.options.directed {
            remove_first(&mut self.data[to], from);
        }
        if !removed {
            tracing::debug!(from, to, "remove_edge: no such edge");
        }
        Ok(())
    }

    pub fn neighbors_of(&self, node: NodeId) -> Result<&[(NodeId, Weight)]> {
        self.check_node(node)?;
        Ok(&self.data[node])
    }

    pub fn degree(&self, node: NodeId) -> Result<usize> {
        Ok(self.neighbors_of(node)?.len())
    }
}

fn remove_first(entries: &mut Vec<(NodeId, Weight)>, target: NodeId) -> bool {
    match entries.iter().position(|(node, _)| *node == target) {
        Some(pos) => {
            entries.remove(pos);
            true
        }
        None => false,
    }
}

impl Neighbors for AdjacencyList {
    fn node_count(&self) -> usize {
        self.data.len()
    }

    fn neighbors(&self, node: NodeId) -> Vec<(NodeId, Weight)> {
        self.data[node].clone()
    }
}

impl fmt::Display for AdjacencyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (node, entries) in self.data.iter().enumerate() {
            if node > 0 {
                writeln!(f)?;
            }
            let rendered: Vec<String> = entries
                .iter()
                .map(|(to, weight)| {
                    if self.options.weighted {
                        format!("({}, {})", to, weight)
                    } else {
                        to.to_string()
                    }
                })
                .collect();
            write!(f, "{}: [{}]", node, rendered.join(", "))?;
        }
        Ok(())
    }
}
