use clap::Args;

use super::parse::parse_edge;
use wgraph_core::error::{GraphError, Result};
use wgraph_core::graph::{AdjacencyList, Edge, EdgeSpec, GraphOptions, MatrixGraph};

/// Literal graph description shared by the graph subcommands
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Number of nodes; nodes are numbered 0..N
    #[arg(long, short = 'n', allow_negative_numbers = true)]
    pub nodes: i64,

    /// Edge as FROM:TO[:WEIGHT] (can be specified multiple times; weight defaults to 1)
    #[arg(
        long = "edge",
        short = 'e',
        value_parser = parse_edge,
        action = clap::ArgAction::Append,
        allow_hyphen_values = true
    )]
    pub edges: Vec<EdgeSpec>,

    /// Store edges only from source to destination
    #[arg(long, conflicts_with = "undirected")]
    pub directed: bool,

    /// Mirror every edge (overrides a directed default from the config file)
    #[arg(long)]
    pub undirected: bool,

    /// Ignore supplied weights; every edge weighs 1
    #[arg(long)]
    pub unweighted: bool,
}

impl GraphArgs {
    /// Validated node count
    pub fn node_count(&self) -> Result<usize> {
        usize::try_from(self.nodes)
            .map_err(|_| GraphError::invalid_value("node count", self.nodes))
    }

    pub fn options(&self, directed_default: bool) -> GraphOptions {
        GraphOptions {
            directed: self.directed || (directed_default && !self.undirected),
            weighted: !self.unweighted,
        }
    }

    /// Edges checked against the node count
    pub fn resolve_edges(&self, node_count: usize) -> Result<Vec<Edge>> {
        self.edges
            .iter()
            .map(|spec| spec.resolve(node_count))
            .collect()
    }

    /// Build the weighted adjacency matrix described by the flags
    pub fn to_matrix(&self, directed_default: bool) -> Result<MatrixGraph> {
        let node_count = self.node_count()?;
        let edges = self.resolve_edges(node_count)?;
        MatrixGraph::new(node_count, edges, self.options(directed_default))
    }

    /// Build the adjacency list described by the flags
    pub fn to_list(&self, directed_default: bool) -> Result<AdjacencyList> {
        let node_count = self.node_count()?;
        let edges = self.resolve_edges(node_count)?;
        AdjacencyList::new(node_count, edges, self.options(directed_default))
    }
}
