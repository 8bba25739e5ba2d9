//! CLI argument parsing for wgraph
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::GraphArgs;
use parse::{parse_format, parse_strategy};
use wgraph_core::format::OutputFormat;
use wgraph_core::graph::Strategy;

/// wgraph - weighted graphs, traversals and shortest paths
#[derive(Parser, Debug)]
#[command(name = "wgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human or json (default from config, else human)
    #[arg(long, global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, wgraph_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Path to a config file (default: $WGRAPH_CONFIG_DIR/config.toml)
    #[arg(long, global = true, env = "WGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the graph as an adjacency matrix or list
    Show {
        #[command(flatten)]
        graph: GraphArgs,

        /// Print an adjacency list instead of the matrix
        #[arg(long)]
        list: bool,
    },

    /// Find the shortest path between two nodes
    Path {
        #[command(flatten)]
        graph: GraphArgs,

        /// Start node
        #[arg(allow_negative_numbers = true)]
        source: i64,

        /// Destination node
        #[arg(allow_negative_numbers = true)]
        target: i64,

        /// Node selection strategy: dense or heap
        #[arg(long, default_value = "dense", value_parser = parse_strategy)]
        strategy: Strategy,
    },

    /// Print shortest distances from one node to every node
    Distances {
        #[command(flatten)]
        graph: GraphArgs,

        /// Start node
        #[arg(allow_negative_numbers = true)]
        source: i64,

        /// Node selection strategy: dense or heap
        #[arg(long, default_value = "dense", value_parser = parse_strategy)]
        strategy: Strategy,
    },

    /// Breadth-first search from a root node
    Bfs {
        #[command(flatten)]
        graph: GraphArgs,

        /// Root node
        #[arg(allow_negative_numbers = true)]
        root: i64,
    },

    /// Depth-first search from a root node
    Dfs {
        #[command(flatten)]
        graph: GraphArgs,

        /// Root node
        #[arg(allow_negative_numbers = true)]
        root: i64,
    },

    /// Run the built-in example graphs
    Demo,
}
