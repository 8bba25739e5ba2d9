//! Graph stores and algorithms
//!
//! Provides:
//! - `MatrixGraph`: dense adjacency matrix with weighted, directed or undirected edges
//! - `AdjacencyList`: per-node neighbour lists
//! - BFS, DFS and Dijkstra over those stores

pub mod algos;
pub mod list;
pub mod matrix;
pub mod traversal;
pub mod types;

pub use algos::{
    bfs, dfs, dijkstra, dijkstra_with, shortest_path, shortest_path_with_cost, BfsResult,
    DistanceEntry, DistanceTable, PathResult, Strategy,
};
pub use list::AdjacencyList;
pub use matrix::MatrixGraph;
pub use traversal::Neighbors;
pub use types::{node_from_signed, Edge, EdgeSpec, GraphOptions, NodeId, Weight};
