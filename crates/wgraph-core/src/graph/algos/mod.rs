//! Graph algorithm implementations
//!
//! - `bfs`: breadth-first search with hop distances and parents
//! - `dfs`: iterative depth-first search
//! - `dijkstra`: single-source weighted shortest paths

pub mod bfs;
pub mod dfs;
pub mod dijkstra;

pub use bfs::{bfs, BfsResult};
pub use dfs::dfs;
pub use dijkstra::{
    dijkstra, dijkstra_with, shortest_path, shortest_path_with_cost, DistanceEntry, DistanceTable,
    PathResult, Strategy,
};
