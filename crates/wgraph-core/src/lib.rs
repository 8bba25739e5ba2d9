//! wgraph Core Library
//!
//! Graph stores, traversals and shortest paths for the wgraph CLI.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
