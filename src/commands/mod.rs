//! Subcommand implementations for wgraph

pub mod demo;
pub mod dispatch;
pub mod distances;
pub mod path;
pub mod show;
pub mod traverse;
