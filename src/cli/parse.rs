use wgraph_core::format::OutputFormat;
use wgraph_core::graph::{EdgeSpec, Strategy};

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse an edge written as `FROM:TO[:WEIGHT]`
pub fn parse_edge(s: &str) -> std::result::Result<EdgeSpec, String> {
    s.parse::<EdgeSpec>().map_err(|e| e.to_string())
}

/// Parse shortest-path strategy from string
pub fn parse_strategy(s: &str) -> std::result::Result<Strategy, String> {
    s.parse::<Strategy>().map_err(|e| e.to_string())
}
