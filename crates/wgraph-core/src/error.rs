//! Error types and exit codes for wgraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (node outside the graph, unusable weight)

mod macros;

use thiserror::Error;

/// Exit codes reported by the `wgraph` binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid node or weight (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graph operations
#[derive(Error, Debug)]
pub enum GraphError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    /// A node argument fell outside `[0, node_count)`.
    ///
    /// `node` is signed so that negative ids coming from the command line
    /// can be reported as they were written.
    #[error("invalid node {node}: graph has {node_count} nodes (valid range 0..{node_count})")]
    InvalidNode { node: i64, node_count: usize },

    #[error("invalid edge weight {weight}: weights must be finite")]
    InvalidWeight { weight: f64 },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for a node id outside the graph
    pub fn invalid_node(node: usize, node_count: usize) -> Self {
        GraphError::InvalidNode {
            node: i64::try_from(node).unwrap_or(i64::MAX),
            node_count,
        }
    }

    /// Create an error for an invalid value or argument
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UnknownFormat(_)
            | GraphError::UsageError(_)
            | GraphError::InvalidValue { .. } => ExitCode::Usage,

            GraphError::InvalidNode { .. } | GraphError::InvalidWeight { .. } => ExitCode::Data,

            GraphError::Io(_) | GraphError::Json(_) | GraphError::Toml(_) | GraphError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UsageError(_) => "usage_error",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::InvalidNode { .. } => "invalid_node",
            GraphError::InvalidWeight { .. } => "invalid_weight",
            GraphError::Io(_) => "io_error",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        if let GraphError::InvalidNode { node, node_count } = self {
            error_obj["node"] = serde_json::json!(node);
            error_obj["node_count"] = serde_json::json!(node_count);
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for wgraph operations
pub type Result<T> = std::result::Result<T, GraphError>;
