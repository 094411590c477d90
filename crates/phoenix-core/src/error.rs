//! Error types and exit codes for phoenix
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (bad edge list, vertex outside the graph)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed graph input or out-of-range vertex (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during phoenix operations
#[derive(Error, Debug)]
pub enum PhoenixError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("vertex {vertex} out of range (graph has {vertex_count} vertices)")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    #[error("invalid edge list at line {line}: {reason}")]
    InvalidEdgeList { line: usize, reason: String },

    #[error("graph has no vertices")]
    EmptyGraph,

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

impl PhoenixError {
    /// Create an error for a vertex outside `[0, vertex_count)`
    pub fn vertex_out_of_range(vertex: usize, vertex_count: usize) -> Self {
        PhoenixError::VertexOutOfRange {
            vertex,
            vertex_count,
        }
    }

    /// Create an error for a malformed edge-list line (1-based)
    pub fn invalid_edge_list(line: usize, reason: impl std::fmt::Display) -> Self {
        PhoenixError::InvalidEdgeList {
            line,
            reason: reason.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        PhoenixError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        PhoenixError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            PhoenixError::UsageError(_)
            | PhoenixError::InvalidValue { .. }
            | PhoenixError::Unsupported { .. } => ExitCode::Usage,

            PhoenixError::VertexOutOfRange { .. }
            | PhoenixError::InvalidEdgeList { .. }
            | PhoenixError::EmptyGraph => ExitCode::Data,

            PhoenixError::Io(_)
            | PhoenixError::Json(_)
            | PhoenixError::Toml(_)
            | PhoenixError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            PhoenixError::UsageError(_) => "usage_error",
            PhoenixError::InvalidValue { .. } => "invalid_value",
            PhoenixError::Unsupported { .. } => "unsupported",
            PhoenixError::VertexOutOfRange { .. } => "vertex_out_of_range",
            PhoenixError::InvalidEdgeList { .. } => "invalid_edge_list",
            PhoenixError::EmptyGraph => "empty_graph",
            PhoenixError::Io(_) => "io_error",
            PhoenixError::Json(_) => "json_error",
            PhoenixError::Toml(_) => "toml_error",
            PhoenixError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        match self {
            PhoenixError::VertexOutOfRange {
                vertex,
                vertex_count,
            } => {
                error_obj["vertex"] = serde_json::json!(vertex);
                error_obj["vertex_count"] = serde_json::json!(vertex_count);
            }
            PhoenixError::InvalidEdgeList { line, .. } => {
                error_obj["line"] = serde_json::json!(line);
            }
            _ => {}
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for phoenix operations
pub type Result<T> = std::result::Result<T, PhoenixError>;
