//! Configuration type definitions

use crate::graph::{Algorithm, GraphKind};
use serde::{Deserialize, Serialize};

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhoenixConfig {
    /// Graph loading and analysis defaults
    #[serde(default)]
    pub graph: GraphConfig,
}

/// Defaults applied when a command does not override them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Insertion policy for loaded graphs
    #[serde(default)]
    pub kind: GraphKind,

    /// Keep self-loops from edge-list input
    #[serde(default)]
    pub allow_loops: bool,

    /// Shortest-path algorithm for `paths` and `metrics`
    #[serde(default)]
    pub algorithm: Algorithm,

    /// Declared vertex count (optional; otherwise inferred from the edges)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertices: Option<usize>,
}
