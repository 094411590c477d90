use phoenix_core::graph::{Algorithm, GraphKind};

/// Parse graph kind from string
pub fn parse_graph_kind(s: &str) -> std::result::Result<GraphKind, String> {
    s.parse::<GraphKind>().map_err(|e| e.to_string())
}

/// Parse shortest-path algorithm from string
pub fn parse_algorithm(s: &str) -> std::result::Result<Algorithm, String> {
    s.parse::<Algorithm>().map_err(|e| e.to_string())
}
