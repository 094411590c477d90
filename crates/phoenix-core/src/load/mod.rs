//! Build a [`Graph`] from edge-list text
//!
//! One edge per line, `from to [weight]`, separated by commas and/or
//! whitespace. Blank lines and `#` comments are ignored, and a leading
//! column header is skipped. Self-loops are dropped unless `allow_loops`.
//!
//! Vertex counts, declared or inferred, are capped at [`MAX_VERTICES`] so a
//! stray huge id fails with an error instead of an enormous allocation.

mod parse;

use std::fs;
use std::path::Path;

use crate::config::GraphConfig;
use crate::error::{PhoenixError, Result};
use crate::graph::{Graph, GraphKind};
use parse::{looks_like_header, parse_line, Line, RawEdge};

/// Largest vertex count a loaded graph may have
pub const MAX_VERTICES: usize = 1 << 24;

/// How edge-list input becomes a graph
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadOptions {
    /// Insertion policy of the resulting graph
    pub kind: GraphKind,
    /// Keep `v -> v` edges
    pub allow_loops: bool,
    /// Declared vertex count; `None` means `max id + 1`
    pub vertex_count: Option<usize>,
}

impl From<&GraphConfig> for LoadOptions {
    fn from(config: &GraphConfig) -> Self {
        LoadOptions {
            kind: config.kind,
            allow_loops: config.allow_loops,
            vertex_count: config.vertices,
        }
    }
}

/// Parse edge-list text into a graph
#[tracing::instrument(skip(text), fields(bytes = text.len()))]
pub fn parse_edge_list(text: &str, opts: &LoadOptions) -> Result<Graph> {
    let mut edges: Vec<RawEdge> = Vec::new();
    let mut loops_dropped = 0usize;
    let mut seen_content = false;

    for (index, raw_line) in text.lines().enumerate() {
        let line = index + 1;

        if !seen_content && !raw_line.trim().is_empty() && !raw_line.trim().starts_with('#') {
            seen_content = true;
            if looks_like_header(raw_line) {
                tracing::debug!(line, "skipping header");
                continue;
            }
        }

        let Line::Edge(edge) = parse_line(raw_line, line)? else {
            continue;
        };

        if edge.is_loop() && !opts.allow_loops {
            tracing::debug!(line = edge.line, vertex = edge.from, "dropping self-loop");
            loops_dropped += 1;
            continue;
        }
        edges.push(edge);
    }

    let vertex_count = match opts.vertex_count {
        Some(declared) => check_vertex_count(declared)?,
        None => infer_vertex_count(&edges)?,
    };

    let mut graph = Graph::new(vertex_count, opts.kind);
    for edge in &edges {
        graph.add_edge(edge.from, edge.to, edge.weight)?;
    }

    tracing::debug!(
        vertex_count,
        edges = edges.len(),
        loops_dropped,
        kind = %opts.kind,
        "edge_list_loaded"
    );
    Ok(graph)
}

fn check_vertex_count(count: usize) -> Result<usize> {
    if count > MAX_VERTICES {
        return Err(PhoenixError::invalid_value(
            "vertex count",
            format!("{count} exceeds the limit of {MAX_VERTICES}"),
        ));
    }
    Ok(count)
}

/// `max id + 1` over the kept edges, rejecting the first edge that pushes
/// the count past [`MAX_VERTICES`]
fn infer_vertex_count(edges: &[RawEdge]) -> Result<usize> {
    let mut count = 0;
    for edge in edges {
        let needed = edge
            .from
            .max(edge.to)
            .checked_add(1)
            .filter(|n| *n <= MAX_VERTICES)
            .ok_or_else(|| {
                PhoenixError::invalid_edge_list(
                    edge.line,
                    format!(
                        "vertex id {} exceeds the limit of {} vertices",
                        edge.from.max(edge.to),
                        MAX_VERTICES
                    ),
                )
            })?;
        count = count.max(needed);
    }
    Ok(count)
}

/// Read and parse an edge-list file
pub fn load_graph(path: &Path, opts: &LoadOptions) -> Result<Graph> {
    let text = fs::read_to_string(path).map_err(|e| {
        PhoenixError::Other(format!("failed to read {}: {}", path.display(), e))
    })?;
    parse_edge_list(&text, opts)
}
