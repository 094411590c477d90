//! Line-level parsing for edge-list text

use crate::error::{PhoenixError, Result};
use crate::graph::types::{Vertex, Weight, UNIT_WEIGHT};

/// One edge as written in the input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawEdge {
    pub line: usize,
    pub from: Vertex,
    pub to: Vertex,
    pub weight: Weight,
}

impl RawEdge {
    pub fn is_loop(&self) -> bool {
        self.from == self.to
    }
}

/// What a single input line turned out to be
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    Blank,
    Edge(RawEdge),
}

fn fields(text: &str) -> Vec<&str> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|f| !f.is_empty())
        .collect()
}

fn parse_vertex(field: &str, line: usize, role: &str) -> Result<Vertex> {
    field
        .parse::<Vertex>()
        .map_err(|_| PhoenixError::invalid_edge_list(line, format!("invalid {role} vertex '{field}'")))
}

fn parse_weight(field: &str, line: usize) -> Result<Weight> {
    let weight = field
        .parse::<Weight>()
        .map_err(|_| PhoenixError::invalid_edge_list(line, format!("invalid weight '{field}'")))?;
    if !weight.is_finite() {
        return Err(PhoenixError::invalid_edge_list(
            line,
            format!("weight must be finite, got '{field}'"),
        ));
    }
    Ok(weight)
}

/// True when the line's first field is not a number at all, i.e. a column
/// header. Negative or fractional ids are numbers and fail as edges instead.
pub fn looks_like_header(text: &str) -> bool {
    fields(text)
        .first()
        .is_some_and(|first| first.parse::<f64>().is_err())
}

/// Parse one line (`line` is 1-based, used for error messages)
pub fn parse_line(text: &str, line: usize) -> Result<Line> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(Line::Blank);
    }

    match fields(trimmed).as_slice() {
        [from, to] => Ok(Line::Edge(RawEdge {
            line,
            from: parse_vertex(from, line, "source")?,
            to: parse_vertex(to, line, "target")?,
            weight: UNIT_WEIGHT,
        })),
        [from, to, weight] => Ok(Line::Edge(RawEdge {
            line,
            from: parse_vertex(from, line, "source")?,
            to: parse_vertex(to, line, "target")?,
            weight: parse_weight(weight, line)?,
        })),
        other => Err(PhoenixError::invalid_edge_list(
            line,
            format!("expected 'from to [weight]', found {} fields", other.len()),
        )),
    }
}
