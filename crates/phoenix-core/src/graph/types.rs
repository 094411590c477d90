use crate::error::PhoenixError;
use serde::{Deserialize, Serialize};

/// Vertex identifier in `[0, vertex_count)`
pub type Vertex = usize;

/// Edge weight. Finite; negative values are stored but void Dijkstra's guarantee.
pub type Weight = f64;

/// Weight assigned to every edge of an unweighted graph
pub const UNIT_WEIGHT: Weight = 1.0;

/// A directed, weighted edge owned by the adjacency list of `from`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    from: Vertex,
    to: Vertex,
    weight: Weight,
}

impl Edge {
    pub fn new(from: Vertex, to: Vertex, weight: Weight) -> Self {
        Edge { from, to, weight }
    }

    pub fn from(&self) -> Vertex {
        self.from
    }

    pub fn to(&self) -> Vertex {
        self.to
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// The same edge pointing the other way
    pub fn reversed(&self) -> Self {
        Edge::new(self.to, self.from, self.weight)
    }
}

/// Edge-insertion policy chosen when a graph is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GraphKind {
    /// Edges kept as given
    #[default]
    DirectedWeighted,
    /// Weight forced to 1
    DirectedUnweighted,
    /// Reverse edge inserted with the same weight
    UndirectedWeighted,
    /// Both directions, weight 1
    UndirectedUnweighted,
}

pub const GRAPH_KINDS: &str =
    "directed-weighted, directed-unweighted, undirected-weighted, undirected-unweighted";

impl GraphKind {
    pub fn is_weighted(&self) -> bool {
        matches!(
            self,
            GraphKind::DirectedWeighted | GraphKind::UndirectedWeighted
        )
    }

    pub fn is_directed(&self) -> bool {
        matches!(
            self,
            GraphKind::DirectedWeighted | GraphKind::DirectedUnweighted
        )
    }
}

impl std::str::FromStr for GraphKind {
    type Err = PhoenixError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "directed-weighted" | "wd" => Ok(GraphKind::DirectedWeighted),
            "directed-unweighted" | "directed" => Ok(GraphKind::DirectedUnweighted),
            "undirected-weighted" => Ok(GraphKind::UndirectedWeighted),
            "undirected-unweighted" | "simple" => Ok(GraphKind::UndirectedUnweighted),
            other => Err(PhoenixError::unsupported("graph kind", other, GRAPH_KINDS)),
        }
    }
}

impl std::fmt::Display for GraphKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphKind::DirectedWeighted => write!(f, "directed-weighted"),
            GraphKind::DirectedUnweighted => write!(f, "directed-unweighted"),
            GraphKind::UndirectedWeighted => write!(f, "undirected-weighted"),
            GraphKind::UndirectedUnweighted => write!(f, "undirected-unweighted"),
        }
    }
}

/// What a stored distance counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Number of edges on the path
    Hops,
    /// Cumulative edge weight
    Weight,
}
