//! Adjacency-list graph with a fixed vertex count

use crate::ensure_vertex;
use crate::error::{PhoenixError, Result};
use crate::graph::types::{Edge, GraphKind, Vertex, Weight, UNIT_WEIGHT};

/// Directed, weighted graph over vertices `0..vertex_count`.
///
/// The vertex count is fixed at construction and edges are only ever
/// appended. `kind` decides how [`Graph::add_edge`] stores an edge: weight
/// forced to 1 for unweighted kinds, reverse edge added for undirected kinds.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    kind: GraphKind,
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    pub fn new(vertex_count: usize, kind: GraphKind) -> Self {
        Graph {
            kind,
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    pub fn directed_weighted(vertex_count: usize) -> Self {
        Self::new(vertex_count, GraphKind::DirectedWeighted)
    }

    pub fn directed_unweighted(vertex_count: usize) -> Self {
        Self::new(vertex_count, GraphKind::DirectedUnweighted)
    }

    pub fn undirected_weighted(vertex_count: usize) -> Self {
        Self::new(vertex_count, GraphKind::UndirectedWeighted)
    }

    pub fn undirected_unweighted(vertex_count: usize) -> Self {
        Self::new(vertex_count, GraphKind::UndirectedUnweighted)
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of stored directed edges (undirected insertions count twice)
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Insert an edge according to the graph's kind.
    ///
    /// Both endpoints and the weight are checked before anything is stored,
    /// so a rejected call leaves the adjacency lists untouched. NaN and
    /// infinite weights are rejected even for unweighted kinds.
    pub fn add_edge(&mut self, from: Vertex, to: Vertex, weight: Weight) -> Result<()> {
        let count = self.vertex_count();
        ensure_vertex!(from, count);
        ensure_vertex!(to, count);
        if !weight.is_finite() {
            return Err(PhoenixError::invalid_value("edge weight", weight));
        }

        let weight = if self.kind.is_weighted() {
            weight
        } else {
            UNIT_WEIGHT
        };
        let edge = Edge::new(from, to, weight);

        self.adjacency[from].push(edge);
        if !self.kind.is_directed() {
            self.adjacency[to].push(edge.reversed());
        }
        Ok(())
    }

    /// Insert an edge of weight 1
    pub fn add_unit_edge(&mut self, from: Vertex, to: Vertex) -> Result<()> {
        self.add_edge(from, to, UNIT_WEIGHT)
    }

    /// Snapshot of the outgoing edges of `vertex`, in insertion order
    pub fn neighbors(&self, vertex: Vertex) -> Result<Vec<Edge>> {
        ensure_vertex!(vertex, self.vertex_count());
        Ok(self.adjacency[vertex].clone())
    }

    /// Every stored edge, grouped by source vertex
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.adjacency.iter().flatten()
    }
}
