use crate::error::Result;
use crate::graph::digraph::Graph;
use crate::graph::types::{Edge, Vertex};

/// Trait for providing graph adjacency to the algorithms
///
/// Every edge returned by `neighbors` must have its target inside
/// `[0, vertex_count())`.
pub trait GraphProvider {
    fn vertex_count(&self) -> usize;
    /// Outgoing edges of `vertex`, in insertion order
    fn neighbors(&self, vertex: Vertex) -> Result<Vec<Edge>>;
}

impl GraphProvider for Graph {
    fn vertex_count(&self) -> usize {
        Graph::vertex_count(self)
    }

    fn neighbors(&self, vertex: Vertex) -> Result<Vec<Edge>> {
        Graph::neighbors(self, vertex)
    }
}
