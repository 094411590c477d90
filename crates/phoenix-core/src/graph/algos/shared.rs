use crate::ensure_vertex;
use crate::error::Result;
use crate::graph::types::Vertex;
use crate::graph::GraphProvider;
use std::collections::BTreeSet;

/// Reject a start vertex outside the graph
pub fn check_source(provider: &dyn GraphProvider, source: Vertex) -> Result<()> {
    ensure_vertex!(source, provider.vertex_count());
    Ok(())
}

/// Collect the not-yet-visited out-neighbours of `vertex`, ordered by id.
///
/// Parallel edges collapse to one entry. Callers mark the whole batch
/// visited before queueing it, which fixes the tie-break among vertices
/// discovered from the same parent.
pub fn unvisited_neighbors(
    provider: &dyn GraphProvider,
    vertex: Vertex,
    visited: &[bool],
) -> Result<BTreeSet<Vertex>> {
    Ok(provider
        .neighbors(vertex)?
        .iter()
        .map(|edge| edge.to())
        .filter(|to| !visited[*to])
        .collect())
}
