//! Predecessor-chain walks over a shortest-path tree

use crate::graph::types::Vertex;

/// Walk predecessor links from `v` back to `source`.
///
/// Returns the chain `v, pred(v), ..., source`, or `None` when the chain
/// breaks off or revisits a vertex. Each vertex is marked on the way so a
/// malformed tree ends the walk instead of looping.
pub fn walk_to_source(
    source: Vertex,
    predecessor: &[Option<Vertex>],
    v: Vertex,
) -> Option<Vec<Vertex>> {
    let mut explored = vec![false; predecessor.len()];
    let mut chain = vec![v];
    let mut current = v;

    while current != source {
        if explored[current] {
            return None;
        }
        explored[current] = true;
        current = predecessor[current]?;
        chain.push(current);
    }

    Some(chain)
}

/// Edge count of every vertex's tree path, recomputed from the links
pub fn edge_distances(source: Vertex, predecessor: &[Option<Vertex>]) -> Vec<Option<usize>> {
    (0..predecessor.len())
        .map(|v| walk_to_source(source, predecessor, v).map(|chain| chain.len() - 1))
        .collect()
}
