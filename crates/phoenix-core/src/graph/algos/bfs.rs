use crate::error::Result;
use crate::graph::algos::shared::{check_source, unvisited_neighbors};
use crate::graph::result::ShortestPathResult;
use crate::graph::types::Vertex;
use crate::graph::GraphProvider;
use crate::trace_time;
use std::collections::VecDeque;
use std::time::Instant;

/// State tracked while growing the BFS tree
struct BfsState {
    visited: Vec<bool>,
    predecessor: Vec<Option<Vertex>>,
    queue: VecDeque<Vertex>,
}

impl BfsState {
    fn new(vertex_count: usize, source: Vertex) -> Self {
        let mut visited = vec![false; vertex_count];
        visited[source] = true;
        Self {
            visited,
            predecessor: vec![None; vertex_count],
            queue: VecDeque::from([source]),
        }
    }
}

/// Build the shortest-path tree by edge count from `source`.
///
/// Vertices are marked when enqueued, so each enters the queue once. The
/// unvisited neighbours of a dequeued vertex are enqueued in ascending id
/// order, which makes the tree shape reproducible.
#[tracing::instrument(skip(provider), fields(vertex_count = provider.vertex_count()))]
pub fn bfs_shortest_paths(
    provider: &dyn GraphProvider,
    source: Vertex,
) -> Result<ShortestPathResult> {
    let start = Instant::now();
    check_source(provider, source)?;

    let mut state = BfsState::new(provider.vertex_count(), source);

    while let Some(current) = state.queue.pop_front() {
        for next in unvisited_neighbors(provider, current, &state.visited)? {
            state.predecessor[next] = Some(current);
            state.visited[next] = true;
            state.queue.push_back(next);
        }
    }

    let result = ShortestPathResult::hop_tree(source, state.visited, state.predecessor);
    tracing::debug!(reached = result.reached_count(), "bfs_tree_built");
    trace_time!(start, "bfs_shortest_paths", source = source);
    Ok(result)
}
