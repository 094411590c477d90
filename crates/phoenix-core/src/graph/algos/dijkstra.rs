use crate::error::Result;
use crate::graph::algos::shared::check_source;
use crate::graph::result::ShortestPathResult;
use crate::graph::types::{Vertex, Weight};
use crate::graph::GraphProvider;
use crate::trace_time;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Instant;

/// Wrapper for BinaryHeap to use as min-heap (ordered by tentative distance).
///
/// Equal distances fall back to the vertex id, so among tied entries the
/// smallest id is extracted first.
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry {
    pub vertex: Vertex,
    pub distance: Weight,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// State tracked during Dijkstra traversal
struct DijkstraState {
    visited: Vec<bool>,
    predecessor: Vec<Option<Vertex>>,
    distance: Vec<Weight>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
    relaxations: usize,
}

impl DijkstraState {
    fn new(vertex_count: usize, source: Vertex) -> Self {
        let mut distance = vec![Weight::INFINITY; vertex_count];
        distance[source] = 0.0;
        let mut heap = BinaryHeap::new();
        heap.push(Reverse(HeapEntry {
            vertex: source,
            distance: 0.0,
        }));
        Self {
            visited: vec![false; vertex_count],
            predecessor: vec![None; vertex_count],
            distance,
            heap,
            relaxations: 0,
        }
    }

    /// Improve the tentative distance of `to` through `from`, queueing a
    /// fresh heap entry on success. The old entry stays in the heap and is
    /// skipped when popped.
    fn relax(&mut self, from: Vertex, to: Vertex, weight: Weight) {
        let candidate = self.distance[from] + weight;
        if candidate < self.distance[to] {
            self.distance[to] = candidate;
            self.predecessor[to] = Some(from);
            self.heap.push(Reverse(HeapEntry {
                vertex: to,
                distance: candidate,
            }));
            self.relaxations += 1;
        }
    }
}

/// Build the shortest-path tree by cumulative edge weight from `source`.
///
/// Assumes every edge reachable from `source` has a non-negative weight.
/// Negative edges are not rejected; the result may then be suboptimal, which
/// [`ShortestPathResult::verify_non_negative`] can flag afterwards.
#[tracing::instrument(skip(provider), fields(vertex_count = provider.vertex_count()))]
pub fn dijkstra_shortest_paths(
    provider: &dyn GraphProvider,
    source: Vertex,
) -> Result<ShortestPathResult> {
    let start = Instant::now();
    check_source(provider, source)?;

    let mut state = DijkstraState::new(provider.vertex_count(), source);

    while let Some(Reverse(HeapEntry { vertex: current, .. })) = state.heap.pop() {
        if state.visited[current] {
            continue;
        }
        state.visited[current] = true;

        for edge in provider.neighbors(current)? {
            if !state.visited[edge.to()] {
                state.relax(current, edge.to(), edge.weight());
            }
        }
    }

    tracing::debug!(
        reached = state.visited.iter().filter(|v| **v).count(),
        relaxations = state.relaxations,
        "dijkstra_tree_built"
    );
    trace_time!(start, "dijkstra_shortest_paths", source = source);

    Ok(ShortestPathResult::weighted_tree(
        source,
        state.visited,
        state.predecessor,
        state.distance,
    ))
}
