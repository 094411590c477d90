//! Reachability traversals: visitation order, component size, connectivity

use crate::error::Result;
use crate::graph::algos::{check_source, unvisited_neighbors};
use crate::graph::types::Vertex;
use crate::graph::GraphProvider;
use std::collections::VecDeque;

/// Depth-first visitation order from `start`.
///
/// Each batch of newly discovered neighbours is marked visited together and
/// pushed in descending id order, so the smallest id is explored first.
#[tracing::instrument(skip(provider))]
pub fn dfs(provider: &dyn GraphProvider, start: Vertex) -> Result<Vec<Vertex>> {
    check_source(provider, start)?;

    let mut visited = vec![false; provider.vertex_count()];
    visited[start] = true;
    let mut explored = Vec::new();
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        explored.push(current);
        let batch = unvisited_neighbors(provider, current, &visited)?;
        for next in batch.into_iter().rev() {
            visited[next] = true;
            stack.push(next);
        }
    }

    tracing::debug!(explored = explored.len(), "dfs_complete");
    Ok(explored)
}

/// Breadth-first visitation order from `start`, ascending id within a batch
#[tracing::instrument(skip(provider))]
pub fn bfs(provider: &dyn GraphProvider, start: Vertex) -> Result<Vec<Vertex>> {
    check_source(provider, start)?;

    let mut visited = vec![false; provider.vertex_count()];
    visited[start] = true;
    let mut explored = Vec::new();
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        explored.push(current);
        for next in unvisited_neighbors(provider, current, &visited)? {
            visited[next] = true;
            queue.push_back(next);
        }
    }

    tracing::debug!(explored = explored.len(), "bfs_complete");
    Ok(explored)
}

/// Number of vertices reachable from `start`, `start` included
pub fn cc(provider: &dyn GraphProvider, start: Vertex) -> Result<usize> {
    Ok(dfs(provider, start)?.len())
}

/// True iff every vertex is reachable from `start`
pub fn is_connected(provider: &dyn GraphProvider, start: Vertex) -> Result<bool> {
    Ok(cc(provider, start)? == provider.vertex_count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::fixtures::ring_with_chord;
    use crate::graph::Graph;

    fn diamond() -> Graph {
        let mut graph = Graph::directed_unweighted(4);
        graph.add_unit_edge(0, 2).unwrap();
        graph.add_unit_edge(0, 1).unwrap();
        graph.add_unit_edge(1, 3).unwrap();
        graph.add_unit_edge(2, 3).unwrap();
        graph
    }

    #[test]
    fn test_dfs_explores_ascending_first() {
        assert_eq!(dfs(&diamond(), 0).unwrap(), vec![0, 1, 3, 2]);
    }

    #[test]
    fn test_bfs_ascending_within_tier() {
        assert_eq!(bfs(&diamond(), 0).unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_ring_with_chord_from_five() {
        let graph = ring_with_chord();
        assert_eq!(dfs(&graph, 5).unwrap(), vec![5, 2, 3, 7, 6, 4, 0, 1]);
        assert_eq!(bfs(&graph, 5).unwrap(), vec![5, 2, 4, 3, 0, 7, 1, 6]);
        assert_eq!(cc(&graph, 5).unwrap(), 8);
        assert!(is_connected(&graph, 5).unwrap());
    }

    #[test]
    fn test_each_vertex_once() {
        let graph = ring_with_chord();
        for start in 0..graph.vertex_count() {
            let mut order = bfs(&graph, start).unwrap();
            order.sort_unstable();
            order.dedup();
            assert_eq!(order.len(), graph.vertex_count());
        }
    }

    #[test]
    fn test_partial_reachability() {
        let mut graph = Graph::directed_unweighted(5);
        graph.add_unit_edge(0, 1).unwrap();
        graph.add_unit_edge(1, 2).unwrap();
        graph.add_unit_edge(3, 4).unwrap();

        assert_eq!(dfs(&graph, 0).unwrap(), vec![0, 1, 2]);
        assert_eq!(cc(&graph, 0).unwrap(), 3);
        assert!(!is_connected(&graph, 0).unwrap());
        assert_eq!(cc(&graph, 4).unwrap(), 1);
    }

    #[test]
    fn test_connectivity_matches_component_size() {
        let mut graph = Graph::undirected_unweighted(4);
        graph.add_unit_edge(0, 1).unwrap();
        graph.add_unit_edge(2, 3).unwrap();
        for start in 0..4 {
            assert_eq!(
                is_connected(&graph, start).unwrap(),
                cc(&graph, start).unwrap() == graph.vertex_count()
            );
        }

        graph.add_unit_edge(1, 2).unwrap();
        for start in 0..4 {
            assert!(is_connected(&graph, start).unwrap());
        }
    }

    #[test]
    fn test_self_loops_and_parallel_edges() {
        let mut graph = Graph::directed_unweighted(2);
        graph.add_unit_edge(0, 0).unwrap();
        graph.add_unit_edge(0, 1).unwrap();
        graph.add_unit_edge(0, 1).unwrap();
        assert_eq!(dfs(&graph, 0).unwrap(), vec![0, 1]);
        assert_eq!(bfs(&graph, 0).unwrap(), vec![0, 1]);
    }

    #[test]
    fn test_start_out_of_range() {
        let graph = diamond();
        assert!(dfs(&graph, 4).is_err());
        assert!(bfs(&graph, 4).is_err());
        assert!(cc(&graph, 9).is_err());
        assert!(is_connected(&graph, 9).is_err());
    }
}
