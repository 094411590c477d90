//! Graphs shared by the algorithm tests

use crate::graph::Graph;

/// Eight vertices, nine unweighted directed edges: the ring
/// 5-4-0-1-2-3-7-6-5 plus a chord 5-2. Every vertex is reachable from 5.
pub fn ring_with_chord() -> Graph {
    let mut graph = Graph::directed_unweighted(8);
    for (from, to) in [
        (5, 4),
        (4, 0),
        (0, 1),
        (1, 2),
        (2, 3),
        (3, 7),
        (7, 6),
        (6, 5),
        (5, 2),
    ] {
        graph.add_unit_edge(from, to).unwrap();
    }
    graph
}

/// Six-vertex weighted digraph whose Dijkstra distances from 0 are
/// `[0, 4, 3, 6, 8, 14]`
pub fn weighted_six() -> Graph {
    let mut graph = Graph::directed_weighted(6);
    for (from, to, weight) in [
        (0, 1, 4.0),
        (0, 2, 3.0),
        (1, 2, 1.0),
        (1, 3, 2.0),
        (2, 3, 4.0),
        (3, 4, 2.0),
        (4, 5, 6.0),
    ] {
        graph.add_edge(from, to, weight).unwrap();
    }
    graph
}

/// Unweighted digraph with two equal routes from 0 to 3: `0-1-3` and `0-2-3`
pub fn diamond() -> Graph {
    let mut graph = Graph::directed_unweighted(4);
    for (from, to) in [(0, 1), (0, 2), (1, 3), (2, 3)] {
        graph.add_unit_edge(from, to).unwrap();
    }
    graph
}
