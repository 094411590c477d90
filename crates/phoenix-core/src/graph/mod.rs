//! Graph representation, traversal and shortest-path operations
//!
//! Provides graph algorithms over integer-labelled vertices:
//! - BFS shortest-path trees by edge count
//! - Dijkstra shortest-path trees by cumulative weight
//! - DFS/BFS reachability, component size and connectivity
//! - Eccentricity, diameter and radius across all sources
//! - Every equal-cost shortest path, and edge betweenness built on them
//! - Graph provider trait for pluggable adjacency sources

pub mod algos;
pub mod betweenness;
pub mod dag;
pub mod digraph;
pub mod metrics;
pub mod result;
pub mod search;
pub mod traversal;
pub mod types;

#[cfg(test)]
pub(crate) mod fixtures;

pub use algos::{bfs_shortest_paths, dijkstra_shortest_paths};
pub use betweenness::{EdgeBetweenness, EdgeScore};
pub use dag::ShortestPathDag;
pub use digraph::Graph;
pub use metrics::{Algorithm, GraphMetrics, Pathfinder};
pub use result::{ShortestPathResult, UNREACHABLE};
pub use search::{bfs, cc, dfs, is_connected};
pub use traversal::GraphProvider;
pub use types::{Edge, GraphKind, Metric, Vertex, Weight, UNIT_WEIGHT};
