//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `bfs`: Shortest-path tree by edge count
//! - `dijkstra`: Shortest-path tree by cumulative weight
//! - `shared`: Common utilities used by multiple algorithms

pub mod bfs;
pub mod dijkstra;
pub mod shared;

pub use bfs::bfs_shortest_paths;
pub use dijkstra::dijkstra_shortest_paths;
pub use shared::{check_source, unvisited_neighbors};
