//! Shortest-path tree shared by the BFS and Dijkstra builders
//!
//! A [`ShortestPathResult`] is produced by exactly one algorithm run from one
//! source vertex and is immutable afterwards. It answers per-vertex distance,
//! reachability and path queries, plus the eccentricity of its source.

mod path;

use crate::ensure_vertex;
use crate::error::Result;
use crate::graph::types::{Metric, Vertex, Weight};
use serde::Serialize;

/// Distance stored for a vertex a hop-count tree never reached
pub const UNREACHABLE: Weight = -1.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPathResult {
    source: Vertex,
    metric: Metric,
    visited: Vec<bool>,
    predecessor: Vec<Option<Vertex>>,
    distance: Vec<Weight>,
    edge_distance: Vec<Option<usize>>,
}

impl ShortestPathResult {
    /// Build a hop-count tree. Distances are derived from the predecessor
    /// links; unreached vertices get [`UNREACHABLE`].
    pub(crate) fn hop_tree(
        source: Vertex,
        visited: Vec<bool>,
        predecessor: Vec<Option<Vertex>>,
    ) -> Self {
        let edge_distance = path::edge_distances(source, &predecessor);
        let distance = edge_distance
            .iter()
            .map(|hops| hops.map_or(UNREACHABLE, |h| h as Weight))
            .collect();

        ShortestPathResult {
            source,
            metric: Metric::Hops,
            visited,
            predecessor,
            distance,
            edge_distance,
        }
    }

    /// Build a cumulative-weight tree. Unreached vertices keep `+inf`.
    pub(crate) fn weighted_tree(
        source: Vertex,
        visited: Vec<bool>,
        predecessor: Vec<Option<Vertex>>,
        distance: Vec<Weight>,
    ) -> Self {
        let edge_distance = path::edge_distances(source, &predecessor);

        ShortestPathResult {
            source,
            metric: Metric::Weight,
            visited,
            predecessor,
            distance,
            edge_distance,
        }
    }

    pub fn source(&self) -> Vertex {
        self.source
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn vertex_count(&self) -> usize {
        self.distance.len()
    }

    /// Stored distance for every vertex, indexed by vertex id
    pub fn distances(&self) -> &[Weight] {
        &self.distance
    }

    /// Cost from the source: hops for BFS trees, weight for Dijkstra trees
    pub fn distance_to(&self, v: Vertex) -> Result<Weight> {
        ensure_vertex!(v, self.vertex_count());
        Ok(self.distance[v])
    }

    /// Number of edges on the tree path, `None` when `v` was not reached
    pub fn edge_distance_to(&self, v: Vertex) -> Result<Option<usize>> {
        ensure_vertex!(v, self.vertex_count());
        Ok(self.edge_distance[v])
    }

    pub fn has_path_to(&self, v: Vertex) -> Result<bool> {
        Ok(self.edge_distance_to(v)?.is_some())
    }

    pub fn is_visited(&self, v: Vertex) -> Result<bool> {
        ensure_vertex!(v, self.vertex_count());
        Ok(self.visited[v])
    }

    /// Tree parent of `v`; `None` for the source and unreached vertices
    pub fn predecessor(&self, v: Vertex) -> Result<Option<Vertex>> {
        ensure_vertex!(v, self.vertex_count());
        Ok(self.predecessor[v])
    }

    /// Vertices from the source to `v` inclusive, `None` if `v` is unreachable
    pub fn path_to(&self, v: Vertex) -> Result<Option<Vec<Vertex>>> {
        ensure_vertex!(v, self.vertex_count());
        Ok(path::walk_to_source(self.source, &self.predecessor, v).map(|mut chain| {
            chain.reverse();
            chain
        }))
    }

    /// False iff any stored distance is negative.
    ///
    /// On a Dijkstra tree a negative distance means a negative edge was
    /// relaxed and the optimality guarantee no longer holds. The check is
    /// sufficient, not complete. Hop-count trees report `false` whenever a
    /// vertex is unreachable, since [`UNREACHABLE`] is negative.
    pub fn verify_non_negative(&self) -> bool {
        self.distance.iter().all(|d| *d >= 0.0)
    }

    /// Largest stored distance from the source
    pub fn eccentricity(&self) -> Weight {
        self.distance
            .iter()
            .copied()
            .fold(Weight::NEG_INFINITY, Weight::max)
    }

    /// Number of vertices reached from the source, the source included
    pub fn reached_count(&self) -> usize {
        self.visited.iter().filter(|v| **v).count()
    }
}
