//! Per-source memo and whole-graph eccentricity metrics
//!
//! [`GraphMetrics`] runs one shortest-path algorithm from every vertex and
//! reduces the per-source eccentricities to a diameter (max) and a radius
//! (min). [`Pathfinder`] memoizes the tree for each source it is asked about,
//! and the all-paths DAG when every equal-cost route is wanted.

use crate::error::{PhoenixError, Result};
use crate::graph::algos::{bfs_shortest_paths, dijkstra_shortest_paths};
use crate::graph::dag::ShortestPathDag;
use crate::graph::result::ShortestPathResult;
use crate::graph::types::{Vertex, Weight};
use crate::graph::GraphProvider;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Shortest-path algorithm used to build a tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Edge count
    Bfs,
    /// Cumulative weight
    #[default]
    Dijkstra,
}

impl Algorithm {
    pub fn run(&self, provider: &dyn GraphProvider, source: Vertex) -> Result<ShortestPathResult> {
        match self {
            Algorithm::Bfs => bfs_shortest_paths(provider, source),
            Algorithm::Dijkstra => dijkstra_shortest_paths(provider, source),
        }
    }
}

impl std::str::FromStr for Algorithm {
    type Err = PhoenixError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            other => Err(PhoenixError::unsupported("algorithm", other, "bfs, dijkstra")),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Bfs => write!(f, "bfs"),
            Algorithm::Dijkstra => write!(f, "dijkstra"),
        }
    }
}

/// Lazily computed shortest-path trees over one graph, one per source
pub struct Pathfinder<'a> {
    provider: &'a dyn GraphProvider,
    algorithm: Algorithm,
    trees: HashMap<Vertex, ShortestPathResult>,
    dags: HashMap<Vertex, ShortestPathDag>,
}

impl<'a> Pathfinder<'a> {
    pub fn new(provider: &'a dyn GraphProvider, algorithm: Algorithm) -> Self {
        Self {
            provider,
            algorithm,
            trees: HashMap::new(),
            dags: HashMap::new(),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Tree rooted at `source`, computed on first request
    pub fn compute(&mut self, source: Vertex) -> Result<&ShortestPathResult> {
        tree_for(&mut self.trees, self.provider, self.algorithm, source)
    }

    /// Every shortest path out of `source`, built from its tree on first
    /// request
    pub fn dag(&mut self, source: Vertex) -> Result<&ShortestPathDag> {
        match self.dags.entry(source) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let tree = tree_for(&mut self.trees, self.provider, self.algorithm, source)?;
                Ok(entry.insert(ShortestPathDag::from_tree(self.provider, tree)?))
            }
        }
    }

    /// Already-computed tree for `source`, if any
    pub fn result(&self, source: Vertex) -> Option<&ShortestPathResult> {
        self.trees.get(&source)
    }

    pub fn has_path(&mut self, from: Vertex, to: Vertex) -> Result<bool> {
        self.compute(from)?.has_path_to(to)
    }

    pub fn path(&mut self, from: Vertex, to: Vertex) -> Result<Option<Vec<Vertex>>> {
        self.compute(from)?.path_to(to)
    }

    /// All equal-cost shortest paths, empty when `to` is unreachable
    pub fn paths(&mut self, from: Vertex, to: Vertex) -> Result<Vec<Vec<Vertex>>> {
        self.dag(from)?.paths_to(to)
    }

    pub fn distance(&mut self, from: Vertex, to: Vertex) -> Result<Weight> {
        self.compute(from)?.distance_to(to)
    }

    /// Drop every cached tree and DAG
    pub fn reset(&mut self) {
        self.trees.clear();
        self.dags.clear();
    }
}

fn tree_for<'t>(
    trees: &'t mut HashMap<Vertex, ShortestPathResult>,
    provider: &dyn GraphProvider,
    algorithm: Algorithm,
    source: Vertex,
) -> Result<&'t ShortestPathResult> {
    match trees.entry(source) {
        Entry::Occupied(entry) => Ok(entry.into_mut()),
        Entry::Vacant(entry) => Ok(entry.insert(algorithm.run(provider, source)?)),
    }
}

/// Eccentricity of every vertex plus diameter and radius
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphMetrics {
    pub algorithm: Algorithm,
    pub eccentricities: Vec<Weight>,
    pub diameter: Weight,
    pub radius: Weight,
}

impl GraphMetrics {
    /// Run `algorithm` once per source and reduce the eccentricities.
    #[tracing::instrument(skip(provider), fields(vertex_count = provider.vertex_count()))]
    pub fn compute(provider: &dyn GraphProvider, algorithm: Algorithm) -> Result<Self> {
        if provider.vertex_count() == 0 {
            return Err(PhoenixError::EmptyGraph);
        }

        let eccentricities = (0..provider.vertex_count())
            .map(|source| Ok(algorithm.run(provider, source)?.eccentricity()))
            .collect::<Result<Vec<Weight>>>()?;

        let diameter = eccentricities
            .iter()
            .copied()
            .fold(Weight::NEG_INFINITY, Weight::max);
        let radius = eccentricities
            .iter()
            .copied()
            .fold(Weight::INFINITY, Weight::min);

        tracing::debug!(diameter, radius, "graph_metrics");
        Ok(GraphMetrics {
            algorithm,
            eccentricities,
            diameter,
            radius,
        })
    }

    /// Vertices whose eccentricity equals the radius
    pub fn center(&self) -> Vec<Vertex> {
        self.eccentricities
            .iter()
            .enumerate()
            .filter(|(_, e)| **e == self.radius)
            .map(|(v, _)| v)
            .collect()
    }
}
