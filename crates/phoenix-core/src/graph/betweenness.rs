//! Edge betweenness over all ordered vertex pairs
//!
//! For every source `s` and every other vertex `t` reachable from it, one
//! unit of flow is split evenly across the shortest `s -> t` paths and each
//! edge on them is credited its share. Accumulation follows Brandes: path
//! counts forward in topological order, dependencies backward.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{PhoenixError, Result};
use crate::graph::dag::ShortestPathDag;
use crate::graph::metrics::Algorithm;
use crate::graph::types::Vertex;
use crate::graph::GraphProvider;

/// Score of one stored edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgeScore {
    pub from: Vertex,
    pub to: Vertex,
    pub score: f64,
}

/// Betweenness of every stored edge, keyed by `(from, to)`
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeBetweenness {
    algorithm: Algorithm,
    scores: BTreeMap<(Vertex, Vertex), f64>,
}

impl EdgeBetweenness {
    /// Score every edge of `provider`. Edges on no shortest path score 0.
    ///
    /// Fails with `EmptyGraph` on zero vertices, and when a source's
    /// shortest paths contain a zero-weight cycle.
    #[tracing::instrument(skip(provider), fields(vertex_count = provider.vertex_count()))]
    pub fn compute(provider: &dyn GraphProvider, algorithm: Algorithm) -> Result<Self> {
        let count = provider.vertex_count();
        if count == 0 {
            return Err(PhoenixError::EmptyGraph);
        }

        let mut scores = BTreeMap::new();
        for from in 0..count {
            for edge in provider.neighbors(from)? {
                scores.insert((from, edge.to()), 0.0);
            }
        }

        let mut sigma = vec![0.0f64; count];
        let mut delta = vec![0.0f64; count];
        for source in 0..count {
            let tree = algorithm.run(provider, source)?;
            let dag = ShortestPathDag::from_tree(provider, &tree)?;
            let order = dag.topological_order()?;
            let preds = dag.predecessor_lists();

            for &v in &order {
                sigma[v] = if v == source {
                    1.0
                } else {
                    preds[v].iter().map(|p| sigma[*p]).sum()
                };
                delta[v] = 0.0;
            }

            for &w in order.iter().rev() {
                for &p in &preds[w] {
                    let share = sigma[p] / sigma[w] * (1.0 + delta[w]);
                    *scores.entry((p, w)).or_insert(0.0) += share;
                    delta[p] += share;
                }
            }
        }

        tracing::debug!(edges = scores.len(), %algorithm, "edge_betweenness");
        Ok(EdgeBetweenness { algorithm, scores })
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Score of the stored edge `from -> to`, `None` if there is no such edge
    pub fn score(&self, from: Vertex, to: Vertex) -> Option<f64> {
        self.scores.get(&(from, to)).copied()
    }

    /// Every edge in `(from, to)` order
    pub fn edges(&self) -> Vec<EdgeScore> {
        self.scores
            .iter()
            .map(|(&(from, to), &score)| EdgeScore { from, to, score })
            .collect()
    }

    /// Highest-scoring edge; ties go to the smallest `(from, to)`
    pub fn most_central(&self) -> Option<EdgeScore> {
        self.edges()
            .into_iter()
            .fold(None, |best: Option<EdgeScore>, e| match best {
                Some(b) if b.score >= e.score => Some(b),
                _ => Some(e),
            })
    }

    /// Merge `a -> b` and `b -> a` into one `(min, max)` entry holding the
    /// mean of the two directions.
    ///
    /// On a graph built undirected every edge is stored both ways and the
    /// result counts each unordered vertex pair once.
    pub fn fold_undirected(&self) -> EdgeBetweenness {
        let mut folded: BTreeMap<(Vertex, Vertex), f64> = BTreeMap::new();
        for (&(from, to), &score) in &self.scores {
            *folded.entry((from.min(to), from.max(to))).or_insert(0.0) += score / 2.0;
        }
        EdgeBetweenness {
            algorithm: self.algorithm,
            scores: folded,
        }
    }
}
