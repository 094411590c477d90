//! Every shortest path from one source, not just the tree's
//!
//! A [`ShortestPathResult`] keeps a single predecessor per vertex. The
//! [`ShortestPathDag`] built from it keeps every `u` with
//! `distance(u) + w(u, v) == distance(v)`, so ties between equal-cost routes
//! survive. Hop trees count each edge as 1.
//!
//! Distances are compared exactly. Routes whose float sums differ in the
//! last bit are not treated as ties.

use std::collections::VecDeque;

use crate::ensure_vertex;
use crate::error::{PhoenixError, Result};
use crate::graph::result::ShortestPathResult;
use crate::graph::types::{Metric, Vertex, Weight, UNIT_WEIGHT};
use crate::graph::GraphProvider;

/// Predecessor sets of one shortest-path computation
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathDag {
    source: Vertex,
    metric: Metric,
    reached: Vec<bool>,
    distance: Vec<Weight>,
    /// Ascending, without duplicates
    predecessors: Vec<Vec<Vertex>>,
}

impl ShortestPathDag {
    /// Collect the tight edges of `tree` from the graph it was built on.
    pub fn from_tree(provider: &dyn GraphProvider, tree: &ShortestPathResult) -> Result<Self> {
        let count = tree.vertex_count();
        let source = tree.source();
        let reached = (0..count)
            .map(|v| tree.has_path_to(v))
            .collect::<Result<Vec<bool>>>()?;
        let distance = tree.distances().to_vec();
        let mut predecessors = vec![Vec::new(); count];

        for from in (0..count).filter(|v| reached[*v]) {
            for edge in provider.neighbors(from)? {
                let to = edge.to();
                ensure_vertex!(to, count);
                if to == source || to == from || !reached[to] {
                    continue;
                }
                let step = match tree.metric() {
                    Metric::Hops => UNIT_WEIGHT,
                    Metric::Weight => edge.weight(),
                };
                let preds: &mut Vec<Vertex> = &mut predecessors[to];
                if distance[from] + step == distance[to] && preds.last() != Some(&from) {
                    preds.push(from);
                }
            }
        }

        Ok(ShortestPathDag {
            source,
            metric: tree.metric(),
            reached,
            distance,
            predecessors,
        })
    }

    pub fn source(&self) -> Vertex {
        self.source
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn vertex_count(&self) -> usize {
        self.reached.len()
    }

    pub fn distance_to(&self, v: Vertex) -> Result<Weight> {
        ensure_vertex!(v, self.vertex_count());
        Ok(self.distance[v])
    }

    /// Every vertex directly before `v` on some shortest path, ascending.
    /// Empty for the source and for unreached vertices.
    pub fn predecessors(&self, v: Vertex) -> Result<&[Vertex]> {
        ensure_vertex!(v, self.vertex_count());
        Ok(&self.predecessors[v])
    }

    pub(crate) fn predecessor_lists(&self) -> &[Vec<Vertex>] {
        &self.predecessors
    }

    /// All simple shortest paths from the source to `target`, each listed
    /// source first. Paths are ordered by their predecessor choices walking
    /// back from `target`, smallest id first.
    ///
    /// `[[source]]` for the source itself, empty when `target` is
    /// unreachable. The number of paths can grow exponentially with the
    /// graph size.
    pub fn paths_to(&self, target: Vertex) -> Result<Vec<Vec<Vertex>>> {
        ensure_vertex!(target, self.vertex_count());
        if !self.reached[target] {
            return Ok(Vec::new());
        }

        let mut paths = Vec::new();
        let mut on_chain = vec![false; self.vertex_count()];
        // (vertex, index of its next predecessor to try), target at the bottom
        let mut chain: Vec<(Vertex, usize)> = vec![(target, 0)];
        on_chain[target] = true;

        while let Some(frame) = chain.last_mut() {
            let (vertex, next) = *frame;
            if vertex == self.source {
                paths.push(chain.iter().rev().map(|(v, _)| *v).collect());
                on_chain[vertex] = false;
                chain.pop();
                continue;
            }

            match self.predecessors[vertex].get(next) {
                Some(&pred) => {
                    frame.1 += 1;
                    // zero-weight cycles would otherwise loop forever
                    if !on_chain[pred] {
                        on_chain[pred] = true;
                        chain.push((pred, 0));
                    }
                }
                None => {
                    on_chain[vertex] = false;
                    chain.pop();
                }
            }
        }

        Ok(paths)
    }

    /// Reached vertices ordered so every predecessor comes before its
    /// successors, starting with the source. Fails when zero-weight edges
    /// close a cycle among equally distant vertices.
    pub fn topological_order(&self) -> Result<Vec<Vertex>> {
        let count = self.vertex_count();
        let mut successors = vec![Vec::new(); count];
        let mut pending = vec![0usize; count];
        for (v, preds) in self.predecessors.iter().enumerate() {
            pending[v] = preds.len();
            for &p in preds {
                successors[p].push(v);
            }
        }

        let mut queue: VecDeque<Vertex> = (0..count)
            .filter(|v| self.reached[*v] && pending[*v] == 0)
            .collect();
        let mut order = Vec::with_capacity(count);
        while let Some(v) = queue.pop_front() {
            order.push(v);
            for &next in &successors[v] {
                pending[next] -= 1;
                if pending[next] == 0 {
                    queue.push_back(next);
                }
            }
        }

        let reached = self.reached.iter().filter(|r| **r).count();
        if order.len() < reached {
            return Err(PhoenixError::invalid_value(
                "shortest-path graph",
                format!(
                    "zero-weight cycle among vertices reachable from {}",
                    self.source
                ),
            ));
        }
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::fixtures::{diamond, weighted_six};
    use crate::graph::{bfs_shortest_paths, dijkstra_shortest_paths, Graph};

    fn dag_of(graph: &Graph, source: Vertex, hops: bool) -> ShortestPathDag {
        let tree = if hops {
            bfs_shortest_paths(graph, source).unwrap()
        } else {
            dijkstra_shortest_paths(graph, source).unwrap()
        };
        ShortestPathDag::from_tree(graph, &tree).unwrap()
    }

    #[test]
    fn test_diamond_keeps_both_routes() {
        let dag = dag_of(&diamond(), 0, true);
        assert_eq!(dag.predecessors(3).unwrap(), &[1, 2]);
        assert!(dag.predecessors(0).unwrap().is_empty());
        assert_eq!(
            dag.paths_to(3).unwrap(),
            vec![vec![0, 1, 3], vec![0, 2, 3]]
        );
    }

    #[test]
    fn test_weighted_ties() {
        let mut graph = Graph::directed_weighted(4);
        for (from, to, weight) in [(0, 1, 1.0), (0, 2, 2.0), (1, 3, 2.0), (2, 3, 1.0)] {
            graph.add_edge(from, to, weight).unwrap();
        }
        let dag = dag_of(&graph, 0, false);
        assert_eq!(dag.distance_to(3).unwrap(), 3.0);
        assert_eq!(
            dag.paths_to(3).unwrap(),
            vec![vec![0, 1, 3], vec![0, 2, 3]]
        );
    }

    #[test]
    fn test_unique_paths_match_tree() {
        let graph = weighted_six();
        let tree = dijkstra_shortest_paths(&graph, 0).unwrap();
        let dag = ShortestPathDag::from_tree(&graph, &tree).unwrap();
        for v in 0..graph.vertex_count() {
            let expected: Vec<Vec<Vertex>> = tree.path_to(v).unwrap().into_iter().collect();
            assert_eq!(dag.paths_to(v).unwrap(), expected, "vertex {v}");
        }
    }

    #[test]
    fn test_source_and_unreachable() {
        let graph = weighted_six();
        let dag = dag_of(&graph, 3, false);
        assert_eq!(dag.paths_to(3).unwrap(), vec![vec![3]]);
        assert!(dag.paths_to(0).unwrap().is_empty());
        assert!(matches!(
            dag.paths_to(6),
            Err(PhoenixError::VertexOutOfRange { vertex: 6, .. })
        ));
    }

    #[test]
    fn test_parallel_edges_do_not_duplicate_paths() {
        let mut graph = Graph::directed_weighted(2);
        graph.add_edge(0, 1, 1.0).unwrap();
        graph.add_edge(0, 1, 1.0).unwrap();
        let dag = dag_of(&graph, 0, false);
        assert_eq!(dag.paths_to(1).unwrap(), vec![vec![0, 1]]);
    }

    #[test]
    fn test_undirected_edges_back_to_source_ignored() {
        let mut graph = Graph::undirected_unweighted(3);
        graph.add_unit_edge(0, 1).unwrap();
        graph.add_unit_edge(1, 2).unwrap();
        let dag = dag_of(&graph, 0, true);
        assert!(dag.predecessors(0).unwrap().is_empty());
        assert_eq!(dag.topological_order().unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_topological_order_diamond() {
        let order = dag_of(&diamond(), 0, true).topological_order().unwrap();
        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_zero_weight_cycle() {
        let mut graph = Graph::directed_weighted(3);
        for (from, to, weight) in [(0, 1, 1.0), (1, 2, 0.0), (2, 1, 0.0)] {
            graph.add_edge(from, to, weight).unwrap();
        }
        let dag = dag_of(&graph, 0, false);
        assert_eq!(dag.predecessors(1).unwrap(), &[0, 2]);
        assert_eq!(dag.paths_to(2).unwrap(), vec![vec![0, 1, 2]]);
        assert_eq!(dag.paths_to(1).unwrap(), vec![vec![0, 1]]);
        assert!(matches!(
            dag.topological_order(),
            Err(PhoenixError::InvalidValue { .. })
        ));
    }
}
