use std::fmt::Debug;
use std::sync::Arc;
use log::{debug, warn};
use num_traits::Float;
use rayon::prelude::*;

use crate::algorithm::tables::VertexIndex;
use crate::algorithm::{AllPairsShortestPath, DistanceTable, PredecessorTable, Trace};
use crate::graph::Graph;
use crate::{Error, Result};

/// Tuning knobs for the Floyd-Warshall engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloydWarshallConfig {
    /// Vertex count from which each pivot pass is spread over the rayon pool
    pub parallel_threshold: usize,
}

impl Default for FloydWarshallConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 256,
        }
    }
}

/// Floyd-Warshall all-pairs shortest path engine
///
/// The engine is stateless between runs: every call builds fresh tables and
/// hands them to the caller.
#[derive(Debug, Default, Clone)]
pub struct FloydWarshall {
    config: FloydWarshallConfig,
}

impl FloydWarshall {
    /// Create a new engine with default settings
    pub fn new() -> Self {
        FloydWarshall::default()
    }

    /// Create a new engine from an explicit configuration
    pub fn with_config(config: FloydWarshallConfig) -> Self {
        FloydWarshall { config }
    }

    /// Set the vertex count from which pivot passes run in parallel
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.config.parallel_threshold = threshold;
        self
    }

    /// Never parallelize pivot passes
    pub fn sequential(self) -> Self {
        self.with_parallel_threshold(usize::MAX)
    }

    /// Current engine configuration
    pub fn config(&self) -> &FloydWarshallConfig {
        &self.config
    }

    /// Start a run that yields one snapshot per pivot
    ///
    /// Nothing is relaxed until the trace is advanced. Dropping the trace
    /// between pivots abandons the run.
    pub fn compute_with_trace<W, G>(&self, graph: &G, weight_key: &str) -> Result<Trace<G::Vertex, W>>
    where
        W: Float + Debug + Copy + Send + Sync,
        G: Graph<W>,
    {
        let index = Arc::new(VertexIndex::from_graph(graph));
        let mut state = RelaxationState::new(index.len());
        for_each_edge(graph, &index, weight_key, false, |u, v, weight| state.seed_edge(u, v, weight))?;

        let parallel = index.len() >= self.config.parallel_threshold;
        debug!(
            "Floyd-Warshall on {} vertices, {} edges ({})",
            index.len(),
            graph.edge_count(),
            if parallel { "parallel" } else { "sequential" }
        );

        Ok(Trace::new(index, state, parallel))
    }
}

impl<W, G> AllPairsShortestPath<W, G> for FloydWarshall
where
    W: Float + Debug + Copy + Send + Sync,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Floyd-Warshall"
    }

    fn compute_distances_and_predecessors(
        &self,
        graph: &G,
        weight_key: &str,
    ) -> Result<(PredecessorTable<G::Vertex>, DistanceTable<G::Vertex, W>)> {
        self.compute_with_trace(graph, weight_key)?.finish()
    }
}

/// Feed every edge whose endpoints are both indexed to `seed` as (row, column, weight)
///
/// Undirected edges are fed in both orientations. Self-loops are skipped since
/// self-distance is always zero. Every weight is validated, including the
/// weights of edges left out of the index.
///
/// With `induced` the index may cover a subset of the graph and edges leaving
/// it are skipped. Otherwise an endpoint missing from the index is an error.
pub(crate) fn for_each_edge<W, G, F>(
    graph: &G,
    index: &VertexIndex<G::Vertex>,
    weight_key: &str,
    induced: bool,
    mut seed: F,
) -> Result<()>
where
    W: Float + Debug + Copy,
    G: Graph<W>,
    F: FnMut(usize, usize, W),
{
    let undirected = !graph.is_directed();
    for (from, to, attributes) in graph.edges() {
        let weight = attributes.weight(weight_key);
        if !weight.is_finite() {
            return Err(Error::InvalidWeight {
                from: format!("{:?}", from),
                to: format!("{:?}", to),
                weight: weight.to_f64().unwrap_or(f64::NAN),
            });
        }

        let (u, v) = match (index.index_of(from), index.index_of(to)) {
            (Some(u), Some(v)) => (u, v),
            _ if induced => {
                debug!("Skipping edge {:?} -> {:?} outside the vertex order", from, to);
                continue;
            }
            (None, _) => return Err(unknown_vertex_error(from)),
            (Some(_), None) => return Err(unknown_vertex_error(to)),
        };
        if u == v {
            continue;
        }
        seed(u, v, weight);
        if undirected {
            seed(v, u, weight);
        }
    }
    Ok(())
}

/// Flat row-major distance and predecessor tables being relaxed
#[derive(Debug, Clone)]
pub(crate) struct RelaxationState<W>
where
    W: Float + Debug + Copy,
{
    n: usize,
    dist: Vec<W>,
    pred: Vec<Option<usize>>,
}

impl<W> RelaxationState<W>
where
    W: Float + Debug + Copy + Send + Sync,
{
    pub(crate) fn new(n: usize) -> Self {
        let mut dist = vec![W::infinity(); n * n];
        for v in 0..n {
            dist[v * n + v] = W::zero();
        }
        RelaxationState {
            n,
            dist,
            pred: vec![None; n * n],
        }
    }

    pub(crate) fn vertex_count(&self) -> usize {
        self.n
    }

    fn seed_edge(&mut self, u: usize, v: usize, weight: W) {
        let cell = u * self.n + v;
        if weight < self.dist[cell] {
            self.dist[cell] = weight;
        }
        self.pred[cell] = Some(u);
    }

    /// Relax every pair through pivot `k`
    ///
    /// Row `k` and column `k` are read as they stood when the pass started, so
    /// rows can be updated independently of each other.
    pub(crate) fn relax_pivot(&mut self, k: usize, parallel: bool) {
        let n = self.n;
        let pivot_row = self.dist[k * n..(k + 1) * n].to_vec();
        let pivot_pred = self.pred[k * n..(k + 1) * n].to_vec();
        let pivot_column: Vec<W> = (0..n).map(|u| self.dist[u * n + k]).collect();

        let relax_row = |u: usize, dist_row: &mut [W], pred_row: &mut [Option<usize>]| {
            let to_pivot = pivot_column[u];
            if to_pivot == W::infinity() {
                return;
            }
            for v in 0..n {
                let from_pivot = pivot_row[v];
                if from_pivot == W::infinity() {
                    continue;
                }
                let candidate = to_pivot + from_pivot;
                if candidate < dist_row[v] {
                    dist_row[v] = candidate;
                    pred_row[v] = pivot_pred[v];
                }
            }
        };

        if parallel {
            self.dist
                .par_chunks_mut(n)
                .zip(self.pred.par_chunks_mut(n))
                .enumerate()
                .for_each(|(u, (dist_row, pred_row))| relax_row(u, dist_row, pred_row));
        } else {
            self.dist
                .chunks_mut(n)
                .zip(self.pred.chunks_mut(n))
                .enumerate()
                .for_each(|(u, (dist_row, pred_row))| relax_row(u, dist_row, pred_row));
        }
    }

    /// First vertex whose distance to itself went negative
    pub(crate) fn negative_cycle_vertex(&self) -> Option<usize> {
        (0..self.n).find(|&v| self.dist[v * self.n + v] < W::zero())
    }

    pub(crate) fn tables<V>(&self, index: &Arc<VertexIndex<V>>) -> (PredecessorTable<V>, DistanceTable<V, W>)
    where
        V: Clone + Eq + std::hash::Hash + Debug,
    {
        (
            PredecessorTable::new(Arc::clone(index), self.pred.clone()),
            DistanceTable::new(Arc::clone(index), self.dist.clone()),
        )
    }

    pub(crate) fn into_tables<V>(self, index: Arc<VertexIndex<V>>) -> (PredecessorTable<V>, DistanceTable<V, W>)
    where
        V: Clone + Eq + std::hash::Hash + Debug,
    {
        (
            PredecessorTable::new(Arc::clone(&index), self.pred),
            DistanceTable::new(index, self.dist),
        )
    }
}

/// Turn a negative self-distance into the error surfaced to callers
pub(crate) fn negative_cycle_error<V: Debug>(vertex: &V) -> Error {
    warn!("Negative cycle detected through vertex {:?}", vertex);
    Error::NegativeCycleDetected {
        vertex: format!("{:?}", vertex),
    }
}

fn unknown_vertex_error<V: Debug>(vertex: &V) -> Error {
    Error::UnknownVertex {
        vertex: format!("{:?}", vertex),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallel_pass_matches_sequential_pass() {
        let mut sequential = RelaxationState::<f64>::new(3);
        sequential.seed_edge(0, 1, 2.0);
        sequential.seed_edge(1, 2, -1.0);
        sequential.seed_edge(0, 2, 4.0);
        let mut parallel = sequential.clone();

        for k in 0..3 {
            sequential.relax_pivot(k, false);
            parallel.relax_pivot(k, true);
        }

        assert_eq!(sequential.dist, parallel.dist);
        assert_eq!(sequential.pred, parallel.pred);
        assert_eq!(sequential.dist[2], 1.0);
        assert_eq!(sequential.pred[2], Some(1));
        assert_eq!(sequential.negative_cycle_vertex(), None);
    }

    #[test]
    fn seeding_keeps_lightest_parallel_edge() {
        let mut state = RelaxationState::<f64>::new(2);
        state.seed_edge(0, 1, 3.0);
        state.seed_edge(0, 1, 7.0);
        assert_eq!(state.dist[1], 3.0);
        assert_eq!(state.pred[1], Some(0));
    }
}
