use std::fmt::Debug;
use std::hash::Hash;
use log::warn;
use num_traits::Float;

use crate::algorithm::{DistanceTable, PredecessorTable};
use crate::graph::Graph;
use crate::Result;

/// Trait for all-pairs shortest path algorithms
pub trait AllPairsShortestPath<W, G>
where
    W: Float + Debug + Copy,
    G: Graph<W>,
{
    /// Compute predecessor and distance tables for every ordered pair of vertices,
    /// reading edge weights from `weight_key`
    fn compute_distances_and_predecessors(
        &self,
        graph: &G,
        weight_key: &str,
    ) -> Result<(PredecessorTable<G::Vertex>, DistanceTable<G::Vertex, W>)>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Compute only the distance table
    fn compute_distances(&self, graph: &G, weight_key: &str) -> Result<DistanceTable<G::Vertex, W>> {
        self.compute_distances_and_predecessors(graph, weight_key)
            .map(|(_, distances)| distances)
    }
}

/// Rebuild the shortest path from `source` to `target` as a sequence of vertices
///
/// Returns `None` when the target is unreachable or either vertex is unknown,
/// and `[source]` when source and target coincide.
pub fn reconstruct_path<V>(predecessors: &PredecessorTable<V>, source: &V, target: &V) -> Option<Vec<V>>
where
    V: Clone + Eq + Hash + Debug,
{
    if !predecessors.contains_vertex(source) || !predecessors.contains_vertex(target) {
        return None;
    }
    if source == target {
        return Some(vec![source.clone()]);
    }

    let mut path = vec![target.clone()];
    let mut current = target;

    // Build path in reverse order
    while current != source {
        let pred = predecessors.get(source, current)?;
        path.push(pred.clone());
        current = pred;

        // A valid walk visits every vertex at most once
        if path.len() > predecessors.vertex_count() {
            warn!("Predecessor walk from {:?} to {:?} does not terminate", source, target);
            return None;
        }
    }

    path.reverse();
    Some(path)
}
