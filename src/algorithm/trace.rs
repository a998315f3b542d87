use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;
use log::trace;
use num_traits::Float;

use crate::algorithm::floyd_warshall::{negative_cycle_error, RelaxationState};
use crate::algorithm::tables::VertexIndex;
use crate::algorithm::{DistanceTable, IterationSnapshot, PredecessorTable};
use crate::Result;

/// A Floyd-Warshall run advanced one pivot at a time
///
/// Each call to `next` relaxes every pair through the next pivot and yields
/// a snapshot of both tables. The sequence has exactly one item per vertex
/// and cannot be restarted. Call [`Trace::finish`] to run any remaining
/// pivots and obtain the final tables.
#[derive(Debug)]
pub struct Trace<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug + Copy + Send + Sync,
{
    index: Arc<VertexIndex<V>>,
    state: RelaxationState<W>,
    next_pivot: usize,
    parallel: bool,
}

impl<V, W> Trace<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug + Copy + Send + Sync,
{
    pub(crate) fn new(index: Arc<VertexIndex<V>>, state: RelaxationState<W>, parallel: bool) -> Self {
        Trace {
            index,
            state,
            next_pivot: 0,
            parallel,
        }
    }

    /// Number of pivots not yet processed
    pub fn remaining(&self) -> usize {
        self.state.vertex_count() - self.next_pivot
    }

    /// Vertices in pivot order
    pub fn vertices(&self) -> &[V] {
        self.index.vertices()
    }

    fn advance(&mut self) -> Option<usize> {
        if self.next_pivot >= self.state.vertex_count() {
            return None;
        }
        let k = self.next_pivot;
        self.state.relax_pivot(k, self.parallel);
        self.next_pivot += 1;
        trace!("Relaxed pivot {:?} ({}/{})", self.index.vertex(k), k + 1, self.state.vertex_count());
        Some(k)
    }

    /// Process the remaining pivots and return the final predecessor and distance tables
    ///
    /// Fails with `NegativeCycleDetected` if any vertex ends with a negative
    /// distance to itself.
    pub fn finish(mut self) -> Result<(PredecessorTable<V>, DistanceTable<V, W>)> {
        while self.advance().is_some() {}

        if let Some(v) = self.state.negative_cycle_vertex() {
            return Err(negative_cycle_error(self.index.vertex(v)));
        }
        Ok(self.state.into_tables(self.index))
    }
}

impl<V, W> Iterator for Trace<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug + Copy + Send + Sync,
{
    type Item = IterationSnapshot<V, W>;

    fn next(&mut self) -> Option<Self::Item> {
        let k = self.advance()?;
        let (predecessors, distances) = self.state.tables(&self.index);
        Some(IterationSnapshot {
            iteration: k + 1,
            pivot: self.index.vertex(k).clone(),
            distances,
            predecessors,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

impl<V, W> ExactSizeIterator for Trace<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug + Copy + Send + Sync,
{
}
