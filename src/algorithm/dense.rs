use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Float;

#[cfg(feature = "dense")]
use ndarray::{Array2, Zip};

use crate::algorithm::floyd_warshall::FloydWarshall;
use crate::algorithm::tables::VertexIndex;
use crate::graph::Graph;
use crate::{Error, Result};

/// Shortest-path distances laid out as a dense square matrix
///
/// Row and column `i` belong to `order()[i]`. Unreached entries are positive
/// infinity and the diagonal is zero.
#[derive(Debug, Clone)]
pub struct DistanceMatrix<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug + Copy,
{
    index: VertexIndex<V>,
    cells: Vec<W>,
}

impl<V, W> DistanceMatrix<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug + Copy,
{
    /// Number of rows (and columns)
    pub fn dim(&self) -> usize {
        self.index.len()
    }

    /// Vertex owning each row and column
    pub fn order(&self) -> &[V] {
        self.index.vertices()
    }

    /// Row/column of a vertex
    pub fn index_of(&self, vertex: &V) -> Option<usize> {
        self.index.index_of(vertex)
    }

    /// Entry at row `i`, column `j`
    pub fn get(&self, i: usize, j: usize) -> Option<W> {
        let n = self.dim();
        if i < n && j < n {
            Some(self.cells[i * n + j])
        } else {
            None
        }
    }

    /// Distance between two vertices, infinity when either is not in the matrix
    pub fn distance(&self, from: &V, to: &V) -> W {
        match (self.index_of(from), self.index_of(to)) {
            (Some(i), Some(j)) => self.cells[i * self.dim() + j],
            _ => W::infinity(),
        }
    }

    /// Iterate over the rows
    pub fn rows(&self) -> impl Iterator<Item = &[W]> + '_ {
        // chunks(0) panics, and an empty matrix has no rows anyway
        self.cells.chunks(self.dim().max(1))
    }

    /// Copy into an ndarray matrix
    #[cfg(feature = "dense")]
    pub fn to_array(&self) -> Array2<W> {
        let n = self.dim();
        Array2::from_shape_fn((n, n), |(i, j)| self.cells[i * n + j])
    }
}

impl FloydWarshall {
    /// Compute the dense all-pairs distance matrix
    ///
    /// With `vertex_order` the rows and columns follow that order and only the
    /// subgraph induced by those vertices is considered; otherwise the graph's
    /// own vertex order is used. Each pivot applies the vectorized min-plus
    /// update `A = min(A, A[:, k] + A[k, :])`.
    #[cfg(feature = "dense")]
    pub fn compute_distance_matrix<W, G>(
        &self,
        graph: &G,
        vertex_order: Option<&[G::Vertex]>,
        weight_key: &str,
    ) -> Result<DistanceMatrix<G::Vertex, W>>
    where
        W: Float + Debug + Copy + Send + Sync,
        G: Graph<W>,
    {
        use crate::algorithm::floyd_warshall::{for_each_edge, negative_cycle_error};

        let index = match vertex_order {
            Some(order) => ordered_index(graph, order)?,
            None => VertexIndex::from_graph(graph),
        };
        let induced = vertex_order.is_some();
        let n = index.len();
        log::debug!("Dense Floyd-Warshall on a {}x{} matrix", n, n);

        let mut matrix = Array2::from_elem((n, n), W::infinity());
        matrix.diag_mut().fill(W::zero());
        for_each_edge(graph, &index, weight_key, induced, |u, v, weight| {
            let cell = &mut matrix[[u, v]];
            if weight < *cell {
                *cell = weight;
            }
        })?;

        for k in 0..n {
            let pivot_row = matrix.row(k).to_owned();
            let pivot_column = matrix.column(k).to_owned();
            Zip::indexed(&mut matrix).for_each(|(i, j), cell| {
                // infinity plus anything finite stays infinite and never improves
                let candidate = pivot_column[i] + pivot_row[j];
                if candidate < *cell {
                    *cell = candidate;
                }
            });
        }

        if let Some(v) = (0..n).find(|&v| matrix[[v, v]] < W::zero()) {
            return Err(negative_cycle_error(index.vertex(v)));
        }

        Ok(DistanceMatrix {
            index,
            cells: matrix.iter().copied().collect(),
        })
    }

    /// Dense matrices need the `dense` feature (ndarray); without it this always fails
    #[cfg(not(feature = "dense"))]
    pub fn compute_distance_matrix<W, G>(
        &self,
        _graph: &G,
        _vertex_order: Option<&[G::Vertex]>,
        _weight_key: &str,
    ) -> Result<DistanceMatrix<G::Vertex, W>>
    where
        W: Float + Debug + Copy + Send + Sync,
        G: Graph<W>,
    {
        Err(Error::MissingDependency("ndarray"))
    }
}

/// Index a caller-supplied vertex order, rejecting duplicates and strangers
#[cfg(feature = "dense")]
fn ordered_index<W, G>(graph: &G, order: &[G::Vertex]) -> Result<VertexIndex<G::Vertex>>
where
    W: Float + Debug + Copy,
    G: Graph<W>,
{
    if let Some(unknown) = order.iter().find(|v| !graph.has_vertex(v)) {
        return Err(Error::InvalidVertexOrder(format!("{:?} is not in the graph", unknown)));
    }
    VertexIndex::from_order(order)
        .map_err(|duplicate| Error::InvalidVertexOrder(format!("{:?} appears more than once", duplicate)))
}
