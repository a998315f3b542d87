use num_traits::Float;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

use crate::graph::Graph;

/// Bijection between vertex identifiers and dense indices `0..n`
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct VertexIndex<V>
where
    V: Clone + Eq + Hash + Debug,
{
    vertices: Vec<V>,
    positions: HashMap<V, usize>,
}

impl<V> VertexIndex<V>
where
    V: Clone + Eq + Hash + Debug,
{
    /// Indexes the graph's vertices in the order the graph enumerates them
    pub(crate) fn from_graph<W, G>(graph: &G) -> Self
    where
        W: Float + Debug + Copy,
        G: Graph<W, Vertex = V>,
    {
        let mut index = VertexIndex {
            vertices: Vec::with_capacity(graph.vertex_count()),
            positions: HashMap::with_capacity(graph.vertex_count()),
        };
        for vertex in graph.vertices() {
            index.push(vertex.clone());
        }
        index
    }

    /// Indexes a caller-supplied ordering; returns the offending vertex on a duplicate
    pub(crate) fn from_order(order: &[V]) -> std::result::Result<Self, V> {
        let mut index = VertexIndex {
            vertices: Vec::with_capacity(order.len()),
            positions: HashMap::with_capacity(order.len()),
        };
        for vertex in order {
            if !index.push(vertex.clone()) {
                return Err(vertex.clone());
            }
        }
        Ok(index)
    }

    fn push(&mut self, vertex: V) -> bool {
        if self.positions.contains_key(&vertex) {
            return false;
        }
        self.positions.insert(vertex.clone(), self.vertices.len());
        self.vertices.push(vertex);
        true
    }

    pub(crate) fn len(&self) -> usize {
        self.vertices.len()
    }

    pub(crate) fn index_of(&self, vertex: &V) -> Option<usize> {
        self.positions.get(vertex).copied()
    }

    pub(crate) fn vertex(&self, index: usize) -> &V {
        &self.vertices[index]
    }

    pub(crate) fn vertices(&self) -> &[V] {
        &self.vertices
    }
}

/// Shortest-path distances for every ordered pair of vertices
///
/// Lookups of unreached pairs, or of vertices that were not in the graph,
/// return positive infinity.
#[derive(Debug, Clone)]
pub struct DistanceTable<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug + Copy,
{
    index: Arc<VertexIndex<V>>,
    cells: Vec<W>,
}

impl<V, W> DistanceTable<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug + Copy,
{
    pub(crate) fn new(index: Arc<VertexIndex<V>>, cells: Vec<W>) -> Self {
        debug_assert_eq!(cells.len(), index.len() * index.len());
        DistanceTable { index, cells }
    }

    /// Distance from `from` to `to`, infinity when no path is known
    pub fn get(&self, from: &V, to: &V) -> W {
        match (self.index.index_of(from), self.index.index_of(to)) {
            (Some(u), Some(v)) => self.cells[u * self.index.len() + v],
            _ => W::infinity(),
        }
    }

    /// Returns true if a finite-length path leads from `from` to `to`
    pub fn is_reachable(&self, from: &V, to: &V) -> bool {
        self.get(from, to) != W::infinity()
    }

    /// Vertices in the order the engine processed them as pivots
    pub fn vertices(&self) -> &[V] {
        self.index.vertices()
    }

    pub fn vertex_count(&self) -> usize {
        self.index.len()
    }

    /// Finite distances from `from` to every reachable target
    pub fn row<'a>(&'a self, from: &V) -> impl Iterator<Item = (&'a V, W)> + 'a {
        let n = self.index.len();
        let cells = match self.index.index_of(from) {
            Some(u) => &self.cells[u * n..(u + 1) * n],
            None => &self.cells[0..0],
        };
        cells
            .iter()
            .enumerate()
            .filter(|(_, distance)| **distance != W::infinity())
            .map(move |(v, distance)| (self.index.vertex(v), *distance))
    }

    /// All finite entries as (source, target, distance)
    pub fn iter(&self) -> impl Iterator<Item = (&V, &V, W)> + '_ {
        let n = self.index.len();
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, distance)| **distance != W::infinity())
            .map(move |(cell, distance)| (self.index.vertex(cell / n), self.index.vertex(cell % n), *distance))
    }

    /// Nested `source -> target -> distance` map holding the finite entries
    pub fn to_nested_map(&self) -> HashMap<V, HashMap<V, W>> {
        self.index
            .vertices()
            .iter()
            .map(|from| (from.clone(), self.row(from).map(|(to, d)| (to.clone(), d)).collect()))
            .collect()
    }
}

/// The vertex preceding each target on a shortest path from each source
///
/// Absent when the target is the source itself or cannot be reached.
#[derive(Debug, Clone)]
pub struct PredecessorTable<V>
where
    V: Clone + Eq + Hash + Debug,
{
    index: Arc<VertexIndex<V>>,
    cells: Vec<Option<usize>>,
}

impl<V> PredecessorTable<V>
where
    V: Clone + Eq + Hash + Debug,
{
    pub(crate) fn new(index: Arc<VertexIndex<V>>, cells: Vec<Option<usize>>) -> Self {
        debug_assert_eq!(cells.len(), index.len() * index.len());
        PredecessorTable { index, cells }
    }

    /// Predecessor of `to` on a shortest path from `from`
    pub fn get(&self, from: &V, to: &V) -> Option<&V> {
        let n = self.index.len();
        let u = self.index.index_of(from)?;
        let v = self.index.index_of(to)?;
        self.cells[u * n + v].map(|p| self.index.vertex(p))
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.index.index_of(vertex).is_some()
    }

    pub fn vertices(&self) -> &[V] {
        self.index.vertices()
    }

    pub fn vertex_count(&self) -> usize {
        self.index.len()
    }

    /// All present entries as (source, target, predecessor)
    pub fn iter(&self) -> impl Iterator<Item = (&V, &V, &V)> + '_ {
        let n = self.index.len();
        self.cells.iter().enumerate().filter_map(move |(cell, pred)| {
            pred.map(|p| (self.index.vertex(cell / n), self.index.vertex(cell % n), self.index.vertex(p)))
        })
    }

    /// Nested `source -> target -> predecessor` map; sources with no entries map to an empty map
    pub fn to_nested_map(&self) -> HashMap<V, HashMap<V, V>> {
        let mut nested: HashMap<V, HashMap<V, V>> = self
            .index
            .vertices()
            .iter()
            .map(|v| (v.clone(), HashMap::new()))
            .collect();
        for (from, to, pred) in self.iter() {
            if let Some(row) = nested.get_mut(from) {
                row.insert(to.clone(), pred.clone());
            }
        }
        nested
    }
}

/// State of both tables right after one pivot's relaxation pass
#[derive(Debug, Clone, Serialize)]
pub struct IterationSnapshot<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug + Copy,
{
    /// 1-based position of the pass
    pub iteration: usize,
    /// Vertex used as the intermediate in this pass
    pub pivot: V,
    pub distances: DistanceTable<V, W>,
    pub predecessors: PredecessorTable<V>,
}

struct DistanceRow<'a, V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug + Copy,
{
    table: &'a DistanceTable<V, W>,
    from: &'a V,
}

impl<'a, V, W> Serialize for DistanceRow<'a, V, W>
where
    V: Clone + Eq + Hash + Debug + Serialize,
    W: Float + Debug + Copy + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (to, distance) in self.table.row(self.from) {
            map.serialize_entry(to, &distance)?;
        }
        map.end()
    }
}

impl<V, W> Serialize for DistanceTable<V, W>
where
    V: Clone + Eq + Hash + Debug + Serialize,
    W: Float + Debug + Copy + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.vertex_count()))?;
        for from in self.vertices() {
            map.serialize_entry(from, &DistanceRow { table: self, from })?;
        }
        map.end()
    }
}

struct PredecessorRow<'a, V>
where
    V: Clone + Eq + Hash + Debug,
{
    table: &'a PredecessorTable<V>,
    row: usize,
}

impl<'a, V> Serialize for PredecessorRow<'a, V>
where
    V: Clone + Eq + Hash + Debug + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let index = &self.table.index;
        let n = index.len();
        let mut map = serializer.serialize_map(None)?;
        for (v, pred) in self.table.cells[self.row * n..(self.row + 1) * n].iter().enumerate() {
            if let Some(p) = pred {
                map.serialize_entry(index.vertex(v), index.vertex(*p))?;
            }
        }
        map.end()
    }
}

impl<V> Serialize for PredecessorTable<V>
where
    V: Clone + Eq + Hash + Debug + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.vertex_count()))?;
        for (row, from) in self.vertices().iter().enumerate() {
            map.serialize_entry(from, &PredecessorRow { table: self, row })?;
        }
        map.end()
    }
}
