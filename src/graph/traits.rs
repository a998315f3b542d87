use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Float;

/// Attribute key read for edge weights unless the caller asks for another one
pub const DEFAULT_WEIGHT_KEY: &str = "weight";

/// Named numeric attributes carried by an edge
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeAttributes<W>
where
    W: Float + Debug + Copy,
{
    values: HashMap<String, W>,
}

impl<W> EdgeAttributes<W>
where
    W: Float + Debug + Copy,
{
    /// Creates an empty attribute set
    pub fn new() -> Self {
        EdgeAttributes {
            values: HashMap::new(),
        }
    }

    /// Creates an attribute set holding only a weight under the default key
    pub fn weighted(weight: W) -> Self {
        Self::new().with(DEFAULT_WEIGHT_KEY, weight)
    }

    /// Adds an attribute, builder style
    pub fn with(mut self, key: &str, value: W) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets an attribute, returning the previous value if any
    pub fn insert(&mut self, key: &str, value: W) -> Option<W> {
        self.values.insert(key.to_string(), value)
    }

    /// Gets an attribute value
    pub fn get(&self, key: &str) -> Option<W> {
        self.values.get(key).copied()
    }

    /// Weight stored under `key`, or one when the edge has no such attribute
    pub fn weight(&self, key: &str) -> W {
        self.get(key).unwrap_or_else(W::one)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<W> Default for EdgeAttributes<W>
where
    W: Float + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Trait representing a weighted graph whose vertices are arbitrary identifiers
pub trait Graph<W>: Debug
where
    W: Float + Debug + Copy,
{
    /// Vertex identifier type
    type Vertex: Clone + Eq + Hash + Debug;

    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph (parallel edges counted separately)
    fn edge_count(&self) -> usize;

    /// Returns true if edges only go from their source to their target
    fn is_directed(&self) -> bool;

    /// Returns an iterator over the vertices, always in the same order for an unchanged graph
    fn vertices(&self) -> Box<dyn Iterator<Item = &Self::Vertex> + '_>;

    /// Returns an iterator over all edges as (source, target, attributes)
    ///
    /// Undirected edges are yielded once, in the orientation they were added.
    fn edges(&self) -> Box<dyn Iterator<Item = (&Self::Vertex, &Self::Vertex, &EdgeAttributes<W>)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: &Self::Vertex) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: &Self::Vertex, to: &Self::Vertex) -> bool;

    /// Gets the smallest weight among the edges from `from` to `to`
    fn get_edge_weight(&self, from: &Self::Vertex, to: &Self::Vertex, weight_key: &str) -> Option<W>;
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Float + Debug + Copy,
{
    /// Adds a vertex; returns false if it was already present
    fn add_vertex(&mut self, vertex: Self::Vertex) -> bool;

    /// Adds an edge carrying `weight` under the default weight key
    fn add_edge(&mut self, from: Self::Vertex, to: Self::Vertex, weight: W) {
        self.add_edge_with_attributes(from, to, EdgeAttributes::weighted(weight));
    }

    /// Adds an edge with arbitrary attributes, creating missing endpoints
    fn add_edge_with_attributes(&mut self, from: Self::Vertex, to: Self::Vertex, attributes: EdgeAttributes<W>);

    /// Removes every edge between the two vertices
    fn remove_edge(&mut self, from: &Self::Vertex, to: &Self::Vertex) -> bool;
}
