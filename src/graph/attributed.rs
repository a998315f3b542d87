use crate::graph::traits::{EdgeAttributes, Graph, MutableGraph};
use num_traits::Float;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A directed or undirected multigraph with attribute maps on its edges
#[derive(Debug, Clone)]
pub struct AttributedGraph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug + Copy,
{
    /// Whether edges are one-way
    directed: bool,

    /// Vertices in first-seen order
    vertices: Vec<V>,

    /// Position of each vertex in `vertices`
    positions: HashMap<V, usize>,

    /// Edges as (source position, target position, attributes); parallel edges allowed
    edges: Vec<(usize, usize, EdgeAttributes<W>)>,
}

impl<V, W> AttributedGraph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug + Copy,
{
    /// Creates a new empty directed graph
    pub fn new_directed() -> Self {
        AttributedGraph {
            directed: true,
            vertices: Vec::new(),
            positions: HashMap::new(),
            edges: Vec::new(),
        }
    }

    /// Creates a new empty undirected graph
    pub fn new_undirected() -> Self {
        AttributedGraph {
            directed: false,
            ..Self::new_directed()
        }
    }

    /// Creates a graph from weighted (source, target, weight) triples
    pub fn from_edges<I>(directed: bool, edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V, W)>,
    {
        let mut graph = if directed {
            Self::new_directed()
        } else {
            Self::new_undirected()
        };
        graph.add_edges_from(edges);
        graph
    }

    /// Adds weighted (source, target, weight) triples
    pub fn add_edges_from<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (V, V, W)>,
    {
        for (from, to, weight) in edges {
            self.add_edge(from, to, weight);
        }
    }

    /// Adds every vertex of the iterator that is not present yet
    pub fn add_vertices_from<I>(&mut self, vertices: I)
    where
        I: IntoIterator<Item = V>,
    {
        for vertex in vertices {
            self.add_vertex(vertex);
        }
    }

    fn position_or_insert(&mut self, vertex: V) -> usize {
        if let Some(&position) = self.positions.get(&vertex) {
            return position;
        }
        let position = self.vertices.len();
        self.positions.insert(vertex.clone(), position);
        self.vertices.push(vertex);
        position
    }

    fn connects(&self, edge: (usize, usize), from: usize, to: usize) -> bool {
        edge == (from, to) || (!self.directed && edge == (to, from))
    }
}

impl<V, W> Graph<W> for AttributedGraph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug + Copy,
{
    type Vertex = V;

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.vertices.iter())
    }

    fn edges(&self) -> Box<dyn Iterator<Item = (&V, &V, &EdgeAttributes<W>)> + '_> {
        Box::new(
            self.edges
                .iter()
                .map(move |(from, to, attributes)| (&self.vertices[*from], &self.vertices[*to], attributes)),
        )
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.positions.contains_key(vertex)
    }

    fn has_edge(&self, from: &V, to: &V) -> bool {
        match (self.positions.get(from), self.positions.get(to)) {
            (Some(&from), Some(&to)) => self
                .edges
                .iter()
                .any(|(u, v, _)| self.connects((*u, *v), from, to)),
            _ => false,
        }
    }

    fn get_edge_weight(&self, from: &V, to: &V, weight_key: &str) -> Option<W> {
        let (&from, &to) = (self.positions.get(from)?, self.positions.get(to)?);
        self.edges
            .iter()
            .filter(|(u, v, _)| self.connects((*u, *v), from, to))
            .map(|(_, _, attributes)| attributes.weight(weight_key))
            .fold(None, |best: Option<W>, weight| match best {
                Some(current) if current <= weight => Some(current),
                _ => Some(weight),
            })
    }
}

impl<V, W> MutableGraph<W> for AttributedGraph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug + Copy,
{
    fn add_vertex(&mut self, vertex: V) -> bool {
        if self.positions.contains_key(&vertex) {
            return false;
        }
        self.position_or_insert(vertex);
        true
    }

    fn add_edge_with_attributes(&mut self, from: V, to: V, attributes: EdgeAttributes<W>) {
        let from = self.position_or_insert(from);
        let to = self.position_or_insert(to);
        self.edges.push((from, to, attributes));
    }

    fn remove_edge(&mut self, from: &V, to: &V) -> bool {
        let (from, to) = match (self.positions.get(from), self.positions.get(to)) {
            (Some(&from), Some(&to)) => (from, to),
            _ => return false,
        };

        let len_before = self.edges.len();
        let directed = self.directed;
        self.edges.retain(|(u, v, _)| {
            let forward = (*u, *v) == (from, to);
            let backward = !directed && (*u, *v) == (to, from);
            !(forward || backward)
        });
        len_before > self.edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertices_keep_first_seen_order() {
        let mut graph: AttributedGraph<&str, f64> = AttributedGraph::new_directed();
        graph.add_edge("c", "a", 1.0);
        graph.add_vertex("b");
        graph.add_edge("a", "b", 2.0);

        let order: Vec<_> = graph.vertices().copied().collect();
        assert_eq!(order, vec!["c", "a", "b"]);
        assert!(!graph.add_vertex("a"));
    }

    #[test]
    fn parallel_edges_report_minimum_weight() {
        let mut graph: AttributedGraph<u32, f64> = AttributedGraph::new_undirected();
        graph.add_edge(1, 2, 4.0);
        graph.add_edge(2, 1, 3.0);
        graph.add_edge_with_attributes(1, 2, EdgeAttributes::new().with("cost", 7.0));

        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.get_edge_weight(&1, &2, "weight"), Some(1.0));
        assert_eq!(graph.get_edge_weight(&2, &1, "cost"), Some(1.0));
        assert!(graph.has_edge(&2, &1));

        assert!(graph.remove_edge(&1, &2));
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.get_edge_weight(&1, &2, "weight"), None);
    }

    #[test]
    fn directed_edges_are_one_way() {
        let graph = AttributedGraph::from_edges(true, vec![(1, 2, 5.0_f64)]);

        assert!(graph.has_edge(&1, &2));
        assert!(!graph.has_edge(&2, &1));
        assert_eq!(graph.get_edge_weight(&1, &2, "weight"), Some(5.0));
    }
}
