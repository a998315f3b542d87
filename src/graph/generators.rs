use crate::graph::{AttributedGraph, MutableGraph};
use num_traits::{cast, Float};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::fmt::Debug;

fn weight_from<W: Float>(value: f64) -> W {
    cast::<f64, W>(value).unwrap_or_else(W::one)
}

/// Generates an undirected path 0 - 1 - ... - (n-1) with unit weights
pub fn path_graph<W>(n: usize) -> AttributedGraph<usize, W>
where
    W: Float + Debug + Copy,
{
    let mut graph = AttributedGraph::new_undirected();
    graph.add_vertices_from(0..n);
    for v in 1..n {
        graph.add_edge(v - 1, v, W::one());
    }
    graph
}

/// Generates a cycle 0 -> 1 -> ... -> (n-1) -> 0 with unit weights
pub fn cycle_graph<W>(n: usize, directed: bool) -> AttributedGraph<usize, W>
where
    W: Float + Debug + Copy,
{
    let mut graph = if directed {
        AttributedGraph::new_directed()
    } else {
        AttributedGraph::new_undirected()
    };
    graph.add_vertices_from(0..n);
    if n > 1 {
        for v in 0..n {
            graph.add_edge(v, (v + 1) % n, W::one());
        }
    }
    graph
}

/// Generates an undirected complete graph on n vertices with unit weights
pub fn complete_graph<W>(n: usize) -> AttributedGraph<usize, W>
where
    W: Float + Debug + Copy,
{
    let mut graph = AttributedGraph::new_undirected();
    graph.add_vertices_from(0..n);
    for u in 0..n {
        for v in (u + 1)..n {
            graph.add_edge(u, v, W::one());
        }
    }
    graph
}

/// Generates a random graph with n vertices and m distinct edges (G(n, m) model)
///
/// Edge weights are drawn uniformly from `weights`. The same seed always
/// produces the same graph. `m` is capped at the number of possible edges.
pub fn gnm_random_graph<W>(
    n: usize,
    m: usize,
    directed: bool,
    weights: std::ops::Range<f64>,
    seed: u64,
) -> AttributedGraph<usize, W>
where
    W: Float + Debug + Copy,
{
    let mut graph = if directed {
        AttributedGraph::new_directed()
    } else {
        AttributedGraph::new_undirected()
    };
    graph.add_vertices_from(0..n);
    if n < 2 {
        return graph;
    }

    let max_edges = if directed { n * (n - 1) } else { n * (n - 1) / 2 };
    let target = m.min(max_edges);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut seen = HashSet::with_capacity(target);

    while seen.len() < target {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u == v {
            continue;
        }
        let key = if directed { (u, v) } else { (u.min(v), u.max(v)) };
        if seen.insert(key) {
            let weight = if weights.start < weights.end {
                rng.gen_range(weights.clone())
            } else {
                weights.start
            };
            graph.add_edge(u, v, weight_from(weight));
        }
    }

    graph
}
