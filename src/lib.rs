//! Fast APSP - All-Pairs Shortest Paths with Floyd-Warshall
//!
//! This library computes, for every ordered pair of vertices of a weighted graph,
//! the shortest-path distance and the predecessor needed to rebuild the path.
//! Graphs may be directed or undirected and may carry negative edge weights;
//! negative cycles are reported as an error instead of producing wrong tables.
//!
//! Two presentations are available: keyed distance/predecessor tables (with an
//! optional lazily produced per-pivot trace) and a dense distance matrix.

pub mod algorithm;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod graph;

pub use algorithm::{
    floyd_warshall::{FloydWarshall, FloydWarshallConfig},
    reconstruct_path, AllPairsShortestPath, DistanceMatrix, DistanceTable, IterationSnapshot,
    PredecessorTable, Trace,
};
/// Re-export main types for convenient use
pub use graph::{AttributedGraph, EdgeAttributes, Graph, MutableGraph, DEFAULT_WEIGHT_KEY};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid weight {weight} on edge from {from} to {to}")]
    InvalidWeight { from: String, to: String, weight: f64 },

    #[error("Negative cycle detected through vertex {vertex}")]
    NegativeCycleDetected { vertex: String },

    #[error("Missing dependency: {0} is required for dense distance matrices")]
    MissingDependency(&'static str),

    #[error("Invalid vertex order: {0}")]
    InvalidVertexOrder(String),

    #[error("Edge endpoint {vertex} is not a vertex of the graph")]
    UnknownVertex { vertex: String },
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
