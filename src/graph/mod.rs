pub mod traits;
pub mod attributed;
pub mod generators;

pub use traits::{EdgeAttributes, Graph, MutableGraph, DEFAULT_WEIGHT_KEY};
pub use attributed::AttributedGraph;
