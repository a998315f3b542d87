pub mod traits;
pub mod tables;
pub mod floyd_warshall;
pub mod trace;
pub mod dense;

pub use traits::{reconstruct_path, AllPairsShortestPath};
pub use tables::{DistanceTable, IterationSnapshot, PredecessorTable};
pub use trace::Trace;
pub use dense::DistanceMatrix;
