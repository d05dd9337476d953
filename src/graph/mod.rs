pub mod directed;
pub mod generators;
pub mod traits;

pub use directed::DirectedGraph;
pub use generators::random_digraph;
pub use traits::{Graph, MutableGraph};
