//! Split generation: the keyword graph, depth-first combination
//! traversal, and boolean query rendering.
//!
//! Data flow: [`KeywordSet`](crate::keyword::KeywordSet) →
//! [`KeywordGraph`] → [`Combination`]s → rendered split strings. All
//! three stages are pure, single-threaded, in-memory transformations
//! with deterministic output ordering.

pub mod combine;
pub mod graph;
pub mod render;
pub mod splitter;

// Re-export commonly used types
pub use combine::{Combination, generate_combinations};
pub use graph::{KeywordGraph, NodeId};
pub use render::{render_split, render_splits};
pub use splitter::Splitter;
