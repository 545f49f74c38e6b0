//! Keyword data model: terms, keyword groups, and ordered group sets.

pub mod group;
pub mod term;

// Re-export commonly used types
pub use group::{KeywordGroup, KeywordSet};
pub use term::Term;
