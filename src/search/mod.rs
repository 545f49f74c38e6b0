//! Search collection: the provider boundary and the split sweep runner.

pub mod provider;
pub mod runner;

// Re-export commonly used types
pub use provider::{JsonlProvider, ProviderError, SearchProvider, SearchResponse};
pub use runner::{
    ExcludedSplit, Exclusion, QueryScope, SearchConfig, SearchOutcome, SearchRunner, SplitCount,
};
