//! Split sweep execution: one provider call per split, threshold
//! partitioning, and per-split bookkeeping.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{LitsieveError, Result};
use crate::record::RawRecord;
use crate::search::provider::{ProviderError, SearchProvider};

/// Field scope a split is wrapped in before it reaches the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryScope {
    /// Match against title, abstract, and author keywords.
    TitleAbsKey,
    /// Pass the split through unscoped.
    All,
}

impl QueryScope {
    /// Wrap a split in this scope.
    pub fn wrap(&self, split: &str) -> String {
        match self {
            QueryScope::TitleAbsKey => format!("TITLE-ABS-KEY({split})"),
            QueryScope::All => split.to_string(),
        }
    }
}

/// Configuration of a split sweep.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Splits with more matches than this are excluded from collection.
    pub threshold: u64,
    /// Whether record lists are downloaded, or only counts requested.
    pub download: bool,
    /// Field scope for the provider query.
    pub scope: QueryScope,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            threshold: 1000,
            download: true,
            scope: QueryScope::TitleAbsKey,
        }
    }
}

/// A matched split and its result count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitCount {
    pub count: u64,
    pub split: String,
}

/// Why a split was excluded from collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Exclusion {
    /// The result count exceeded the configured threshold.
    OverThreshold(u64),
    /// The provider rejected the query as over-broad; the label is the
    /// provider's own count indication (e.g. `>5000`).
    Rejected(String),
}

/// A split routed to the excluded set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcludedSplit {
    pub exclusion: Exclusion,
    pub split: String,
}

impl ExcludedSplit {
    /// The count column value for the excluded-splits file.
    pub fn count_label(&self) -> String {
        match &self.exclusion {
            Exclusion::OverThreshold(count) => count.to_string(),
            Exclusion::Rejected(label) => label.clone(),
        }
    }
}

/// Everything a sweep produced.
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    /// Collected records, each tagged with the split that retrieved it.
    pub records: Vec<RawRecord>,
    /// Splits whose counts were within the threshold, with their counts.
    pub matched: Vec<SplitCount>,
    /// Splits excluded as over-threshold or rejected.
    pub excluded: Vec<ExcludedSplit>,
}

/// Executes a sweep of splits against a search provider.
///
/// Calls are issued sequentially, one blocking call per split, and all
/// bookkeeping is keyed by split, so the association between a split
/// and its results never depends on completion order.
#[derive(Debug, Clone)]
pub struct SearchRunner<P> {
    provider: P,
    config: SearchConfig,
}

impl<P: SearchProvider> SearchRunner<P> {
    /// Create a runner with the default configuration.
    pub fn new(provider: P) -> Self {
        SearchRunner {
            provider,
            config: SearchConfig::default(),
        }
    }

    /// Create a runner with an explicit configuration.
    pub fn with_config(provider: P, config: SearchConfig) -> Self {
        SearchRunner { provider, config }
    }

    /// The active configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Execute every split, in order.
    ///
    /// Per split: over-threshold counts and provider rejections go to
    /// the excluded set, zero-result splits are silently dropped from
    /// both sets, and everything else is recorded as matched, with its
    /// records collected when downloading is enabled. Only transport
    /// failures abort the sweep.
    pub fn run(&self, splits: &[String]) -> Result<SearchOutcome> {
        let total = splits.len();
        let mut outcome = SearchOutcome::default();

        for (index, split) in splits.iter().enumerate() {
            info!("progress: {}/{}", index + 1, total);
            let query = self.config.scope.wrap(split);
            debug!("query: {query}");

            match self.provider.search(&query, self.config.download) {
                Ok(response) if response.total > self.config.threshold => {
                    outcome.excluded.push(ExcludedSplit {
                        exclusion: Exclusion::OverThreshold(response.total),
                        split: split.clone(),
                    });
                }
                Ok(response) if response.total == 0 => {
                    // Zero matches: neither matched nor excluded.
                }
                Ok(response) => {
                    outcome.matched.push(SplitCount {
                        count: response.total,
                        split: split.clone(),
                    });
                    for mut record in response.records {
                        record.split = Some(split.clone());
                        outcome.records.push(record);
                    }
                }
                Err(ProviderError::QueryRejected(label)) => {
                    outcome.excluded.push(ExcludedSplit {
                        exclusion: Exclusion::Rejected(label),
                        split: split.clone(),
                    });
                }
                Err(ProviderError::Failure(message)) => {
                    return Err(LitsieveError::provider(message));
                }
            }
        }

        info!(
            "sweep complete: {} matched, {} excluded, {} records collected",
            outcome.matched.len(),
            outcome.excluded.len(),
            outcome.records.len()
        );
        Ok(outcome)
    }
}
