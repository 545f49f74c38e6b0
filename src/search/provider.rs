//! The bibliographic search provider boundary.
//!
//! The live provider (rate limiting, auth, paging) is an external
//! collaborator; this module only fixes its interface. [`JsonlProvider`]
//! is the bundled implementation: it replays a JSONL corpus of records,
//! evaluating each split against record text, which makes offline runs
//! and runner tests possible without network access.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use crate::error::Result;
use crate::record::RawRecord;

/// Errors a search provider may signal for a single query.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// The provider refused the query as over-broad (e.g. a hard result
    /// cap). Treated as equivalent to "over threshold": the split is
    /// routed to the excluded set and the run continues.
    #[error("query rejected: {0}")]
    QueryRejected(String),

    /// Transport or provider failure. Fatal for the run.
    #[error("provider failure: {0}")]
    Failure(String),
}

/// A provider's answer for one query.
#[derive(Debug, Clone, Default)]
pub struct SearchResponse {
    /// Total number of matching records.
    pub total: u64,
    /// The matching records; empty when downloading was not requested.
    pub records: Vec<RawRecord>,
}

/// A bibliographic search backend.
pub trait SearchProvider {
    /// Execute one field-scoped query.
    ///
    /// Returns the total matching-record count and, if `download` is
    /// set, the full record list.
    fn search(
        &self,
        query: &str,
        download: bool,
    ) -> std::result::Result<SearchResponse, ProviderError>;
}

/// Offline provider replaying a fixed corpus of records.
///
/// A split matches a record when every AND-clause matches; a clause
/// matches when any of its quoted literals occurs (case-insensitively)
/// in the record's title, description, or author keywords. An empty
/// split carries no constraint and matches the whole corpus.
#[derive(Debug, Clone, Default)]
pub struct JsonlProvider {
    records: Vec<RawRecord>,
    /// Result cap above which the provider rejects the query outright,
    /// mimicking live providers' over-broad errors.
    max_results: Option<u64>,
}

impl JsonlProvider {
    /// Create a provider over an in-memory corpus.
    pub fn new(records: Vec<RawRecord>) -> Self {
        JsonlProvider {
            records,
            max_results: None,
        }
    }

    /// Load a corpus from a JSONL file, one record object per line.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let mut records = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            records.push(serde_json::from_str(&line)?);
        }
        Ok(JsonlProvider::new(records))
    }

    /// Set a result cap above which queries are rejected as over-broad.
    pub fn with_max_results(mut self, cap: u64) -> Self {
        self.max_results = Some(cap);
        self
    }

    /// Consume the provider and take its corpus.
    pub fn into_records(self) -> Vec<RawRecord> {
        self.records
    }

    /// The number of records in the corpus.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the corpus is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl SearchProvider for JsonlProvider {
    fn search(
        &self,
        query: &str,
        download: bool,
    ) -> std::result::Result<SearchResponse, ProviderError> {
        let clauses = parse_clauses(query);
        let matching: Vec<&RawRecord> = self
            .records
            .iter()
            .filter(|record| matches_clauses(record, &clauses))
            .collect();

        let total = matching.len() as u64;
        if let Some(cap) = self.max_results
            && total > cap
        {
            return Err(ProviderError::QueryRejected(format!(">{cap}")));
        }

        let records = if download {
            matching.into_iter().cloned().collect()
        } else {
            Vec::new()
        };
        Ok(SearchResponse { total, records })
    }
}

/// Decompose a rendered split into AND-clauses of OR-alternatives.
///
/// The query is split on ` AND ` occurring outside quotes; within each
/// clause the quoted literals are the alternatives (a plain clause has
/// one, a parenthesized OR-group has several). The field-scope wrapper,
/// e.g. `TITLE-ABS-KEY(...)`, is stripped first.
fn parse_clauses(query: &str) -> Vec<Vec<String>> {
    let body = strip_scope(query);
    split_outside_quotes(body, " AND ")
        .into_iter()
        .map(|clause| quoted_literals(&clause))
        .filter(|alternatives| !alternatives.is_empty())
        .collect()
}

fn strip_scope(query: &str) -> &str {
    if let Some(rest) = query.strip_prefix("TITLE-ABS-KEY(")
        && let Some(body) = rest.strip_suffix(')')
    {
        body
    } else {
        query
    }
}

fn split_outside_quotes(text: &str, separator: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut rest = text;

    while !rest.is_empty() {
        if !in_quotes && rest.starts_with(separator) {
            parts.push(std::mem::take(&mut current));
            rest = &rest[separator.len()..];
            continue;
        }
        // Separator and quote are both ASCII, so a char step is safe.
        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            if c == '"' {
                in_quotes = !in_quotes;
            }
            current.push(c);
            rest = chars.as_str();
        }
    }
    parts.push(current);
    parts
}

fn quoted_literals(clause: &str) -> Vec<String> {
    clause
        .split('"')
        .skip(1)
        .step_by(2)
        .map(|literal| literal.to_string())
        .collect()
}

fn matches_clauses(record: &RawRecord, clauses: &[Vec<String>]) -> bool {
    let text = record_text(record);
    clauses.iter().all(|alternatives| {
        alternatives
            .iter()
            .any(|literal| text.contains(&literal.to_lowercase()))
    })
}

fn record_text(record: &RawRecord) -> String {
    let mut text = String::new();
    for field in [&record.title, &record.description, &record.authkeywords] {
        if let Some(value) = field {
            text.push_str(&value.to_lowercase());
            text.push(' ');
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<RawRecord> {
        let titles = [
            "Digital Twin driven assembly planning",
            "Virtual Reality for gaming",
            "Heuristics for flexible manufacturing",
        ];
        titles
            .iter()
            .enumerate()
            .map(|(i, title)| RawRecord {
                doi: Some(format!("10.1000/{i}")),
                title: Some(title.to_string()),
                description: Some("An abstract.".to_string()),
                ..RawRecord::default()
            })
            .collect()
    }

    #[test]
    fn test_parse_clauses() {
        let clauses =
            parse_clauses("TITLE-ABS-KEY(\"Operations Research\" AND (\"Flexible\" OR \"Matrix\"))");
        assert_eq!(
            clauses,
            vec![
                vec!["Operations Research".to_string()],
                vec!["Flexible".to_string(), "Matrix".to_string()]
            ]
        );
    }

    #[test]
    fn test_parse_clauses_ignores_and_inside_quotes() {
        let clauses = parse_clauses("\"Search AND Rescue\" AND \"Robotics\"");
        assert_eq!(
            clauses,
            vec![
                vec!["Search AND Rescue".to_string()],
                vec!["Robotics".to_string()]
            ]
        );
    }

    #[test]
    fn test_search_conjunction() {
        let provider = JsonlProvider::new(corpus());
        let response = provider
            .search("\"Digital Twin\" AND \"Assembly\"", true)
            .unwrap();

        assert_eq!(response.total, 1);
        assert_eq!(
            response.records[0].title.as_deref(),
            Some("Digital Twin driven assembly planning")
        );
    }

    #[test]
    fn test_search_alternation() {
        let provider = JsonlProvider::new(corpus());
        let response = provider
            .search("(\"Gaming\" OR \"Manufacturing\")", false)
            .unwrap();

        assert_eq!(response.total, 2);
        // Not downloading keeps the record list empty.
        assert!(response.records.is_empty());
    }

    #[test]
    fn test_search_zero_results() {
        let provider = JsonlProvider::new(corpus());
        let response = provider.search("\"Quantum Chromodynamics\"", true).unwrap();
        assert_eq!(response.total, 0);
    }

    #[test]
    fn test_search_empty_split_matches_everything() {
        let provider = JsonlProvider::new(corpus());
        let response = provider.search("", true).unwrap();
        assert_eq!(response.total, 3);
    }

    #[test]
    fn test_search_rejects_over_cap() {
        let provider = JsonlProvider::new(corpus()).with_max_results(1);
        let result = provider.search("\"An abstract.\"", true);

        match result {
            Err(ProviderError::QueryRejected(label)) => assert_eq!(label, ">1"),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_from_path() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"doi": "10.1000/a", "title": "First"}}"#).unwrap();
        writeln!(file).unwrap();
        writeln!(file, r#"{{"doi": "10.1000/b", "title": "Second"}}"#).unwrap();

        let provider = JsonlProvider::from_path(file.path()).unwrap();
        assert_eq!(provider.len(), 2);
    }
}
