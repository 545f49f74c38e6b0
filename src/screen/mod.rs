//! Screening phase: column pruning, deduplication, and removal of
//! invalid or non-primary-source records.

use std::collections::HashSet;

use log::info;
use serde::{Deserialize, Serialize};

use crate::record::{RawRecord, ScreenedRecord};

/// Subtype description tagging a record as a non-primary source.
const CONFERENCE_REVIEW: &str = "Conference Review";

/// Counts reported by the screening phase.
///
/// Each `*_removed` count is measured against the row count surviving
/// the previous filter, so the counts are cumulative and sum up:
/// `initial - duplicates_removed - conference_reviews_removed -
/// missing_doi_removed == surviving`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenReport {
    pub initial: usize,
    pub duplicates_removed: usize,
    pub conference_reviews_removed: usize,
    pub missing_doi_removed: usize,
    pub surviving: usize,
}

/// Screen collected records into the final dataset.
///
/// Projects every record down to the essential columns, then filters in
/// order: duplicate removal keyed on (doi, title) for records with a
/// DOI and (title, description) otherwise; removal of "Conference
/// Review" records; removal of records without a DOI. The first
/// occurrence of a duplicate key wins, preserving collection order.
pub fn screen(records: Vec<RawRecord>) -> (Vec<ScreenedRecord>, ScreenReport) {
    let mut report = ScreenReport {
        initial: records.len(),
        ..ScreenReport::default()
    };
    info!("screening {} records", report.initial);

    let projected: Vec<ScreenedRecord> = records.iter().map(ScreenedRecord::from).collect();

    // Duplicate removal.
    let mut seen: HashSet<DuplicateKey> = HashSet::new();
    let deduplicated: Vec<ScreenedRecord> = projected
        .into_iter()
        .filter(|record| seen.insert(duplicate_key(record)))
        .collect();
    report.duplicates_removed = report.initial - deduplicated.len();
    info!("removed {} duplicates", report.duplicates_removed);

    // Conference reviews are summaries of other indexed work, not
    // primary sources.
    let before = deduplicated.len();
    let primary: Vec<ScreenedRecord> = deduplicated
        .into_iter()
        .filter(|record| record.subtype_description.as_deref() != Some(CONFERENCE_REVIEW))
        .collect();
    report.conference_reviews_removed = before - primary.len();
    info!(
        "removed {} conference reviews",
        report.conference_reviews_removed
    );

    // A record without a DOI cannot be uniquely identified downstream.
    let before = primary.len();
    let surviving: Vec<ScreenedRecord> = primary
        .into_iter()
        .filter(ScreenedRecord::has_doi)
        .collect();
    report.missing_doi_removed = before - surviving.len();
    info!("removed {} records without DOI", report.missing_doi_removed);

    report.surviving = surviving.len();
    info!(
        "{} of {} records survive screening",
        report.surviving, report.initial
    );
    (surviving, report)
}

/// Deduplication key. The variant doubles as a discriminant between the
/// two key spaces, so a DOI-bearing record can never collide with a
/// DOI-less record whose (title, description) happens to spell the same
/// tuple.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum DuplicateKey {
    /// (doi, title), for records carrying a DOI.
    Doi(String, String),
    /// (title, description), for records without one.
    NoDoi(String, String),
}

fn duplicate_key(record: &ScreenedRecord) -> DuplicateKey {
    if record.has_doi() {
        DuplicateKey::Doi(
            record.doi.clone().unwrap_or_default(),
            record.title.clone().unwrap_or_default(),
        )
    } else {
        DuplicateKey::NoDoi(
            record.title.clone().unwrap_or_default(),
            record.description.clone().unwrap_or_default(),
        )
    }
}
