//! Full bibliographic records as returned by the search provider.

use serde::{Deserialize, Serialize};

/// One search result record with the provider's full column set.
///
/// Field names mirror the provider's result columns (hence the serde
/// renames for the camelCase ones), so a JSONL corpus exported from the
/// provider deserializes directly. Every field is optional; providers
/// routinely leave columns empty.
///
/// `split` is not a provider column: the search runner tags each record
/// with the split that retrieved it, keyed by split rather than by
/// completion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    /// The split search string that retrieved this record.
    pub split: Option<String>,
    pub eid: Option<String>,
    pub doi: Option<String>,
    pub pii: Option<String>,
    pub pubmed_id: Option<String>,
    pub title: Option<String>,
    pub subtype: Option<String>,
    #[serde(rename = "subtypeDescription")]
    pub subtype_description: Option<String>,
    pub creator: Option<String>,
    pub afid: Option<String>,
    pub affilname: Option<String>,
    pub affiliation_city: Option<String>,
    pub affiliation_country: Option<String>,
    pub author_count: Option<u64>,
    pub author_names: Option<String>,
    pub author_ids: Option<String>,
    pub author_afids: Option<String>,
    #[serde(rename = "coverDate")]
    pub cover_date: Option<String>,
    #[serde(rename = "coverDisplayDate")]
    pub cover_display_date: Option<String>,
    #[serde(rename = "publicationName")]
    pub publication_name: Option<String>,
    pub issn: Option<String>,
    pub source_id: Option<String>,
    #[serde(rename = "eIssn")]
    pub e_issn: Option<String>,
    #[serde(rename = "aggregationType")]
    pub aggregation_type: Option<String>,
    pub volume: Option<String>,
    #[serde(rename = "issueIdentifier")]
    pub issue_identifier: Option<String>,
    pub article_number: Option<String>,
    #[serde(rename = "pageRange")]
    pub page_range: Option<String>,
    pub description: Option<String>,
    pub authkeywords: Option<String>,
    pub citedby_count: Option<u64>,
    pub openaccess: Option<u8>,
    pub fund_acr: Option<String>,
    pub fund_no: Option<String>,
    pub fund_sponsor: Option<String>,
}

impl RawRecord {
    /// Create a new empty record.
    pub fn new() -> Self {
        RawRecord::default()
    }

    /// Check if the record carries a non-empty DOI.
    pub fn has_doi(&self) -> bool {
        self.doi.as_deref().is_some_and(|doi| !doi.is_empty())
    }
}
