//! Essential-column projection of bibliographic records.

use serde::{Deserialize, Serialize};

use crate::record::raw::RawRecord;

/// Column names of the screened dataset, in export order.
pub const COLUMNS: [&str; 14] = [
    "split",
    "doi",
    "title",
    "subtypeDescription",
    "creator",
    "author_names",
    "coverDate",
    "volume",
    "issueIdentifier",
    "pageRange",
    "description",
    "authkeywords",
    "citedby_count",
    "openaccess",
];

/// A record surviving the screening phase, reduced to the columns that
/// matter downstream. Affiliation detail, funding detail, and secondary
/// identifiers are dropped during projection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenedRecord {
    pub split: Option<String>,
    pub doi: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "subtypeDescription")]
    pub subtype_description: Option<String>,
    pub creator: Option<String>,
    pub author_names: Option<String>,
    #[serde(rename = "coverDate")]
    pub cover_date: Option<String>,
    pub volume: Option<String>,
    #[serde(rename = "issueIdentifier")]
    pub issue_identifier: Option<String>,
    #[serde(rename = "pageRange")]
    pub page_range: Option<String>,
    pub description: Option<String>,
    pub authkeywords: Option<String>,
    pub citedby_count: Option<u64>,
    pub openaccess: Option<u8>,
}

impl ScreenedRecord {
    /// Check if the record carries a non-empty DOI.
    pub fn has_doi(&self) -> bool {
        self.doi.as_deref().is_some_and(|doi| !doi.is_empty())
    }

    /// Column values in [`COLUMNS`] order, empty string for missing
    /// fields. Used by the CSV exporter.
    pub fn column_values(&self) -> Vec<String> {
        fn text(value: &Option<String>) -> String {
            value.clone().unwrap_or_default()
        }

        vec![
            text(&self.split),
            text(&self.doi),
            text(&self.title),
            text(&self.subtype_description),
            text(&self.creator),
            text(&self.author_names),
            text(&self.cover_date),
            text(&self.volume),
            text(&self.issue_identifier),
            text(&self.page_range),
            text(&self.description),
            text(&self.authkeywords),
            self.citedby_count.map(|n| n.to_string()).unwrap_or_default(),
            self.openaccess.map(|n| n.to_string()).unwrap_or_default(),
        ]
    }
}

impl From<&RawRecord> for ScreenedRecord {
    fn from(raw: &RawRecord) -> Self {
        ScreenedRecord {
            split: raw.split.clone(),
            doi: raw.doi.clone(),
            title: raw.title.clone(),
            subtype_description: raw.subtype_description.clone(),
            creator: raw.creator.clone(),
            author_names: raw.author_names.clone(),
            cover_date: raw.cover_date.clone(),
            volume: raw.volume.clone(),
            issue_identifier: raw.issue_identifier.clone(),
            page_range: raw.page_range.clone(),
            description: raw.description.clone(),
            authkeywords: raw.authkeywords.clone(),
            citedby_count: raw.citedby_count,
            openaccess: raw.openaccess,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_drops_auxiliary_columns() {
        let raw = RawRecord {
            split: Some("\"Assembly\"".to_string()),
            doi: Some("10.1000/xyz123".to_string()),
            title: Some("Assembly Planning".to_string()),
            eid: Some("2-s2.0-1".to_string()),
            affilname: Some("Some University".to_string()),
            fund_sponsor: Some("Some Agency".to_string()),
            citedby_count: Some(3),
            ..RawRecord::default()
        };

        let screened = ScreenedRecord::from(&raw);
        assert_eq!(screened.split.as_deref(), Some("\"Assembly\""));
        assert_eq!(screened.doi.as_deref(), Some("10.1000/xyz123"));
        assert_eq!(screened.citedby_count, Some(3));

        // Auxiliary columns are gone from the serialized form.
        let json = serde_json::to_value(&screened).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), COLUMNS.len());
        assert!(!object.contains_key("eid"));
        assert!(!object.contains_key("affilname"));
        assert!(!object.contains_key("fund_sponsor"));
    }

    #[test]
    fn test_column_values_match_column_order() {
        let record = ScreenedRecord {
            doi: Some("10.1000/xyz123".to_string()),
            citedby_count: Some(12),
            ..ScreenedRecord::default()
        };

        let values = record.column_values();
        assert_eq!(values.len(), COLUMNS.len());
        assert_eq!(values[1], "10.1000/xyz123");
        assert_eq!(values[12], "12");
        assert_eq!(values[0], "");
    }
}
