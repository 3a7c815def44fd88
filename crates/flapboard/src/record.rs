//! Source records and the board entries derived from them.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::recency::{self, recency_code};
use crate::status::{StatusCode, classify};

/// Placeholder for missing category and description fields.
pub const UNKNOWN: &str = "Unknown";

/// Every listing on the board is in the same city.
pub const LOCATION: &str = "San Francisco";

/// One row of the source CSV.
///
/// Field names follow the CSV header (`type,offer,date_posted,notes,status`).
/// Missing columns and empty fields both read as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRecord {
    #[serde(rename = "type", default)]
    pub category: Option<String>,
    #[serde(rename = "offer", default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date_posted: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(rename = "status", default)]
    pub status_text: Option<String>,
}

/// One display-ready row of the board, serialized with the board's field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputEntry {
    #[serde(rename = "line")]
    pub category: String,
    #[serde(rename = "terminal")]
    pub label: String,
    #[serde(rename = "scheduled")]
    pub recency_code: String,
    pub remarks: String,
    #[serde(rename = "status")]
    pub status_code: StatusCode,
    #[serde(rename = "stop")]
    pub location: String,
}

impl OutputEntry {
    /// Numeric value of the recency code used for ordering.
    pub fn sort_key(&self) -> i64 {
        recency::sort_key(&self.recency_code)
    }
}

/// Map a source record to a board entry.
///
/// Never fails: missing fields take their defaults and a bad date becomes the
/// recency sentinel.
pub fn transform(record: &SourceRecord, now: NaiveDateTime) -> OutputEntry {
    OutputEntry {
        category: record
            .category
            .clone()
            .unwrap_or_else(|| UNKNOWN.to_string()),
        label: record
            .description
            .clone()
            .unwrap_or_else(|| UNKNOWN.to_string()),
        recency_code: recency_code(record.date_posted.as_deref(), now),
        remarks: record.notes.clone().unwrap_or_default(),
        status_code: classify(record.status_text.as_deref(), record.notes.as_deref()),
        location: LOCATION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recency::SENTINEL;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 9, 10)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn record(date_posted: &str, notes: &str, status: &str) -> SourceRecord {
        SourceRecord {
            category: Some("Housing".to_string()),
            description: Some("2BR Apartment in Mission".to_string()),
            date_posted: Some(date_posted.to_string()),
            notes: Some(notes.to_string()),
            status_text: Some(status.to_string()),
        }
    }

    #[test]
    fn test_transform_copies_fields() {
        let entry = transform(&record("2023-09-03", "Pet friendly", "Open"), now());

        assert_eq!(entry.category, "Housing");
        assert_eq!(entry.label, "2BR Apartment in Mission");
        assert_eq!(entry.recency_code, "007");
        assert_eq!(entry.remarks, "Pet friendly");
        assert_eq!(entry.status_code, StatusCode::Open);
        assert_eq!(entry.location, LOCATION);
    }

    #[test]
    fn test_transform_defaults_missing_fields() {
        let entry = transform(&SourceRecord::default(), now());

        assert_eq!(entry.category, UNKNOWN);
        assert_eq!(entry.label, UNKNOWN);
        assert_eq!(entry.recency_code, SENTINEL);
        assert_eq!(entry.remarks, "");
        assert_eq!(entry.status_code, StatusCode::Open);
        assert_eq!(entry.location, LOCATION);
    }

    #[test]
    fn test_transform_bad_date_keeps_entry() {
        let entry = transform(
            &record("not-a-date", "Available weekends", "Application Required"),
            now(),
        );

        assert_eq!(entry.recency_code, SENTINEL);
        assert_eq!(entry.status_code, StatusCode::ApplicationRequired);
        assert_eq!(entry.sort_key(), 999);
    }

    #[test]
    fn test_entry_wire_names() {
        let entry = transform(&record("2023-09-10", "Pet friendly", "Open"), now());
        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "line": "Housing",
                "terminal": "2BR Apartment in Mission",
                "scheduled": "000",
                "remarks": "Pet friendly",
                "status": "A",
                "stop": "San Francisco",
            })
        );
    }
}
