//! Snapshot building.
//!
//! A snapshot is the complete document the board reads: every entry, sorted by
//! recency, plus metadata about when it was generated. Each refresh builds a
//! new one from scratch.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use snafu::prelude::*;
use tracing::{debug, warn};

use crate::error::{RecordError, SerializeSnafu, SnapshotError};
use crate::record::{OutputEntry, SourceRecord, transform};

/// Timestamp format for `metadata.last_updated`.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
/// Display format for `metadata.date`, e.g. `Sep 10, 2023`.
const DATE_DISPLAY_FORMAT: &str = "%b %d, %Y";
/// Display format for `metadata.time`, e.g. `02:30 PM`.
const TIME_DISPLAY_FORMAT: &str = "%I:%M %p";

/// Generation metadata attached to every snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotMetadata {
    pub last_updated: String,
    pub date: String,
    pub time: String,
    pub count: usize,
}

impl SnapshotMetadata {
    pub fn new(now: NaiveDateTime, count: usize) -> Self {
        Self {
            last_updated: now.format(TIMESTAMP_FORMAT).to_string(),
            date: now.format(DATE_DISPLAY_FORMAT).to_string(),
            time: now.format(TIME_DISPLAY_FORMAT).to_string(),
            count,
        }
    }
}

/// The published board document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub data: Vec<OutputEntry>,
    pub metadata: SnapshotMetadata,
}

impl Snapshot {
    /// Serialize to the board's JSON format with four-space indentation.
    pub fn to_json(&self) -> Result<Vec<u8>, SnapshotError> {
        let mut out = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
        self.serialize(&mut serializer).context(SerializeSnafu)?;
        Ok(out)
    }
}

/// Build a snapshot from one read of the source.
///
/// Rows that failed to decode are logged and left out. Entries are sorted by
/// recency, most recent (or furthest in the future) first; ties keep their
/// source order.
pub fn build<I>(records: I, now: NaiveDateTime) -> Snapshot
where
    I: IntoIterator<Item = Result<SourceRecord, RecordError>>,
{
    let mut data: Vec<OutputEntry> = records
        .into_iter()
        .filter_map(|record| match record {
            Ok(record) => Some(transform(&record, now)),
            Err(e) => {
                warn!(stage = "transform", error = %e, "Skipping undecodable record");
                None
            }
        })
        .collect();

    // `sort_by_key` is stable
    data.sort_by_key(OutputEntry::sort_key);

    debug!(count = data.len(), "Built snapshot");
    let metadata = SnapshotMetadata::new(now, data.len());
    Snapshot { data, metadata }
}
