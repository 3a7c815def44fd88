//! Built-in sample dataset, written when the source file is missing.

use snafu::prelude::*;

use crate::error::{EncodeSampleSnafu, SourceError};
use crate::record::SourceRecord;

/// Column names of the source CSV.
pub const SAMPLE_HEADER: [&str; 5] = ["type", "offer", "date_posted", "notes", "status"];

/// Sample listings, one per category.
pub const SAMPLE_ROWS: [[&str; 5]; 5] = [
    ["Housing", "2BR Apartment in Mission", "2023-08-15", "Pet friendly", "Open"],
    ["Service", "Moving assistance", "2023-09-01", "Available weekends", "Application Required"],
    ["Item", "Furniture giveaway", "2023-08-20", "Pick up only", "Open"],
    ["Job", "Software Engineer", "2023-08-25", "Remote friendly", "Application Required"],
    ["Resource", "Neighborhood guide", "2023-09-05", "Free digital download", "Open"],
];

/// The sample rows as records.
pub fn sample_records() -> Vec<SourceRecord> {
    SAMPLE_ROWS
        .iter()
        .map(|[category, description, date_posted, notes, status]| SourceRecord {
            category: Some(category.to_string()),
            description: Some(description.to_string()),
            date_posted: Some(date_posted.to_string()),
            notes: Some(notes.to_string()),
            status_text: Some(status.to_string()),
        })
        .collect()
}

/// The sample dataset encoded as CSV, header first.
pub fn sample_csv() -> Result<Vec<u8>, SourceError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(SAMPLE_HEADER).context(EncodeSampleSnafu)?;
    for row in SAMPLE_ROWS {
        writer.write_record(row).context(EncodeSampleSnafu)?;
    }
    writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
        .context(EncodeSampleSnafu)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_csv_layout() {
        let text = String::from_utf8(sample_csv().unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "type,offer,date_posted,notes,status");
        assert_eq!(
            lines[2],
            "Service,Moving assistance,2023-09-01,Available weekends,Application Required"
        );
    }
}
