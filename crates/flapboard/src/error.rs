//! Error types for the board refresh pipeline.
//!
//! Each stage of a refresh cycle has its own error enum. `PipelineError`
//! wraps them so the polling loop can report a failed cycle as a whole.

use snafu::prelude::*;
use std::path::PathBuf;

pub use flapboard_core::error::ConfigError;

/// Errors computing a recency code from a posting date.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RecencyError {
    /// The date is not `YYYY-MM-DD`.
    #[snafu(display("Invalid date '{value}': {source}"))]
    InvalidDate {
        value: String,
        source: chrono::ParseError,
    },

    /// The date carries a sign or other non-digit before the year.
    #[snafu(display("Invalid date '{value}': year must start with a digit"))]
    SignedDate { value: String },
}

/// Errors decoding a single source row.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RecordError {
    /// The row could not be decoded (wrong field count, bad UTF-8).
    #[snafu(display("Failed to decode row {row}: {source}"))]
    Decode { row: usize, source: csv::Error },
}

/// Errors reading the source file.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum SourceError {
    /// Failed to check whether the source file exists.
    #[snafu(display("Failed to stat source {}: {source}", path.display()))]
    Stat {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to read the source file.
    #[snafu(display("Failed to read source {}: {source}", path.display()))]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The header row could not be decoded.
    #[snafu(display("Failed to read header of {}: {source}", path.display()))]
    Header { path: PathBuf, source: csv::Error },

    /// Failed to encode the sample dataset.
    #[snafu(display("Failed to encode sample data: {source}"))]
    EncodeSample { source: csv::Error },

    /// Failed to write the sample dataset.
    #[snafu(display("Failed to write sample source {}: {source}", path.display()))]
    WriteSample {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors serializing a snapshot.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum SnapshotError {
    /// Failed to serialize the snapshot to JSON.
    #[snafu(display("Failed to serialize snapshot: {source}"))]
    Serialize { source: serde_json::Error },
}

/// Errors publishing a snapshot file.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum SinkError {
    /// Failed to write the temporary snapshot file.
    #[snafu(display("Failed to write temporary snapshot {}: {source}", path.display()))]
    WriteTemp {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to move the temporary file over the published snapshot.
    #[snafu(display("Failed to replace snapshot {}: {source}", path.display()))]
    Replace {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors that fail a whole refresh cycle.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum PipelineError {
    /// Source error.
    #[snafu(display("Source error: {source}"))]
    Source { source: SourceError },

    /// Snapshot error.
    #[snafu(display("Snapshot error: {source}"))]
    Snapshot { source: SnapshotError },

    /// Sink error.
    #[snafu(display("Sink error: {source}"))]
    Sink { source: SinkError },
}

impl PipelineError {
    /// Batch-level failures outside file I/O; logged as critical.
    pub fn is_critical(&self) -> bool {
        matches!(self, PipelineError::Snapshot { .. })
    }

    /// The cycle stage that failed, for log context.
    pub fn stage(&self) -> &'static str {
        match self {
            PipelineError::Source { .. } => "read",
            PipelineError::Snapshot { .. } => "build",
            PipelineError::Sink { .. } => "write",
        }
    }
}

impl From<SourceError> for PipelineError {
    fn from(source: SourceError) -> Self {
        PipelineError::Source { source }
    }
}

impl From<SnapshotError> for PipelineError {
    fn from(source: SnapshotError) -> Self {
        PipelineError::Snapshot { source }
    }
}

impl From<SinkError> for PipelineError {
    fn from(source: SinkError) -> Self {
        PipelineError::Sink { source }
    }
}
