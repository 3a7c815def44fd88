//! Internal events for flapboard metrics emission.
//!
//! Each event struct represents a measurable occurrence in the refresh
//! pipeline. Events carry a `target` label naming the board they belong to.

use metrics::{counter, histogram};
use std::time::Duration;
use tracing::trace;

/// Trait for internal events that can be emitted as metrics.
pub trait InternalEvent {
    /// Emit this event as a metric.
    fn emit(self);
}

/// Result type for polling iterations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterationResultType {
    Processed,
    Failed,
}

impl IterationResultType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IterationResultType::Processed => "processed",
            IterationResultType::Failed => "failed",
        }
    }
}

/// Event emitted when a polling iteration completes.
pub struct IterationCompleted {
    /// Service identifier.
    pub service: &'static str,
    /// Result of the iteration.
    pub result: IterationResultType,
    pub target: String,
}

impl InternalEvent for IterationCompleted {
    fn emit(self) {
        trace!(
            service = self.service,
            result = self.result.as_str(),
            target = %self.target,
            "Iteration completed"
        );
        counter!(
            "polling_iterations_total",
            "service" => self.service,
            "result" => self.result.as_str(),
            "target" => self.target
        )
        .increment(1);
    }
}

/// Event emitted to track polling iteration duration.
pub struct IterationDuration {
    /// Service identifier.
    pub service: &'static str,
    pub duration: Duration,
    pub target: String,
}

impl InternalEvent for IterationDuration {
    fn emit(self) {
        trace!(
            service = self.service,
            duration_ms = self.duration.as_millis(),
            target = %self.target,
            "Iteration duration"
        );
        histogram!(
            "polling_iteration_duration_seconds",
            "service" => self.service,
            "target" => self.target
        )
        .record(self.duration.as_secs_f64());
    }
}

/// Event emitted when source rows are dropped because they could not be decoded.
pub struct RecordsSkipped {
    pub count: u64,
    pub target: String,
}

impl InternalEvent for RecordsSkipped {
    fn emit(self) {
        trace!(count = self.count, target = %self.target, "Records skipped");
        counter!("flapboard_records_skipped_total", "target" => self.target)
            .increment(self.count);
    }
}

/// Event emitted when a snapshot file is published.
pub struct SnapshotPublished {
    /// Entries in the published snapshot.
    pub entries: u64,
    /// Size of the serialized snapshot.
    pub bytes: u64,
    pub target: String,
}

impl InternalEvent for SnapshotPublished {
    fn emit(self) {
        trace!(
            entries = self.entries,
            bytes = self.bytes,
            target = %self.target,
            "Snapshot published"
        );
        counter!("flapboard_snapshots_published_total", "target" => self.target.clone())
            .increment(1);
        counter!("flapboard_entries_published_total", "target" => self.target)
            .increment(self.entries);
    }
}

/// Event emitted when the sample source file is written because none existed.
pub struct SampleSourceCreated {
    pub rows: u64,
    pub target: String,
}

impl InternalEvent for SampleSourceCreated {
    fn emit(self) {
        trace!(rows = self.rows, target = %self.target, "Sample source created");
        counter!("flapboard_sample_sources_created_total", "target" => self.target).increment(1);
    }
}
