//! flapboard: Publishes a CSV listing feed as a JSON snapshot for a split-flap board.
//!
//! Every refresh cycle:
//! - Reads the source CSV, writing a sample dataset if the file is missing
//! - Turns each row into a board entry with a recency code and status flag
//! - Sorts entries by recency and attaches generation metadata
//! - Replaces the published JSON snapshot in one rename

pub mod config;
pub mod error;
pub mod pipeline;
pub mod recency;
pub mod record;
pub mod sink;
pub mod snapshot;
pub mod source;
pub mod status;

// Re-export commonly used items
pub use config::Config;
pub use error::PipelineError;
pub use pipeline::{BoardProcessor, run_board};
pub use record::{OutputEntry, SourceRecord, transform};
pub use snapshot::{Snapshot, SnapshotMetadata, build};
pub use status::{StatusCode, classify};

// Re-export from flapboard-core
pub use flapboard_core::{
    CliArgs, Clock, FixedClock, LoopStats, SystemClock, cancel_on_shutdown, init_metrics,
    init_tracing,
};
