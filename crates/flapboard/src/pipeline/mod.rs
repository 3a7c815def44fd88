//! Refresh pipeline: read the source, build a snapshot, publish it.
//!
//! `BoardProcessor` implements the polling processor from flapboard-core, so
//! the loop, its sleep and its shutdown handling are shared code. Failures are
//! reported by the processor and the loop moves on to the next cycle.

use async_trait::async_trait;
use snafu::prelude::*;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use flapboard_core::emit;
use flapboard_core::metrics::events::{RecordsSkipped, SnapshotPublished};
use flapboard_core::{Clock, LoopStats, PollingProcessor, run_polling_loop};

use crate::config::Config;
use crate::error::{PipelineError, SinkSnafu, SnapshotSnafu, SourceSnafu};
use crate::sink::SnapshotWriter;
use crate::snapshot::{self, Snapshot};
use crate::source::{CsvSource, SourceBatch};

/// Service label for metrics.
pub const SERVICE: &str = "flapboard";

/// Board name used in log and metric labels.
pub const BOARD: &str = "board";

/// Runs one refresh cycle per polling iteration.
pub struct BoardProcessor {
    source: CsvSource,
    sink: SnapshotWriter,
    clock: Arc<dyn Clock>,
}

impl BoardProcessor {
    pub fn new(config: &Config, clock: Arc<dyn Clock>) -> Self {
        Self {
            source: CsvSource::new(&config.data.csv_file_path),
            sink: SnapshotWriter::new(&config.data.output_json_path),
            clock,
        }
    }

    /// Run a full cycle outside the polling loop.
    pub async fn refresh(&self) -> Result<Snapshot, PipelineError> {
        let batch = self.read().await?;
        self.publish(batch).await
    }

    async fn read(&self) -> Result<SourceBatch, PipelineError> {
        self.source.read(BOARD).await.context(SourceSnafu)
    }

    async fn publish(&self, batch: SourceBatch) -> Result<Snapshot, PipelineError> {
        let now = self.clock.now();

        let skipped = batch.iter().filter(|record| record.is_err()).count();
        if skipped > 0 {
            emit!(RecordsSkipped {
                count: skipped as u64,
                target: BOARD.to_string(),
            });
        }

        let snapshot = snapshot::build(batch, now);
        let contents = snapshot.to_json().context(SnapshotSnafu)?;
        self.sink.publish(&contents).await.context(SinkSnafu)?;

        emit!(SnapshotPublished {
            entries: snapshot.metadata.count as u64,
            bytes: contents.len() as u64,
            target: BOARD.to_string(),
        });
        info!(
            target = BOARD,
            entries = snapshot.metadata.count,
            skipped,
            path = %self.sink.path().display(),
            "Snapshot published"
        );
        Ok(snapshot)
    }
}

#[async_trait]
impl PollingProcessor for BoardProcessor {
    type State = SourceBatch;
    type Error = PipelineError;

    async fn prepare(&mut self) -> Result<SourceBatch, PipelineError> {
        self.read().await
    }

    async fn process(&mut self, batch: SourceBatch) -> Result<(), PipelineError> {
        self.publish(batch).await.map(drop)
    }

    fn report_failure(&self, name: &str, error: &PipelineError) {
        if error.is_critical() {
            error!(
                target = name,
                severity = "critical",
                stage = error.stage(),
                error = %error,
                "Refresh cycle aborted, previous snapshot kept"
            );
        } else {
            error!(
                target = name,
                stage = error.stage(),
                error = %error,
                "Refresh cycle failed, previous snapshot kept"
            );
        }
    }
}

/// Run the refresh loop until `shutdown` is cancelled.
pub async fn run_board(
    config: &Config,
    clock: Arc<dyn Clock>,
    shutdown: CancellationToken,
) -> LoopStats {
    let mut processor = BoardProcessor::new(config, clock);

    info!(
        target = BOARD,
        source = %config.data.csv_file_path.display(),
        output = %config.data.output_json_path.display(),
        interval_secs = config.refresh.interval_seconds,
        "Board processor initialized"
    );

    run_polling_loop(
        &mut processor,
        config.refresh.interval(),
        shutdown,
        BOARD,
        SERVICE,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SnapshotError;
    use flapboard_core::FixedClock;

    #[test]
    fn test_report_failure_handles_critical_errors() {
        let clock = FixedClock(chrono::NaiveDateTime::default());
        let processor = BoardProcessor::new(&Config::default(), Arc::new(clock));
        let source = serde_json::from_str::<u8>("x").unwrap_err();
        let error = PipelineError::from(SnapshotError::Serialize { source });

        assert!(error.is_critical());
        processor.report_failure(BOARD, &error);
    }
}
