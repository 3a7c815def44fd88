//! CSV source reading.
//!
//! The source is read fresh every cycle. When the file does not exist, the
//! sample dataset is written in its place so the board has something to show.

mod sample;

pub use sample::{SAMPLE_HEADER, SAMPLE_ROWS, sample_csv, sample_records};

use snafu::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use flapboard_core::emit;
use flapboard_core::metrics::events::SampleSourceCreated;

use crate::error::{
    DecodeSnafu, HeaderSnafu, ReadSnafu, RecordError, SourceError, StatSnafu, WriteSampleSnafu,
};
use crate::record::SourceRecord;

/// One read of the source: decoded rows, and per-row failures in file order.
pub type SourceBatch = Vec<Result<SourceRecord, RecordError>>;

/// Decode CSV bytes into records.
///
/// A bad header fails the whole read. A bad row only fails that row.
pub fn parse_records(data: &[u8], path: &Path) -> Result<SourceBatch, SourceError> {
    let mut reader = csv::Reader::from_reader(data);
    reader.headers().context(HeaderSnafu { path })?;

    Ok(reader
        .deserialize::<SourceRecord>()
        .enumerate()
        .map(|(index, result)| result.context(DecodeSnafu { row: index + 1 }))
        .collect())
}

/// A CSV file of listings.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every row, creating the sample file first if the source is missing.
    pub async fn read(&self, board: &str) -> Result<SourceBatch, SourceError> {
        let exists = tokio::fs::try_exists(&self.path)
            .await
            .context(StatSnafu { path: &self.path })?;
        if !exists {
            self.create_sample(board).await?;
        }

        let data = tokio::fs::read(&self.path)
            .await
            .context(ReadSnafu { path: &self.path })?;
        let batch = parse_records(&data, &self.path)?;

        debug!(
            target = board,
            path = %self.path.display(),
            rows = batch.len(),
            "Read source"
        );
        Ok(batch)
    }

    async fn create_sample(&self, board: &str) -> Result<(), SourceError> {
        warn!(
            target = board,
            path = %self.path.display(),
            "Source file not found, creating sample data"
        );

        let data = sample_csv()?;
        tokio::fs::write(&self.path, data)
            .await
            .context(WriteSampleSnafu { path: &self.path })?;

        emit!(SampleSourceCreated {
            rows: SAMPLE_ROWS.len() as u64,
            target: board.to_string(),
        });
        Ok(())
    }
}
