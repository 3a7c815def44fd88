//! Snapshot publishing.
//!
//! The snapshot is written to a temporary file next to the target and then
//! renamed over it, so the board never reads a half-written document. If any
//! step fails the previously published file is left as it was.

use snafu::prelude::*;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::error::{ReplaceSnafu, SinkError, WriteTempSnafu};

/// Fallback temp file stem when the target path has no file name.
const DEFAULT_TEMP_STEM: &str = "snapshot";

/// Writes serialized snapshots to a single output path.
#[derive(Debug, Clone)]
pub struct SnapshotWriter {
    path: PathBuf,
    temp_path: PathBuf,
}

impl SnapshotWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let temp_path = temp_path_for(&path);
        Self { path, temp_path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the published snapshot with `contents`.
    pub async fn publish(&self, contents: &[u8]) -> Result<(), SinkError> {
        tokio::fs::write(&self.temp_path, contents)
            .await
            .context(WriteTempSnafu {
                path: &self.temp_path,
            })?;

        let renamed = tokio::fs::rename(&self.temp_path, &self.path).await;
        if renamed.is_err() {
            // Best effort; the rename error is the one reported.
            let _ = tokio::fs::remove_file(&self.temp_path).await;
        }
        renamed.context(ReplaceSnafu { path: &self.path })
    }
}

/// `dir/output.json` -> `dir/.output.json.tmp`
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or(OsStr::new(DEFAULT_TEMP_STEM)));
    name.push(".tmp");
    path.with_file_name(name)
}
