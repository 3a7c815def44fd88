//! Configuration for the flapboard service.
//!
//! Every key has a default, so a partial file only overrides what it names.
//! A file that is missing, malformed or fails validation is replaced by the
//! defaults as a whole.

use serde::{Deserialize, Serialize};
use snafu::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;
use flapboard_core::config::{LoggingConfig, MetricsConfig, load_file};
use flapboard_core::error::{EmptyPathSnafu, JsonParseSnafu, ZeroIntervalSnafu};

/// Where listings are read from and the snapshot is written to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Source CSV (default: "sf_resources.csv").
    #[serde(default = "default_csv_file_path")]
    pub csv_file_path: PathBuf,
    /// Published snapshot (default: "output.json").
    #[serde(default = "default_output_json_path")]
    pub output_json_path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            csv_file_path: default_csv_file_path(),
            output_json_path: default_output_json_path(),
        }
    }
}

fn default_csv_file_path() -> PathBuf {
    PathBuf::from("sf_resources.csv")
}

fn default_output_json_path() -> PathBuf {
    PathBuf::from("output.json")
}

/// Refresh loop timing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshConfig {
    /// Seconds to sleep after each cycle (default: 20).
    #[serde(default = "default_interval_seconds")]
    pub interval_seconds: u64,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_seconds: default_interval_seconds(),
        }
    }
}

impl RefreshConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_seconds)
    }
}

fn default_interval_seconds() -> u64 {
    20
}

/// Main configuration for flapboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub refresh: RefreshConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

impl Config {
    /// Load and validate configuration from a JSON or YAML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let config: Config = load_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate configuration from a JSON string.
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(contents).context(JsonParseSnafu)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults on any error.
    ///
    /// The error is handed back so it can be logged once tracing is set up.
    pub fn load_or_default(path: &Path) -> (Self, Option<ConfigError>) {
        match Self::from_file(path) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure!(
            !self.data.csv_file_path.as_os_str().is_empty(),
            EmptyPathSnafu {
                key: "data.csv_file_path"
            }
        );
        ensure!(
            !self.data.output_json_path.as_os_str().is_empty(),
            EmptyPathSnafu {
                key: "data.output_json_path"
            }
        );
        ensure!(self.refresh.interval_seconds > 0, ZeroIntervalSnafu);
        self.logging.validate()?;
        self.metrics.validate()?;
        Ok(())
    }
}
