//! Configuration types and file loading shared across flapboard crates.

mod loader;
mod path;

pub use loader::load_file;
pub use path::{CliArgs, DEFAULT_CONFIG_PATH, is_yaml_file};

use serde::{Deserialize, Serialize};
use snafu::prelude::*;

use crate::error::{ConfigError, MetricsAddressSnafu, UnknownLogLevelSnafu};

/// Log levels accepted by `logging.log_level`.
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Force debug-level output regardless of `log_level`.
    #[serde(default)]
    pub enable_debug: bool,
    /// Base log level (default: "info").
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_debug: false,
            log_level: default_log_level(),
        }
    }
}

impl LoggingConfig {
    /// The filter directive to use when `RUST_LOG` is not set.
    pub fn effective_level(&self) -> String {
        if self.enable_debug {
            "debug".to_string()
        } else {
            self.log_level.to_ascii_lowercase()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.log_level.to_ascii_lowercase();
        ensure!(
            LOG_LEVELS.contains(&level.as_str()),
            UnknownLogLevelSnafu {
                level: self.log_level.clone()
            }
        );
        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Metrics configuration for the Prometheus endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Serve metrics over HTTP (default: false).
    #[serde(default)]
    pub enabled: bool,
    /// Address to bind the metrics listener (default: "127.0.0.1:9090").
    #[serde(default = "default_metrics_address")]
    pub address: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            address: default_metrics_address(),
        }
    }
}

impl MetricsConfig {
    pub fn socket_addr(&self) -> Result<std::net::SocketAddr, ConfigError> {
        self.address.parse().context(MetricsAddressSnafu {
            address: self.address.clone(),
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.enabled {
            self.socket_addr()?;
        }
        Ok(())
    }
}

fn default_metrics_address() -> String {
    "127.0.0.1:9090".to_string()
}
