//! Error types shared by the flapboard crates.
//!
//! Configuration and metrics errors live here because both are produced by
//! startup code in this crate. Pipeline-stage errors are defined next to the
//! pipeline in the `flapboard` crate.

use snafu::prelude::*;

// ============ Config Errors ============

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[snafu(display("Failed to read configuration file {}: {source}", path.display()))]
    ReadFile {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse JSON configuration.
    #[snafu(display("Failed to parse JSON: {source}"))]
    JsonParse { source: serde_json::Error },

    /// Failed to parse YAML configuration.
    #[snafu(display("Failed to parse YAML: {source}"))]
    YamlParse { source: serde_yaml::Error },

    /// A path option is empty.
    #[snafu(display("'{key}' cannot be empty"))]
    EmptyPath { key: &'static str },

    /// Refresh interval of zero would spin the loop.
    #[snafu(display("'refresh.interval_seconds' must be greater than zero"))]
    ZeroInterval,

    /// Log level is not one of trace, debug, info, warn, error.
    #[snafu(display("Unknown log level '{level}'"))]
    UnknownLogLevel { level: String },

    /// Metrics address is not a socket address.
    #[snafu(display("Invalid metrics address '{address}': {source}"))]
    MetricsAddress {
        address: String,
        source: std::net::AddrParseError,
    },
}

impl ConfigError {
    /// Check if this error means the config file does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            ConfigError::ReadFile { source, .. } => {
                source.kind() == std::io::ErrorKind::NotFound
            }
            _ => false,
        }
    }
}

// ============ Metrics Errors ============

/// Errors that can occur during metrics initialization.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum MetricsError {
    /// Failed to install the Prometheus recorder and listener.
    #[snafu(display("Failed to initialize Prometheus exporter: {source}"))]
    PrometheusInit {
        source: metrics_exporter_prometheus::BuildError,
    },
}
