//! Config file path handling.

use std::path::{Path, PathBuf};

use clap::Parser;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Check if a path has a YAML extension.
pub fn is_yaml_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "yaml" || ext == "yml")
        .unwrap_or(false)
}

#[derive(Parser, Debug)]
#[command(version)]
pub struct CliArgs {
    /// Path to configuration file (JSON, or YAML with a .yaml/.yml extension)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}
