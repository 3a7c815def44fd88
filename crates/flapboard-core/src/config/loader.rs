//! Typed config file loading.

use std::path::Path;

use serde::de::DeserializeOwned;
use snafu::prelude::*;

use super::is_yaml_file;
use crate::error::{ConfigError, JsonParseSnafu, ReadFileSnafu, YamlParseSnafu};

/// Read and deserialize a config file, choosing the format by extension.
///
/// `.yaml`/`.yml` files are parsed as YAML, everything else as JSON.
pub fn load_file<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let contents = std::fs::read_to_string(path).context(ReadFileSnafu { path })?;

    if is_yaml_file(path) {
        serde_yaml::from_str(&contents).context(YamlParseSnafu)
    } else {
        serde_json::from_str(&contents).context(JsonParseSnafu)
    }
}
