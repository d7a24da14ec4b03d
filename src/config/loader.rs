// src/config/loader.rs

use std::fs;
use std::path::Path;

use crate::config::model::{LayoutConfig, RawLayoutConfig};
use crate::errors::Result;

/// Load a layout config file from a given path and return the raw,
/// partially-specified `RawLayoutConfig`.
///
/// This only performs TOML deserialization; it does **not** validate the
/// values. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawLayoutConfig> {
    let contents = fs::read_to_string(path.as_ref())?;
    let config: RawLayoutConfig = toml::from_str(&contents)?;
    Ok(config)
}

/// Load a layout config file, merge it over the defaults and validate it.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<LayoutConfig> {
    let raw = load_from_path(&path)?;
    LayoutConfig::try_from(raw)
}

/// Parse and validate a config from an in-memory TOML string.
pub fn from_toml_str(contents: &str) -> Result<LayoutConfig> {
    let raw: RawLayoutConfig = toml::from_str(contents)?;
    LayoutConfig::try_from(raw)
}

/// Resolve the config for a run: the file when one is given, otherwise the
/// built-in defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<LayoutConfig> {
    match path {
        Some(p) => load_and_validate(p),
        None => Ok(LayoutConfig::default()),
    }
}
