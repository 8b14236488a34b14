// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::model::ConfigFile;
use crate::errors::Result;

/// Load a configuration file from a given path.
///
/// This only performs TOML deserialization; semantic validation (port
/// bounds, required host, address syntax) happens when the options are fed
/// to the argument builders.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let contents = fs::read_to_string(path.as_ref())?;
    let config: ConfigFile = toml::from_str(&contents)?;
    Ok(config)
}

/// Default config path: `Srtlactl.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Srtlactl.toml")
}
