mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::RideshareError;

pub use types::{Config, GeocoderConfig, SuggestConfig};

const CONFIG_DIR: &str = "rideshare";
const CONFIG_FILE: &str = "config.toml";

/// Default location of the config file (`~/.config/rideshare/config.toml`)
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from the default location
///
/// A missing file is not an error and yields the defaults.
pub fn load_config() -> Result<Config, RideshareError> {
    match config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => Ok(Config::default()),
    }
}

/// Load the config from an explicit path, which must exist
pub fn load_config_from_path(path: &Path) -> Result<Config, RideshareError> {
    if !path.exists() {
        return Err(RideshareError::ConfigNotFound(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path)?;
    parse_config(&contents).map_err(|e| RideshareError::InvalidConfig {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })
}

pub fn parse_config(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(content)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
