use std::path::PathBuf;

use thiserror::Error;

/// Custom error types for rideshare
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RideshareError {
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Invalid config file {}: {message}", path.display())]
    InvalidConfig { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for RideshareError {
    fn from(err: std::io::Error) -> Self {
        RideshareError::Io(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
