//! Error types for validation runs and validator configuration.

use helios_core::DatasetError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a validation run before a verdict exists.
#[derive(Debug, Error)]
pub enum RunError {
    /// The snapshot could not be acquired
    #[error(transparent)]
    Snapshot(#[from] DatasetError),

    /// Writing the report failed
    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

impl RunError {
    /// Returns true if the snapshot does not exist.
    pub fn is_snapshot_missing(&self) -> bool {
        matches!(self, RunError::Snapshot(err) if err.is_missing())
    }
}

/// Errors raised while loading or checking a [`crate::ValidatorConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("Failed to parse config: {0}")]
    Parse(String),

    /// A setting has an unusable value
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
