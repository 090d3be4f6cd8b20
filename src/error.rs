//! Error types for Scoper.
//!
//! Uses `thiserror` for ergonomic error definitions.

use crate::types::RangeError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading scope and exclusion lists.
#[derive(Error, Debug)]
pub enum ScopeError {
    #[error("scope file not found: {}", .0.display())]
    ScopeFileMissing(PathBuf),

    #[error("exclude file not found: {}", .0.display())]
    ExcludeFileMissing(PathBuf),

    #[error("failed to read {}: {reason}", path.display())]
    ReadFailed { path: PathBuf, reason: String },

    #[error("{}:{line}: {source}", path.display())]
    InvalidRangeFormat {
        path: PathBuf,
        line: usize,
        #[source]
        source: RangeError,
    },
}

/// Result type alias for list loading.
pub type ScopeResult<T> = Result<T, ScopeError>;

/// Errors related to the settings file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read settings from {}: {reason}", path.display())]
    ReadFailed { path: PathBuf, reason: String },

    #[error("invalid settings format: {0}")]
    InvalidFormat(String),
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
