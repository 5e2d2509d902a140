//! Error types for arbor

use std::io;

use thiserror::Error;

/// Invalid walker configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("indent must be at least {min}, got {got}")]
    IndentTooSmall { min: usize, got: usize },
}

/// Errors that abort a run.
///
/// Filesystem failures on individual entries never end up here; they are
/// rendered as placeholders instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
