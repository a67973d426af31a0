use std::path::PathBuf;

use thiserror::Error;

/// Custom error types for sqlhint
#[derive(Debug, Error)]
pub enum SqlhintError {
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },
}
