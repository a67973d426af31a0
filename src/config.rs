//! Configuration loading
//!
//! TOML config at `<config_dir>/sqlhint/config.toml`. Every field has a
//! default, so a missing file, empty file, or partial section all work; only
//! an unreadable or malformed file is an error.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SqlhintError;

mod types;

pub use types::{CompletionConfig, Config};

/// Load configuration, preferring an explicit path over the default
/// location. A missing file yields the defaults.
pub fn load(path: Option<&Path>) -> Result<Config, SqlhintError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_path() {
            Some(p) => p,
            None => return Ok(Config::default()),
        },
    };

    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(&path).map_err(|source| SqlhintError::ConfigRead {
        path: path.clone(),
        source,
    })?;

    toml::from_str(&contents).map_err(|e| SqlhintError::ConfigParse {
        path,
        message: e.to_string(),
    })
}

fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sqlhint").join("config.toml"))
}
