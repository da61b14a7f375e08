//! Error types
//!
//! Interaction input never errors (rejections are `bool`/`Option`); only
//! loading configuration from outside the process can fail.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid config value for `{field}`: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
