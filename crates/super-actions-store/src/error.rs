use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while assembling a store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Module '{0}' is registered more than once")]
    DuplicateModule(String),

    #[error("Failed to parse config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Initial state cannot be represented as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = StoreError> = std::result::Result<T, E>;
