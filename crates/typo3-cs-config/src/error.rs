use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the file-backed parts of the configuration model.
///
/// Building and mutating a [`crate::Config`] never fails; only reading rule
/// overrides from disk and writing rendered configuration can.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid rule overrides in {origin}: {source}")]
    InvalidRules {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] serde_json::Error),
}
