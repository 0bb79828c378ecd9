use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort the whole batch.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("failed to read artifacts directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failure of a single artifact. Recorded in the report; siblings continue.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Upload(#[from] StorageError),
}

/// Object-storage failures.
#[derive(Debug, Error)]
pub enum StorageError {
    /// HTTP client could not be constructed.
    #[error("storage client unavailable: {0}")]
    Client(String),
    /// Request never produced a response.
    #[error("storage request failed: {0}")]
    Transport(String),
    /// The storage API answered with a non-success status.
    #[error("storage rejected upload (status {status}): {message}")]
    Rejected { status: u16, message: String },
}

/// Configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("missing required setting `{0}`")]
    Missing(&'static str),
}
