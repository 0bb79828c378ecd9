//! Publisher configuration.
//!
//! An optional TOML file supplies the base settings; command-line flags and
//! their environment fallbacks override individual fields.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_BUCKET: &str = "artifacts";
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts/contracts";
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Resolved settings for one publish run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublisherConfig {
    /// Storage project URL, without trailing slash.
    pub storage_url: String,
    /// Service-role key sent as bearer token and `apikey`.
    pub service_key: String,
    pub bucket: String,
    /// Prepended to `<Name>.json` to form the object key.
    pub key_prefix: String,
    pub artifacts_dir: PathBuf,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

/// On-disk TOML layout. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub storage_url: Option<String>,
    pub service_key: Option<String>,
    pub bucket: Option<String>,
    pub key_prefix: Option<String>,
    pub artifacts_dir: Option<PathBuf>,
    pub connect_timeout_secs: Option<u64>,
    pub request_timeout_secs: Option<u64>,
}

/// Values from flags / environment; `Some` wins over the file.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub storage_url: Option<String>,
    pub service_key: Option<String>,
    pub bucket: Option<String>,
    pub key_prefix: Option<String>,
    pub artifacts_dir: Option<PathBuf>,
}

impl FileConfig {
    /// Reads and parses a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

impl PublisherConfig {
    /// Merges file settings with overrides and applies defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when the storage URL or service key
    /// is not set anywhere.
    pub fn resolve(file: FileConfig, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let storage_url = overrides
            .storage_url
            .or(file.storage_url)
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing("storage_url"))?;
        let service_key = overrides
            .service_key
            .or(file.service_key)
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::Missing("service_key"))?;

        Ok(Self {
            storage_url: storage_url.trim_end_matches('/').to_string(),
            service_key,
            bucket: overrides
                .bucket
                .or(file.bucket)
                .unwrap_or_else(|| DEFAULT_BUCKET.to_string()),
            key_prefix: overrides.key_prefix.or(file.key_prefix).unwrap_or_default(),
            artifacts_dir: overrides
                .artifacts_dir
                .or(file.artifacts_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ARTIFACTS_DIR)),
            connect_timeout: Duration::from_secs(
                file.connect_timeout_secs.unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS),
            ),
            request_timeout: Duration::from_secs(
                file.request_timeout_secs.unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
            ),
        })
    }
}
