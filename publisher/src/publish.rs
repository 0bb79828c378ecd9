//! Concurrent upload of every discovered artifact.

use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use futures_util::future::join_all;
use serde::Serialize;

use crate::config::PublisherConfig;
use crate::discovery::{discover_artifacts, Artifact};
use crate::error::{ArtifactError, PublishError};
use crate::storage::{ObjectStore, UploadOptions, UploadReceipt};

/// An artifact that reached the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishedArtifact {
    pub contract_name: String,
    pub receipt: UploadReceipt,
}

/// An artifact that did not.
#[derive(Debug)]
pub struct FailedArtifact {
    pub contract_name: String,
    pub error: ArtifactError,
}

/// Outcome of one batch. Both lists are ordered by contract name.
#[derive(Debug, Default)]
pub struct PublishReport {
    pub uploaded: Vec<PublishedArtifact>,
    pub failed: Vec<FailedArtifact>,
}

impl PublishReport {
    /// True when no artifact failed (including the empty batch).
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn total(&self) -> usize {
        self.uploaded.len() + self.failed.len()
    }
}

/// Uploads artifacts from one build directory into one bucket.
pub struct Publisher {
    store: Arc<dyn ObjectStore>,
    bucket: String,
    key_prefix: String,
    artifacts_dir: PathBuf,
    options: UploadOptions,
}

impl Publisher {
    pub fn new(
        store: Arc<dyn ObjectStore>,
        bucket: impl Into<String>,
        key_prefix: impl Into<String>,
        artifacts_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            store,
            bucket: bucket.into(),
            key_prefix: key_prefix.into(),
            artifacts_dir: artifacts_dir.into(),
            options: UploadOptions::json_upsert(),
        }
    }

    pub fn from_config(store: Arc<dyn ObjectStore>, config: &PublisherConfig) -> Self {
        Self::new(
            store,
            config.bucket.clone(),
            config.key_prefix.clone(),
            config.artifacts_dir.clone(),
        )
    }

    /// `<prefix><Name>.json`
    pub fn object_key(&self, contract_name: &str) -> String {
        format!("{}{contract_name}.json", self.key_prefix)
    }

    /// Discovers and uploads every artifact concurrently.
    ///
    /// Per-artifact read or upload failures are collected into the report
    /// and never cancel sibling uploads.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError`] only when the artifacts directory itself
    /// cannot be listed.
    pub async fn publish_all(&self) -> Result<PublishReport, PublishError> {
        let artifacts = discover_artifacts(&self.artifacts_dir).await?;
        if artifacts.is_empty() {
            tracing::info!(dir = %self.artifacts_dir.display(), "no artifacts to publish");
            return Ok(PublishReport::default());
        }

        tracing::info!(
            count = artifacts.len(),
            bucket = %self.bucket,
            "publishing artifacts"
        );

        let outcomes = join_all(artifacts.iter().map(|artifact| self.publish_one(artifact))).await;

        let mut report = PublishReport::default();
        for (artifact, outcome) in artifacts.into_iter().zip(outcomes) {
            match outcome {
                Ok(receipt) => report.uploaded.push(PublishedArtifact {
                    contract_name: artifact.contract_name,
                    receipt,
                }),
                Err(error) => report.failed.push(FailedArtifact {
                    contract_name: artifact.contract_name,
                    error,
                }),
            }
        }
        Ok(report)
    }

    async fn publish_one(&self, artifact: &Artifact) -> Result<UploadReceipt, ArtifactError> {
        let key = self.object_key(&artifact.contract_name);

        let body = match tokio::fs::read(&artifact.path).await {
            Ok(body) => Bytes::from(body),
            Err(source) => {
                let err = ArtifactError::Read {
                    path: artifact.path.clone(),
                    source,
                };
                tracing::error!(contract = %artifact.contract_name, error = %err, "artifact read failed");
                return Err(err);
            }
        };

        match self.store.upload(&self.bucket, &key, body, &self.options).await {
            Ok(receipt) => {
                tracing::info!(
                    contract = %artifact.contract_name,
                    path = %receipt.full_path,
                    "artifact uploaded"
                );
                Ok(receipt)
            }
            Err(err) => {
                tracing::error!(contract = %artifact.contract_name, key = %key, error = %err, "artifact upload failed");
                Err(err.into())
            }
        }
    }
}
