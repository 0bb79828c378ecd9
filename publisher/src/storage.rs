//! Object-storage backends for artifact uploads.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::StorageError;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Per-upload options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOptions {
    pub content_type: String,
    /// Overwrite an existing object with the same key.
    pub upsert: bool,
}

impl UploadOptions {
    /// JSON body, overwrite on conflict.
    pub fn json_upsert() -> Self {
        Self {
            content_type: JSON_CONTENT_TYPE.to_string(),
            upsert: true,
        }
    }
}

/// Where an uploaded object ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadReceipt {
    /// Key within the bucket.
    pub path: String,
    /// `<bucket>/<key>`
    pub full_path: String,
}

/// Object-storage interface.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Stores `body` under `bucket`/`key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the object could not be stored.
    async fn upload(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        options: &UploadOptions,
    ) -> Result<UploadReceipt, StorageError>;
}

/// Supabase Storage over its REST API.
///
/// # Invariants
/// - Base URL is normalized without a trailing slash.
pub struct SupabaseStorage {
    base_url: String,
    service_key: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(rename = "Key")]
    key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: Option<String>,
    error: Option<String>,
}

impl SupabaseStorage {
    /// Builds a storage client.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Client`] when the HTTP client cannot be built.
    pub fn new(
        mut base_url: String,
        service_key: String,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Self, StorageError> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()
            .map_err(|err| StorageError::Client(err.to_string()))?;
        let trimmed_len = base_url.trim_end_matches('/').len();
        base_url.truncate(trimmed_len);
        Ok(Self {
            base_url,
            service_key,
            client,
        })
    }

    /// `POST` target for an object upload.
    pub fn object_url(&self, bucket: &str, key: &str) -> String {
        format!(
            "{}/storage/v1/object/{}/{}",
            self.base_url,
            bucket.trim_matches('/'),
            key.trim_start_matches('/')
        )
    }

    fn build_headers(&self, options: &UploadOptions) -> Result<HeaderMap, StorageError> {
        let invalid = |what: &str| StorageError::Client(format!("invalid {what} header"));

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.service_key))
                .map_err(|_| invalid("authorization"))?,
        );
        headers.insert(
            "apikey",
            HeaderValue::from_str(&self.service_key).map_err(|_| invalid("apikey"))?,
        );
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_str(&options.content_type).map_err(|_| invalid("content-type"))?,
        );
        headers.insert(
            "x-upsert",
            HeaderValue::from_static(if options.upsert { "true" } else { "false" }),
        );
        Ok(headers)
    }
}

/// Pulls a human-readable message out of an error body.
fn rejection_message(body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(ErrorResponse { message: Some(message), .. }) => message,
        Ok(ErrorResponse { error: Some(error), .. }) => error,
        _ if body.trim().is_empty() => "empty response body".to_string(),
        _ => body.trim().to_string(),
    }
}

#[async_trait]
impl ObjectStore for SupabaseStorage {
    async fn upload(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        options: &UploadOptions,
    ) -> Result<UploadReceipt, StorageError> {
        let url = self.object_url(bucket, key);
        let headers = self.build_headers(options)?;

        let response = self
            .client
            .post(url)
            .headers(headers)
            .body(body)
            .send()
            .await
            .map_err(|err| StorageError::Transport(err.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|err| StorageError::Transport(err.to_string()))?;

        if !status.is_success() {
            return Err(StorageError::Rejected {
                status: status.as_u16(),
                message: rejection_message(&text),
            });
        }

        let full_path = serde_json::from_str::<UploadResponse>(&text)
            .ok()
            .and_then(|parsed| parsed.key)
            .unwrap_or_else(|| format!("{bucket}/{key}"));

        Ok(UploadReceipt {
            path: key.to_string(),
            full_path,
        })
    }
}

/// Logs what would be uploaded and reports success without any I/O.
pub struct DryRunStore;

#[async_trait]
impl ObjectStore for DryRunStore {
    async fn upload(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        options: &UploadOptions,
    ) -> Result<UploadReceipt, StorageError> {
        tracing::info!(
            bucket,
            key,
            bytes = body.len(),
            content_type = %options.content_type,
            upsert = options.upsert,
            "dry run: skipping upload"
        );
        Ok(UploadReceipt {
            path: key.to_string(),
            full_path: format!("{bucket}/{key}"),
        })
    }
}
