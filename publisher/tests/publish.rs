//! End-to-end publishing against in-memory stores.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};

use artifact_publisher::{
    discover_artifacts, ArtifactError, ObjectStore, PublishError, Publisher, StorageError,
    UploadOptions, UploadReceipt,
};
use async_trait::async_trait;
use bytes::Bytes;
use tempfile::TempDir;

/// Records uploads; keys listed in `reject` fail with a 400.
#[derive(Default)]
struct MemoryStore {
    objects: Mutex<BTreeMap<String, (Bytes, UploadOptions)>>,
    reject: Vec<String>,
}

impl MemoryStore {
    fn rejecting(keys: &[&str]) -> Self {
        Self {
            reject: keys.iter().map(|k| k.to_string()).collect(),
            ..Self::default()
        }
    }

    fn keys(&self) -> Vec<String> {
        self.objects.lock().unwrap().keys().cloned().collect()
    }

    fn object(&self, key: &str) -> Option<(Bytes, UploadOptions)> {
        self.objects.lock().unwrap().get(key).cloned()
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn upload(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        options: &UploadOptions,
    ) -> Result<UploadReceipt, StorageError> {
        if self.reject.iter().any(|k| k == key) {
            return Err(StorageError::Rejected {
                status: 400,
                message: "The resource already exists".to_string(),
            });
        }
        self.objects
            .lock()
            .unwrap()
            .insert(format!("{bucket}/{key}"), (body, options.clone()));
        Ok(UploadReceipt {
            path: key.to_string(),
            full_path: format!("{bucket}/{key}"),
        })
    }
}

fn write_artifact(root: &Path, name: &str, body: &str) {
    let dir = root.join(format!("{name}.sol"));
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("{name}.json")), body).unwrap();
}

fn build_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_artifact(dir.path(), "VotingBase", r#"{"contractName":"VotingBase"}"#);
    write_artifact(dir.path(), "VotingPrivate", r#"{"contractName":"VotingPrivate"}"#);
    write_artifact(dir.path(), "VotingPublic", r#"{"contractName":"VotingPublic"}"#);
    dir
}

#[tokio::test]
async fn uploads_every_artifact_with_json_upsert() {
    let dir = build_dir();
    let store = Arc::new(MemoryStore::default());
    let publisher = Publisher::new(store.clone(), "artifacts", "", dir.path());

    let report = publisher.publish_all().await.unwrap();

    assert!(report.is_success());
    assert_eq!(report.total(), 3);
    assert_eq!(
        store.keys(),
        vec![
            "artifacts/VotingBase.json",
            "artifacts/VotingPrivate.json",
            "artifacts/VotingPublic.json",
        ]
    );

    let (body, options) = store.object("artifacts/VotingBase.json").unwrap();
    assert_eq!(body, Bytes::from_static(br#"{"contractName":"VotingBase"}"#));
    assert_eq!(options, UploadOptions::json_upsert());

    let names: Vec<_> = report.uploaded.iter().map(|a| a.contract_name.as_str()).collect();
    assert_eq!(names, vec!["VotingBase", "VotingPrivate", "VotingPublic"]);
}

#[tokio::test]
async fn key_prefix_is_applied() {
    let dir = build_dir();
    let store = Arc::new(MemoryStore::default());
    let publisher = Publisher::new(store.clone(), "contracts", "artifacts/", dir.path());

    assert_eq!(publisher.object_key("VotingBase"), "artifacts/VotingBase.json");

    let report = publisher.publish_all().await.unwrap();

    assert!(report.is_success());
    assert!(store.keys().contains(&"contracts/artifacts/VotingPublic.json".to_string()));
    assert_eq!(report.uploaded[0].receipt.path, "artifacts/VotingBase.json");
}

#[tokio::test]
async fn empty_directory_publishes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(MemoryStore::default());
    let publisher = Publisher::new(store.clone(), "artifacts", "", dir.path());

    let report = publisher.publish_all().await.unwrap();

    assert!(report.is_success());
    assert_eq!(report.total(), 0);
    assert!(store.keys().is_empty());
}

#[tokio::test]
async fn missing_directory_aborts_batch() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    let publisher = Publisher::new(Arc::new(MemoryStore::default()), "artifacts", "", &missing);

    let err = publisher.publish_all().await.unwrap_err();

    let PublishError::ReadDir { path, .. } = err;
    assert_eq!(path, missing);
}

#[tokio::test]
async fn unreadable_artifact_does_not_stop_siblings() {
    let dir = build_dir();
    fs::create_dir_all(dir.path().join("Broken.sol")).unwrap();
    let store = Arc::new(MemoryStore::default());
    let publisher = Publisher::new(store.clone(), "artifacts", "", dir.path());

    let report = publisher.publish_all().await.unwrap();

    assert!(!report.is_success());
    assert_eq!(report.uploaded.len(), 3);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].contract_name, "Broken");
    assert!(matches!(report.failed[0].error, ArtifactError::Read { .. }));
    assert_eq!(store.keys().len(), 3);
}

#[tokio::test]
async fn rejected_upload_is_reported_per_artifact() {
    let dir = build_dir();
    let store = Arc::new(MemoryStore::rejecting(&["VotingPrivate.json"]));
    let publisher = Publisher::new(store.clone(), "artifacts", "", dir.path());

    let report = publisher.publish_all().await.unwrap();

    assert_eq!(report.uploaded.len(), 2);
    assert_eq!(report.failed.len(), 1);
    let failure = &report.failed[0];
    assert_eq!(failure.contract_name, "VotingPrivate");
    assert!(matches!(
        failure.error,
        ArtifactError::Upload(StorageError::Rejected { status: 400, .. })
    ));
    assert_eq!(
        failure.error.to_string(),
        "storage rejected upload (status 400): The resource already exists"
    );
}

#[tokio::test]
async fn discovery_skips_plain_files() {
    let dir = build_dir();
    fs::write(dir.path().join("README.md"), "notes").unwrap();

    let artifacts = discover_artifacts(dir.path()).await.unwrap();

    assert_eq!(artifacts.len(), 3);
    assert_eq!(artifacts[0].contract_name, "VotingBase");
    assert_eq!(
        artifacts[0].path,
        dir.path().join("VotingBase.sol").join("VotingBase.json")
    );
}
