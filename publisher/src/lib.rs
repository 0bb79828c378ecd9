//! Artifact publisher for the voting contracts.
//!
//! Scans the build output directory (`artifacts/contracts/<Name>.sol/<Name>.json`)
//! and uploads every contract descriptor to an object-storage bucket under
//! `<prefix><Name>.json`, overwriting existing objects. Uploads run
//! concurrently; one artifact failing never stops its siblings.

pub mod config;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod publish;
pub mod storage;

pub use config::{ConfigOverrides, PublisherConfig};
pub use discovery::{discover_artifacts, Artifact};
pub use error::{ArtifactError, ConfigError, PublishError, StorageError};
pub use publish::{FailedArtifact, PublishReport, PublishedArtifact, Publisher};
pub use storage::{DryRunStore, ObjectStore, SupabaseStorage, UploadOptions, UploadReceipt};
