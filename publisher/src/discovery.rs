//! Locates compiled contract descriptors in the build output.

use std::path::{Path, PathBuf};

use crate::error::PublishError;

/// One contract's descriptor on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub contract_name: String,
    /// `<dir>/<Name>.sol/<Name>.json`
    pub path: PathBuf,
}

/// Contract name from a build directory name: everything before the first `.`.
pub fn contract_name(dir_name: &str) -> &str {
    dir_name.split('.').next().unwrap_or(dir_name)
}

/// Lists every contract directory under `dir`, sorted by contract name.
///
/// Plain files and hidden entries are skipped. The descriptor file itself is
/// not opened here; a missing descriptor surfaces as a per-artifact read
/// failure during publishing.
///
/// # Errors
///
/// Returns [`PublishError::ReadDir`] when `dir` cannot be listed.
pub async fn discover_artifacts(dir: &Path) -> Result<Vec<Artifact>, PublishError> {
    let read_dir_err = |source| PublishError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = tokio::fs::read_dir(dir).await.map_err(read_dir_err)?;
    let mut artifacts = Vec::new();

    while let Some(entry) = entries.next_entry().await.map_err(read_dir_err)? {
        let file_type = entry.file_type().await.map_err(read_dir_err)?;
        if !file_type.is_dir() {
            continue;
        }

        let file_name = entry.file_name();
        let Some(dir_name) = file_name.to_str() else {
            tracing::warn!(entry = ?file_name, "skipping non UTF-8 artifact directory");
            continue;
        };

        let name = contract_name(dir_name);
        if name.is_empty() {
            continue;
        }

        artifacts.push(Artifact {
            contract_name: name.to_string(),
            path: entry.path().join(format!("{name}.json")),
        });
    }

    artifacts.sort_by(|a, b| a.contract_name.cmp(&b.contract_name));
    tracing::debug!(dir = %dir.display(), count = artifacts.len(), "discovered artifacts");
    Ok(artifacts)
}
