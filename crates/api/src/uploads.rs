//! Local disk storage for uploaded images.
//!
//! Files are written under the configured upload directory with generated
//! names and served back by the static file service mounted at
//! [`PUBLIC_URL_PREFIX`].

use std::path::{Path, PathBuf};

use folio_core::error::CoreError;
use folio_core::upload::generate_filename;

/// URL path prefix the upload directory is served under.
pub const PUBLIC_URL_PREFIX: &str = "/uploads";

/// A file that has been written to the upload directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUpload {
    /// Generated filename inside the upload directory.
    pub file_name: String,
    /// Root-relative URL the file is served from.
    pub url: String,
}

/// Writes uploaded images to a local directory.
#[derive(Debug)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory files are written to.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the upload directory if it does not exist yet.
    pub async fn ensure_dir(&self) -> Result<(), CoreError> {
        tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
            CoreError::StorageUnavailable(format!(
                "cannot create upload directory {}: {e}",
                self.dir.display()
            ))
        })
    }

    /// Whether the upload directory exists and is a directory.
    pub async fn is_ready(&self) -> bool {
        tokio::fs::metadata(&self.dir)
            .await
            .is_ok_and(|meta| meta.is_dir())
    }

    /// Write `data` under a freshly generated name derived from `original_name`.
    ///
    /// The directory is created on first use.
    pub async fn save(&self, original_name: &str, data: &[u8]) -> Result<StoredUpload, CoreError> {
        self.ensure_dir().await?;

        let file_name = generate_filename(original_name, chrono::Utc::now());
        let path = self.dir.join(&file_name);
        tokio::fs::write(&path, data).await.map_err(|e| {
            CoreError::StorageUnavailable(format!("cannot write {}: {e}", path.display()))
        })?;

        tracing::debug!(file = %file_name, bytes = data.len(), "Stored upload");

        Ok(StoredUpload {
            url: format!("{PUBLIC_URL_PREFIX}/{file_name}"),
            file_name,
        })
    }

    /// Remove a previously stored file. Failures are logged, not returned.
    pub async fn remove(&self, file_name: &str) {
        let path = self.dir.join(file_name);
        if let Err(e) = tokio::fs::remove_file(&path).await {
            tracing::warn!(file = %path.display(), error = %e, "Failed to remove orphaned upload");
        }
    }
}
