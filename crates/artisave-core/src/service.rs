//! Artifact operations exposed to the tool layer.
//!
//! [`ArtifactService`] composes extension resolution, path building,
//! writing, and listing over a [`ConfigStore`]. The tool layer holds one
//! service and forwards each request to the matching method.

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

use crate::artifact::{Artifact, ArtifactEntry};
use crate::store::{ConfigStore, SaveConfig};
use crate::util::{files, paths};
use crate::Result;

/// Extension used for artifacts saved together with metadata.
pub const METADATA_EXTENSION: &str = "json";

/// Document written by [`ArtifactService::save_artifact_with_metadata`].
#[derive(Debug, Serialize)]
struct MetadataDocument<'a> {
    content: &'a str,
    metadata: &'a Value,
    saved_at: String,
}

/// Saves and lists artifacts beneath the store's save path.
#[derive(Debug, Clone)]
pub struct ArtifactService {
    store: ConfigStore,
}

impl ArtifactService {
    /// Create a service over the given store.
    pub fn new(store: ConfigStore) -> Self {
        Self { store }
    }

    /// The underlying config store.
    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// Persist an artifact's content and return the path written.
    ///
    /// The extension comes from the artifact's type and language; the title
    /// may contain `/` to place the file in nested directories.
    pub async fn save_artifact(&self, artifact: &Artifact) -> Result<PathBuf> {
        let extension = artifact.extension();
        let path = self.output_path(artifact, extension).await?;
        let written = files::write_artifact(&path, &artifact.content).await?;
        log::info!("Saved artifact '{}' to {}", artifact.id, written.display());
        Ok(written)
    }

    /// Persist an artifact as a JSON document alongside caller metadata.
    ///
    /// The document holds `content`, `metadata`, and an RFC 3339 `saved_at`
    /// timestamp. The file always gets the `json` extension.
    pub async fn save_artifact_with_metadata(
        &self,
        artifact: &Artifact,
        metadata: &Value,
    ) -> Result<PathBuf> {
        let path = self.output_path(artifact, METADATA_EXTENSION).await?;
        let document = MetadataDocument {
            content: &artifact.content,
            metadata,
            saved_at: Utc::now().to_rfc3339(),
        };
        let json = serde_json::to_string_pretty(&document)?;
        let written = files::write_artifact(&path, &json).await?;
        log::info!(
            "Saved artifact '{}' with metadata to {}",
            artifact.id,
            written.display()
        );
        Ok(written)
    }

    /// Change the save directory. See [`ConfigStore::update_save_path`].
    pub async fn update_save_path(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        self.store.update_save_path(path).await
    }

    /// Every file under the save path, relative to it. Never fails.
    pub async fn list_artifacts(&self) -> Vec<String> {
        let root = self.store.save_path().await;
        files::list_relative_files(&root).await
    }

    /// Like [`list_artifacts`](Self::list_artifacts), with size and
    /// modification time.
    pub async fn list_artifact_entries(&self) -> Vec<ArtifactEntry> {
        let root = self.store.save_path().await;
        files::list_entries(&root).await
    }

    /// A copy of the current config.
    pub async fn get_config(&self) -> SaveConfig {
        self.store.get_config().await
    }

    async fn output_path(&self, artifact: &Artifact, extension: &str) -> Result<PathBuf> {
        let root = self.store.save_path().await;
        paths::prepare_output_path(&root, artifact.title.as_deref(), &artifact.id, extension).await
    }
}
