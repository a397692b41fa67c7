//! Save-root configuration.
//!
//! Provides [`ConfigStore`], a cloneable handle to the current
//! [`SaveConfig`]. Every operation that saves or lists artifacts receives a
//! store explicitly rather than reading process-wide state.
//!
//! # Example
//!
//! ```no_run
//! use artisave_core::{ConfigStore, SaveConfig};
//!
//! # async fn example() -> artisave_core::Result<()> {
//! let store = ConfigStore::new(SaveConfig::new("/data/artifacts"));
//! store.update_save_path("~/artifacts").await?;
//! let config = store.get_config().await;
//! println!("saving to {}", config.save_path.display());
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::sync::RwLock;

use crate::util::paths;
use crate::{Error, Result};

/// The save-root configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveConfig {
    /// Directory under which artifacts are written and listed.
    pub save_path: PathBuf,
}

impl SaveConfig {
    /// Create a config rooted at `save_path`, taken as given.
    pub fn new(save_path: impl Into<PathBuf>) -> Self {
        Self {
            save_path: save_path.into(),
        }
    }
}

/// Shared handle to the current [`SaveConfig`].
///
/// Cloning is cheap and every clone observes the same save path. Reads hand
/// out copies, so callers can never mutate the stored config in place.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    config: Arc<RwLock<SaveConfig>>,
}

impl ConfigStore {
    /// Create a store holding `config`.
    pub fn new(config: SaveConfig) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
        }
    }

    /// Return a copy of the current config.
    pub async fn get_config(&self) -> SaveConfig {
        self.config.read().await.clone()
    }

    /// Return a copy of the current save path.
    pub async fn save_path(&self) -> PathBuf {
        self.config.read().await.save_path.clone()
    }

    /// Point the store at a new save directory.
    ///
    /// The path has `~` expanded and is made absolute against the working
    /// directory, then created recursively. The stored path only changes once
    /// the directory exists; on failure the previous path is kept.
    ///
    /// Returns the absolute path now in effect.
    pub async fn update_save_path(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(Error::invalid_data("save path must not be empty"));
        }

        let absolute = paths::absolutize(path)?;
        fs::create_dir_all(&absolute)
            .await
            .map_err(|source| Error::SavePath {
                path: absolute.clone(),
                source,
            })?;

        let mut config = self.config.write().await;
        log::info!(
            "Save path changed from {} to {}",
            config.save_path.display(),
            absolute.display()
        );
        config.save_path = absolute.clone();
        Ok(absolute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store() -> ConfigStore {
        ConfigStore::new(SaveConfig::new("/tmp/artisave-test"))
    }

    #[tokio::test]
    async fn test_store_get_config() {
        let store = test_store();
        let config = store.get_config().await;
        assert_eq!(config.save_path, PathBuf::from("/tmp/artisave-test"));
    }

    #[tokio::test]
    async fn test_store_returns_copies() {
        let store = test_store();
        let mut copy = store.get_config().await;
        copy.save_path = PathBuf::from("/elsewhere");

        assert_eq!(store.save_path().await, PathBuf::from("/tmp/artisave-test"));
    }

    #[tokio::test]
    async fn test_store_clones_share_state() {
        let temp = TempDir::new().unwrap();
        let store1 = test_store();
        let store2 = store1.clone();

        store1.update_save_path(temp.path()).await.unwrap();

        assert_eq!(store2.save_path().await, temp.path());
    }

    #[tokio::test]
    async fn test_update_creates_directory() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("a").join("b");
        let store = test_store();

        let applied = store.update_save_path(&target).await.unwrap();

        assert_eq!(applied, target);
        assert!(target.is_dir());
        assert_eq!(store.save_path().await, target);
    }

    #[tokio::test]
    async fn test_update_relative_path_is_absolute() {
        let store = test_store();
        let temp = TempDir::new_in(".").unwrap();
        let name = temp.path().file_name().unwrap().to_owned();

        let applied = store.update_save_path(&name).await.unwrap();

        assert!(applied.is_absolute());
        assert_eq!(applied, std::env::current_dir().unwrap().join(&name));
    }

    #[tokio::test]
    async fn test_update_failure_keeps_previous_path() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let store = test_store();

        let result = store.update_save_path(blocker.join("child")).await;

        match result {
            Err(Error::SavePath { path, .. }) => assert_eq!(path, blocker.join("child")),
            other => panic!("Expected SavePath error, got {other:?}"),
        }
        assert_eq!(store.save_path().await, PathBuf::from("/tmp/artisave-test"));
    }

    #[tokio::test]
    async fn test_update_onto_existing_file_fails() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("file.txt");
        std::fs::write(&file, "x").unwrap();
        let store = test_store();

        assert!(store.update_save_path(&file).await.is_err());
        assert_eq!(store.save_path().await, PathBuf::from("/tmp/artisave-test"));
    }

    #[tokio::test]
    async fn test_update_empty_path_rejected() {
        let store = test_store();
        let err = store.update_save_path("").await.unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_save_config_serializes_camel_case() {
        let json = serde_json::to_value(SaveConfig::new("/data")).unwrap();
        assert_eq!(json, serde_json::json!({ "savePath": "/data" }));
    }

    #[test]
    fn test_store_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConfigStore>();
    }

    #[tokio::test]
    async fn test_store_across_tasks() {
        let store = test_store();
        let store_clone = store.clone();
        let handle = tokio::spawn(async move { store_clone.save_path().await });

        let result = handle.await.unwrap();
        assert_eq!(result, PathBuf::from("/tmp/artisave-test"));
    }
}
