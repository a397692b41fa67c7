//! Async file utilities for writing and enumerating artifacts.
//!
//! Writing overwrites in place. Listing is best-effort: a root that cannot be
//! read yields nothing, and an unreadable subdirectory is skipped while the
//! rest of the tree is still reported.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tokio::fs;

use crate::artifact::ArtifactEntry;
use crate::{Error, Result};

/// Write `content` to `path`, creating the parent directory if needed.
///
/// An existing file at `path` is replaced. Returns the path written.
pub async fn write_artifact(path: &Path, content: &str) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|source| Error::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
    }

    fs::write(path, content)
        .await
        .map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })?;

    log::debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(path.to_path_buf())
}

/// Information about a discovered file.
#[derive(Debug, Clone)]
pub struct FileInfo {
    /// Full path to the file.
    pub path: PathBuf,
    /// Path relative to the search base, `/`-separated.
    pub relative_path: String,
}

/// Find every regular file beneath `base_path`, depth first.
///
/// Symlinks are neither followed nor reported. Results are sorted by
/// relative path. Names that are not valid UTF-8 are reported with
/// U+FFFD in place of the invalid bytes.
///
/// # Example
///
/// ```no_run
/// # use artisave_core::util::files::find_all_files;
/// # use std::path::Path;
/// # async fn example() {
/// let files = find_all_files(Path::new("/saves")).await;
/// for file in files {
///     println!("{}", file.relative_path);
/// }
/// # }
/// ```
pub async fn find_all_files(base_path: &Path) -> Vec<FileInfo> {
    walk(vec![(base_path.to_path_buf(), String::new())]).await
}

/// Drain a worklist of `(directory, relative prefix)` pairs.
///
/// An empty prefix marks the save root.
async fn walk(mut pending: Vec<(PathBuf, String)>) -> Vec<FileInfo> {
    let mut files = Vec::new();

    while let Some((dir, prefix)) = pending.pop() {
        let mut entries = match fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if prefix.is_empty() => {
                log::debug!("Save root {} is not readable: {}", dir.display(), e);
                continue;
            }
            Err(e) => {
                log::warn!("Skipping unreadable directory '{}': {}", prefix, e);
                continue;
            }
        };

        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(e) => {
                    log::warn!("Stopped reading directory '{}': {}", prefix, e);
                    break;
                }
            };

            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    let lossy = raw.to_string_lossy().into_owned();
                    log::debug!("Non UTF-8 file name listed as '{}'", lossy);
                    lossy
                }
            };
            let relative_path = if prefix.is_empty() {
                name
            } else {
                format!("{prefix}/{name}")
            };

            let file_type = match entry.file_type().await {
                Ok(file_type) => file_type,
                Err(e) => {
                    log::warn!("Skipping '{}': {}", relative_path, e);
                    continue;
                }
            };

            if file_type.is_dir() {
                pending.push((entry.path(), relative_path));
            } else if file_type.is_file() {
                files.push(FileInfo {
                    path: entry.path(),
                    relative_path,
                });
            }
        }
    }

    files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    files
}

/// List every file under `base_path` as a root-relative path.
pub async fn list_relative_files(base_path: &Path) -> Vec<String> {
    find_all_files(base_path)
        .await
        .into_iter()
        .map(|file| file.relative_path)
        .collect()
}

/// List every file under `base_path` with its size and modification time.
///
/// Files whose metadata can no longer be read are left out.
pub async fn list_entries(base_path: &Path) -> Vec<ArtifactEntry> {
    let mut entries = Vec::new();
    for file in find_all_files(base_path).await {
        match fs::metadata(&file.path).await {
            Ok(meta) => entries.push(ArtifactEntry {
                path: file.relative_path,
                size: meta.len(),
                modified: meta.modified().ok().map(DateTime::<Utc>::from),
            }),
            Err(e) => log::warn!("Skipping '{}': {}", file.relative_path, e),
        }
    }
    entries
}
