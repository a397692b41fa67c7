//! Path resolution utilities.
//!
//! Builds the on-disk location for an artifact from its title, id, and
//! resolved extension. Every segment of a title is sanitized on its own so
//! that `/` separators survive while unsafe characters do not.

use std::env;
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::{Error, Result};

/// Characters replaced with `_` in every path segment.
pub const FORBIDDEN_CHARS: &[char] = &['<', '>', ':', '"', '\\', '|', '?', '*'];

/// Replacement for forbidden characters.
pub const REPLACEMENT: char = '_';

/// Filename prefix used when an artifact has no usable title.
pub const FALLBACK_PREFIX: &str = "artifact-";

/// Expands `~` to the user's home directory.
///
/// If the path starts with `~`, replaces it with the user's home directory.
/// Otherwise returns the path unchanged.
///
/// # Example
///
/// ```
/// use artisave_core::util::paths::expand_tilde;
///
/// let expanded = expand_tilde("~/artifacts");
/// assert!(!expanded.starts_with("~"));
/// ```
pub fn expand_tilde<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    if let Ok(stripped) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    path.to_path_buf()
}

/// Expands `~` and resolves the result against the working directory.
pub fn absolutize<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let expanded = expand_tilde(path);
    if expanded.is_absolute() {
        return Ok(expanded);
    }
    let cwd = env::current_dir()
        .map_err(|e| Error::config(format!("Could not determine working directory: {e}")))?;
    Ok(cwd.join(expanded))
}

/// Returns true for characters that may not appear in a segment.
pub fn is_forbidden(c: char) -> bool {
    FORBIDDEN_CHARS.contains(&c) || (c as u32) < 0x20
}

/// Replace forbidden and control characters in a single path segment.
pub fn sanitize_segment(segment: &str) -> String {
    segment
        .chars()
        .map(|c| if is_forbidden(c) { REPLACEMENT } else { c })
        .collect()
}

/// Filename used when a title is absent or has no usable final segment.
///
/// The id is sanitized like any other segment and cannot introduce
/// directories.
pub fn fallback_filename(id: &str, extension: &str) -> String {
    let id = sanitize_segment(id).replace('/', "_");
    with_extension(&format!("{FALLBACK_PREFIX}{id}"), extension)
}

/// Append `.extension` unless `name` already carries it.
pub fn with_extension(name: &str, extension: &str) -> String {
    let suffix = format!(".{extension}");
    if name.ends_with(&suffix) {
        name.to_string()
    } else {
        format!("{name}{suffix}")
    }
}

/// Build the output path for an artifact without touching the filesystem.
///
/// - No title: `artifact-<id>.<ext>`
/// - `name`: `name.<ext>`, or `name` unchanged when it already ends in `.<ext>`
/// - `a/b/name`: the same filename rule beneath `a/b`
///
/// Empty directory segments are skipped and `.`/`..` segments become `_`,
/// so the result always lies beneath `root`.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use artisave_core::util::paths::build_output_path;
///
/// let path = build_output_path(Path::new("/saves"), Some("notes/a:b"), "x", "md");
/// assert_eq!(path, Path::new("/saves/notes/a_b.md"));
/// ```
pub fn build_output_path(root: &Path, title: Option<&str>, id: &str, extension: &str) -> PathBuf {
    let Some(title) = title else {
        return root.join(fallback_filename(id, extension));
    };

    let mut segments: Vec<&str> = title.split('/').collect();
    let name = segments.pop().unwrap_or_default();

    let mut path = root.to_path_buf();
    for dir in segments.into_iter().filter(|s| !s.is_empty()) {
        path.push(sanitize_dir_segment(dir));
    }

    let name = sanitize_segment(name);
    if name.is_empty() || name == "." || name == ".." {
        path.push(fallback_filename(id, extension));
    } else {
        path.push(with_extension(&name, extension));
    }
    path
}

fn sanitize_dir_segment(segment: &str) -> String {
    match segment {
        "." | ".." => REPLACEMENT.to_string(),
        other => sanitize_segment(other),
    }
}

/// Build the output path and create every directory leading to it.
pub async fn prepare_output_path(
    root: &Path,
    title: Option<&str>,
    id: &str,
    extension: &str,
) -> Result<PathBuf> {
    let path = build_output_path(root, title, id, extension);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|source| Error::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
    }
    Ok(path)
}
