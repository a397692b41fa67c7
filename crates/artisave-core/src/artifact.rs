//! Artifact records.
//!
//! An [`Artifact`] is never stored as a record; only its `content` lands on
//! disk. [`ArtifactEntry`] describes a file found under the save root.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::extension;

/// A unit of text content to be persisted as a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    /// Caller-supplied opaque identifier.
    pub id: String,

    /// Optional title; `/` separates nested directories.
    #[serde(default)]
    pub title: Option<String>,

    /// Raw text content.
    pub content: String,

    /// Declared content category, e.g. `text/markdown`.
    #[serde(rename = "type")]
    pub kind: String,

    /// Language tag, only consulted for code artifacts.
    #[serde(default)]
    pub language: Option<String>,

    /// Informational creation time.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Artifact {
    /// Create an artifact with no title or language.
    pub fn new(id: impl Into<String>, kind: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            content: content.into(),
            kind: kind.into(),
            language: None,
            created_at: Utc::now(),
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the language tag.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// The file extension this artifact resolves to.
    pub fn extension(&self) -> &'static str {
        extension::resolve_extension(&self.kind, self.language.as_deref())
    }
}

/// A file found under the save root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactEntry {
    /// Path relative to the save root, `/`-separated.
    pub path: String,
    /// Size in bytes.
    pub size: u64,
    /// Last modification time, when the platform reports one.
    pub modified: Option<DateTime<Utc>>,
}
