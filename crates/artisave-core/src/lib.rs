//! Artisave Core: artifact types, errors, and filesystem operations.
//!
//! This crate holds everything the tool layer needs to persist an artifact:
//! extension inference, output path construction, writing, and listing.
//! It has no internal Artisave dependencies.
//!
//! # Modules
//!
//! - [`artifact`]: The artifact record and listing entries
//! - [`error`]: Error types and Result alias
//! - [`extension`]: Content type to file extension mapping
//! - [`service`]: The operations exposed to the tool layer
//! - [`store`]: Save-root configuration handle
//! - [`util`]: Path building, writing, and directory listing

pub mod artifact;
pub mod error;
pub mod extension;
pub mod service;
pub mod store;
pub mod util;

// Re-export key types at crate root for convenience
pub use artifact::{Artifact, ArtifactEntry};
pub use error::{Error, Result};
pub use extension::resolve_extension;
pub use service::ArtifactService;
pub use store::{ConfigStore, SaveConfig};
