//! Utility modules for path building and file operations.
//!
//! # Modules
//!
//! - [`files`]: Async artifact writing and directory listing
//! - [`paths`]: Output path construction, sanitization, tilde expansion

pub mod files;
pub mod paths;
