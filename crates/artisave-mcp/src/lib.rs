//! MCP server infrastructure for Artisave.
//!
//! This crate exposes the artifact operations as MCP tools and serves them
//! over stdio.
//!
//! # Key Abstractions
//!
//! - [`ToolRegistry`] trait: a set of tools with names, schemas, and handlers
//! - [`ArtifactTools`]: the artifact tools backed by an `ArtifactService`
//! - [`ArtifactServer`]: rmcp `ServerHandler` dispatching to a registry

pub mod error;
pub mod registry;
pub mod server;
pub mod tools;

pub use rmcp::model;

pub use error::McpErrorExt;
pub use registry::{ToolRegistry, ToolResult};
pub use server::ArtifactServer;
pub use tools::ArtifactTools;
