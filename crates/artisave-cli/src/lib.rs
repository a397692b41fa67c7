//! CLI framework for Artisave.
//!
//! Parses arguments, loads configuration, sets up logging, and runs either
//! the MCP server or one of the one-shot commands.
//!
//! # Key Abstractions
//!
//! - [`ArtisaveCli`]: the application, built from [`CliArgs`] and config
//! - [`ArtisaveConfig`]: file/env/default configuration

pub mod app;
pub mod cli;
pub mod config;
pub mod config_handlers;

pub use app::ArtisaveCli;
pub use cli::{CliArgs, Command};
pub use config::ArtisaveConfig;
