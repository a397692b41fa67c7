//! Configuration for the Artisave CLI.
//!
//! Provides the [`ArtisaveConfig`] struct that loads from TOML files,
//! environment variables, and defaults using the `confyg` crate.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `ARTISAVE_CONFIG` environment variable
//! 3. XDG default: `~/.config/artisave/config.toml`
//! 4. Built-in defaults
//!
//! `ARTISAVE_*` environment variables are applied on top of whichever file
//! was loaded.

use artisave_core::util::paths;
use artisave_core::{Error, Result, SaveConfig};
use confyg::{Confygery, env};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default save directory, before tilde expansion.
pub const DEFAULT_SAVE_PATH: &str = "~/artifacts";

// ============================================================================
// Configuration structs
// ============================================================================

/// Main configuration for the Artisave CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtisaveConfig {
    /// Directory artifacts are saved under. `~` is expanded.
    pub save_path: String,

    /// Server configuration.
    pub server: ServerConfig,
}

/// MCP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Name reported to MCP clients.
    pub name: String,
}

// ============================================================================
// Default implementations
// ============================================================================

impl Default for ArtisaveConfig {
    fn default() -> Self {
        Self {
            save_path: DEFAULT_SAVE_PATH.to_string(),
            server: ServerConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "artisave".to_string(),
        }
    }
}

// ============================================================================
// Config loading
// ============================================================================

impl ArtisaveConfig {
    /// Load configuration from file, environment, and defaults.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        if let Some(path) = Self::resolve_config_path(config_path) {
            if path.exists() {
                builder
                    .add_file(&path.to_string_lossy())
                    .map_err(|e| Error::config(format!("config file: {e}")))?;
            }
        }

        let mut env_opts = env::Options::with_top_level("ARTISAVE");
        env_opts.add_section("server");
        builder
            .add_env(env_opts)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        let config: Self = builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))?;

        Ok(config)
    }

    /// Resolve the config file path from explicit flag, env var, or XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }

        if let Ok(path) = std::env::var("ARTISAVE_CONFIG") {
            return Some(PathBuf::from(path));
        }

        Self::default_config_path()
    }

    /// Return the XDG default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("artisave").join("config.toml"))
    }

    /// Serialize this config to a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// The save configuration this file describes, with an absolute path.
    pub fn save_config(&self) -> Result<SaveConfig> {
        if self.save_path.trim().is_empty() {
            return Err(Error::config("save_path must not be empty"));
        }
        Ok(SaveConfig::new(paths::absolutize(&self.save_path)?))
    }
}

// ============================================================================
// Tests
// ============================================================================
