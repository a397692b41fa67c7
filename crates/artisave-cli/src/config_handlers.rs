//! Handler functions for config CLI commands.
//!
//! Implements `artisave config {path,show,init}`.

use crate::cli::ConfigAction;
use crate::config::ArtisaveConfig;
use artisave_core::{Error, Result};
use std::path::PathBuf;

/// Handle a config subcommand.
///
/// `config_path` is the raw `--config` value, used by `path`. `config` is
/// the effective configuration, command-line overrides included, used by
/// `show`.
pub fn handle_config_command(
    config_path: Option<&str>,
    config: &ArtisaveConfig,
    action: ConfigAction,
) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path),
        ConfigAction::Show => {
            println!("{}", cmd_config_show(config)?);
            Ok(())
        }
        ConfigAction::Init { file, force } => {
            let path = cmd_config_init(file.as_deref(), force)?;
            println!("Config file created at {}", path.display());
            Ok(())
        }
    }
}

/// Show the resolved config file path.
fn cmd_config_path(config_path: Option<&str>) -> Result<()> {
    match ArtisaveConfig::resolve_config_path(config_path) {
        Some(path) => {
            println!("{}", path.display());
            if !path.exists() {
                eprintln!("(file does not exist; run `artisave config init` to create it)");
            }
            Ok(())
        }
        None => Err(Error::config(
            "Could not determine config directory for this platform",
        )),
    }
}

/// Render the effective configuration as TOML.
pub(crate) fn cmd_config_show(config: &ArtisaveConfig) -> Result<String> {
    config.to_toml_string()
}

/// Write a default configuration file and return where it went.
fn cmd_config_init(file: Option<&str>, force: bool) -> Result<PathBuf> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => ArtisaveConfig::default_config_path()
            .ok_or_else(|| Error::config("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }

    let toml_str = ArtisaveConfig::default().to_toml_string()?;
    std::fs::write(&path, toml_str).map_err(|e| Error::io_with_path(e, &path))?;
    Ok(path)
}
