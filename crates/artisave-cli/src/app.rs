//! ArtisaveCli application.
//!
//! Builds the artifact service from configuration and dispatches the parsed
//! command to it, either serving MCP on stdio or running a one-shot command.

use crate::cli::{CliArgs, Command};
use crate::config::ArtisaveConfig;
use crate::config_handlers;
use artisave_core::{ArtifactService, ConfigStore};
use artisave_mcp::tools::SaveArtifactArgs;
use artisave_mcp::{ArtifactServer, ArtifactTools};
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;
use tracing_subscriber::EnvFilter;

// ============================================================================
// ArtisaveCli
// ============================================================================

/// The Artisave command-line application.
pub struct ArtisaveCli {
    name: String,
    config: ArtisaveConfig,
    version: String,
}

impl ArtisaveCli {
    /// Create from CLI args, loading config from file/env.
    ///
    /// `--save-path` replaces whatever the config file and environment set.
    pub fn from_args(name: impl Into<String>, args: &CliArgs) -> artisave_core::Result<Self> {
        let mut config = ArtisaveConfig::load(args.config.as_deref())?;
        if let Some(save_path) = &args.save_path {
            config.save_path = save_path.clone();
        }
        Ok(Self::new(name, config))
    }

    /// Create a new CLI application.
    pub fn new(name: impl Into<String>, config: ArtisaveConfig) -> Self {
        Self {
            name: name.into(),
            config,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Override the version string.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn config(&self) -> &ArtisaveConfig {
        &self.config
    }

    /// Initialise tracing-based logging on stderr.
    ///
    /// Uses `RUST_LOG` env var if set, otherwise defaults based on verbosity
    /// flags. Stdout carries MCP traffic, so nothing is logged there.
    pub fn init_logging(&self, verbose: bool, quiet: bool) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if quiet {
            EnvFilter::new("warn")
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        };

        // Ignore error if a subscriber is already set (e.g. in tests).
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }

    /// Run the CLI with the given arguments.
    pub async fn run(&self, args: CliArgs) -> anyhow::Result<()> {
        self.init_logging(args.verbose, args.quiet);

        match args.command {
            None | Some(Command::Serve) => self.serve().await,
            Some(Command::Save {
                file,
                title,
                kind,
                language,
                id,
            }) => {
                let content = read_content(file.as_deref()).await?;
                let request = SaveArtifactArgs {
                    id,
                    title,
                    content,
                    kind,
                    language,
                };
                let path = self.save(request).await?;
                println!("{}", path.display());
                Ok(())
            }
            Some(Command::List { detailed }) => {
                let service = self.read_only_service()?;
                if detailed {
                    for entry in service.list_artifact_entries().await {
                        let modified = entry
                            .modified
                            .map(|m| m.to_rfc3339())
                            .unwrap_or_else(|| "-".to_string());
                        println!("{:>10}  {}  {}", entry.size, modified, entry.path);
                    }
                } else {
                    for path in service.list_artifacts().await {
                        println!("{path}");
                    }
                }
                Ok(())
            }
            Some(Command::Config(config_cmd)) => {
                config_handlers::handle_config_command(
                    args.config.as_deref(),
                    &self.config,
                    config_cmd.command,
                )?;
                Ok(())
            }
        }
    }

    /// Build the artifact service, creating the save directory if needed.
    pub async fn service(&self) -> artisave_core::Result<ArtifactService> {
        let save = self.config.save_config()?;
        let service = ArtifactService::new(ConfigStore::new(save.clone()));
        service.update_save_path(&save.save_path).await?;
        Ok(service)
    }

    /// Build the artifact service without touching the filesystem.
    ///
    /// Listing a save directory that does not exist yields nothing.
    pub fn read_only_service(&self) -> artisave_core::Result<ArtifactService> {
        Ok(ArtifactService::new(ConfigStore::new(
            self.config.save_config()?,
        )))
    }

    /// Save one artifact described by `request`.
    pub async fn save(&self, request: SaveArtifactArgs) -> artisave_core::Result<PathBuf> {
        let service = self.service().await?;
        service.save_artifact(&request.into_artifact()).await
    }

    async fn serve(&self) -> anyhow::Result<()> {
        let service = self.service().await?;
        tracing::info!(
            save_path = %service.store().save_path().await.display(),
            "Serving artifacts"
        );

        ArtifactServer::new(ArtifactTools::new(service))
            .with_name(&self.config.server.name)
            .with_version(&self.version)
            .serve_stdio()
            .await
    }
}

/// Read artifact content from `file`, or from standard input when absent.
async fn read_content(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => {
            tracing::debug!("Reading content from {}", path.display());
            Ok(tokio::fs::read_to_string(path).await.map_err(|e| {
                artisave_core::Error::io_with_path(e, path)
            })?)
        }
        None => {
            let mut content = String::new();
            tokio::io::stdin().read_to_string(&mut content).await?;
            Ok(content)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn test_cli(dir: &TempDir) -> ArtisaveCli {
        let config = ArtisaveConfig {
            save_path: dir.path().join("saves").to_string_lossy().into_owned(),
            ..Default::default()
        };
        ArtisaveCli::new("artisave-test", config)
    }

    fn request(title: Option<&str>, kind: &str, content: &str) -> SaveArtifactArgs {
        SaveArtifactArgs {
            id: Some("t1".into()),
            title: title.map(String::from),
            content: content.into(),
            kind: kind.into(),
            language: None,
        }
    }

    #[test]
    fn test_artisave_cli_new() {
        let cli = ArtisaveCli::new("my-app", ArtisaveConfig::default());
        assert_eq!(cli.name, "my-app");
        assert_eq!(cli.config().save_path, "~/artifacts");
    }

    #[test]
    fn test_artisave_cli_with_version() {
        let cli = ArtisaveCli::new("my-app", ArtisaveConfig::default()).with_version("1.2.3");
        assert_eq!(cli.version, "1.2.3");
    }

    #[test]
    fn test_from_args_save_path_override() {
        let args = CliArgs::parse_from([
            "artisave",
            "--config",
            "/nonexistent/config.toml",
            "--save-path",
            "/srv/override",
        ]);
        let cli = ArtisaveCli::from_args("artisave", &args).unwrap();
        assert_eq!(cli.config().save_path, "/srv/override");
    }

    #[tokio::test]
    async fn test_service_creates_save_dir() {
        let dir = TempDir::new().unwrap();
        let cli = test_cli(&dir);

        let service = cli.service().await.unwrap();

        assert!(dir.path().join("saves").is_dir());
        assert_eq!(service.get_config().await.save_path, dir.path().join("saves"));
    }

    #[tokio::test]
    async fn test_save_writes_artifact() {
        let dir = TempDir::new().unwrap();
        let cli = test_cli(&dir);

        let path = cli
            .save(request(Some("notes/today"), "text/markdown", "# Today"))
            .await
            .unwrap();

        assert_eq!(path, dir.path().join("saves/notes/today.md"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "# Today");
    }

    #[tokio::test]
    async fn test_save_without_title_uses_id() {
        let dir = TempDir::new().unwrap();
        let cli = test_cli(&dir);

        let path = cli.save(request(None, "text/plain", "x")).await.unwrap();

        assert_eq!(path, dir.path().join("saves/artifact-t1.txt"));
    }

    #[tokio::test]
    async fn test_read_content_from_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("input.txt");
        std::fs::write(&file, "from file").unwrap();

        let content = read_content(Some(&file)).await.unwrap();
        assert_eq!(content, "from file");
    }

    #[tokio::test]
    async fn test_read_content_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = read_content(Some(&dir.path().join("missing.txt"))).await;
        assert!(result.unwrap_err().to_string().contains("missing.txt"));
    }

    #[tokio::test]
    async fn test_run_list_command() {
        let dir = TempDir::new().unwrap();
        let cli = test_cli(&dir);
        cli.save(request(Some("a"), "text/plain", "a")).await.unwrap();

        let args = CliArgs::parse_from(["artisave", "list", "--detailed"]);
        assert!(cli.run(args).await.is_ok());
    }

    #[tokio::test]
    async fn test_run_save_from_file() {
        let dir = TempDir::new().unwrap();
        let cli = test_cli(&dir);
        let input = dir.path().join("input.html");
        std::fs::write(&input, "<p>hi</p>").unwrap();

        let args = CliArgs::parse_from([
            "artisave",
            "save",
            input.to_str().unwrap(),
            "--title",
            "page",
            "--type",
            "text/html",
        ]);
        cli.run(args).await.unwrap();

        let saved = dir.path().join("saves/page.html");
        assert_eq!(std::fs::read_to_string(saved).unwrap(), "<p>hi</p>");
    }

    #[tokio::test]
    async fn test_run_list_does_not_create_save_dir() {
        let dir = TempDir::new().unwrap();
        let cli = test_cli(&dir);

        let args = CliArgs::parse_from(["artisave", "list"]);
        cli.run(args).await.unwrap();

        assert!(!dir.path().join("saves").exists());
        assert!(cli.read_only_service().unwrap().list_artifacts().await.is_empty());
    }

    #[test]
    fn test_config_show_reflects_save_path_override() {
        let args = CliArgs::parse_from([
            "artisave",
            "--config",
            "/nonexistent/config.toml",
            "--save-path",
            "/srv/override",
            "config",
            "show",
        ]);
        let cli = ArtisaveCli::from_args("artisave", &args).unwrap();

        let shown = config_handlers::cmd_config_show(cli.config()).unwrap();
        assert!(shown.contains("save_path = \"/srv/override\""));
    }

    #[tokio::test]
    async fn test_service_rejects_empty_save_path() {
        let cli = ArtisaveCli::new(
            "artisave",
            ArtisaveConfig {
                save_path: String::new(),
                ..Default::default()
            },
        );
        assert!(cli.service().await.is_err());
    }
}
