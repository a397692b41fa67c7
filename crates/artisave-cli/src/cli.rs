//! CLI argument parsing and command definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

// ============================================================================
// CLI argument types
// ============================================================================

/// Save generated artifacts to disk, over MCP or from the command line.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to configuration file.
    #[arg(short, long, env = "ARTISAVE_CONFIG")]
    pub config: Option<String>,

    /// Directory to save artifacts under, overriding the config file.
    #[arg(short, long)]
    pub save_path: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute. Defaults to `serve`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the MCP server on stdin/stdout.
    Serve,

    /// Save a file, or standard input, as an artifact.
    Save {
        /// File to read content from; standard input when omitted.
        file: Option<PathBuf>,

        /// Title, may contain '/' to create subdirectories.
        #[arg(short, long)]
        title: Option<String>,

        /// Content type, e.g. text/markdown or application/vnd.ant.code.
        #[arg(short = 'T', long = "type", default_value = "text/plain")]
        kind: String,

        /// Language of code content.
        #[arg(short, long)]
        language: Option<String>,

        /// Artifact id, used in the filename when no title is given.
        #[arg(long)]
        id: Option<String>,
    },

    /// List saved artifacts.
    List {
        /// Show size and modification time.
        #[arg(short, long)]
        detailed: bool,
    },

    /// Configuration operations.
    Config(ConfigCommand),
}

/// Config-specific subcommands.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    /// Config subcommand to execute.
    #[command(subcommand)]
    pub command: ConfigAction,
}

/// Available config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path.
    Path,

    /// Print the effective configuration as TOML.
    Show,

    /// Create a default configuration file.
    Init {
        /// Output file path (defaults to XDG config path).
        #[arg(short, long)]
        file: Option<String>,

        /// Overwrite existing file.
        #[arg(long)]
        force: bool,
    },
}

// ============================================================================
// Tests
// ============================================================================
