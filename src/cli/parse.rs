//! CLI parse: clap types for clawmerge. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// clawmerge - Sync a vendor model fragment into an OpenClaw configuration
#[derive(Parser)]
#[command(name = "clawmerge")]
#[command(version)]
#[command(about = "Merge vendor model/agent fragments into an OpenClaw config")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (replaces the global config file)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(long, global = true, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, global = true, default_value = "false", conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true, value_parser = ["json", "text"])]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true, value_parser = ["stdout", "stderr", "file"])]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Merge provider models and agent defaults from a fragment into the target config
    Merge {
        /// Fragment to merge from (default: configured source)
        #[arg(long)]
        source: Option<PathBuf>,
        /// Config to merge into (default: configured target)
        #[arg(long)]
        target: Option<PathBuf>,
        /// Show what would change without writing
        #[arg(long)]
        dry_run: bool,
        /// Back up the target to <target>.bak before writing
        #[arg(long)]
        backup: bool,
        /// Only merge the provider's model definitions
        #[arg(long, conflicts_with = "only_agents")]
        only_models: bool,
        /// Only merge agent model defaults
        #[arg(long)]
        only_agents: bool,
        /// Provider key under models.providers (default: configured provider)
        #[arg(long)]
        provider: Option<String>,
        /// Section write strategy
        #[arg(long, value_parser = ["replace", "deep"])]
        strategy: Option<String>,
        /// Fail instead of replacing non-object values on a write path
        #[arg(long)]
        strict_paths: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Validate a vendor fragment's models and agent defaults
    Validate {
        /// Fragment to check (default: configured source)
        #[arg(long)]
        file: Option<PathBuf>,
        /// Provider key under models.providers (default: configured provider)
        #[arg(long)]
        provider: Option<String>,
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Print the JSON value at a dotted path
    Get {
        /// Dotted path, e.g. models.providers.ollama
        path: String,
        /// Document to read (default: configured target)
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Inspect tool settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show effective settings after defaults, config file, and environment
    Show {
        /// Output format (toml or json)
        #[arg(long, default_value = "toml", value_parser = ["toml", "json"])]
        format: String,
    },
    /// Print the global config file location
    Path,
}
