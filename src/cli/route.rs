//! CLI route: single route table and run context. Dispatches to domain services and presentation.

use crate::cli::parse::{Commands, ConfigCommands};
use crate::cli::presentation::{
    format_config_path, format_merge_report_json, format_merge_report_text, format_settings,
    format_validation_report_json, format_validation_report_text,
};
use crate::cli::command_name;
use crate::config::{paths, ClawMergeConfig, ConfigLoader};
use crate::document::{DocumentRole, JsonDocument};
use crate::error::MergeError;
use crate::schema::validate_fragment;
use crate::sync::{run_sync, MergeStrategy, SyncMode, SyncOptions};
use crate::tree::{self, IntermediatePolicy, KeyPath};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Rendered command result. `success == false` maps to a non-zero exit.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub text: String,
    pub success: bool,
}

impl CommandOutput {
    fn ok(text: String) -> Self {
        Self {
            text,
            success: true,
        }
    }

    fn failed(text: String) -> Self {
        Self {
            text,
            success: false,
        }
    }
}

/// Runtime context for CLI execution: effective tool settings and terminal capabilities.
/// Built from an optional config path using ConfigLoader only.
pub struct RunContext {
    config: ClawMergeConfig,
    color: bool,
}

impl RunContext {
    /// Create run context from an optional config path. Uses ConfigLoader only.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, MergeError> {
        let config = ConfigLoader::load_with_override(config_path.as_deref())?;
        let color = std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
        Ok(Self { config, color })
    }

    /// Effective settings after defaults, config file, and environment.
    pub fn config(&self) -> &ClawMergeConfig {
        &self.config
    }

    pub fn execute(&self, command: &Commands) -> Result<CommandOutput, MergeError> {
        let name = command_name(command);
        let started = Instant::now();
        debug!(command = %name, "Dispatching command");

        let result = match command {
            Commands::Merge {
                source,
                target,
                dry_run,
                backup,
                only_models,
                only_agents,
                provider,
                strategy,
                strict_paths,
                format,
            } => {
                let defaults = &self.config.defaults;
                let source = self.resolve_path(source.as_deref(), &defaults.source);
                let target = self.resolve_path(target.as_deref(), &defaults.target);
                let options = SyncOptions {
                    mode: SyncMode::from_flags(*only_models, *only_agents),
                    provider: provider.clone().unwrap_or_else(|| defaults.provider.clone()),
                    strategy: match strategy.as_deref() {
                        Some(s) => parse_strategy(s)?,
                        None => defaults.strategy,
                    },
                    policy: if *strict_paths {
                        IntermediatePolicy::Reject
                    } else {
                        defaults.intermediate_policy()
                    },
                    dry_run: *dry_run,
                    backup: *backup || defaults.backup,
                };
                self.handle_merge(&source, &target, &options, format)
            }
            Commands::Validate {
                file,
                provider,
                format,
            } => {
                let defaults = &self.config.defaults;
                let file = self.resolve_path(file.as_deref(), &defaults.source);
                let provider = provider.as_deref().unwrap_or(&defaults.provider);
                self.handle_validate(&file, provider, format)
            }
            Commands::Get { path, file } => {
                let file = self.resolve_path(file.as_deref(), &self.config.defaults.target);
                self.handle_get(&file, path)
            }
            Commands::Config { command } => self.handle_config(command),
        };

        match &result {
            Ok(output) => info!(
                command = %name,
                success = output.success,
                duration_ms = started.elapsed().as_millis() as u64,
                "Command finished"
            ),
            Err(e) => debug!(command = %name, error = %e, "Command failed"),
        }
        result
    }

    fn resolve_path(&self, flag: Option<&Path>, configured: &Path) -> PathBuf {
        match flag {
            Some(path) => paths::expand_tilde(path),
            None => configured.to_path_buf(),
        }
    }

    fn handle_merge(
        &self,
        source: &Path,
        target: &Path,
        options: &SyncOptions,
        format: &str,
    ) -> Result<CommandOutput, MergeError> {
        let report = run_sync(source, target, options)?;
        let text = match format {
            "json" => format_merge_report_json(&report)?,
            _ => format_merge_report_text(&report, &options.provider, self.color),
        };
        Ok(CommandOutput::ok(text))
    }

    fn handle_validate(
        &self,
        file: &Path,
        provider: &str,
        format: &str,
    ) -> Result<CommandOutput, MergeError> {
        let fragment = JsonDocument::load(file, DocumentRole::Source)?;
        let report = validate_fragment(&fragment.value, provider);
        let text = match format {
            "json" => format_validation_report_json(&report)?,
            _ => format_validation_report_text(&report, file, self.color),
        };
        if report.is_valid() {
            Ok(CommandOutput::ok(text))
        } else {
            Ok(CommandOutput::failed(text))
        }
    }

    fn handle_get(&self, file: &Path, dotted: &str) -> Result<CommandOutput, MergeError> {
        let path = KeyPath::parse(dotted)?;
        let document = JsonDocument::load(file, DocumentRole::Target)?;
        match tree::get(&document.value, &path) {
            Some(value) => {
                let text = serde_json::to_string_pretty(value)
                    .map_err(|e| MergeError::Serialization(e.to_string()))?;
                Ok(CommandOutput::ok(text))
            }
            None => Ok(CommandOutput::failed(format!(
                "Path not found: {} in {}",
                path,
                file.display()
            ))),
        }
    }

    fn handle_config(&self, command: &ConfigCommands) -> Result<CommandOutput, MergeError> {
        match command {
            ConfigCommands::Show { format } => {
                Ok(CommandOutput::ok(format_settings(&self.config, format)?))
            }
            ConfigCommands::Path => Ok(CommandOutput::ok(format_config_path(
                ConfigLoader::xdg_config_path().as_deref(),
            ))),
        }
    }
}

fn parse_strategy(value: &str) -> Result<MergeStrategy, MergeError> {
    match value {
        "replace" => Ok(MergeStrategy::Replace),
        "deep" => Ok(MergeStrategy::Deep),
        other => Err(MergeError::ConfigError(format!(
            "Invalid strategy '{}' (must be 'replace' or 'deep')",
            other
        ))),
    }
}
