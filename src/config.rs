//! Configuration System
//!
//! Tool settings for clawmerge: default document paths, the provider section
//! to sync, backup and strictness defaults, and logging. Layered with the
//! `config` crate: built-in defaults, the global TOML file (or `--config`),
//! then `CLAWMERGE__*` environment variables. CLI flags are applied on top by
//! the CLI layer.

use crate::error::MergeError;
use crate::logging::LoggingConfig;
use crate::sync::MergeStrategy;
use crate::tree::IntermediatePolicy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[cfg(test)]
use std::sync::Mutex;

mod facade;
mod merge;
pub mod paths;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClawMergeConfig {
    /// Defaults for the merge command
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Defaults for `clawmerge merge`, overridable per invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Vendor fragment to merge from
    #[serde(default = "default_source")]
    pub source: PathBuf,

    /// User configuration to merge into
    #[serde(default = "default_target")]
    pub target: PathBuf,

    /// Provider key under `models.providers`
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Always back up the target before writing
    #[serde(default)]
    pub backup: bool,

    /// Fail instead of replacing non-object values on a write path
    #[serde(default)]
    pub strict_paths: bool,

    /// Section write strategy
    #[serde(default)]
    pub strategy: MergeStrategy,
}

fn default_source() -> PathBuf {
    PathBuf::from("openclaw-ollama-cloud.json")
}

fn default_target() -> PathBuf {
    PathBuf::from("~/.openclaw/openclaw.json")
}

fn default_provider() -> String {
    crate::sync::DEFAULT_PROVIDER.to_string()
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            target: default_target(),
            provider: default_provider(),
            backup: false,
            strict_paths: false,
            strategy: MergeStrategy::default(),
        }
    }
}

impl DefaultsConfig {
    pub fn intermediate_policy(&self) -> IntermediatePolicy {
        if self.strict_paths {
            IntermediatePolicy::Reject
        } else {
            IntermediatePolicy::Replace
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.source.as_os_str().is_empty() {
            return Err("Source path cannot be empty".to_string());
        }
        if self.target.as_os_str().is_empty() {
            return Err("Target path cannot be empty".to_string());
        }
        if self.provider.trim().is_empty() {
            return Err("Provider name cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Defaults(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Defaults(msg) => write!(f, "Defaults: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl ClawMergeConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.defaults.validate() {
            errors.push(ValidationError::Defaults(e));
        }

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            errors.push(ValidationError::Logging(format!(
                "Invalid format '{}' (must be 'text' or 'json')",
                self.logging.format
            )));
        }
        if !matches!(self.logging.output.as_str(), "stdout" | "stderr" | "file") {
            errors.push(ValidationError::Logging(format!(
                "Invalid output '{}' (must be 'stdout', 'stderr', or 'file')",
                self.logging.output
            )));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Render the effective settings as TOML.
    pub fn to_toml(&self) -> Result<String, MergeError> {
        toml::to_string_pretty(self).map_err(|e| MergeError::Serialization(e.to_string()))
    }
}

// Serializes HOME / XDG_CONFIG_HOME / CLAWMERGE__* access across tests.
#[cfg(test)]
pub(crate) static ENV_MUTEX: Mutex<()> = Mutex::new(());
