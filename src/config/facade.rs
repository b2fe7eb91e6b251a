//! Config loading facade: the only entry point for reading tool settings.

use super::merge::merge_policy;
use super::paths;
use super::sources::{environment, global_file};
use super::ClawMergeConfig;
use crate::error::MergeError;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load settings: defaults < global config file < environment.
    pub fn load() -> Result<ClawMergeConfig, MergeError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder);
        let builder = environment::add_to_builder(builder);
        Self::finish(builder.build()?.try_deserialize()?)
    }

    /// Load settings from an explicit file, which replaces the global file:
    /// defaults < `path` < environment.
    pub fn load_from_file(path: &Path) -> Result<ClawMergeConfig, MergeError> {
        if !path.exists() {
            return Err(MergeError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_file(builder, path, true);
        let builder = environment::add_to_builder(builder);
        Self::finish(builder.build()?.try_deserialize()?)
    }

    /// Load from `path` when given, otherwise from the standard locations.
    pub fn load_with_override(path: Option<&Path>) -> Result<ClawMergeConfig, MergeError> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Self::load(),
        }
    }

    /// Path of the global config file, if a home directory is known.
    pub fn xdg_config_path() -> Option<PathBuf> {
        paths::global_config_path()
    }

    fn finish(mut config: ClawMergeConfig) -> Result<ClawMergeConfig, MergeError> {
        config.defaults.source = paths::expand_tilde(&config.defaults.source);
        config.defaults.target = paths::expand_tilde(&config.defaults.target);
        config.validate().map_err(|errors| {
            let msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            MergeError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                msgs.join("\n")
            ))
        })?;
        debug!(
            source = %config.defaults.source.display(),
            target = %config.defaults.target.display(),
            provider = %config.defaults.provider,
            "Configuration loaded"
        );
        Ok(config)
    }
}
