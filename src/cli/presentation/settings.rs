//! Settings presentation: `clawmerge config show` and `config path`.

use super::to_json;
use crate::config::ClawMergeConfig;
use crate::error::MergeError;
use std::path::Path;

pub fn format_settings(config: &ClawMergeConfig, format: &str) -> Result<String, MergeError> {
    match format {
        "json" => to_json(config),
        _ => config.to_toml(),
    }
}

pub fn format_config_path(path: Option<&Path>) -> String {
    match path {
        Some(path) if path.exists() => path.display().to_string(),
        Some(path) => format!("{} (not present)", path.display()),
        None => "No config location (HOME is not set)".to_string(),
    }
}
