//! CLI presentation: text and json formatters per command family.

mod merge;
mod settings;
mod validate;

pub use merge::{format_merge_report_json, format_merge_report_text};
pub use settings::{format_config_path, format_settings};
pub use validate::{format_validation_report_json, format_validation_report_text};

use crate::error::MergeError;
use owo_colors::OwoColorize;
use serde::Serialize;

/// Pretty JSON for any serializable result.
pub(crate) fn to_json<T: Serialize>(value: &T) -> Result<String, MergeError> {
    serde_json::to_string_pretty(value).map_err(|e| MergeError::Serialization(e.to_string()))
}

/// Status marker colors. Plain text when `enabled` is false.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Palette {
    pub enabled: bool,
}

impl Palette {
    pub fn ok(&self, s: &str) -> String {
        if self.enabled {
            s.green().to_string()
        } else {
            s.to_string()
        }
    }

    pub fn warn(&self, s: &str) -> String {
        if self.enabled {
            s.yellow().to_string()
        } else {
            s.to_string()
        }
    }

    pub fn error(&self, s: &str) -> String {
        if self.enabled {
            s.red().to_string()
        } else {
            s.to_string()
        }
    }

    pub fn heading(&self, s: &str) -> String {
        if self.enabled {
            s.bold().to_string()
        } else {
            s.to_string()
        }
    }
}
