//! JSON documents on disk: load, write back, back up.

use crate::error::MergeError;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Which side of a merge a document plays. Decides the not-found error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentRole {
    Source,
    Target,
}

/// A parsed JSON document and the path it came from.
#[derive(Debug, Clone)]
pub struct JsonDocument {
    pub path: PathBuf,
    pub value: Value,
}

impl JsonDocument {
    /// Load and parse the document at `path`.
    pub fn load(path: &Path, role: DocumentRole) -> Result<Self, MergeError> {
        if !path.exists() {
            return Err(match role {
                DocumentRole::Source => MergeError::SourceNotFound(path.to_path_buf()),
                DocumentRole::Target => MergeError::TargetNotFound(path.to_path_buf()),
            });
        }
        let raw = std::fs::read_to_string(path).map_err(|e| MergeError::io(path, e))?;
        let value = parse_json(path, &raw)?;
        debug!(path = %path.display(), role = ?role, bytes = raw.len(), "Loaded JSON document");
        Ok(Self {
            path: path.to_path_buf(),
            value,
        })
    }

    /// Serialize the document back to its own path.
    pub fn write(&self) -> Result<(), MergeError> {
        write_pretty(&self.path, &self.value)
    }
}

/// Parse JSON text, attributing failures to `path`.
pub fn parse_json(path: &Path, raw: &str) -> Result<Value, MergeError> {
    serde_json::from_str(raw).map_err(|e| MergeError::MalformedJson {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Render a tree as 2-space indented JSON with a trailing newline.
pub fn to_pretty_string(value: &Value) -> Result<String, MergeError> {
    let mut out =
        serde_json::to_string_pretty(value).map_err(|e| MergeError::Serialization(e.to_string()))?;
    out.push('\n');
    Ok(out)
}

/// Write `value` to `path` as formatted JSON.
pub fn write_pretty(path: &Path, value: &Value) -> Result<(), MergeError> {
    let content = to_pretty_string(value)?;
    std::fs::write(path, content).map_err(|e| MergeError::io(path, e))?;
    info!(path = %path.display(), "Wrote merged configuration");
    Ok(())
}

/// Sibling backup path: the extension is replaced with `json.bak`
/// (`openclaw.json` -> `openclaw.json.bak`).
pub fn backup_path(path: &Path) -> PathBuf {
    path.with_extension("json.bak")
}

/// Copy `path` byte-for-byte to its backup path and return that path.
pub fn create_backup(path: &Path) -> Result<PathBuf, MergeError> {
    let backup = backup_path(path);
    std::fs::copy(path, &backup).map_err(|e| MergeError::io(&backup, e))?;
    info!(from = %path.display(), to = %backup.display(), "Created backup");
    Ok(backup)
}
