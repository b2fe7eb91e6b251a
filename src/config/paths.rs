//! Filesystem locations: XDG config home, state dir, `~` expansion.

use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "clawmerge";

/// `$XDG_CONFIG_HOME`, falling back to `~/.config`.
pub fn config_home() -> Option<PathBuf> {
    match std::env::var("XDG_CONFIG_HOME") {
        Ok(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
        _ => home_dir().map(|home| home.join(".config")),
    }
}

/// Global config file: `<config home>/clawmerge/config.toml`.
pub fn global_config_path() -> Option<PathBuf> {
    config_home().map(|dir| dir.join(APP_NAME).join("config.toml"))
}

/// Directory for log files.
pub fn state_dir() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("", "", APP_NAME)?;
    Some(
        dirs.state_dir()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| dirs.data_local_dir().to_path_buf()),
    )
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
}

/// Expand a leading `~` against `$HOME`. Other paths are returned unchanged.
pub fn expand_tilde(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}
