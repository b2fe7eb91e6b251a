//! Global config file source: $XDG_CONFIG_HOME/clawmerge/config.toml or ~/.config/clawmerge/config.toml

use crate::config::paths;
use config::builder::DefaultState;
use config::ConfigBuilder;
use config::File;
use config::FileFormat;
use std::path::Path;
use tracing::debug;

/// Add global config file source to builder if it exists.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    match paths::global_config_path() {
        Some(path) if path.exists() => {
            let canonical = path.canonicalize().unwrap_or_else(|_| path.clone());
            add_file(builder, &canonical, false)
        }
        Some(path) => {
            debug!(config_path = %path.display(), "No global configuration file; using defaults");
            builder
        }
        None => builder,
    }
}

/// Add a TOML file source.
pub fn add_file(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
    required: bool,
) -> ConfigBuilder<DefaultState> {
    builder.add_source(File::from(path).format(FileFormat::Toml).required(required))
}
