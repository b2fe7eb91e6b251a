//! Merge rules: built-in defaults underneath every other source.

use config::builder::DefaultState;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("defaults.source", "openclaw-ollama-cloud.json")?
        .set_default("defaults.target", "~/.openclaw/openclaw.json")?
        .set_default("defaults.provider", "ollama")?
        .set_default("defaults.backup", false)?
        .set_default("defaults.strict_paths", false)?
        .set_default("defaults.strategy", "replace")
}
