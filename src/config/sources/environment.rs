//! Environment source: `CLAWMERGE__DEFAULTS__PROVIDER=lmstudio` and friends.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

pub const ENV_PREFIX: &str = "CLAWMERGE";

/// Add the environment override source. Double underscores separate nesting
/// levels so `CLAWMERGE__DEFAULTS__STRICT_PATHS` maps to `defaults.strict_paths`.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    )
}
