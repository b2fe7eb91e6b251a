//! Section selection: which paths a sync run touches.

use crate::error::MergeError;
use crate::tree::KeyPath;
use serde::{Deserialize, Serialize};

/// Provider section synchronized when none is configured.
pub const DEFAULT_PROVIDER: &str = "ollama";

/// Scope of a sync run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SyncMode {
    /// Provider models and agent defaults
    #[default]
    Full,
    /// Only `models.providers.<provider>`
    ModelsOnly,
    /// Only `agents.defaults.model` and `agents.defaults.models`
    AgentsOnly,
}

impl SyncMode {
    pub fn from_flags(only_models: bool, only_agents: bool) -> Self {
        if only_models {
            SyncMode::ModelsOnly
        } else if only_agents {
            SyncMode::AgentsOnly
        } else {
            SyncMode::Full
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SyncMode::Full => "full",
            SyncMode::ModelsOnly => "models-only",
            SyncMode::AgentsOnly => "agents-only",
        }
    }
}

/// One `(source, target)` path pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionPair {
    pub source: KeyPath,
    pub target: KeyPath,
}

impl SectionPair {
    fn same(path: KeyPath) -> Self {
        Self {
            source: path.clone(),
            target: path,
        }
    }
}

/// Section pairs for `mode`, with the provider segment set to `provider`.
pub fn sections_for(mode: SyncMode, provider: &str) -> Result<Vec<SectionPair>, MergeError> {
    if provider.trim().is_empty() {
        return Err(MergeError::InvalidPath(
            "provider name cannot be empty".to_string(),
        ));
    }

    let models = || KeyPath::from_segments(["models", "providers", provider]).map(SectionPair::same);
    let agents = || -> Result<Vec<SectionPair>, MergeError> {
        Ok(vec![
            SectionPair::same(KeyPath::parse("agents.defaults.model")?),
            SectionPair::same(KeyPath::parse("agents.defaults.models")?),
        ])
    };

    let pairs = match mode {
        SyncMode::ModelsOnly => vec![models()?],
        SyncMode::AgentsOnly => agents()?,
        SyncMode::Full => {
            let mut pairs = vec![models()?];
            pairs.extend(agents()?);
            pairs
        }
    };
    Ok(pairs)
}
