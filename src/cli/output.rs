//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::MergeError;

/// Map domain errors to a message for stderr. Missing targets carry a setup hint.
pub fn map_error(e: &MergeError) -> String {
    match e {
        MergeError::TargetNotFound(_) => {
            format!("❌ {}\n   Run 'openclaw doctor' first to initialize.", e)
        }
        _ => format!("❌ {}", e),
    }
}
