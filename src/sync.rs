//! Section sync: apply a vendor fragment to a user configuration.
//!
//! For each selected section the source value is compared with the current
//! target value; differing sections are written into the target as an
//! independent copy. Sections missing from the source are skipped, never
//! treated as errors. All writes happen on the in-memory target first; the
//! file is serialized once at the end.

mod selection;

pub use selection::{sections_for, SectionPair, SyncMode, DEFAULT_PROVIDER};

use crate::document::{self, DocumentRole, JsonDocument};
use crate::error::MergeError;
use crate::tree::{self, access, IntermediatePolicy};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// How a changed section is written into the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeStrategy {
    /// The source section replaces the target section wholesale.
    #[default]
    Replace,
    /// The source section is deep-merged over the target section.
    Deep,
}

impl MergeStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MergeStrategy::Replace => "replace",
            MergeStrategy::Deep => "deep",
        }
    }
}

/// Per-section result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionStatus {
    Updated,
    WouldUpdate,
    UpToDate,
    Skipped,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionOutcome {
    pub source_path: String,
    pub target_path: String,
    pub status: SectionStatus,
}

/// Options for one sync run.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    pub mode: SyncMode,
    pub provider: String,
    pub strategy: MergeStrategy,
    pub policy: IntermediatePolicy,
    pub dry_run: bool,
    pub backup: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            mode: SyncMode::Full,
            provider: DEFAULT_PROVIDER.to_string(),
            strategy: MergeStrategy::Replace,
            policy: IntermediatePolicy::Replace,
            dry_run: false,
            backup: false,
        }
    }
}

/// Result of a sync run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncReport {
    pub source: PathBuf,
    pub target: PathBuf,
    pub mode: SyncMode,
    pub dry_run: bool,
    pub sections: Vec<SectionOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup: Option<PathBuf>,
    pub written: bool,
}

impl SyncReport {
    /// Number of sections that changed (or would change in a dry run).
    pub fn changed(&self) -> usize {
        self.sections
            .iter()
            .filter(|s| matches!(s.status, SectionStatus::Updated | SectionStatus::WouldUpdate))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.sections
            .iter()
            .filter(|s| s.status == SectionStatus::Skipped)
            .count()
    }
}

/// Source value of a section, treating JSON `null` as absent.
fn source_value<'a>(source: &'a Value, section: &SectionPair) -> Option<&'a Value> {
    tree::get(source, &section.source).filter(|v| !v.is_null())
}

/// Value the target section should hold after the sync.
fn desired_value(source_value: &Value, current: Option<&Value>, strategy: MergeStrategy) -> Value {
    match (strategy, current) {
        (MergeStrategy::Deep, Some(current)) => {
            tree::deep_merge(current.clone(), source_value.clone())
        }
        _ => source_value.clone(),
    }
}

/// Numbers compare by value, so `0` in one file matches `0.0` in the other.
fn is_current(current: Option<&Value>, desired: &Value) -> bool {
    current.is_some_and(|current| tree::same_value(current, desired))
}

fn outcome(section: &SectionPair, status: SectionStatus) -> SectionOutcome {
    SectionOutcome {
        source_path: section.source.to_string(),
        target_path: section.target.to_string(),
        status,
    }
}

/// Compare sections without mutating anything.
///
/// Under [`IntermediatePolicy::Reject`] a section that would need to write
/// through a non-object value fails with `PathConflict`, as the real run would.
pub fn plan_sections(
    source: &Value,
    target: &Value,
    sections: &[SectionPair],
    strategy: MergeStrategy,
    policy: IntermediatePolicy,
) -> Result<Vec<SectionOutcome>, MergeError> {
    let mut outcomes = Vec::with_capacity(sections.len());
    for section in sections {
        let Some(src) = source_value(source, section) else {
            warn!(path = %section.source, "Skipping section not found in source");
            outcomes.push(outcome(section, SectionStatus::Skipped));
            continue;
        };
        let current = tree::get(target, &section.target);
        let desired = desired_value(src, current, strategy);
        if is_current(current, &desired) {
            outcomes.push(outcome(section, SectionStatus::UpToDate));
            continue;
        }
        if policy == IntermediatePolicy::Reject {
            access::check_settable(target, &section.target)?;
        }
        outcomes.push(outcome(section, SectionStatus::WouldUpdate));
    }
    Ok(outcomes)
}

/// Write every differing section into `target`.
///
/// With [`IntermediatePolicy::Reject`] a section whose target path runs
/// through a non-object value aborts the run with `PathConflict`; sections
/// already applied stay applied in memory.
pub fn apply_sections(
    source: &Value,
    target: &mut Value,
    sections: &[SectionPair],
    strategy: MergeStrategy,
    policy: IntermediatePolicy,
) -> Result<Vec<SectionOutcome>, MergeError> {
    let mut outcomes = Vec::with_capacity(sections.len());
    for section in sections {
        let Some(src) = source_value(source, section) else {
            warn!(path = %section.source, "Skipping section not found in source");
            outcomes.push(outcome(section, SectionStatus::Skipped));
            continue;
        };

        let current = tree::get(target, &section.target);
        let desired = desired_value(src, current, strategy);
        if is_current(current, &desired) {
            debug!(path = %section.target, "Section already up to date");
            outcomes.push(outcome(section, SectionStatus::UpToDate));
            continue;
        }

        tree::set_with_policy(target, &section.target, desired, policy)?;
        info!(path = %section.target, strategy = strategy.as_str(), "Section updated");
        outcomes.push(outcome(section, SectionStatus::Updated));
    }
    Ok(outcomes)
}

/// Load both documents, sync the selected sections, and write the target.
///
/// Dry runs never touch the filesystem. Otherwise the target is written only
/// when at least one section changed; the backup, when requested, is taken
/// right before that write.
pub fn run_sync(
    source_path: &Path,
    target_path: &Path,
    options: &SyncOptions,
) -> Result<SyncReport, MergeError> {
    let source = JsonDocument::load(source_path, DocumentRole::Source)?;
    let mut target = JsonDocument::load(target_path, DocumentRole::Target)?;
    let sections = sections_for(options.mode, &options.provider)?;

    info!(
        source = %source_path.display(),
        target = %target_path.display(),
        mode = options.mode.as_str(),
        dry_run = options.dry_run,
        "Starting sync"
    );

    let mut report = SyncReport {
        source: source_path.to_path_buf(),
        target: target_path.to_path_buf(),
        mode: options.mode,
        dry_run: options.dry_run,
        sections: Vec::new(),
        backup: None,
        written: false,
    };

    if options.dry_run {
        report.sections = plan_sections(
            &source.value,
            &target.value,
            &sections,
            options.strategy,
            options.policy,
        )?;
        return Ok(report);
    }

    report.sections = apply_sections(
        &source.value,
        &mut target.value,
        &sections,
        options.strategy,
        options.policy,
    )?;

    if report.changed() == 0 {
        info!("No sections changed; target left untouched");
        return Ok(report);
    }

    if options.backup {
        report.backup = Some(document::create_backup(target_path)?);
    }
    target.write()?;
    report.written = true;
    Ok(report)
}
