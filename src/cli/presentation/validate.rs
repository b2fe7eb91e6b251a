//! Validate presentation: fragment validation report.

use super::{to_json, Palette};
use crate::error::MergeError;
use crate::schema::{ValidationIssue, ValidationReport};
use comfy_table::Table;
use std::path::Path;

pub fn format_validation_report_text(report: &ValidationReport, file: &Path, color: bool) -> String {
    let palette = Palette { enabled: color };
    let mut out = format!(
        "Fragment: {}\n  Provider: {}\n  Models: {}",
        file.display(),
        report.provider,
        report.model_count
    );

    if report.errors.is_empty() && report.warnings.is_empty() {
        out.push_str(&format!("\n\n{}", palette.ok("✅ Validation passed")));
        return out;
    }

    out.push_str("\n\n");
    out.push_str(&issue_table(report, &palette).to_string());

    let summary = format!(
        "{} error(s), {} warning(s)",
        report.errors.len(),
        report.warnings.len()
    );
    if report.is_valid() {
        let line = format!("⚠️  Validation passed with {}", summary);
        out.push_str(&format!("\n\n{}", palette.warn(&line)));
    } else {
        let line = format!("❌ Validation failed: {}", summary);
        out.push_str(&format!("\n\n{}", palette.error(&line)));
    }
    out
}

fn issue_table(report: &ValidationReport, palette: &Palette) -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["Severity", "Path", "Problem"]);
    let rows = report
        .errors
        .iter()
        .map(|issue| (palette.error("error"), issue))
        .chain(report.warnings.iter().map(|issue| (palette.warn("warning"), issue)));
    for (severity, ValidationIssue { path, message }) in rows {
        table.add_row(vec![severity, path.clone(), message.clone()]);
    }
    table
}

pub fn format_validation_report_json(report: &ValidationReport) -> Result<String, MergeError> {
    to_json(report)
}
