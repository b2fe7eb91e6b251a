//! Merge presentation: change summary for `clawmerge merge`.

use super::{to_json, Palette};
use crate::error::MergeError;
use crate::sync::{SectionStatus, SyncReport};

pub fn format_merge_report_text(report: &SyncReport, provider: &str, color: bool) -> String {
    let palette = Palette { enabled: color };
    let mut lines = Vec::new();

    let header = if report.dry_run {
        format!("👁️  Previewing {} config", provider)
    } else {
        format!("🔄  Merging {} config", provider)
    };
    lines.push(palette.heading(&header));
    lines.push(format!("   Source: {}", report.source.display()));
    lines.push(format!("   Target: {}", report.target.display()));
    lines.push(String::new());

    for section in &report.sections {
        let line = match section.status {
            SectionStatus::Skipped => palette.warn(&format!(
                "   ⚠️  Skipping {} (not found in source)",
                section.source_path
            )),
            SectionStatus::WouldUpdate => {
                format!("   📝 {}: {}", section.target_path, palette.warn("would update"))
            }
            SectionStatus::Updated => {
                format!("   ✅ {}: {}", section.target_path, palette.ok("updated"))
            }
            SectionStatus::UpToDate => format!("   ✅ {}: already up to date", section.target_path),
        };
        lines.push(line);
    }

    if report.dry_run {
        lines.push(String::new());
        lines.push("🏁 Dry run complete. Use without --dry-run to apply changes.".to_string());
        return lines.join("\n");
    }

    if let Some(ref backup) = report.backup {
        lines.push(format!("   💾 Backup created: {}", backup.display()));
    }

    lines.push(String::new());
    if !report.written {
        lines.push(palette.ok("✅ Already up to date; target left unchanged."));
        return lines.join("\n");
    }

    lines.push(palette.ok("✅ Merge complete!"));
    lines.push(String::new());
    lines.push("📝 Next steps:".to_string());
    lines.push(format!(
        "   1. Review the merged config: openclaw config.get | jq '.models.providers.{}'",
        provider
    ));
    lines.push("   2. Restart OpenClaw to pick up changes: openclaw gateway restart".to_string());
    lines.join("\n")
}

pub fn format_merge_report_json(report: &SyncReport) -> Result<String, MergeError> {
    to_json(report)
}
