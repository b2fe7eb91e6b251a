//! End-to-end tests against the compiled `clawmerge` binary.

use crate::integration::test_utils::{
    clawmerge, read_json, stderr, stdout, user_config, vendor_fragment, write_json,
};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_dry_run_shows_preview_and_keeps_bytes() {
    let temp = TempDir::new().unwrap();
    let target = write_json(temp.path(), "openclaw.json", &user_config());
    let source = write_json(temp.path(), "fragment.json", &vendor_fragment());
    let before = fs::read(&target).unwrap();

    let output = clawmerge(&temp)
        .arg("merge")
        .arg("--source")
        .arg(&source)
        .arg("--target")
        .arg(&target)
        .arg("--dry-run")
        .arg("--backup")
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr={}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Previewing ollama config"));
    assert!(out.contains("models.providers.ollama: would update"));
    assert!(out.contains("Dry run complete. Use without --dry-run to apply changes."));
    assert_eq!(fs::read(&target).unwrap(), before);
    assert!(!temp.path().join("openclaw.json.bak").exists());
}

#[test]
fn test_merge_with_backup() {
    let temp = TempDir::new().unwrap();
    let target = write_json(temp.path(), "openclaw.json", &user_config());
    let source = write_json(temp.path(), "fragment.json", &vendor_fragment());
    let before = fs::read(&target).unwrap();

    let output = clawmerge(&temp)
        .arg("merge")
        .arg("--source")
        .arg(&source)
        .arg("--target")
        .arg(&target)
        .arg("--backup")
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr={}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Backup created"));
    assert!(out.contains("Merge complete!"));

    let backup = temp.path().join("openclaw.json.bak");
    assert_eq!(fs::read(&backup).unwrap(), before);

    let raw = fs::read_to_string(&target).unwrap();
    assert!(raw.ends_with("}\n"));
    assert!(raw.contains("\n  \"gateway\": {"), "expected 2-space indentation");
    let merged = read_json(&target);
    assert_eq!(merged["models"]["providers"]["ollama"]["models"][0]["id"], "qwen3-coder:480b");
    assert_eq!(merged["gateway"]["port"], 18789);
}

#[test]
fn test_only_models_flag() {
    let temp = TempDir::new().unwrap();
    let target = write_json(temp.path(), "openclaw.json", &user_config());
    let source = write_json(temp.path(), "fragment.json", &vendor_fragment());

    let output = clawmerge(&temp)
        .args(["merge", "--only-models", "--source"])
        .arg(&source)
        .arg("--target")
        .arg(&target)
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr={}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("models.providers.ollama: updated"));
    assert!(!out.contains("agents.defaults"));
    assert_eq!(
        read_json(&target)["agents"]["defaults"]["model"]["primary"],
        "anthropic/claude"
    );
}

#[test]
fn test_only_flags_are_mutually_exclusive() {
    let temp = TempDir::new().unwrap();
    let output = clawmerge(&temp)
        .args(["merge", "--only-models", "--only-agents"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(stderr(&output).contains("cannot be used with"));
}

#[test]
fn test_missing_target_shows_hint() {
    let temp = TempDir::new().unwrap();
    let source = write_json(temp.path(), "fragment.json", &vendor_fragment());
    let target = temp.path().join("nonexistent.json");

    let output = clawmerge(&temp)
        .arg("merge")
        .arg("--source")
        .arg(&source)
        .arg("--target")
        .arg(&target)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("not found"));
    assert!(err.contains("openclaw doctor"));
}

#[test]
fn test_invalid_source_json_fails() {
    let temp = TempDir::new().unwrap();
    let target = write_json(temp.path(), "openclaw.json", &user_config());
    let source = temp.path().join("fragment.json");
    fs::write(&source, "{ invalid json }").unwrap();
    let before = fs::read(&target).unwrap();

    let output = clawmerge(&temp)
        .arg("merge")
        .arg("--source")
        .arg(&source)
        .arg("--target")
        .arg(&target)
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Malformed JSON"));
    assert_eq!(fs::read(&target).unwrap(), before);
}

#[test]
fn test_json_format_report() {
    let temp = TempDir::new().unwrap();
    let target = write_json(temp.path(), "openclaw.json", &json!({}));
    let source = write_json(temp.path(), "fragment.json", &vendor_fragment());

    let output = clawmerge(&temp)
        .args(["merge", "--dry-run", "--format", "json", "--source"])
        .arg(&source)
        .arg("--target")
        .arg(&target)
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr={}", stderr(&output));
    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["dry_run"], true);
    assert_eq!(report["written"], false);
    assert_eq!(report["sections"].as_array().unwrap().len(), 3);
}

#[test]
fn test_help_lists_merge_flags() {
    let temp = TempDir::new().unwrap();
    let output = clawmerge(&temp).args(["merge", "--help"]).output().unwrap();
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("--dry-run"));
    assert!(out.contains("--backup"));
    assert!(out.contains("--only-models"));
}

#[test]
fn test_unknown_command_fails() {
    let temp = TempDir::new().unwrap();
    let output = clawmerge(&temp).arg("frobnicate").output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_validate_command() {
    let temp = TempDir::new().unwrap();
    let good = write_json(temp.path(), "good.json", &vendor_fragment());
    let output = clawmerge(&temp)
        .args(["validate", "--file"])
        .arg(&good)
        .output()
        .unwrap();
    assert!(output.status.success(), "stdout={}", stdout(&output));
    assert!(stdout(&output).contains("Models: 2"));

    let bad = write_json(
        temp.path(),
        "bad.json",
        &json!({"models": {"providers": {"ollama": {"models": []}}}}),
    );
    let output = clawmerge(&temp)
        .args(["validate", "--format", "json", "--file"])
        .arg(&bad)
        .output()
        .unwrap();
    assert!(!output.status.success());
    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert!(!report["errors"].as_array().unwrap().is_empty());
}

#[test]
fn test_get_command() {
    let temp = TempDir::new().unwrap();
    let file = write_json(temp.path(), "openclaw.json", &user_config());

    let output = clawmerge(&temp)
        .args(["get", "gateway.port", "--file"])
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "18789");

    let output = clawmerge(&temp)
        .args(["get", "gateway.missing", "--file"])
        .arg(&file)
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_configured_defaults_drive_merge() {
    let temp = TempDir::new().unwrap();
    let target = write_json(temp.path(), "openclaw.json", &user_config());
    let source = write_json(temp.path(), "fragment.json", &vendor_fragment());
    let config_file = temp.path().join("clawmerge.toml");
    fs::write(
        &config_file,
        format!(
            "[defaults]\nsource = {:?}\ntarget = {:?}\nbackup = true\n",
            source.to_string_lossy(),
            target.to_string_lossy()
        ),
    )
    .unwrap();

    let output = clawmerge(&temp)
        .arg("--config")
        .arg(&config_file)
        .arg("merge")
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr={}", stderr(&output));
    assert!(temp.path().join("openclaw.json.bak").exists());
    assert_eq!(
        read_json(&target)["models"]["providers"]["ollama"]["apiKey"],
        "ollama"
    );
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let temp = TempDir::new().unwrap();
    let output = clawmerge(&temp)
        .args(["--verbose", "config", "show", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let settings: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(settings["defaults"]["provider"], "ollama");
    assert!(stderr(&output).contains("DEBUG"));
}
