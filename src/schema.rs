//! Vendor fragment validation
//!
//! Checks that a provider fragment has the shape OpenClaw expects before it
//! is merged: a provider entry with a base URL, API key and non-empty model
//! list, and agent defaults whose model references point at listed models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fmt;

const COST_FIELDS: &[&str] = &["input", "output", "cacheRead", "cacheWrite"];

/// A single problem found in a fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub path: String,
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    pub provider: String,
    pub model_count: usize,
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ValidationIssue {
            path: path.into(),
            message: message.into(),
        });
    }

    fn warning(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ValidationIssue {
            path: path.into(),
            message: message.into(),
        });
    }
}

/// Validate a vendor fragment for `provider`.
pub fn validate_fragment(fragment: &Value, provider: &str) -> ValidationReport {
    let mut report = ValidationReport {
        provider: provider.to_string(),
        ..ValidationReport::default()
    };

    let Some(root) = fragment.as_object() else {
        report.error("$", "fragment must be a JSON object");
        return report;
    };

    let model_ids = validate_models_section(root, provider, &mut report);
    report.model_count = model_ids.len();
    validate_agents_section(root, provider, &model_ids, &mut report);
    report
}

fn object_at<'a>(
    parent: &'a Map<String, Value>,
    key: &str,
    path: &str,
    report: &mut ValidationReport,
) -> Option<&'a Map<String, Value>> {
    match parent.get(key) {
        None => {
            report.error(path, "missing required section");
            None
        }
        Some(Value::Object(map)) => Some(map),
        Some(_) => {
            report.error(path, "must be an object");
            None
        }
    }
}

/// Returns the model ids listed under the provider, in order.
fn validate_models_section(
    root: &Map<String, Value>,
    provider: &str,
    report: &mut ValidationReport,
) -> Vec<String> {
    let Some(models) = object_at(root, "models", "models", report) else {
        return Vec::new();
    };
    let Some(providers) = object_at(models, "providers", "models.providers", report) else {
        return Vec::new();
    };
    let provider_path = format!("models.providers.{}", provider);
    let Some(entry) = object_at(providers, provider, &provider_path, report) else {
        return Vec::new();
    };

    match entry.get("baseUrl") {
        Some(Value::String(url)) if url.starts_with("http://") || url.starts_with("https://") => {}
        Some(Value::String(url)) => report.error(
            format!("{}.baseUrl", provider_path),
            format!("'{}' is not an http(s) URL", url),
        ),
        Some(_) => report.error(format!("{}.baseUrl", provider_path), "must be a string"),
        None => report.error(format!("{}.baseUrl", provider_path), "missing required field"),
    }

    match entry.get("apiKey") {
        Some(Value::String(_)) => {}
        Some(_) => report.error(format!("{}.apiKey", provider_path), "must be a string"),
        None => report.error(format!("{}.apiKey", provider_path), "missing required field"),
    }

    let list_path = format!("{}.models", provider_path);
    let list = match entry.get("models") {
        Some(Value::Array(list)) if !list.is_empty() => list,
        Some(Value::Array(_)) => {
            report.error(&list_path, "must list at least one model");
            return Vec::new();
        }
        Some(_) => {
            report.error(&list_path, "must be an array");
            return Vec::new();
        }
        None => {
            report.error(&list_path, "missing required field");
            return Vec::new();
        }
    };

    let mut ids = Vec::new();
    let mut seen = HashSet::new();
    for (index, model) in list.iter().enumerate() {
        let model_path = format!("{}[{}]", list_path, index);
        let Some(model) = model.as_object() else {
            report.error(&model_path, "model entry must be an object");
            continue;
        };

        for field in ["id", "name"] {
            match model.get(field) {
                Some(Value::String(s)) if !s.is_empty() => {}
                Some(Value::String(_)) => {
                    report.error(format!("{}.{}", model_path, field), "must not be empty")
                }
                Some(_) => report.error(format!("{}.{}", model_path, field), "must be a string"),
                None => report.error(format!("{}.{}", model_path, field), "missing required field"),
            }
        }

        check_optional_fields(model, &model_path, report);

        if let Some(id) = model.get("id").and_then(Value::as_str).filter(|s| !s.is_empty()) {
            if !id.contains(':') {
                report.warning(
                    format!("{}.id", model_path),
                    format!("'{}' has no ':<variant>' suffix", id),
                );
            }
            if !seen.insert(id.to_string()) {
                report.error(format!("{}.id", model_path), format!("duplicate model id '{}'", id));
            } else {
                ids.push(id.to_string());
            }
        }
    }
    ids
}

fn check_optional_fields(model: &Map<String, Value>, model_path: &str, report: &mut ValidationReport) {
    let typed: [(&str, fn(&Value) -> bool, &str); 5] = [
        ("reasoning", Value::is_boolean, "a boolean"),
        ("input", Value::is_array, "an array"),
        ("cost", Value::is_object, "an object"),
        ("contextWindow", is_integer, "an integer"),
        ("maxTokens", is_integer, "an integer"),
    ];
    for (field, check, expected) in typed {
        if let Some(value) = model.get(field) {
            if !check(value) {
                report.error(format!("{}.{}", model_path, field), format!("must be {}", expected));
            }
        }
    }

    if let Some(Value::Object(cost)) = model.get("cost") {
        for field in COST_FIELDS {
            let path = format!("{}.cost.{}", model_path, field);
            match cost.get(*field).and_then(Value::as_f64) {
                Some(n) if n >= 0.0 => {}
                Some(_) => report.error(path, "must be non-negative"),
                None if cost.contains_key(*field) => report.error(path, "must be a number"),
                None => report.error(path, "missing required field"),
            }
        }
    }
}

fn strip_provider<'a>(reference: &'a str, prefix: &str) -> &'a str {
    reference.strip_prefix(prefix).unwrap_or(reference)
}

fn is_integer(value: &Value) -> bool {
    value.is_i64() || value.is_u64()
}

fn validate_agents_section(
    root: &Map<String, Value>,
    provider: &str,
    model_ids: &[String],
    report: &mut ValidationReport,
) {
    let Some(agents) = object_at(root, "agents", "agents", report) else {
        return;
    };
    let Some(defaults) = object_at(agents, "defaults", "agents.defaults", report) else {
        return;
    };
    let prefix = format!("{}/", provider);
    let references_model =
        |reference: &str| model_ids.iter().any(|id| id == strip_provider(reference, &prefix));
    // No reference checks against an unusable model list.
    let check_refs = !model_ids.is_empty();

    if let Some(model) = object_at(defaults, "model", "agents.defaults.model", report) {
        match model.get("primary") {
            Some(Value::String(primary)) if !primary.is_empty() => {
                if check_refs && !references_model(primary.as_str()) {
                    report.error(
                        "agents.defaults.model.primary",
                        format!("'{}' does not reference a listed model", primary),
                    );
                }
            }
            Some(Value::String(_)) => {
                report.error("agents.defaults.model.primary", "must not be empty")
            }
            Some(_) => report.error("agents.defaults.model.primary", "must be a string"),
            None => report.error("agents.defaults.model.primary", "missing required field"),
        }

        match model.get("fallbacks") {
            None => {}
            Some(Value::Array(fallbacks)) => {
                for (index, fallback) in fallbacks.iter().enumerate() {
                    let path = format!("agents.defaults.model.fallbacks[{}]", index);
                    match fallback.as_str() {
                        Some(reference) => {
                            if check_refs && !references_model(reference) {
                                report.error(
                                    path,
                                    format!("'{}' does not reference a listed model", reference),
                                );
                            }
                        }
                        None => report.error(path, "must be a string"),
                    }
                }
            }
            Some(_) => report.error("agents.defaults.model.fallbacks", "must be an array"),
        }
    }

    match defaults.get("models") {
        None => {}
        Some(Value::Object(aliases)) => {
            let mut seen = HashSet::new();
            for (reference, alias_config) in aliases {
                let path = format!("agents.defaults.models[\"{}\"]", reference);
                if check_refs && !references_model(reference.as_str()) {
                    report.error(&path, "alias references an unknown model");
                }
                match alias_config.get("alias") {
                    Some(Value::String(alias)) if !alias.is_empty() => {
                        if !seen.insert(alias.clone()) {
                            report.error(&path, format!("duplicate alias '{}'", alias));
                        }
                    }
                    Some(_) => report.error(&path, "alias must be a non-empty string"),
                    None => report.error(&path, "missing 'alias'"),
                }
            }
        }
        Some(_) => report.error("agents.defaults.models", "must be an object"),
    }
}
