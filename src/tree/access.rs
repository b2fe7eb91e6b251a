//! Path read and write over configuration trees.

use super::path::KeyPath;
use crate::error::MergeError;
use serde_json::{Map, Value};
use tracing::warn;

/// What a write does when it meets a non-object value where the path needs
/// to descend further.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntermediatePolicy {
    /// Replace the value with an empty object (logged at warn level).
    #[default]
    Replace,
    /// Fail with [`MergeError::PathConflict`] and leave the tree unchanged.
    Reject,
}

/// Read the value at `path`.
///
/// Returns `None` when a segment is missing or when a non-object (including
/// `null`) is reached before the path is exhausted.
pub fn get<'a>(tree: &'a Value, path: &KeyPath) -> Option<&'a Value> {
    let mut current = tree;
    for segment in path.segments() {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Write `value` at `path`, creating intermediate objects as needed.
///
/// Missing segments and segments holding non-object values become empty
/// objects. A non-object root is replaced the same way.
pub fn set(tree: &mut Value, path: &KeyPath, value: Value) {
    let (_, last) = path.split_last();
    let parent = descend_creating(tree, path);
    parent.insert(last.to_string(), value);
}

/// Strict form of [`set`]: refuses to replace a non-object value on the way
/// down. On error the tree is untouched.
pub fn try_set(tree: &mut Value, path: &KeyPath, value: Value) -> Result<(), MergeError> {
    check_settable(tree, path)?;
    set(tree, path, value);
    Ok(())
}

/// The check [`try_set`] runs before writing: `PathConflict` when `path`
/// runs through a non-object value (or the root is not an object).
pub(crate) fn check_settable(tree: &Value, path: &KeyPath) -> Result<(), MergeError> {
    match find_conflict(tree, path) {
        Some(segment) => Err(MergeError::PathConflict {
            path: path.to_string(),
            segment,
        }),
        None => Ok(()),
    }
}

/// Dispatch to [`set`] or [`try_set`] by policy.
pub fn set_with_policy(
    tree: &mut Value,
    path: &KeyPath,
    value: Value,
    policy: IntermediatePolicy,
) -> Result<(), MergeError> {
    match policy {
        IntermediatePolicy::Replace => {
            set(tree, path, value);
            Ok(())
        }
        IntermediatePolicy::Reject => try_set(tree, path, value),
    }
}

fn descend_creating<'a>(tree: &'a mut Value, path: &KeyPath) -> &'a mut Map<String, Value> {
    if !tree.is_object() {
        warn!(path = %path, found = kind(tree), "replacing non-object root with an empty object");
    }
    let mut current = ensure_object(tree);

    let (parents, _) = path.split_last();
    for (depth, segment) in parents.iter().enumerate() {
        let slot = current
            .entry(segment.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        if !slot.is_object() {
            warn!(
                path = %path,
                segment = %path.prefix_display(depth + 1),
                found = kind(slot),
                "replacing non-object value with an empty object"
            );
        }
        current = ensure_object(slot);
    }
    current
}

fn ensure_object(slot: &mut Value) -> &mut Map<String, Value> {
    if !slot.is_object() {
        *slot = Value::Object(Map::new());
    }
    match slot {
        Value::Object(map) => map,
        _ => unreachable!("slot was just replaced with an object"),
    }
}

/// First prefix of `path` (excluding the final key) that holds a non-object.
fn find_conflict(tree: &Value, path: &KeyPath) -> Option<String> {
    if !tree.is_object() {
        return Some("<root>".to_string());
    }
    let (parents, _) = path.split_last();
    let mut current = tree;
    for (depth, segment) in parents.iter().enumerate() {
        match current.as_object().and_then(|map| map.get(segment)) {
            None => return None,
            Some(next) if next.is_object() => current = next,
            Some(_) => return Some(path.prefix_display(depth + 1)),
        }
    }
    None
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
