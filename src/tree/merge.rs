//! Source-wins structural merge.
//!
//! - Objects: deep-merge by key (recursive)
//! - Arrays: REPLACE (source wins entirely, never concatenated)
//! - Scalars and type mismatches: source wins
//!
//! Both trees are taken by value and the merged tree is returned. When both
//! sides are objects the target's map is reused in place and keeps its key
//! order; keys new to the target are appended in source order. When either
//! side is not an object the result is the source tree itself.

use serde_json::Value;

/// Deep merge `source` into `target`.
pub fn deep_merge(target: Value, source: Value) -> Value {
    match (target, source) {
        (Value::Object(mut target_map), Value::Object(source_map)) => {
            for (key, source_value) in source_map {
                match target_map.get_mut(&key) {
                    Some(slot) => {
                        let current = std::mem::take(slot);
                        *slot = deep_merge(current, source_value);
                    }
                    None => {
                        target_map.insert(key, source_value);
                    }
                }
            }
            Value::Object(target_map)
        }

        (Value::Array(_), source @ Value::Array(_)) => source,

        (_, source) => source,
    }
}

/// In-place form of [`deep_merge`]: `*target` becomes the merge result.
pub fn merge_into(target: &mut Value, source: Value) {
    let current = std::mem::take(target);
    *target = deep_merge(current, source);
}
