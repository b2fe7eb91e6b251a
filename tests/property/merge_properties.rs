//! Property-based tests for merge idempotence and path round-trips

use clawmerge::tree::{self, deep_merge, KeyPath};
use proptest::prelude::*;
use serde_json::{Map, Value};

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::String),
    ]
}

fn json_tree() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec(("[a-e]{1,2}", inner), 0..6)
                .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

fn key_path() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-e]{1,3}", 1..5)
}

proptest! {
    #[test]
    fn merge_is_idempotent(target in json_tree(), source in json_tree()) {
        let once = deep_merge(target, source.clone());
        let twice = deep_merge(once.clone(), source);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn merge_with_self_is_identity(value in json_tree()) {
        prop_assert_eq!(deep_merge(value.clone(), value.clone()), value);
    }

    #[test]
    fn source_keys_always_win(target in json_tree(), source in json_tree()) {
        let merged = deep_merge(target, source.clone());
        if let (Some(source_map), Some(merged_map)) = (source.as_object(), merged.as_object()) {
            for (key, value) in source_map {
                if !value.is_object() {
                    prop_assert_eq!(merged_map.get(key), Some(value));
                }
            }
        } else {
            prop_assert_eq!(&merged, &source);
        }
    }

    #[test]
    fn set_then_get_returns_value(base in json_tree(), segments in key_path(), value in leaf()) {
        let path = KeyPath::from_segments(segments).unwrap();
        let mut tree_value = base;
        tree::set(&mut tree_value, &path, value.clone());
        prop_assert_eq!(tree::get(&tree_value, &path), Some(&value));
    }

    #[test]
    fn dotted_display_round_trips(segments in key_path()) {
        let path = KeyPath::from_segments(segments.clone()).unwrap();
        let reparsed = KeyPath::parse(&path.to_string()).unwrap();
        prop_assert_eq!(reparsed.segments(), segments.as_slice());
    }
}
