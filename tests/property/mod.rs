//! Property-based tests for merge engine guarantees

mod merge_properties;
