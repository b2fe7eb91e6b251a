//! Hierarchical merge engine
//!
//! Operates on JSON configuration trees (`serde_json::Value`, key order
//! preserved): source-wins recursive merge plus path-addressed read and write.

pub mod access;
pub mod compare;
pub mod merge;
pub mod path;

pub use access::{get, set, set_with_policy, try_set, IntermediatePolicy};
pub use compare::same_value;
pub use merge::{deep_merge, merge_into};
pub use path::KeyPath;
