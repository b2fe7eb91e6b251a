//! clawmerge: merge vendor model fragments into an OpenClaw configuration
//!
//! Loads a vendor fragment and the user's OpenClaw config, copies the
//! provider model definitions and agent model defaults from one into the
//! other, and writes the result back. The merge engine (`tree`) works on
//! `serde_json::Value` trees addressed by key paths; `sync` selects and
//! applies sections; `schema` checks a fragment before it is merged.

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod logging;
pub mod schema;
pub mod sync;
pub mod tree;
