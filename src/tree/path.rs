//! Key paths into configuration trees.
//!
//! A [`KeyPath`] is an explicit, ordered sequence of mapping keys. The dotted
//! form (`models.providers.ollama`) is only a parse and display format; keys
//! that themselves contain a `.` can still be addressed by building the path
//! from segments with [`KeyPath::from_segments`].

use crate::error::MergeError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Parse a dotted path. Empty paths and empty segments are rejected.
    pub fn parse(dotted: &str) -> Result<Self, MergeError> {
        if dotted.is_empty() {
            return Err(MergeError::InvalidPath("path is empty".to_string()));
        }
        let segments: Vec<String> = dotted.split('.').map(str::to_string).collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(MergeError::InvalidPath(format!(
                "'{}' contains an empty segment",
                dotted
            )));
        }
        Ok(Self { segments })
    }

    /// Build a path from explicit segments, bypassing dot splitting.
    pub fn from_segments<I, S>(segments: I) -> Result<Self, MergeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            return Err(MergeError::InvalidPath("path is empty".to_string()));
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Split into the parent segments and the final key.
    pub fn split_last(&self) -> (&[String], &str) {
        // Construction guarantees at least one segment.
        let (last, parents) = self
            .segments
            .split_last()
            .map(|(l, p)| (l.as_str(), p))
            .unwrap_or(("", &[]));
        (parents, last)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Dotted rendering of the first `depth` segments.
    pub fn prefix_display(&self, depth: usize) -> String {
        self.segments[..depth.min(self.segments.len())].join(".")
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl FromStr for KeyPath {
    type Err = MergeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KeyPath::parse(s)
    }
}
