//! Dot-delimited key paths
//!
//! A `KeyPath` is the raw path string plus its segments, split once at construction so
//! that every record evaluation walks a prepared list.

use std::fmt;

use crate::config::DEFAULT_SEPARATOR;

/// A key path naming a nested location within a record
///
/// Splitting always yields at least one segment: the empty string produces a single
/// empty segment, and `"a..b"` produces `["a", "", "b"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath {
    /// The path exactly as supplied by the caller
    raw: String,
    /// Segments in resolution order
    segments: Vec<String>,
}

impl KeyPath {
    /// Create a key path split on the default `.` separator
    #[inline]
    pub fn new(raw: impl Into<String>) -> Self {
        Self::with_separator(raw, DEFAULT_SEPARATOR)
    }

    /// Create a key path split on a custom separator
    pub fn with_separator(raw: impl Into<String>, separator: char) -> Self {
        let raw = raw.into();
        let segments = raw.split(separator).map(str::to_owned).collect();
        Self { raw, segments }
    }

    /// Get the path string as supplied
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Get the path segments
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments, which is also the depth of a skeleton built from this path
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Check if the path string itself is empty
    ///
    /// An empty path poisons any projection that contains it.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Split into the parent segments and the leaf segment
    #[must_use]
    pub fn split_leaf(&self) -> (&[String], &str) {
        match self.segments.split_last() {
            Some((leaf, parents)) => (parents, leaf.as_str()),
            None => (&[], self.raw.as_str()),
        }
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for KeyPath {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for KeyPath {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}
