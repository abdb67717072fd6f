//! Key path selection for JSON records
//!
//! `select` and `pick` build mapping functions for use with `Iterator::map` over
//! collections of records. Items that are not objects map to `null`.
//!
//! ```
//! use keypick::{pick, select};
//! use serde_json::json;
//!
//! let people = [
//!     json!({"name": {"first": "Bob", "last": "Garcia"}, "age": 23}),
//!     json!(null),
//! ];
//!
//! let ages: Vec<_> = people.iter().map(select("age").into_fn()).collect();
//! assert_eq!(ages, [json!(23), json!(null)]);
//!
//! let picked: Vec<_> = people.iter().map(pick(["name.first", "age"]).into_fn()).collect();
//! assert_eq!(picked, [json!({"name": {"first": "Bob"}, "age": 23}), json!(null)]);
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

pub use builder::KeyPickBuilder;

// Re-export important types from the core package
pub use keypick_core::{
    KeyPath, KeyPathConfig, KeyPathError, KeyPathResult, Projector, Selector, Validator,
};
pub use keypick_core::keypath::{PropertyAccessResult, is_record, record_from};

/// Main entry point providing static constructors
pub struct KeyPick;

impl KeyPick {
    /// Create a selector for a `.`-separated path
    ///
    /// Shorthand for `Selector::new(path)`
    pub fn select(path: impl Into<String>) -> Selector {
        Selector::new(path)
    }

    /// Create a projector for `.`-separated paths
    ///
    /// Shorthand for `Projector::new(paths)`
    pub fn pick<I, S>(paths: I) -> Projector
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Projector::new(paths)
    }

    /// Create a builder for selectors and projectors with custom configuration
    #[must_use]
    pub fn builder() -> KeyPickBuilder {
        KeyPickBuilder::new()
    }
}

/// Create a selector for a `.`-separated path
pub fn select(path: impl Into<String>) -> Selector {
    KeyPick::select(path)
}

/// Create a projector for `.`-separated paths
pub fn pick<I, S>(paths: I) -> Projector
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    KeyPick::pick(paths)
}
