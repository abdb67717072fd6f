//! Single-value selection
//!
//! A `Selector` captures one key path and maps each record to the value found there, or to
//! `null` when the record is not an object or the path does not resolve.
//!
//! ```
//! use keypick_core::keypath::Selector;
//! use serde_json::json;
//!
//! let records = [json!({"name": {"first": "Bob"}}), json!(null), json!({"age": 3})];
//! let firsts: Vec<_> = records.iter().map(Selector::new("name.first").into_fn()).collect();
//!
//! assert_eq!(firsts, [json!("Bob"), json!(null), json!(null)]);
//! ```

use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use super::path::KeyPath;
use super::record::is_record;
use super::resolver::PathResolver;
use crate::config::{KeyPathConfig, Validator};
use crate::error::{KeyPathError, KeyPathResult};

/// Selects the value at one key path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    path: KeyPath,
}

impl Selector {
    /// Create a selector for a `.`-separated path
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: KeyPath::new(path),
        }
    }

    /// Create a selector using the separator from `config`
    ///
    /// # Errors
    ///
    /// Returns `KeyPathError::Config` if the configuration does not validate.
    pub fn with_config(path: impl Into<String>, config: &KeyPathConfig) -> KeyPathResult<Self> {
        config.validate()?;
        Ok(Self {
            path: KeyPath::with_separator(path, config.separator),
        })
    }

    /// The captured key path
    #[inline]
    #[must_use]
    pub fn path(&self) -> &KeyPath {
        &self.path
    }

    /// Select the value at the captured path, or `null`
    ///
    /// A stored `null` and an unresolvable path both produce `null`.
    #[must_use]
    pub fn select(&self, record: &JsonValue) -> JsonValue {
        if !is_record(record) {
            return JsonValue::Null;
        }
        PathResolver::resolve_or_null(record, &self.path)
    }

    /// Select and deserialize the value at the captured path
    ///
    /// Returns `Ok(None)` wherever `select` would return `null`.
    ///
    /// # Errors
    ///
    /// Returns `KeyPathError::Deserialization` if the value does not fit `T`.
    pub fn select_as<T: DeserializeOwned>(&self, record: &JsonValue) -> KeyPathResult<Option<T>> {
        match self.select(record) {
            JsonValue::Null => Ok(None),
            value => serde_json::from_value(value).map(Some).map_err(|e| {
                KeyPathError::deserialization(self.path.as_str(), std::any::type_name::<T>(), e.to_string())
            }),
        }
    }

    /// Turn the selector into a mapping function for `Iterator::map`
    pub fn into_fn(self) -> impl Fn(&JsonValue) -> JsonValue + Clone + Send + Sync {
        move |record: &JsonValue| self.select(record)
    }
}
