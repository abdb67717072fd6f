//! Partial projection of records
//!
//! A `Projector` captures an ordered list of key paths. For each record it resolves every
//! path, wraps each truthy value in a skeleton mirroring its path and deep-merges the
//! skeletons into one object:
//!
//! ```
//! use keypick_core::keypath::Projector;
//! use serde_json::json;
//!
//! let record = json!({
//!     "name": {"first": "Bob", "last": "Garcia"},
//!     "age": {"value": 23, "date": {"year": 1999, "month": 3}}
//! });
//! let projector = Projector::new(["name.first", "age.date.year"]);
//!
//! assert_eq!(
//!     projector.project(&record),
//!     json!({"name": {"first": "Bob"}, "age": {"date": {"year": 1999}}})
//! );
//! ```
//!
//! The result is `null` instead of an object when the record is not an object, when no
//! path contributed anything, or when any of the paths is the empty string.

use serde::de::DeserializeOwned;
use serde_json::{Map as JsonMap, Value as JsonValue};

use super::merge::deep_merge;
use super::path::KeyPath;
use super::record::is_record;
use super::resolver::PathResolver;
use super::skeleton::SkeletonBuilder;
use super::truthiness::is_truthy;
use crate::config::{KeyPathConfig, Validator};
use crate::error::{KeyPathError, KeyPathResult};

/// Projects records onto a fixed set of key paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projector {
    paths: Vec<KeyPath>,
    poisoned: bool,
}

/// Per-record evaluation state
enum ProjectionState {
    Accumulating(JsonMap<String, JsonValue>),
    Poisoned,
}

impl ProjectionState {
    fn step(self, record: &JsonValue, path: &KeyPath) -> Self {
        match self {
            Self::Poisoned => Self::Poisoned,
            Self::Accumulating(_) if path.is_empty() => Self::Poisoned,
            Self::Accumulating(mut projection) => {
                let resolved = PathResolver::resolve(record, path).value();
                if let Some(value) = resolved.filter(|v| is_truthy(v)) {
                    deep_merge(&mut projection, SkeletonBuilder::build(path, value.clone()));
                }
                Self::Accumulating(projection)
            }
        }
    }

    fn finish(self) -> Option<JsonMap<String, JsonValue>> {
        match self {
            Self::Accumulating(projection) if !projection.is_empty() => Some(projection),
            Self::Accumulating(_) | Self::Poisoned => None,
        }
    }
}

impl Projector {
    /// Create a projector for `.`-separated paths
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_key_paths(paths.into_iter().map(KeyPath::new).collect())
    }

    /// Create a projector using the separator from `config`
    ///
    /// # Errors
    ///
    /// Returns `KeyPathError::Config` if the configuration does not validate.
    pub fn with_config<I, S>(paths: I, config: &KeyPathConfig) -> KeyPathResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        config.validate()?;
        let separator = config.separator;
        Ok(Self::from_key_paths(
            paths
                .into_iter()
                .map(|path| KeyPath::with_separator(path, separator))
                .collect(),
        ))
    }

    /// Create a projector from prepared key paths
    #[must_use]
    pub fn from_key_paths(paths: Vec<KeyPath>) -> Self {
        let poisoned = paths.iter().any(KeyPath::is_empty);
        if poisoned {
            let raw: Vec<&str> = paths.iter().map(KeyPath::as_str).collect();
            tracing::warn!(
                paths = ?raw,
                "projection includes an empty key path; every record will project to null"
            );
        }
        Self { paths, poisoned }
    }

    /// The captured key paths, in order
    #[inline]
    #[must_use]
    pub fn paths(&self) -> &[KeyPath] {
        &self.paths
    }

    /// Check if an empty path makes every projection `null`
    #[inline]
    #[must_use]
    pub fn is_poisoned(&self) -> bool {
        self.poisoned
    }

    /// Project a record, returning `null` when there is nothing to return
    #[must_use]
    pub fn project(&self, record: &JsonValue) -> JsonValue {
        self.projection(record).map_or(JsonValue::Null, JsonValue::Object)
    }

    /// Project a record into an object, or `None` where `project` returns `null`
    #[must_use]
    pub fn projection(&self, record: &JsonValue) -> Option<JsonMap<String, JsonValue>> {
        if !is_record(record) {
            return None;
        }
        self.paths
            .iter()
            .fold(ProjectionState::Accumulating(JsonMap::new()), |state, path| {
                state.step(record, path)
            })
            .finish()
    }

    /// Project and deserialize a record
    ///
    /// Returns `Ok(None)` wherever `project` would return `null`.
    ///
    /// # Errors
    ///
    /// Returns `KeyPathError::Deserialization` if the projection does not fit `T`.
    pub fn project_as<T: DeserializeOwned>(&self, record: &JsonValue) -> KeyPathResult<Option<T>> {
        let Some(projection) = self.projection(record) else {
            return Ok(None);
        };
        serde_json::from_value(JsonValue::Object(projection))
            .map(Some)
            .map_err(|e| KeyPathError::deserialization(self.describe(), std::any::type_name::<T>(), e.to_string()))
    }

    /// Turn the projector into a mapping function for `Iterator::map`
    pub fn into_fn(self) -> impl Fn(&JsonValue) -> JsonValue + Clone + Send + Sync {
        move |record: &JsonValue| self.project(record)
    }

    fn describe(&self) -> String {
        let raw: Vec<&str> = self.paths.iter().map(KeyPath::as_str).collect();
        raw.join(", ")
    }
}
