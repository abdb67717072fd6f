//! Skeleton construction
//!
//! A skeleton mirrors a single key path: one nested object per segment with the resolved
//! value at the leaf. `["age", "date", "year"]` with `1999` becomes
//! `{"age": {"date": {"year": 1999}}}`.

use serde_json::{Map as JsonMap, Value as JsonValue};

use super::path::KeyPath;

/// Builds single-branch nested objects from key paths
pub struct SkeletonBuilder;

impl SkeletonBuilder {
    /// Build the skeleton for `path` holding `value`
    ///
    /// Folds from the leaf outward, so path length does not grow the call stack. Empty
    /// segments become `""` keys.
    #[must_use]
    pub fn build(path: &KeyPath, value: JsonValue) -> JsonMap<String, JsonValue> {
        let (parents, leaf) = path.split_leaf();

        let mut skeleton = JsonMap::new();
        skeleton.insert(leaf.to_owned(), value);

        parents.iter().rev().fold(skeleton, |inner, segment| {
            let mut level = JsonMap::new();
            level.insert(segment.clone(), JsonValue::Object(inner));
            level
        })
    }
}
