//! Deep merge of JSON objects

use serde_json::{Map as JsonMap, Value as JsonValue};

/// Merge `source` into `target` in place
///
/// Where both sides hold an object under the same key the two objects are merged
/// recursively; in every other case the value from `source` replaces the one in `target`.
pub fn deep_merge(target: &mut JsonMap<String, JsonValue>, source: JsonMap<String, JsonValue>) {
    for (key, incoming) in source {
        let JsonValue::Object(incoming) = incoming else {
            target.insert(key, incoming);
            continue;
        };
        if let Some(JsonValue::Object(existing)) = target.get_mut(&key) {
            deep_merge(existing, incoming);
            continue;
        }
        target.insert(key, JsonValue::Object(incoming));
    }
}
