//! Record capability checks and conversion

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::error::KeyPathResult;

/// Check if a value can be queried by key, i.e. is a JSON object
///
/// Arrays, primitives and `null` are not records.
#[inline]
#[must_use]
pub fn is_record(value: &JsonValue) -> bool {
    matches!(value, JsonValue::Object(_))
}

/// Convert any serializable value into a JSON value that selectors and projectors accept
///
/// # Errors
///
/// Returns `KeyPathError::Serialization` if the value cannot be represented as JSON,
/// for example a map with non-string keys.
pub fn record_from<T: Serialize + ?Sized>(value: &T) -> KeyPathResult<JsonValue> {
    Ok(serde_json::to_value(value)?)
}
