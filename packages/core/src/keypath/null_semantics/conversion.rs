//! Conversions out of `PropertyAccessResult`

use serde_json::Value as JsonValue;

use super::property_access::PropertyAccessResult;

/// Collapse to the `null` sentinel: a stored `null` and a missing key both become `Null`
#[inline]
pub fn to_sentinel(result: PropertyAccessResult<'_>) -> JsonValue {
    match result {
        PropertyAccessResult::Value(v) => v.clone(),
        PropertyAccessResult::NullValue | PropertyAccessResult::Missing => JsonValue::Null,
    }
}

/// Convert to `Option<JsonValue>`, keeping the null vs missing distinction
#[inline]
pub fn to_option(result: PropertyAccessResult<'_>) -> Option<JsonValue> {
    match result {
        PropertyAccessResult::NullValue => Some(JsonValue::Null),
        PropertyAccessResult::Value(v) => Some(v.clone()),
        PropertyAccessResult::Missing => None,
    }
}
