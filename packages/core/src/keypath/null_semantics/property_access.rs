//! Property access operations with null vs missing distinction

use serde_json::Value as JsonValue;

/// Result of a property access that keeps a stored `null` apart from an absent key
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyAccessResult<'a> {
    /// Property exists and has a null value
    NullValue,
    /// Property exists and has a non-null value
    Value(&'a JsonValue),
    /// Property does not exist, or the walk stopped at a non-object
    Missing,
}

impl<'a> PropertyAccessResult<'a> {
    /// Check if this result represents a present value (null or non-null)
    #[inline]
    #[must_use]
    pub fn is_present(&self) -> bool {
        !self.is_missing()
    }

    /// Check if this result represents a missing property
    #[inline]
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, PropertyAccessResult::Missing)
    }

    /// Check if this result represents a null value
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, PropertyAccessResult::NullValue)
    }

    /// Get the non-null value, if any
    #[inline]
    #[must_use]
    pub fn value(&self) -> Option<&'a JsonValue> {
        match *self {
            PropertyAccessResult::Value(v) => Some(v),
            PropertyAccessResult::NullValue | PropertyAccessResult::Missing => None,
        }
    }
}

/// Access a single property of an object
#[inline]
pub fn access_property<'a>(object: &'a JsonValue, property_name: &str) -> PropertyAccessResult<'a> {
    match object {
        JsonValue::Object(map) => match map.get(property_name) {
            Some(JsonValue::Null) => PropertyAccessResult::NullValue,
            Some(value) => PropertyAccessResult::Value(value),
            None => PropertyAccessResult::Missing,
        },
        _ => PropertyAccessResult::Missing,
    }
}

/// Walk a property path through nested objects, left to right
///
/// The walk stops at the first segment that cannot be resolved; later segments are never
/// looked at. A `null` met before the last segment is missing, not null.
pub fn access_property_path<'a, S: AsRef<str>>(
    root: &'a JsonValue,
    path: &[S],
) -> PropertyAccessResult<'a> {
    let mut current = root;

    for (index, property) in path.iter().enumerate() {
        let property = property.as_ref();
        let JsonValue::Object(map) = current else {
            log::trace!("key path walk hit a non-object before segment {index} ('{property}')");
            return PropertyAccessResult::Missing;
        };
        match map.get(property) {
            Some(value) => current = value,
            None => {
                log::trace!("key path segment {index} ('{property}') not found");
                return PropertyAccessResult::Missing;
            }
        }
    }

    match current {
        JsonValue::Null => PropertyAccessResult::NullValue,
        value => PropertyAccessResult::Value(value),
    }
}
