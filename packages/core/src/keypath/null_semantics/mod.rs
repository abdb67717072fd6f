//! Null vs missing value semantics
//!
//! Resolution internally distinguishes a key holding `null` from a key that is absent.
//! The public selector and projector collapse both into the `null` sentinel; this module
//! keeps the three-way result available to callers that need it.

use serde_json::Value as JsonValue;

mod conversion;
mod property_access;

pub use property_access::PropertyAccessResult;

/// Utilities for handling null vs missing value semantics
pub struct NullSemantics;

impl NullSemantics {
    /// Access a property with proper null vs missing distinction
    #[inline]
    #[must_use]
    pub fn access_property<'a>(object: &'a JsonValue, property_name: &str) -> PropertyAccessResult<'a> {
        property_access::access_property(object, property_name)
    }

    /// Access a nested property path with null vs missing distinction
    #[inline]
    #[must_use]
    pub fn access_property_path<'a, S: AsRef<str>>(
        root: &'a JsonValue,
        path: &[S],
    ) -> PropertyAccessResult<'a> {
        property_access::access_property_path(root, path)
    }

    /// Collapse a result into the `null` sentinel used by the public contract
    #[inline]
    #[must_use]
    pub fn to_sentinel(result: PropertyAccessResult<'_>) -> JsonValue {
        conversion::to_sentinel(result)
    }

    /// Convert to `Option`, keeping a stored `null` as `Some(Null)`
    #[inline]
    #[must_use]
    pub fn to_option(result: PropertyAccessResult<'_>) -> Option<JsonValue> {
        conversion::to_option(result)
    }
}
