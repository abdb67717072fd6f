//! Key path resolution against a record

use serde_json::Value as JsonValue;

use super::null_semantics::{NullSemantics, PropertyAccessResult};
use super::path::KeyPath;

/// Resolves key paths by descending through nested objects
pub struct PathResolver;

impl PathResolver {
    /// Resolve `path` in `record`
    ///
    /// A record that is not an object resolves to `Missing` for every path. Pure function of
    /// its inputs: nothing is cached and the record is only read.
    #[inline]
    #[must_use]
    pub fn resolve<'a>(record: &'a JsonValue, path: &KeyPath) -> PropertyAccessResult<'a> {
        NullSemantics::access_property_path(record, path.segments())
    }

    /// Resolve `path` in `record`, collapsing null and missing into the `null` sentinel
    #[inline]
    #[must_use]
    pub fn resolve_or_null(record: &JsonValue, path: &KeyPath) -> JsonValue {
        NullSemantics::to_sentinel(Self::resolve(record, path))
    }
}
