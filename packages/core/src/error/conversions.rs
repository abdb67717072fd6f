//! Standard conversions into `KeyPathError`

use super::types::KeyPathError;

/// Conversion from `serde_json::Error`, raised when building a record from a caller value
impl From<serde_json::Error> for KeyPathError {
    fn from(error: serde_json::Error) -> Self {
        KeyPathError::Serialization(error.to_string())
    }
}
