//! Key Path Error Types

use crate::config::ConfigurationError;

/// Result type for key path operations
pub type KeyPathResult<T> = Result<T, KeyPathError>;

/// Main key path error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyPathError {
    /// Configuration rejected by validation
    #[error("invalid key path configuration: {0}")]
    Config(#[from] ConfigurationError),

    /// A resolved value could not be deserialized into the requested type
    #[error("cannot deserialize value at '{path}' into {target_type}: {message}")]
    Deserialization {
        path: String,
        target_type: &'static str,
        message: String,
    },

    /// A caller-supplied value could not be turned into a record
    #[error("cannot convert value into a record: {0}")]
    Serialization(String),
}

impl KeyPathError {
    /// Creates a deserialization error for a typed extraction
    pub fn deserialization(
        path: impl Into<String>,
        target_type: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::Deserialization {
            path: path.into(),
            target_type,
            message: message.into(),
        }
    }

    /// Check if this error came from configuration validation
    #[inline]
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
