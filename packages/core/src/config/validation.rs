//! Configuration validation

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid separator: {0}")]
    InvalidSeparator(String),
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` variant if any validation fails:
    /// - `InvalidSeparator` - if the separator is whitespace or a control character
    fn validate(&self) -> ConfigResult<()>;
}

/// Common configuration validation utilities
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a key path segment separator
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidSeparator` if the separator is
    /// whitespace or a control character.
    pub fn validate_separator(separator: char) -> ConfigResult<()> {
        if separator.is_whitespace() {
            tracing::error!("Rejected whitespace key path separator {:?}", separator);
            return Err(ConfigurationError::InvalidSeparator(format!(
                "{separator:?} is whitespace"
            )));
        }
        if separator.is_control() {
            tracing::error!("Rejected control character key path separator {:?}", separator);
            return Err(ConfigurationError::InvalidSeparator(format!(
                "{separator:?} is a control character"
            )));
        }
        Ok(())
    }
}
