//! Core configuration types for key path resolution

use serde::{Deserialize, Serialize};

use super::validation::{ConfigResult, ConfigValidator, Validator};

/// Separator used between key path segments unless configured otherwise
pub const DEFAULT_SEPARATOR: char = '.';

/// Settings shared by selectors and projectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyPathConfig {
    /// Character splitting a key path into segments
    pub separator: char,
}

impl Default for KeyPathConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
        }
    }
}

impl KeyPathConfig {
    /// Set the segment separator
    #[must_use]
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }
}

impl Validator for KeyPathConfig {
    fn validate(&self) -> ConfigResult<()> {
        ConfigValidator::validate_separator(self.separator)
    }
}
