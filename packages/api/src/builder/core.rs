//! Core `KeyPickBuilder`
//!
//! Collects configuration through method chaining, validates it once the target is
//! requested, then hands back a `Selector` or `Projector`.

use keypick_core::{KeyPathConfig, KeyPathResult, Projector, Selector};

/// Builder for selectors and projectors sharing one configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyPickBuilder {
    config: KeyPathConfig,
}

impl KeyPickBuilder {
    /// Create a builder with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration
    #[must_use]
    pub fn config(mut self, config: KeyPathConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the segment separator
    ///
    /// # Examples
    /// ```
    /// use keypick::KeyPick;
    /// use serde_json::json;
    ///
    /// let selector = KeyPick::builder().separator('/').select("a/b").unwrap();
    /// assert_eq!(selector.select(&json!({"a": {"b": 1}})), json!(1));
    /// ```
    #[must_use]
    pub fn separator(mut self, separator: char) -> Self {
        self.config = self.config.separator(separator);
        self
    }

    /// Current configuration
    #[must_use]
    pub fn current_config(&self) -> &KeyPathConfig {
        &self.config
    }

    /// Build a selector
    ///
    /// # Errors
    ///
    /// Returns `KeyPathError::Config` if the configuration does not validate.
    pub fn select(self, path: impl Into<String>) -> KeyPathResult<Selector> {
        let path = path.into();
        tracing::debug!(path = %path, separator = ?self.config.separator, "building selector");
        Selector::with_config(path, &self.config)
    }

    /// Build a projector
    ///
    /// # Errors
    ///
    /// Returns `KeyPathError::Config` if the configuration does not validate.
    pub fn pick<I, S>(self, paths: I) -> KeyPathResult<Projector>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        tracing::debug!(separator = ?self.config.separator, "building projector");
        Projector::with_config(paths, &self.config)
    }
}
