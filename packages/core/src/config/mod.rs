//! Key path configuration
//!
//! Configuration is small: the segment separator used to split key paths. It is
//! deserializable so it can live alongside other application settings.

pub mod types;
pub mod validation;

pub use types::{DEFAULT_SEPARATOR, KeyPathConfig};
pub use validation::{ConfigResult, ConfigValidator, ConfigurationError, Validator};
