//! Canonical types for everyday use

pub use crate::config::{KeyPathConfig, Validator};
pub use crate::error::{KeyPathError, KeyPathResult};
pub use crate::keypath::{KeyPath, Projector, Selector};
