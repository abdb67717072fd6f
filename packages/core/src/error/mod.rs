//! Key path error handling module
//!
//! The mapping functions produced by `Selector` and `Projector` never fail; absence is
//! signalled with a `null` sentinel. The types here cover the typed and configured entry
//! points: config validation, typed extraction and record conversion.

mod conversions;
mod types;

pub use types::{KeyPathError, KeyPathResult};
