//! Fluent construction of configured selectors and projectors

pub mod core;

pub use self::core::*;
