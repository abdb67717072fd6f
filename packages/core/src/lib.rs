//! # Key path engine
//!
//! Resolves dot-delimited key paths against JSON records and builds partial projections
//! from them. Everything here is synchronous and pure: records are only read, and each
//! call allocates its own result.
//!
//! ## Features
//!
//! - **Selection** of a single nested value with `null` for anything unresolvable
//! - **Projection** of several paths into one merged, nested object
//! - **Null vs missing** distinction available below the public `null` sentinel
//! - **Configurable separator** with validation
//! - **Typed extraction** through serde

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod config;
pub mod error;
pub mod keypath;

pub mod prelude;

pub use crate::prelude::*;
