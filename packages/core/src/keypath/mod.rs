//! Key path selection and projection over JSON records
//!
//! - `Selector` maps a record to the value at one key path.
//! - `Projector` maps a record to a nested object holding only the requested key paths.
//!
//! Both produce `null` in place of a result instead of failing, so they can be mapped
//! over collections that mix objects with `null` or primitive items.

pub mod merge;
pub mod null_semantics;
pub mod path;
pub mod projector;
pub mod record;
pub mod resolver;
pub mod selector;
pub mod skeleton;
pub mod truthiness;

pub use self::{
    merge::deep_merge,
    null_semantics::{NullSemantics, PropertyAccessResult},
    path::KeyPath,
    projector::Projector,
    record::{is_record, record_from},
    resolver::PathResolver,
    selector::Selector,
    skeleton::SkeletonBuilder,
    truthiness::is_truthy,
};
