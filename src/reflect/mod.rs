//! Runtime field introspection.
//!
//! This module provides the reflection surface the copier works against:
//!
//! - [`FieldKind`] - type classification of a field
//! - [`FieldValue`] / [`FieldType`] - runtime and static views of a field's storage
//! - [`Record`] - field enumeration for a record instance
//!
//! Implementations are generated by the [`impl_leaf!`](crate::impl_leaf) and
//! [`record!`](crate::record) macros.

pub mod kind;
pub mod record;
pub mod value;

pub use kind::FieldKind;
pub use record::Record;
#[doc(hidden)]
pub use value::assign_cloned;
pub use value::{FieldType, FieldValue};
