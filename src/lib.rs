//! # Bean Copy
//!
//! > **Copy matching fields between independently declared records.**
//!
//! Transport types and domain types often share most of their fields without
//! sharing a type. This crate copies every field that lines up by **name** and
//! **type** from a source record into a target record, so the field-by-field
//! assignment does not have to be written by hand.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Structural, not declared
//! Neither side declares a mapping. A record only lists its own fields (see
//! [`record!`]); the copier discovers both shapes at runtime and pairs leaves
//! with the same name, kind and concrete type. Fields present on one side only
//! are ignored.
//!
//! ### Nested records are flattened
//! A field holding another record (directly, boxed, or in an `Option`) is not
//! copied as a unit. Its leaves are spliced into the parent's leaf list, so
//! `address.city` on the source reaches `address.city` on the target without
//! any path being spelled out. Leaf names are bare: a nested `city` and a
//! top-level `city` are the same name.
//!
//! ### Best effort
//! "Nothing matched" is a successful call. The only errors are arguments that
//! are not records ([`CopyError::InvalidArgumentKind`]) and nesting deeper than
//! the configured limit ([`CopyError::DepthExceeded`]). Both are detected before
//! any write.
//!
//! ## 🚀 Core Concepts
//!
//! ### Zero suppression
//! By default a source leaf holding its type's zero value (`0`, `""`, `false`,
//! `None`, an empty collection) does not overwrite the target. Turn it off with
//! [`copy_with_zero_policy`] or [`CopyOptions::with_suppress_zero`].
//!
//! ### Exclusions
//! Target leaf names listed in [`copy_excluding`] or [`CopyOptions::exclude`]
//! are never written.
//!
//! ```
//! use bean_copy::model::{Person, PersonDto};
//!
//! let dto = PersonDto::new("feiwo", 12, "changsha", "yuelu");
//! let mut person = Person::default();
//! person.name = "xiaoqi".into();
//!
//! bean_copy::copy_excluding(&dto, &mut person, &["name"])?;
//! assert_eq!(person.name, "xiaoqi");
//! assert_eq!(person.age, 12);
//! assert_eq!(person.address.city, "changsha");
//! # Ok::<(), bean_copy::CopyError>(())
//! ```
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Reflection Surface ([`reflect`])
//! - **Role**: Describes field storage at runtime.
//! - **Key items**: [`FieldValue`], [`FieldKind`], [`Record`], [`record!`], [`impl_leaf!`].
//!
//! ### 2. The Engine ([`copier`])
//! - **Role**: Flattens both records, matches leaves, assigns values.
//! - **Key items**: [`Copier`], [`CopyOptions`], [`CopyReport`], [`copy`].
//!
//! ### 3. Errors ([`error`])
//! - **Key items**: [`CopyError`], [`Side`].
//!
//! ### 4. Setup and Samples ([`lifecycle`], [`model`])
//! - [`setup_tracing`](lifecycle::setup_tracing) for binaries.
//! - Sample DTO and domain records used by the demo and tests.
//!
//! ## Concurrency
//!
//! Copies are synchronous and keep no state between calls. The target is
//! borrowed mutably for the duration of a call, so concurrent copies into the
//! same target are rejected at compile time.
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=debug cargo run
//! ```

pub mod copier;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod reflect;

pub use copier::{
    copy, copy_excluding, copy_full, copy_with_zero_policy, leaf_names, Copier, CopyOptions,
    CopyReport,
};
pub use error::{CopyError, Side};
pub use reflect::{FieldKind, FieldType, FieldValue, Record};
