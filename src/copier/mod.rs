//! Record-to-record field copying.
//!
//! # Main Components
//!
//! - [`Copier`] - runs the guard, flatten, match and assign pipeline
//! - [`CopyOptions`] - zero suppression, exclusions and depth limit
//! - [`CopyReport`] - counters for one call
//! - [`copy`], [`copy_with_zero_policy`], [`copy_excluding`], [`copy_full`] - one-shot entry points

pub mod api;
pub mod core;
pub mod options;
pub mod report;

pub use self::api::*;
pub use self::core::{
    assign, flatten, flatten_mut, leaf_names, match_leaves, Assignment, Copier, LeafField,
    LeafFieldMut, Matches,
};
pub use self::options::{CopyOptions, DEFAULT_MAX_DEPTH};
pub use self::report::CopyReport;
