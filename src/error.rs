//! # Copy Errors
//!
//! The copier has a single recoverable failure in normal use: an argument that
//! does not resolve to a record. Everything else ("nothing matched", "all
//! candidates excluded", "every source value was zero") is a successful call.

use std::fmt;

use thiserror::Error;

/// Which argument of a copy call an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Source,
    Target,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Source => f.write_str("source"),
            Side::Target => f.write_str("target"),
        }
    }
}

/// Errors returned by the copy entry points.
///
/// Both variants are raised before any field is written, so a failed call never
/// leaves the target partially updated.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CopyError {
    /// The argument is not a reference to a record (a scalar, a collection, or an
    /// empty `Option`).
    #[error("{side} must be a reference to a record")]
    InvalidArgumentKind { side: Side },

    /// Nested records go deeper than the configured limit.
    #[error("{side} record nesting exceeds {limit} levels")]
    DepthExceeded { side: Side, limit: usize },
}
