//! Copy policy configuration.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Default limit on record nesting below the argument records.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Policy for one or more copy calls.
///
/// Every field has a default, so a partial configuration deserializes cleanly:
///
/// ```
/// use bean_copy::CopyOptions;
///
/// let options: CopyOptions = serde_json::from_str(r#"{ "exclude": ["name"] }"#).unwrap();
/// assert!(options.suppress_zero);
/// assert!(options.is_excluded("name"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CopyOptions {
    /// Skip source leaves that hold their type's zero value.
    pub suppress_zero: bool,
    /// Target leaf names that are never written.
    pub exclude: BTreeSet<String>,
    /// Maximum nesting of composite fields below the argument records.
    pub max_depth: usize,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            suppress_zero: true,
            exclude: BTreeSet::new(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl CopyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_suppress_zero(mut self, suppress_zero: bool) -> Self {
        self.suppress_zero = suppress_zero;
        self
    }

    /// Adds names to the exclusion set.
    pub fn with_exclude<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclude.contains(name)
    }
}
