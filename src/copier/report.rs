//! Per-call copy statistics.

use std::fmt;

/// Counters collected by one [`Copier::copy`](super::Copier::copy) call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CopyReport {
    /// Leaves flattened from the source record.
    pub source_leaves: usize,
    /// Leaves flattened from the target record.
    pub target_leaves: usize,
    /// Candidate pairs forwarded to assignment (exclusions already removed).
    /// Always `copied + skipped_zero + refused`.
    pub matched: usize,
    /// Pairs whose target was overwritten.
    pub copied: usize,
    /// Pairs skipped because the source held a zero value.
    pub skipped_zero: usize,
    /// Pairs whose target rejected the source value.
    pub refused: usize,
    /// Candidate pairs dropped because the target name was excluded.
    pub excluded: usize,
}

impl CopyReport {
    /// Whether the call left the target unchanged.
    pub fn is_noop(&self) -> bool {
        self.copied == 0
    }
}

impl fmt::Display for CopyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "leaves={}/{} matched={} copied={} skipped_zero={} refused={} excluded={}",
            self.source_leaves,
            self.target_leaves,
            self.matched,
            self.copied,
            self.skipped_zero,
            self.refused,
            self.excluded
        )
    }
}
