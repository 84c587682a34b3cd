//! # Observability & Tracing
//!
//! The copier emits `tracing` events; this module installs a subscriber for
//! binaries that want to see them.
//!
//! ## What Gets Traced
//!
//! - **Per call** (`debug`): a `copy` span naming both record types, and a
//!   summary event with the [`CopyReport`](crate::CopyReport) counters
//! - **Per field** (`trace`): each copied, zero-skipped or excluded leaf, and
//!   each empty composite the flattener stepped over
//! - **Refusals** (`warn`): a matched pair whose target rejected the value
//!
//! ## Usage Examples
//!
//! ```bash
//! # Call summaries
//! RUST_LOG=debug cargo run
//!
//! # Every field decision
//! RUST_LOG=bean_copy=trace cargo run
//! ```
//!
//! **With `RUST_LOG=debug`**:
//!
//! ```text
//! DEBUG copy: copy finished report=leaves=4/4 matched=4 copied=4 skipped_zero=0 refused=0 excluded=0 source="PersonDto" target="Person"
//! ```

/// Initializes a compact `fmt` subscriber filtered by `RUST_LOG`.
///
/// Only the first call installs the global subscriber; later calls are no-ops.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
}
