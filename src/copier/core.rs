//! # Copy Engine
//!
//! Every copy call runs the same pipeline:
//!
//! 1. **Guard** - both arguments must resolve to a record.
//! 2. **Flatten** - each record is walked depth-first into a list of leaf fields.
//!    Composite fields are descended into, never emitted.
//! 3. **Match** - every source leaf is compared with every target leaf; a pair is
//!    a candidate when name, kind and concrete type agree and the target name is
//!    not excluded.
//! 4. **Assign** - each candidate overwrites its target leaf, unless the source is
//!    zero and zero suppression is on.
//!
//! Leaf names are bare field names, not paths: `city` inside a nested `address`
//! pairs with any other leaf named `city`, at any depth.

use std::fmt;

use tracing::{debug, debug_span, trace, warn};

use super::options::{CopyOptions, DEFAULT_MAX_DEPTH};
use super::report::CopyReport;
use crate::error::{CopyError, Side};
use crate::reflect::{FieldKind, FieldValue, Record};

// =============================================================================
// 1. LEAF FIELDS
// =============================================================================

/// A read-only handle to one non-composite field of a source record.
pub struct LeafField<'a> {
    pub kind: FieldKind,
    pub name: &'static str,
    pub handle: &'a dyn FieldValue,
}

/// A writable handle to one non-composite field of a target record.
pub struct LeafFieldMut<'a> {
    pub kind: FieldKind,
    pub name: &'static str,
    pub handle: &'a mut dyn FieldValue,
}

impl fmt::Debug for LeafField<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeafField")
            .field("kind", &self.kind)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for LeafFieldMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeafFieldMut")
            .field("kind", &self.kind)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// 2. FLATTENER
// =============================================================================

/// Flattens `record` into its leaves, depth-first in declaration order.
///
/// Empty `Option` composites contribute nothing. Fails when composites nest more
/// than `max_depth` levels below `record`.
pub fn flatten<'a>(
    record: &'a dyn Record,
    side: Side,
    max_depth: usize,
) -> Result<Vec<LeafField<'a>>, CopyError> {
    let mut leaves = Vec::new();
    if collect(record, 0, max_depth, &mut leaves) {
        Ok(leaves)
    } else {
        Err(CopyError::DepthExceeded {
            side,
            limit: max_depth,
        })
    }
}

/// Mutable counterpart of [`flatten`].
pub fn flatten_mut<'a>(
    record: &'a mut dyn Record,
    side: Side,
    max_depth: usize,
) -> Result<Vec<LeafFieldMut<'a>>, CopyError> {
    let mut leaves = Vec::new();
    if collect_mut(record, 0, max_depth, &mut leaves) {
        Ok(leaves)
    } else {
        Err(CopyError::DepthExceeded {
            side,
            limit: max_depth,
        })
    }
}

/// Leaf names of `record` in traversal order.
///
/// Duplicates in the result are the names that collide across nesting levels.
pub fn leaf_names(record: &dyn Record) -> Result<Vec<&'static str>, CopyError> {
    let leaves = flatten(record, Side::Source, DEFAULT_MAX_DEPTH)?;
    Ok(leaves.into_iter().map(|leaf| leaf.name).collect())
}

fn collect<'a>(
    record: &'a dyn Record,
    depth: usize,
    max_depth: usize,
    out: &mut Vec<LeafField<'a>>,
) -> bool {
    if depth > max_depth {
        return false;
    }
    let mut within = true;
    record.visit_fields(&mut |name, handle| {
        if !within {
            return;
        }
        let kind = handle.kind();
        if !kind.is_composite() {
            out.push(LeafField { kind, name, handle });
            return;
        }
        match handle.as_record() {
            Some(inner) => within = collect(inner, depth + 1, max_depth, out),
            None => trace!(field = name, "empty composite skipped"),
        }
    });
    within
}

fn collect_mut<'a>(
    record: &'a mut dyn Record,
    depth: usize,
    max_depth: usize,
    out: &mut Vec<LeafFieldMut<'a>>,
) -> bool {
    if depth > max_depth {
        return false;
    }
    let mut within = true;
    record.visit_fields_mut(&mut |name, handle| {
        if !within {
            return;
        }
        let kind = handle.kind();
        if !kind.is_composite() {
            out.push(LeafFieldMut { kind, name, handle });
            return;
        }
        match handle.as_record_mut() {
            Some(inner) => within = collect_mut(inner, depth + 1, max_depth, out),
            None => trace!(field = name, "empty composite skipped"),
        }
    });
    within
}

// =============================================================================
// 3. MATCHER
// =============================================================================

/// Candidate pairs produced by [`match_leaves`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Matches {
    /// `(source index, target index)`, source-major then target-minor.
    pub pairs: Vec<(usize, usize)>,
    /// Candidates dropped because the target name was excluded.
    pub excluded: usize,
}

/// Pairs source and target leaves by equal name, kind and concrete type.
///
/// This is a full cross-product scan. With duplicate names a target leaf can
/// appear in several pairs; applying them in order lets the last source win.
/// Pairs whose target name is in `options.exclude` are counted and dropped.
pub fn match_leaves(
    sources: &[LeafField<'_>],
    targets: &[LeafFieldMut<'_>],
    options: &CopyOptions,
) -> Matches {
    let mut matches = Matches::default();
    for (s, source) in sources.iter().enumerate() {
        for (t, target) in targets.iter().enumerate() {
            if source.name != target.name
                || source.kind != target.kind
                || source.handle.value_type() != target.handle.value_type()
            {
                continue;
            }
            if options.is_excluded(target.name) {
                trace!(field = target.name, "excluded");
                matches.excluded += 1;
                continue;
            }
            matches.pairs.push((s, t));
        }
    }
    matches
}

// =============================================================================
// 4. ASSIGNER
// =============================================================================

/// Outcome of a single [`assign`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assignment {
    Copied,
    SkippedZero,
    /// The target refused the value. Pairs from [`match_leaves`] agree on
    /// concrete type, so only hand-built pairs reach this.
    Refused,
}

/// Copies the source leaf's current value into the target leaf.
pub fn assign(
    source: &LeafField<'_>,
    target: &mut LeafFieldMut<'_>,
    suppress_zero: bool,
) -> Assignment {
    if suppress_zero && source.handle.is_zero() {
        trace!(field = source.name, "zero value skipped");
        return Assignment::SkippedZero;
    }
    if target.handle.assign_from(source.handle) {
        trace!(field = target.name, kind = %target.kind, "copied");
        Assignment::Copied
    } else {
        warn!(field = target.name, kind = %target.kind, "assignment refused");
        Assignment::Refused
    }
}

// =============================================================================
// 5. COPIER
// =============================================================================

/// Runs copies under a fixed [`CopyOptions`].
///
/// ```
/// use bean_copy::{record, Copier, CopyOptions};
///
/// #[derive(Default)]
/// struct Dto { name: String, age: i32 }
/// #[derive(Default)]
/// struct Person { name: String, age: i32 }
///
/// record! {
///     Dto { name, age };
///     Person { name, age };
/// }
///
/// let copier = Copier::new(CopyOptions::new().with_exclude(["name"]));
/// let dto = Dto { name: "feiwo".into(), age: 12 };
/// let mut person = Person::default();
///
/// let report = copier.copy(&dto, &mut person)?;
/// assert_eq!(person.age, 12);
/// assert_eq!(person.name, "");
/// assert_eq!(report.excluded, 1);
/// # Ok::<(), bean_copy::CopyError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Copier {
    options: CopyOptions,
}

impl Copier {
    pub fn new(options: CopyOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CopyOptions {
        &self.options
    }

    /// Copies matching leaves from `source` into `target`.
    ///
    /// Both arguments must resolve to a record; otherwise
    /// [`CopyError::InvalidArgumentKind`] is returned and nothing is written.
    pub fn copy<S, T>(&self, source: &S, target: &mut T) -> Result<CopyReport, CopyError>
    where
        S: FieldValue + ?Sized,
        T: FieldValue + ?Sized,
    {
        let source = source.as_record().ok_or(CopyError::InvalidArgumentKind {
            side: Side::Source,
        })?;
        let target = target.as_record_mut().ok_or(CopyError::InvalidArgumentKind {
            side: Side::Target,
        })?;

        let _span = debug_span!(
            "copy",
            source = source.record_name(),
            target = target.record_name()
        )
        .entered();

        let max_depth = self.options.max_depth;
        let sources = flatten(source, Side::Source, max_depth)?;
        let mut targets = flatten_mut(target, Side::Target, max_depth)?;

        let matches = match_leaves(&sources, &targets, &self.options);
        let mut report = CopyReport {
            source_leaves: sources.len(),
            target_leaves: targets.len(),
            matched: matches.pairs.len(),
            excluded: matches.excluded,
            ..CopyReport::default()
        };

        for &(s, t) in &matches.pairs {
            match assign(&sources[s], &mut targets[t], self.options.suppress_zero) {
                Assignment::Copied => report.copied += 1,
                Assignment::SkippedZero => report.skipped_zero += 1,
                Assignment::Refused => report.refused += 1,
            }
        }

        debug!(%report, "copy finished");
        Ok(report)
    }
}

// =============================================================================
// 6. TESTS
// =============================================================================
