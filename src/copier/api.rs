//! Convenience entry points.
//!
//! The four functions differ only in their defaults and all delegate to
//! [`copy_full`]. Use [`Copier`] directly to reuse options or read the
//! [`CopyReport`](super::CopyReport).

use super::core::Copier;
use super::options::CopyOptions;
use crate::error::CopyError;
use crate::reflect::FieldValue;

/// Copies matching fields, skipping zero source values.
///
/// ```
/// use bean_copy::record;
///
/// #[derive(Default)]
/// struct PersonDto { name: String, age: i32 }
/// #[derive(Default)]
/// struct Person { name: String, age: i32, email: String }
///
/// record! {
///     PersonDto { name, age };
///     Person { name, age, email };
/// }
///
/// let dto = PersonDto { name: "feiwo".into(), age: 12 };
/// let mut person = Person::default();
/// bean_copy::copy(&dto, &mut person)?;
/// assert_eq!((person.name.as_str(), person.age), ("feiwo", 12));
/// # Ok::<(), bean_copy::CopyError>(())
/// ```
pub fn copy<S, T>(source: &S, target: &mut T) -> Result<(), CopyError>
where
    S: FieldValue + ?Sized,
    T: FieldValue + ?Sized,
{
    copy_with_zero_policy(source, target, true)
}

/// Copies matching fields; `suppress_zero` decides whether zero source values
/// are skipped (`true`) or written (`false`).
pub fn copy_with_zero_policy<S, T>(
    source: &S,
    target: &mut T,
    suppress_zero: bool,
) -> Result<(), CopyError>
where
    S: FieldValue + ?Sized,
    T: FieldValue + ?Sized,
{
    copy_full(source, target, suppress_zero, &[])
}

/// Copies matching fields, skipping zero source values and never writing the
/// target leaves named in `excluded`.
pub fn copy_excluding<S, T>(source: &S, target: &mut T, excluded: &[&str]) -> Result<(), CopyError>
where
    S: FieldValue + ?Sized,
    T: FieldValue + ?Sized,
{
    copy_full(source, target, true, excluded)
}

/// General form of the copy entry points.
pub fn copy_full<S, T>(
    source: &S,
    target: &mut T,
    suppress_zero: bool,
    excluded: &[&str],
) -> Result<(), CopyError>
where
    S: FieldValue + ?Sized,
    T: FieldValue + ?Sized,
{
    let options = CopyOptions::new()
        .with_suppress_zero(suppress_zero)
        .with_exclude(excluded.iter().copied());
    Copier::new(options).copy(source, target).map(|_| ())
}
