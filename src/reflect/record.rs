//! # Records
//!
//! A [`Record`] is a value with named fields that the copier can enumerate at
//! runtime. Records are declared with the [`record!`](crate::record) macro,
//! which lists the fields that make up the record's shape in declaration order.
//! Fields left out of the list are invisible to the copier.

use super::FieldValue;

/// Runtime field enumeration for a record instance.
pub trait Record {
    /// Declared type name, used in log output.
    fn record_name(&self) -> &'static str;

    /// Calls `visitor` with each field's declared name and value, in declaration order.
    fn visit_fields<'a>(&'a self, visitor: &mut dyn FnMut(&'static str, &'a dyn FieldValue));

    /// Mutable counterpart of [`Record::visit_fields`].
    fn visit_fields_mut<'a>(
        &'a mut self,
        visitor: &mut dyn FnMut(&'static str, &'a mut dyn FieldValue),
    );
}

/// Declares structs as records.
///
/// Every listed field must implement [`FieldValue`] and [`FieldType`](crate::FieldType).
/// A record can be nested in another record directly, in a `Box`, or in an
/// `Option` (the latter requires the record to be `Clone`).
///
/// # Field list
///
/// The field list is the record's whole shape and is not checked against the
/// struct definition. A field that exists on the struct but is missing from the
/// list is never read, matched or written, and no error or log event reports
/// it. Add new struct fields to the `record!` call in the same change.
///
/// ```
/// use bean_copy::record;
///
/// #[derive(Debug, Default)]
/// struct Address {
///     city: String,
///     area: String,
/// }
///
/// #[derive(Debug, Default)]
/// struct Person {
///     name: String,
///     age: i32,
///     address: Address,
/// }
///
/// record! {
///     Address { city, area };
///     Person { name, age, address };
/// }
///
/// let names = bean_copy::leaf_names(&Person::default())?;
/// assert_eq!(names, ["name", "age", "city", "area"]);
/// # Ok::<(), bean_copy::CopyError>(())
/// ```
#[macro_export]
macro_rules! record {
    ($($name:ident { $($field:ident),* $(,)? });* $(;)?) => {
        $(
            impl $crate::Record for $name {
                fn record_name(&self) -> &'static str {
                    ::core::stringify!($name)
                }

                #[allow(unused_variables)]
                fn visit_fields<'a>(
                    &'a self,
                    visitor: &mut dyn FnMut(&'static str, &'a dyn $crate::FieldValue),
                ) {
                    $( visitor(::core::stringify!($field), &self.$field); )*
                }

                #[allow(unused_variables)]
                fn visit_fields_mut<'a>(
                    &'a mut self,
                    visitor: &mut dyn FnMut(&'static str, &'a mut dyn $crate::FieldValue),
                ) {
                    $( visitor(::core::stringify!($field), &mut self.$field); )*
                }
            }

            impl $crate::FieldType for $name {
                const KIND: $crate::FieldKind = $crate::FieldKind::Record;
            }

            impl $crate::FieldValue for $name {
                fn kind(&self) -> $crate::FieldKind {
                    $crate::FieldKind::Record
                }

                fn value_type(&self) -> ::core::any::TypeId {
                    ::core::any::TypeId::of::<Self>()
                }

                fn is_zero(&self) -> bool {
                    let mut zero = true;
                    $crate::Record::visit_fields(self, &mut |_, value| {
                        zero &= $crate::FieldValue::is_zero(value);
                    });
                    zero
                }

                fn as_any(&self) -> &dyn ::core::any::Any {
                    self
                }

                fn as_any_mut(&mut self) -> &mut dyn ::core::any::Any {
                    self
                }

                fn as_record(&self) -> ::core::option::Option<&dyn $crate::Record> {
                    ::core::option::Option::Some(self)
                }

                fn as_record_mut(&mut self) -> ::core::option::Option<&mut dyn $crate::Record> {
                    ::core::option::Option::Some(self)
                }

                // Composites are flattened, never assigned as a unit.
                fn assign_from(&mut self, _source: &dyn $crate::FieldValue) -> bool {
                    false
                }
            }
        )*
    };
}

#[cfg(test)]
mod tests {
    use crate::{FieldKind, FieldValue, Record};

    #[derive(Debug, Default, Clone)]
    struct Point {
        x: i64,
        y: i64,
    }

    #[derive(Debug, Default)]
    struct Segment {
        label: String,
        from: Point,
        to: Option<Point>,
        hidden: u8,
    }

    crate::record! {
        Point { x, y };
        Segment { label, from, to };
    }

    #[test]
    fn visits_listed_fields_in_declaration_order() {
        let segment = Segment::default();
        let mut seen = Vec::new();
        segment.visit_fields(&mut |name, value| seen.push((name, value.kind())));
        assert_eq!(
            seen,
            [
                ("label", FieldKind::String),
                ("from", FieldKind::Record),
                ("to", FieldKind::Record),
            ]
        );
        assert_eq!(segment.hidden, 0);
    }

    #[test]
    fn visit_mut_writes_in_place() {
        let mut point = Point { x: 1, y: 2 };
        point.visit_fields_mut(&mut |name, value| {
            if name == "y" {
                assert!(value.assign_from(&40i64));
            }
        });
        assert_eq!(point.x, 1);
        assert_eq!(point.y, 40);
    }

    #[test]
    fn record_is_zero_when_every_field_is_zero() {
        assert!(Point::default().is_zero());
        assert!(!Point { x: 0, y: 3 }.is_zero());
    }

    #[test]
    fn empty_optional_record_has_no_record() {
        let segment = Segment::default();
        assert!(segment.to.as_record().is_none());
        assert_eq!(segment.to.kind(), FieldKind::Record);

        let linked = Segment {
            to: Some(Point::default()),
            ..Segment::default()
        };
        assert_eq!(linked.to.as_record().map(|r| r.record_name()), Some("Point"));
    }

    #[test]
    fn unlisted_field_is_never_copied() {
        let source = Segment {
            label: "north".into(),
            hidden: 9,
            ..Segment::default()
        };
        let mut target = Segment::default();

        crate::copy_with_zero_policy(&source, &mut target, false).unwrap();
        assert_eq!(target.label, "north");
        assert_eq!(target.hidden, 0);
    }
}
