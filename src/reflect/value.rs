//! # Field Values
//!
//! [`FieldValue`] is the runtime view of one field's storage. The copier never
//! knows the concrete type of a field; it reads the kind, asks whether the value
//! is zero, and asks the target to overwrite itself from the source.
//!
//! Scalars and std value types are registered through
//! [`impl_leaf!`](crate::impl_leaf). Containers (`Option`, `Box`, shared
//! pointers, arrays, tuples, the std collections) have generic impls below.
//! Every type that is not a record is a leaf and is copied as a whole.

use std::any::{Any, TypeId};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use super::{FieldKind, Record};

/// Static classification of a field type.
///
/// Kept apart from [`FieldValue`] so that `Option<T>` can decide whether it is a
/// composite reference or an optional leaf without holding a `T`.
pub trait FieldType {
    const KIND: FieldKind;
}

/// Object-safe access to a single field's storage.
pub trait FieldValue: Any {
    fn kind(&self) -> FieldKind;

    /// Concrete type of the storage. Leaves are only paired when this matches.
    fn value_type(&self) -> TypeId;

    /// Whether the current value is the zero value of its type.
    fn is_zero(&self) -> bool;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// The record behind this value, if it is a composite holding one.
    fn as_record(&self) -> Option<&dyn Record> {
        None
    }

    fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
        None
    }

    /// Overwrites `self` in place with the value held by `source`.
    ///
    /// Returns `false` and leaves `self` untouched when `source` does not hold
    /// the same concrete type, or when `self` is a composite.
    fn assign_from(&mut self, source: &dyn FieldValue) -> bool;
}

#[doc(hidden)]
pub fn assign_cloned<T: Any + Clone>(target: &mut T, source: &dyn FieldValue) -> bool {
    match source.as_any().downcast_ref::<T>() {
        Some(value) => {
            target.clone_from(value);
            true
        }
        None => false,
    }
}

/// Registers scalar types as leaves.
///
/// The zero value is `Default::default()`; the type must be
/// `Clone + PartialEq + Default + 'static`.
///
/// ```
/// use bean_copy::{impl_leaf, FieldKind, FieldValue};
///
/// #[derive(Debug, Clone, Default, PartialEq)]
/// enum Status {
///     #[default]
///     Pending,
///     Active,
/// }
///
/// impl_leaf!(Status => Custom);
///
/// assert!(Status::Pending.is_zero());
/// assert_eq!(Status::Active.kind(), FieldKind::Custom);
/// ```
#[macro_export]
macro_rules! impl_leaf {
    (@one $ty:ty, $kind:ident, |$value:ident| $zero:expr) => {
        impl $crate::FieldType for $ty {
            const KIND: $crate::FieldKind = $crate::FieldKind::$kind;
        }

        impl $crate::FieldValue for $ty {
            fn kind(&self) -> $crate::FieldKind {
                <Self as $crate::FieldType>::KIND
            }

            fn value_type(&self) -> ::core::any::TypeId {
                ::core::any::TypeId::of::<Self>()
            }

            fn is_zero(&self) -> bool {
                let $value = self;
                $zero
            }

            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::core::any::Any {
                self
            }

            fn assign_from(&mut self, source: &dyn $crate::FieldValue) -> bool {
                $crate::reflect::assign_cloned(self, source)
            }
        }
    };
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            $crate::impl_leaf!(@one $ty, $kind, |value| *value == <$ty as ::core::default::Default>::default());
        )*
    };
}

impl_leaf!(
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
    char => Char,
    String => String,
    &'static str => String,
    Duration => Custom,
    PathBuf => Custom,
);

// -0.0 compares equal to 0.0 but is not the zero bit pattern.
impl_leaf!(@one f32, F32, |value| value.to_bits() == 0);
impl_leaf!(@one f64, F64, |value| value.to_bits() == 0);

macro_rules! impl_collection {
    ($kind:ident => $($ty:ident<$($param:ident),+>),* $(,)?) => {
        $(
            impl<$($param: Clone + 'static),+> FieldType for $ty<$($param),+> {
                const KIND: FieldKind = FieldKind::$kind;
            }

            impl<$($param: Clone + 'static),+> FieldValue for $ty<$($param),+> {
                fn kind(&self) -> FieldKind {
                    FieldKind::$kind
                }

                fn value_type(&self) -> TypeId {
                    TypeId::of::<Self>()
                }

                fn is_zero(&self) -> bool {
                    self.is_empty()
                }

                fn as_any(&self) -> &dyn Any {
                    self
                }

                fn as_any_mut(&mut self) -> &mut dyn Any {
                    self
                }

                fn assign_from(&mut self, source: &dyn FieldValue) -> bool {
                    assign_cloned(self, source)
                }
            }
        )*
    };
}

impl_collection!(Seq => Vec<T>, VecDeque<T>);
impl_collection!(Map => HashMap<K, V, S>, BTreeMap<K, V>);
impl_collection!(Set => HashSet<T, S>, BTreeSet<T>);

impl<T: FieldValue + Clone, const N: usize> FieldType for [T; N] {
    const KIND: FieldKind = FieldKind::Array;
}

/// An array is a leaf, even when its elements are records. It is zero when every
/// element is zero.
impl<T: FieldValue + Clone, const N: usize> FieldValue for [T; N] {
    fn kind(&self) -> FieldKind {
        FieldKind::Array
    }

    fn value_type(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn is_zero(&self) -> bool {
        self.iter().all(|item| item.is_zero())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_from(&mut self, source: &dyn FieldValue) -> bool {
        assign_cloned(self, source)
    }
}

macro_rules! impl_tuple {
    ($(($($item:ident),+)),* $(,)?) => {
        $(
            impl<$($item: FieldValue + Clone),+> FieldType for ($($item,)+) {
                const KIND: FieldKind = FieldKind::Tuple;
            }

            impl<$($item: FieldValue + Clone),+> FieldValue for ($($item,)+) {
                fn kind(&self) -> FieldKind {
                    FieldKind::Tuple
                }

                fn value_type(&self) -> TypeId {
                    TypeId::of::<Self>()
                }

                #[allow(non_snake_case)]
                fn is_zero(&self) -> bool {
                    let ($($item,)+) = self;
                    true $(&& $item.is_zero())+
                }

                fn as_any(&self) -> &dyn Any {
                    self
                }

                fn as_any_mut(&mut self) -> &mut dyn Any {
                    self
                }

                fn assign_from(&mut self, source: &dyn FieldValue) -> bool {
                    assign_cloned(self, source)
                }
            }
        )*
    };
}

impl_tuple!(
    (A),
    (A, B),
    (A, B, C),
    (A, B, C, D),
    (A, B, C, D, E),
    (A, B, C, D, E, F),
);

macro_rules! impl_shared {
    ($($ptr:ident),* $(,)?) => {
        $(
            impl<T: FieldValue> FieldType for $ptr<T> {
                const KIND: FieldKind = FieldKind::Custom;
            }

            /// Shared pointers are leaves: assignment replaces the pointer, the
            /// pointee is never written through.
            impl<T: FieldValue> FieldValue for $ptr<T> {
                fn kind(&self) -> FieldKind {
                    FieldKind::Custom
                }

                fn value_type(&self) -> TypeId {
                    TypeId::of::<Self>()
                }

                fn is_zero(&self) -> bool {
                    (**self).is_zero()
                }

                fn as_any(&self) -> &dyn Any {
                    self
                }

                fn as_any_mut(&mut self) -> &mut dyn Any {
                    self
                }

                fn assign_from(&mut self, source: &dyn FieldValue) -> bool {
                    assign_cloned(self, source)
                }
            }
        )*
    };
}

impl_shared!(Arc, Rc);

impl<T: FieldType> FieldType for Option<T> {
    const KIND: FieldKind = if T::KIND.is_composite() {
        FieldKind::Record
    } else {
        FieldKind::Option
    };
}

/// `Option<Record>` is a composite reference; any other `Option<T>` is a leaf
/// whose zero value is `None`.
impl<T: FieldType + FieldValue + Clone> FieldValue for Option<T> {
    fn kind(&self) -> FieldKind {
        <Self as FieldType>::KIND
    }

    fn value_type(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn is_zero(&self) -> bool {
        self.is_none()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn as_record(&self) -> Option<&dyn Record> {
        self.as_ref().and_then(|value| value.as_record())
    }

    fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
        self.as_mut().and_then(|value| value.as_record_mut())
    }

    fn assign_from(&mut self, source: &dyn FieldValue) -> bool {
        if <Self as FieldType>::KIND.is_composite() {
            return false;
        }
        assign_cloned(self, source)
    }
}

impl<T: FieldType> FieldType for Box<T> {
    const KIND: FieldKind = T::KIND;
}

/// A box is transparent: it has the kind, zero value and record of its content.
impl<T: FieldType + FieldValue> FieldValue for Box<T> {
    fn kind(&self) -> FieldKind {
        T::KIND
    }

    fn value_type(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn as_record(&self) -> Option<&dyn Record> {
        (**self).as_record()
    }

    fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
        (**self).as_record_mut()
    }

    fn assign_from(&mut self, source: &dyn FieldValue) -> bool {
        match source.as_any().downcast_ref::<Box<T>>() {
            Some(value) => (**self).assign_from(&**value),
            None => false,
        }
    }
}
