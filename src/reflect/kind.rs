//! Field type classification.

use std::fmt;

/// Classification of a field's underlying type.
///
/// Two leaves can only be paired when their kinds are equal. [`FieldKind::Record`]
/// is the composite classification: such fields are never copied as a unit, the
/// flattener descends into them instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    F32,
    F64,
    Char,
    String,
    /// An optional leaf (`Option<T>` where `T` is not a record).
    Option,
    /// Sequence collections (`Vec`, `VecDeque`).
    Seq,
    /// Keyed collections (`HashMap`, `BTreeMap`).
    Map,
    /// Set collections (`HashSet`, `BTreeSet`).
    Set,
    /// Fixed-size arrays `[T; N]`.
    Array,
    /// Tuples of leaves, up to six elements.
    Tuple,
    /// A leaf type declared through [`impl_leaf!`](crate::impl_leaf), plus the
    /// std value types registered here (`Duration`, `PathBuf`) and shared
    /// pointers (`Arc`, `Rc`).
    Custom,
    /// A nested record, directly or behind `Box`/`Option`.
    Record,
}

impl FieldKind {
    /// Returns `true` for the composite classification.
    pub const fn is_composite(self) -> bool {
        matches!(self, FieldKind::Record)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            FieldKind::Bool => "bool",
            FieldKind::I8 => "i8",
            FieldKind::I16 => "i16",
            FieldKind::I32 => "i32",
            FieldKind::I64 => "i64",
            FieldKind::I128 => "i128",
            FieldKind::Isize => "isize",
            FieldKind::U8 => "u8",
            FieldKind::U16 => "u16",
            FieldKind::U32 => "u32",
            FieldKind::U64 => "u64",
            FieldKind::U128 => "u128",
            FieldKind::Usize => "usize",
            FieldKind::F32 => "f32",
            FieldKind::F64 => "f64",
            FieldKind::Char => "char",
            FieldKind::String => "string",
            FieldKind::Option => "option",
            FieldKind::Seq => "seq",
            FieldKind::Map => "map",
            FieldKind::Set => "set",
            FieldKind::Array => "array",
            FieldKind::Tuple => "tuple",
            FieldKind::Custom => "custom",
            FieldKind::Record => "record",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_record_is_composite() {
        assert!(FieldKind::Record.is_composite());
        assert!(!FieldKind::Option.is_composite());
        assert!(!FieldKind::String.is_composite());
        assert!(!FieldKind::Array.is_composite());
    }

    #[test]
    fn display_uses_lowercase_names() {
        assert_eq!(FieldKind::U64.to_string(), "u64");
        assert_eq!(FieldKind::Record.to_string(), "record");
    }
}
