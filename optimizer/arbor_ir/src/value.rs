//! Typed literal values.
//!
//! `Value` is the payload of a `Literal` node: exactly one primitive of the
//! closed numeric domain, or a typed null. There is no untyped value — the
//! runtime tag always names the `ScalarType` the value was constructed for,
//! and `Null` carries the scalar of its nullable static type.

use std::fmt;

use crate::numeric::{NumericType, ScalarType};

/// A literal value of the closed numeric domain.
///
/// `PartialEq` is bitwise-naive for floats (NaN != NaN), which is what the
/// fold rules want: a NaN literal never compares equal, so it is never
/// deduplicated into a wrong branch.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
    /// The null of a nullable type, tagged with its underlying scalar.
    Null(ScalarType),
}

impl Value {
    /// The scalar type this value's tag names.
    ///
    /// For `Null` this is the underlying scalar of the nullable type.
    #[must_use]
    pub const fn scalar_type(self) -> ScalarType {
        match self {
            Self::Bool(_) => ScalarType::Bool,
            Self::I8(_) => ScalarType::I8,
            Self::U8(_) => ScalarType::U8,
            Self::I16(_) => ScalarType::I16,
            Self::U16(_) => ScalarType::U16,
            Self::I32(_) => ScalarType::I32,
            Self::U32(_) => ScalarType::U32,
            Self::I64(_) => ScalarType::I64,
            Self::U64(_) => ScalarType::U64,
            Self::F32(_) => ScalarType::F32,
            Self::F64(_) => ScalarType::F64,
            Self::Null(scalar) => scalar,
        }
    }

    /// `true` if this is a typed null.
    #[must_use]
    pub const fn is_null(self) -> bool {
        matches!(self, Self::Null(_))
    }

    /// Tag/static-type agreement invariant.
    ///
    /// A value matches a static type when the scalar tags agree and, for
    /// `Null`, the static type is nullable. A non-null value of a nullable
    /// type is valid.
    #[must_use]
    pub const fn matches(self, ty: NumericType) -> bool {
        match self {
            Self::Null(scalar) => ty.nullable && scalar as u8 == ty.scalar as u8,
            _ => self.scalar_type() as u8 == ty.scalar as u8,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => v.fmt(f),
            Self::I8(v) => v.fmt(f),
            Self::U8(v) => v.fmt(f),
            Self::I16(v) => v.fmt(f),
            Self::U16(v) => v.fmt(f),
            Self::I32(v) => v.fmt(f),
            Self::U32(v) => v.fmt(f),
            Self::I64(v) => v.fmt(f),
            Self::U64(v) => v.fmt(f),
            Self::F32(v) => v.fmt(f),
            Self::F64(v) => v.fmt(f),
            Self::Null(scalar) => write!(f, "null:{scalar}?"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tag_names_scalar() {
        assert_eq!(Value::I8(-1).scalar_type(), ScalarType::I8);
        assert_eq!(Value::F64(0.5).scalar_type(), ScalarType::F64);
        assert_eq!(Value::Null(ScalarType::U16).scalar_type(), ScalarType::U16);
    }

    #[test]
    fn matches_requires_agreeing_tags() {
        let i32_ty = NumericType::new(ScalarType::I32);
        assert!(Value::I32(7).matches(i32_ty));
        assert!(!Value::I64(7).matches(i32_ty));

        // Non-null value of a nullable type is fine.
        assert!(Value::I32(7).matches(NumericType::nullable(ScalarType::I32)));
    }

    #[test]
    fn null_matches_only_nullable_types() {
        let null = Value::Null(ScalarType::I32);
        assert!(null.matches(NumericType::nullable(ScalarType::I32)));
        assert!(!null.matches(NumericType::new(ScalarType::I32)));
        assert!(!null.matches(NumericType::nullable(ScalarType::I64)));
    }

    #[test]
    fn nan_is_not_equal_to_itself() {
        assert_ne!(Value::F64(f64::NAN), Value::F64(f64::NAN));
    }

    #[test]
    fn display() {
        assert_eq!(Value::U8(200).to_string(), "200");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Null(ScalarType::I8).to_string(), "null:i8?");
    }
}
