//! The closed primitive numeric type domain.
//!
//! `ScalarType` enumerates every primitive the conversion matrix covers:
//! boolean, the eight fixed-width integers, and the two IEEE-754 float
//! widths. `NumericType` pairs a scalar with a nullability flag. The set is
//! fixed — it is never extended at runtime, and every `match` over it is
//! exhaustive.

use std::fmt;

/// Primitive scalar type tag.
///
/// Boolean is modeled as an unsigned integral with a 0/1 payload; it is a
/// valid conversion *source* but never a conversion *target*.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ScalarType {
    /// Boolean (`false` = 0, `true` = 1).
    Bool,
    /// 8-bit signed integer.
    I8,
    /// 8-bit unsigned integer.
    U8,
    /// 16-bit signed integer.
    I16,
    /// 16-bit unsigned integer.
    U16,
    /// 32-bit signed integer.
    I32,
    /// 32-bit unsigned integer.
    U32,
    /// 64-bit signed integer.
    I64,
    /// 64-bit unsigned integer.
    U64,
    /// 32-bit IEEE-754 float.
    F32,
    /// 64-bit IEEE-754 float.
    F64,
}

impl ScalarType {
    /// All scalar types, in declaration order. Useful for exhaustive tests.
    pub const ALL: [ScalarType; 11] = [
        Self::Bool,
        Self::I8,
        Self::U8,
        Self::I16,
        Self::U16,
        Self::I32,
        Self::U32,
        Self::I64,
        Self::U64,
        Self::F32,
        Self::F64,
    ];

    /// Storage width in bits. Boolean occupies a byte.
    #[must_use]
    pub const fn bit_width(self) -> u8 {
        match self {
            Self::Bool | Self::I8 | Self::U8 => 8,
            Self::I16 | Self::U16 => 16,
            Self::I32 | Self::U32 | Self::F32 => 32,
            Self::I64 | Self::U64 | Self::F64 => 64,
        }
    }

    /// `true` for the signed integer widths.
    ///
    /// Boolean and the unsigned widths are `false`; floats are not integral
    /// and answer `false` here as well — check [`is_float`](Self::is_float)
    /// separately.
    #[must_use]
    pub const fn is_signed(self) -> bool {
        matches!(self, Self::I8 | Self::I16 | Self::I32 | Self::I64)
    }

    /// `true` for the eight fixed-width integer types (not boolean).
    #[must_use]
    pub const fn is_integral(self) -> bool {
        matches!(
            self,
            Self::I8
                | Self::U8
                | Self::I16
                | Self::U16
                | Self::I32
                | Self::U32
                | Self::I64
                | Self::U64
        )
    }

    /// `true` for the two float widths.
    #[must_use]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    /// Lowercase display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::I8 => "i8",
            Self::U8 => "u8",
            Self::I16 => "i16",
            Self::U16 => "u16",
            Self::I32 => "i32",
            Self::U32 => "u32",
            Self::I64 => "i64",
            Self::U64 => "u64",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scalar type plus nullability — the static type of every tree node.
///
/// Nullability never changes conversion payload semantics; it only adds the
/// "null propagates" rule and changes how results are typed.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct NumericType {
    /// The underlying scalar.
    pub scalar: ScalarType,
    /// Whether the type admits a null value.
    pub nullable: bool,
}

impl NumericType {
    /// Non-nullable type for `scalar`.
    #[must_use]
    pub const fn new(scalar: ScalarType) -> Self {
        Self {
            scalar,
            nullable: false,
        }
    }

    /// Nullable type for `scalar`.
    #[must_use]
    pub const fn nullable(scalar: ScalarType) -> Self {
        Self {
            scalar,
            nullable: true,
        }
    }

    /// The same type with nullability stripped.
    #[must_use]
    pub const fn non_null(self) -> Self {
        Self {
            scalar: self.scalar,
            nullable: false,
        }
    }
}

impl From<ScalarType> for NumericType {
    fn from(scalar: ScalarType) -> Self {
        Self::new(scalar)
    }
}

impl fmt::Display for NumericType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nullable {
            write!(f, "{}?", self.scalar)
        } else {
            self.scalar.fmt(f)
        }
    }
}
