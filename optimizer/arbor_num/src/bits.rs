//! Canonical pivot representations.
//!
//! Integral and boolean values are exposed as a 64-bit two's-complement bit
//! pattern plus declared width/signedness ([`IntBits`]); float values are
//! exposed as `f64`, which represents every `f32` losslessly. These
//! functions are total over their category and perform no semantic
//! narrowing — the conversion rules live in `convert`.

// Intentional numeric reinterpretation: truncating a pivot pattern to a
// narrower width is the whole point of this module.
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_lossless,
    reason = "pivot encoding/decoding is deliberate bit-level reinterpretation"
)]

use arbor_ir::{ScalarType, Value};

/// The two's-complement bit pattern of an integral or boolean value.
///
/// `bits` holds the pattern sign-extended to 64 bits, so the mathematical
/// value of a signed source is recoverable as `bits.cast_signed()`
/// regardless of width.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct IntBits {
    /// Bit pattern, sign-extended to 64 bits for signed sources.
    pub bits: u64,
    /// Declared width of the source type in bits (8, 16, 32, or 64).
    pub width: u8,
    /// Whether the source type is signed.
    pub signed: bool,
}

impl IntBits {
    /// The exact mathematical value of the pattern under its declared
    /// signedness.
    #[must_use]
    pub const fn math_value(self) -> i128 {
        if self.signed {
            self.bits.cast_signed() as i128
        } else {
            self.bits as i128
        }
    }
}

/// Expose the bit pattern of an integral or boolean value.
///
/// Boolean is an unsigned 1-bit-significant value (`0`/`1`) stored in a
/// byte.
///
/// # Panics
///
/// Panics on float or null values — callers dispatch by category first.
#[must_use]
pub fn to_bits(value: Value) -> IntBits {
    let (bits, width, signed) = match value {
        Value::Bool(v) => (u64::from(v), 8, false),
        Value::I8(v) => (i64::from(v).cast_unsigned(), 8, true),
        Value::U8(v) => (u64::from(v), 8, false),
        Value::I16(v) => (i64::from(v).cast_unsigned(), 16, true),
        Value::U16(v) => (u64::from(v), 16, false),
        Value::I32(v) => (i64::from(v).cast_unsigned(), 32, true),
        Value::U32(v) => (u64::from(v), 32, false),
        Value::I64(v) => (v.cast_unsigned(), 64, true),
        Value::U64(v) => (v, 64, false),
        Value::F32(_) | Value::F64(_) | Value::Null(_) => {
            panic!("to_bits on non-integral value {value:?}")
        }
    };
    IntBits { bits, width, signed }
}

/// Build an integral value from the low `width` bits of a pattern,
/// reinterpreted per the target's signedness.
///
/// This is exactly the wraparound-truncation rule of unchecked narrowing:
/// keep the low bits, sign-extend on read if the target is signed.
///
/// # Panics
///
/// Panics for non-integral targets. `bool` is never a conversion target and
/// float targets are built through [`from_float`].
#[must_use]
pub fn from_bits(bits: u64, target: ScalarType) -> Value {
    match target {
        ScalarType::I8 => Value::I8((bits as u8).cast_signed()),
        ScalarType::U8 => Value::U8(bits as u8),
        ScalarType::I16 => Value::I16((bits as u16).cast_signed()),
        ScalarType::U16 => Value::U16(bits as u16),
        ScalarType::I32 => Value::I32((bits as u32).cast_signed()),
        ScalarType::U32 => Value::U32(bits as u32),
        ScalarType::I64 => Value::I64(bits.cast_signed()),
        ScalarType::U64 => Value::U64(bits),
        ScalarType::Bool | ScalarType::F32 | ScalarType::F64 => {
            panic!("from_bits on non-integral target {target}")
        }
    }
}

/// Widen a float value losslessly to the `f64` pivot.
///
/// # Panics
///
/// Panics on non-float values.
#[must_use]
pub fn to_float(value: Value) -> f64 {
    match value {
        Value::F32(v) => f64::from(v),
        Value::F64(v) => v,
        _ => panic!("to_float on non-float value {value:?}"),
    }
}

/// Build a float value from the `f64` pivot.
///
/// Narrowing to `f32` rounds to nearest-even per IEEE-754; infinities are
/// valid results.
///
/// # Panics
///
/// Panics for non-float targets.
#[must_use]
pub fn from_float(pivot: f64, target: ScalarType) -> Value {
    match target {
        ScalarType::F32 => Value::F32(pivot as f32),
        ScalarType::F64 => Value::F64(pivot),
        _ => panic!("from_float on non-float target {target}"),
    }
}
