//! The conversion matrix.
//!
//! One total function over every ordered pair of the closed numeric domain,
//! in checked and unchecked modes. Rather than a per-pair switch, every
//! conversion routes through the two pivots by category:
//!
//! | source \ target | integral       | float            |
//! |-----------------|----------------|------------------|
//! | bool / integral | `int_to_int`   | `int_to_float`   |
//! | float           | `float_to_int` | `float_to_float` |
//!
//! Null propagation runs before everything else; bool as a *target* is a
//! caller contract violation (the source semantics never target bool).
//!
//! Checked overflow is returned as [`Overflow`] data, never raised — the
//! fold pass stays pure and the caller decides how to represent the failed
//! conversion in a tree.

#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "unchecked conversion is deliberate truncation/reinterpretation"
)]

use arbor_ir::{NumericType, ScalarType, Value};
use thiserror::Error;

use crate::bits::{from_bits, from_float, to_bits, to_float};
use crate::bounds::{float_range, int_bounds};

/// A checked conversion's result does not fit the target type.
///
/// Carries the conversion pair for diagnostics; it is data, not a raised
/// error. The fold rule turns it into a "raise overflow on evaluation"
/// tree node.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Error)]
#[error("conversion from {from} to {to} overflowed")]
pub struct Overflow {
    /// Static type of the conversion operand.
    pub from: NumericType,
    /// Conversion target type.
    pub to: NumericType,
}

/// Beyond this magnitude every representable `f64` is a multiple of 2^64,
/// so truncate-and-wrap yields zero for every integral width. 2^127.
const WRAP_LIMIT: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

/// Convert `value` from `source` to `target`.
///
/// Unchecked mode wraps (integral) or truncates/rounds per IEEE-754
/// (float); checked mode returns [`Overflow`] whenever the mathematical
/// value is not exactly representable as an integer of the target type.
/// Float targets never overflow in either mode.
///
/// # Panics
///
/// Panics on caller contract violations, which correct tree construction
/// never produces:
/// - `value` does not match `source` (malformed literal);
/// - a null value with a non-nullable `source` or `target`;
/// - a non-bool source converting to `bool` (bool is source-only).
pub fn convert(
    value: Value,
    source: NumericType,
    target: NumericType,
    checked: bool,
) -> Result<Value, Overflow> {
    assert!(
        value.matches(source),
        "value {value:?} does not match source type {source}"
    );

    // Null propagation precedes every other rule, both modes.
    if value.is_null() {
        assert!(
            target.nullable,
            "null {source} converted to non-nullable {target}"
        );
        return Ok(Value::Null(target.scalar));
    }

    let overflow = Overflow {
        from: source,
        to: target,
    };
    let from_scalar = value.scalar_type();

    match (from_scalar.is_float(), target.scalar.is_float()) {
        (false, false) => int_to_int(value, target.scalar, checked, overflow),
        (false, true) => Ok(int_to_float(value, target.scalar)),
        (true, false) => float_to_int(value, target.scalar, checked, overflow),
        (true, true) => Ok(from_float(to_float(value), target.scalar)),
    }
}

/// Integral/boolean → integral/boolean.
///
/// Unchecked: keep the low `target_width` bits of the two's-complement
/// pattern, reinterpret per target signedness. Checked: additionally
/// require the mathematical value to be representable — same-width
/// signed↔unsigned reinterpretation that changes the value overflows even
/// though no bits are lost.
fn int_to_int(
    value: Value,
    target: ScalarType,
    checked: bool,
    overflow: Overflow,
) -> Result<Value, Overflow> {
    if target == ScalarType::Bool {
        // Bool is only ever a conversion source; the identity conversion is
        // the one shape the builder may legally produce.
        match value {
            Value::Bool(_) => return Ok(value),
            _ => panic!("conversion to bool from {value:?} is unsupported"),
        }
    }

    let src = to_bits(value);
    if checked {
        let math = src.math_value();
        let (min, max) = int_bounds(target);
        if math < min || math > max {
            return Err(overflow);
        }
    }
    Ok(from_bits(src.bits, target))
}

/// Integral/boolean → float.
///
/// Ordinary numeric widening: exact for every magnitude the target
/// mantissa holds, round-to-nearest beyond. Never overflows in either
/// mode.
#[allow(
    clippy::cast_precision_loss,
    reason = "int→float rounds to nearest by definition"
)]
fn int_to_float(value: Value, target: ScalarType) -> Value {
    let math = to_bits(value).math_value();
    match target {
        // Narrow directly from the mathematical value so the result is
        // single-rounded, not rounded through f64 first.
        ScalarType::F32 => Value::F32(math as f32),
        ScalarType::F64 => Value::F64(math as f64),
        _ => unreachable!("int_to_float target {target} is not a float"),
    }
}

/// Float → integral.
///
/// Both modes truncate toward zero first. Checked mode then range-checks,
/// with NaN and ±infinity always overflowing. Unchecked mode takes the low
/// `target_width` bits of the truncated mathematical value (wrap modulo
/// 2^width); NaN and magnitudes at or past 2^127 yield zero — see
/// DESIGN.md, the host's own behavior is implementation-defined here.
fn float_to_int(
    value: Value,
    target: ScalarType,
    checked: bool,
    overflow: Overflow,
) -> Result<Value, Overflow> {
    let truncated = to_float(value).trunc();

    if checked {
        let (min, max_excl) = float_range(target);
        // NaN fails both comparisons.
        if !(truncated >= min && truncated < max_excl) {
            return Err(overflow);
        }
        let bits = if target.is_signed() {
            (truncated as i64).cast_unsigned()
        } else {
            truncated as u64
        };
        return Ok(from_bits(bits, target));
    }

    if truncated.is_nan() || truncated.is_infinite() || truncated.abs() >= WRAP_LIMIT {
        return Ok(from_bits(0, target));
    }
    // |truncated| < 2^127: exactly representable in i128, wrap to the low
    // 64 bits and let `from_bits` narrow to the target width.
    let wide = truncated as i128;
    Ok(from_bits(wide as u64, target))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests can panic")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn t(scalar: ScalarType) -> NumericType {
        NumericType::new(scalar)
    }

    fn n(scalar: ScalarType) -> NumericType {
        NumericType::nullable(scalar)
    }

    // -- int → int --

    #[test]
    fn sbyte_min_to_byte_unchecked_wraps() {
        let got = convert(Value::I8(-128), t(ScalarType::I8), t(ScalarType::U8), false);
        assert_eq!(got, Ok(Value::U8(128)));
    }

    #[test]
    fn sbyte_min_to_byte_checked_overflows() {
        let got = convert(Value::I8(-128), t(ScalarType::I8), t(ScalarType::U8), true);
        assert_eq!(
            got,
            Err(Overflow {
                from: t(ScalarType::I8),
                to: t(ScalarType::U8),
            })
        );
    }

    #[test]
    fn int_max_to_short_unchecked_truncates_to_minus_one() {
        let got = convert(
            Value::I32(2_147_483_647),
            t(ScalarType::I32),
            t(ScalarType::I16),
            false,
        );
        assert_eq!(got, Ok(Value::I16(-1)));
    }

    #[test]
    fn short_max_to_sbyte_unchecked_truncates_to_minus_one() {
        let got = convert(
            Value::I16(32_767),
            t(ScalarType::I16),
            t(ScalarType::I8),
            false,
        );
        assert_eq!(got, Ok(Value::I8(-1)));
    }

    #[test]
    fn ulong_max_to_sbyte_checked_overflows() {
        let got = convert(
            Value::U64(u64::MAX),
            t(ScalarType::U64),
            t(ScalarType::I8),
            true,
        );
        assert!(got.is_err());
    }

    #[test]
    fn minus_one_to_byte_same_width_is_checked_overflow() {
        // No bits are lost, but the mathematical value changes.
        let unchecked = convert(Value::I8(-1), t(ScalarType::I8), t(ScalarType::U8), false);
        assert_eq!(unchecked, Ok(Value::U8(255)));
        let checked = convert(Value::I8(-1), t(ScalarType::I8), t(ScalarType::U8), true);
        assert!(checked.is_err());
    }

    #[test]
    fn widening_same_sign_is_exact_in_both_modes() {
        for checked in [false, true] {
            let got = convert(
                Value::I8(-77),
                t(ScalarType::I8),
                t(ScalarType::I64),
                checked,
            );
            assert_eq!(got, Ok(Value::I64(-77)));
        }
    }

    #[test]
    fn identity_conversion_is_a_no_op() {
        for checked in [false, true] {
            let got = convert(
                Value::U32(123_456),
                t(ScalarType::U32),
                t(ScalarType::U32),
                checked,
            );
            assert_eq!(got, Ok(Value::U32(123_456)));
        }
    }

    // -- bool as source --

    #[test]
    fn bool_converts_to_every_numeric_target() {
        for scalar in ScalarType::ALL {
            if scalar == ScalarType::Bool {
                continue;
            }
            for checked in [false, true] {
                let zero = convert(Value::Bool(false), t(ScalarType::Bool), t(scalar), checked)
                    .unwrap();
                let one =
                    convert(Value::Bool(true), t(ScalarType::Bool), t(scalar), checked).unwrap();
                assert_eq!(zero.scalar_type(), scalar);
                match one {
                    Value::I8(v) => assert_eq!(v, 1),
                    Value::U8(v) => assert_eq!(v, 1),
                    Value::I16(v) => assert_eq!(v, 1),
                    Value::U16(v) => assert_eq!(v, 1),
                    Value::I32(v) => assert_eq!(v, 1),
                    Value::U32(v) => assert_eq!(v, 1),
                    Value::I64(v) => assert_eq!(v, 1),
                    Value::U64(v) => assert_eq!(v, 1),
                    Value::F32(v) => assert_eq!(v, 1.0),
                    Value::F64(v) => assert_eq!(v, 1.0),
                    other => panic!("unexpected result {other:?}"),
                }
            }
        }
    }

    #[test]
    fn bool_to_bool_identity_is_supported() {
        let got = convert(
            Value::Bool(true),
            t(ScalarType::Bool),
            t(ScalarType::Bool),
            true,
        );
        assert_eq!(got, Ok(Value::Bool(true)));
    }

    #[test]
    #[should_panic(expected = "conversion to bool")]
    fn numeric_to_bool_is_a_contract_violation() {
        let _ = convert(Value::I32(1), t(ScalarType::I32), t(ScalarType::Bool), false);
    }

    // -- int → float --

    #[test]
    fn int_max_to_float_rounds() {
        let got = convert(
            Value::I32(2_147_483_647),
            t(ScalarType::I32),
            t(ScalarType::F32),
            false,
        );
        assert_eq!(got, Ok(Value::F32(2.147_483_6e9)));
    }

    #[test]
    fn int_to_float_never_overflows_checked() {
        let got = convert(
            Value::U64(u64::MAX),
            t(ScalarType::U64),
            t(ScalarType::F32),
            true,
        );
        assert_eq!(got, Ok(Value::F32(1.844_674_4e19)));
    }

    #[test]
    fn long_to_float_single_rounds() {
        // 2^53 + 1 is exact in neither f32 nor f64-then-f32 — the direct
        // narrowing must round once from the integer, not through f64.
        let v = (1_i64 << 53) + 1;
        let got = convert(Value::I64(v), t(ScalarType::I64), t(ScalarType::F32), false);
        #[allow(clippy::cast_precision_loss, reason = "oracle mirrors the matrix")]
        let want = v as f32;
        assert_eq!(got, Ok(Value::F32(want)));
    }

    // -- float → int --

    #[test]
    fn pi_to_int_truncates_toward_zero() {
        let got = convert(
            Value::F32(3.14),
            t(ScalarType::F32),
            t(ScalarType::I32),
            false,
        );
        assert_eq!(got, Ok(Value::I32(3)));

        let got = convert(
            Value::F64(-3.99),
            t(ScalarType::F64),
            t(ScalarType::I32),
            true,
        );
        assert_eq!(got, Ok(Value::I32(-3)));
    }

    #[test]
    fn fractional_in_range_float_is_fine_checked() {
        let got = convert(
            Value::F64(127.999),
            t(ScalarType::F64),
            t(ScalarType::I8),
            true,
        );
        assert_eq!(got, Ok(Value::I8(127)));
    }

    #[test]
    fn out_of_range_float_checked_overflows() {
        let got = convert(
            Value::F64(128.0),
            t(ScalarType::F64),
            t(ScalarType::I8),
            true,
        );
        assert!(got.is_err());

        let got = convert(
            Value::F64(-1.0),
            t(ScalarType::F64),
            t(ScalarType::U64),
            true,
        );
        assert!(got.is_err());
    }

    #[test]
    fn nan_and_infinity_always_overflow_checked() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let got = convert(Value::F64(bad), t(ScalarType::F64), t(ScalarType::I64), true);
            assert!(got.is_err(), "{bad} must overflow");
        }
    }

    #[test]
    fn unchecked_out_of_range_float_wraps() {
        // trunc(300.7) = 300 = 0x12C; low byte 0x2C = 44.
        let got = convert(
            Value::F64(300.7),
            t(ScalarType::F64),
            t(ScalarType::U8),
            false,
        );
        assert_eq!(got, Ok(Value::U8(44)));
    }

    #[test]
    fn unchecked_nan_and_huge_floats_become_zero() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 1e300, -1e300] {
            let got = convert(Value::F64(bad), t(ScalarType::F64), t(ScalarType::I32), false);
            assert_eq!(got, Ok(Value::I32(0)), "{bad}");
        }
    }

    #[test]
    fn i64_boundary_checked_float_conversion() {
        // 2^63 is exactly representable and exactly one past i64::MAX.
        let just_past = 9_223_372_036_854_775_808.0_f64;
        let got = convert(
            Value::F64(just_past),
            t(ScalarType::F64),
            t(ScalarType::I64),
            true,
        );
        assert!(got.is_err());

        let min = -9_223_372_036_854_775_808.0_f64;
        let got = convert(Value::F64(min), t(ScalarType::F64), t(ScalarType::I64), true);
        assert_eq!(got, Ok(Value::I64(i64::MIN)));
    }

    #[test]
    fn u64_boundary_checked_float_conversion() {
        let just_past = 18_446_744_073_709_551_616.0_f64; // 2^64
        let got = convert(
            Value::F64(just_past),
            t(ScalarType::F64),
            t(ScalarType::U64),
            true,
        );
        assert!(got.is_err());

        // Largest f64 below 2^64.
        let largest = 18_446_744_073_709_549_568.0_f64;
        let got = convert(
            Value::F64(largest),
            t(ScalarType::F64),
            t(ScalarType::U64),
            true,
        );
        assert_eq!(got, Ok(Value::U64(18_446_744_073_709_549_568)));
    }

    // -- float → float --

    #[test]
    fn f64_to_f32_rounds_to_nearest() {
        let got = convert(
            Value::F64(f64::from(1.1_f32) + 1e-12),
            t(ScalarType::F64),
            t(ScalarType::F32),
            false,
        );
        assert_eq!(got, Ok(Value::F32(1.1)));
    }

    #[test]
    fn f64_to_f32_overflow_is_infinity_not_error() {
        for checked in [false, true] {
            let got = convert(
                Value::F64(1e300),
                t(ScalarType::F64),
                t(ScalarType::F32),
                checked,
            );
            assert_eq!(got, Ok(Value::F32(f32::INFINITY)));
        }
    }

    #[test]
    fn f32_to_f64_is_exact() {
        let got = convert(
            Value::F32(0.1),
            t(ScalarType::F32),
            t(ScalarType::F64),
            true,
        );
        assert_eq!(got, Ok(Value::F64(f64::from(0.1_f32))));
    }

    // -- null propagation --

    #[test]
    fn null_propagates_for_every_target_and_mode() {
        for scalar in ScalarType::ALL {
            if scalar == ScalarType::Bool {
                continue;
            }
            for checked in [false, true] {
                let got = convert(
                    Value::Null(ScalarType::I8),
                    n(ScalarType::I8),
                    n(scalar),
                    checked,
                );
                assert_eq!(got, Ok(Value::Null(scalar)));
            }
        }
    }

    #[test]
    fn null_never_overflows_even_where_values_would() {
        // i8? → u8? overflows for -1 but never for null.
        let got = convert(
            Value::Null(ScalarType::I8),
            n(ScalarType::I8),
            n(ScalarType::U8),
            true,
        );
        assert_eq!(got, Ok(Value::Null(ScalarType::U8)));
    }

    #[test]
    fn nullable_sides_do_not_change_payload_semantics() {
        // Non-null value through nullable types behaves like the plain pair.
        let got = convert(Value::I8(-128), n(ScalarType::I8), n(ScalarType::U8), false);
        assert_eq!(got, Ok(Value::U8(128)));
        let got = convert(Value::I8(-128), n(ScalarType::I8), n(ScalarType::U8), true);
        assert!(got.is_err());
    }

    #[test]
    #[should_panic(expected = "non-nullable")]
    fn null_to_non_nullable_target_is_fatal() {
        let _ = convert(
            Value::Null(ScalarType::I32),
            n(ScalarType::I32),
            t(ScalarType::I64),
            false,
        );
    }

    #[test]
    #[should_panic(expected = "does not match source type")]
    fn malformed_null_source_is_fatal() {
        let _ = convert(
            Value::Null(ScalarType::I32),
            t(ScalarType::I32),
            n(ScalarType::I64),
            false,
        );
    }
}
