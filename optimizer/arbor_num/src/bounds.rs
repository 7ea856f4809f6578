//! Per-scalar bound tables.
//!
//! Immutable constant data: the mathematical min/max of every integral
//! scalar in the wide `i128` pivot, and the float-comparison ranges used by
//! checked float→int conversion. Written out as literal tables rather than
//! computed, so a reviewer can audit them against the type definitions.

#![allow(
    clippy::cast_lossless,
    reason = "const context — `From` impls are not const"
)]

use arbor_ir::ScalarType;

/// Inclusive mathematical bounds of an integral scalar.
///
/// # Panics
///
/// Panics for boolean and float scalars, which have no integral bounds.
#[must_use]
pub const fn int_bounds(scalar: ScalarType) -> (i128, i128) {
    match scalar {
        ScalarType::I8 => (i8::MIN as i128, i8::MAX as i128),
        ScalarType::U8 => (0, u8::MAX as i128),
        ScalarType::I16 => (i16::MIN as i128, i16::MAX as i128),
        ScalarType::U16 => (0, u16::MAX as i128),
        ScalarType::I32 => (i32::MIN as i128, i32::MAX as i128),
        ScalarType::U32 => (0, u32::MAX as i128),
        ScalarType::I64 => (i64::MIN as i128, i64::MAX as i128),
        ScalarType::U64 => (0, u64::MAX as i128),
        ScalarType::Bool | ScalarType::F32 | ScalarType::F64 => {
            panic!("int_bounds on non-integral scalar")
        }
    }
}

/// Range check bounds for checked float→int conversion, as
/// `(min_inclusive, max_exclusive)`.
///
/// The exclusive upper bound is the power of two just past the scalar's
/// max. Powers of two are exactly representable in `f64`, so the comparison
/// is exact even for the 64-bit widths, where `MAX as f64` would round up
/// and wrongly admit an out-of-range value.
#[must_use]
pub const fn float_range(scalar: ScalarType) -> (f64, f64) {
    match scalar {
        ScalarType::I8 => (-128.0, 128.0),
        ScalarType::U8 => (0.0, 256.0),
        ScalarType::I16 => (-32_768.0, 32_768.0),
        ScalarType::U16 => (0.0, 65_536.0),
        ScalarType::I32 => (-2_147_483_648.0, 2_147_483_648.0),
        ScalarType::U32 => (0.0, 4_294_967_296.0),
        ScalarType::I64 => (-9_223_372_036_854_775_808.0, 9_223_372_036_854_775_808.0),
        ScalarType::U64 => (0.0, 18_446_744_073_709_551_616.0),
        ScalarType::Bool | ScalarType::F32 | ScalarType::F64 => {
            panic!("float_range on non-integral scalar")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn int_bounds_match_the_host_types() {
        assert_eq!(int_bounds(ScalarType::I8), (-128, 127));
        assert_eq!(int_bounds(ScalarType::U8), (0, 255));
        assert_eq!(
            int_bounds(ScalarType::I64),
            (i128::from(i64::MIN), i128::from(i64::MAX))
        );
        assert_eq!(int_bounds(ScalarType::U64), (0, i128::from(u64::MAX)));
    }

    #[test]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "the asserted values are exact integers"
    )]
    fn float_ranges_are_exact_powers_of_two() {
        for scalar in ScalarType::ALL {
            if !scalar.is_integral() {
                continue;
            }
            let (min, max_excl) = float_range(scalar);
            let (math_min, math_max) = int_bounds(scalar);
            // min is the exact mathematical min; max_excl is max + 1.
            assert_eq!(min as i128, math_min, "{scalar} min");
            assert_eq!(max_excl as i128, math_max + 1, "{scalar} max");
        }
    }
}
