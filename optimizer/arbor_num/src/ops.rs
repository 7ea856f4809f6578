//! Value-level operator semantics.
//!
//! `apply_binary`/`apply_unary` define what the pure operators mean on
//! literal values. Both the fold rules and the reference evaluator call
//! these, so a folded tree and its unfolded original cannot disagree.
//!
//! Integer arithmetic routes through the wide `i128` pivot and is
//! range-checked against the operand type; float arithmetic is native
//! IEEE-754 at the operand width (`f32` math is done in `f32`, never
//! double-rounded through `f64`). Errors are returned as data — the fold
//! rules defer erroring operations to runtime, the evaluator raises them.

#![allow(
    clippy::cast_possible_truncation,
    reason = "in-bounds i128 results are narrowed back to the operand width"
)]

use arbor_ir::{BinaryOp, ScalarType, UnaryOp, Value};
use thiserror::Error;

use crate::bits::{from_bits, to_bits, to_float};
use crate::bounds::int_bounds;

/// A pure operation on literal values failed.
///
/// These become runtime errors when evaluated; the fold rules simply leave
/// the operation in the tree.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Error)]
pub enum NumericError {
    /// Integer result does not fit the operand type.
    #[error("integer operation overflowed")]
    Overflow,
    /// Integer division or remainder by zero.
    #[error("division by zero")]
    DivisionByZero,
}

/// Apply a binary operator to two literal values of the same scalar type.
///
/// Comparisons yield `Bool`; arithmetic yields the operand type. Float
/// division by zero is not an error (IEEE-754 produces an infinity or NaN).
///
/// # Panics
///
/// Panics on caller contract violations: mismatched operand tags, null
/// operands (callers handle null before calling), or an operator the
/// operand type does not support (`&&` on integers, `%` on bools, ...).
pub fn apply_binary(op: BinaryOp, lhs: Value, rhs: Value) -> Result<Value, NumericError> {
    assert!(
        !lhs.is_null() && !rhs.is_null(),
        "apply_binary on null operand"
    );
    let scalar = lhs.scalar_type();
    assert!(
        scalar == rhs.scalar_type(),
        "apply_binary operand types differ: {lhs:?} vs {rhs:?}"
    );

    match scalar {
        ScalarType::Bool => bool_binary(op, lhs, rhs),
        ScalarType::F32 | ScalarType::F64 => float_binary(op, lhs, rhs),
        _ => int_binary(op, lhs, rhs, scalar),
    }
}

/// Apply a unary operator to a literal value.
///
/// # Panics
///
/// Panics on null operands or unsupported operator/type combinations
/// (negating a bool, `!` on a number, negating an unsigned integer).
pub fn apply_unary(op: UnaryOp, value: Value) -> Result<Value, NumericError> {
    assert!(!value.is_null(), "apply_unary on null operand");
    match (op, value) {
        (UnaryOp::Not, Value::Bool(v)) => Ok(Value::Bool(!v)),
        (UnaryOp::Neg, Value::F32(v)) => Ok(Value::F32(-v)),
        (UnaryOp::Neg, Value::F64(v)) => Ok(Value::F64(-v)),
        (UnaryOp::Neg, _) if value.scalar_type().is_signed() => {
            let scalar = value.scalar_type();
            let math = to_bits(value).math_value();
            narrow_int(-math, scalar)
        }
        _ => panic!("unary {op} is unsupported on {value:?}"),
    }
}

fn bool_binary(op: BinaryOp, lhs: Value, rhs: Value) -> Result<Value, NumericError> {
    let (Value::Bool(a), Value::Bool(b)) = (lhs, rhs) else {
        unreachable!("bool_binary on non-bool operands");
    };
    let result = match op {
        BinaryOp::And => a && b,
        BinaryOp::Or => a || b,
        BinaryOp::Eq => a == b,
        BinaryOp::Ne => a != b,
        _ => panic!("binary {op} is unsupported on bool"),
    };
    Ok(Value::Bool(result))
}

fn float_binary(op: BinaryOp, lhs: Value, rhs: Value) -> Result<Value, NumericError> {
    // f32 pairs compute in f32 to avoid double rounding; mixed pairs are
    // rejected by the tag check in `apply_binary`.
    if let (Value::F32(a), Value::F32(b)) = (lhs, rhs) {
        let result = match op {
            BinaryOp::Add => Value::F32(a + b),
            BinaryOp::Sub => Value::F32(a - b),
            BinaryOp::Mul => Value::F32(a * b),
            BinaryOp::Div => Value::F32(a / b),
            BinaryOp::Rem => Value::F32(a % b),
            _ => float_compare(op, f64::from(a), f64::from(b)),
        };
        return Ok(result);
    }

    let (a, b) = (to_float(lhs), to_float(rhs));
    let result = match op {
        BinaryOp::Add => Value::F64(a + b),
        BinaryOp::Sub => Value::F64(a - b),
        BinaryOp::Mul => Value::F64(a * b),
        BinaryOp::Div => Value::F64(a / b),
        BinaryOp::Rem => Value::F64(a % b),
        _ => float_compare(op, a, b),
    };
    Ok(result)
}

fn float_compare(op: BinaryOp, a: f64, b: f64) -> Value {
    let result = match op {
        BinaryOp::Eq => a == b,
        BinaryOp::Ne => a != b,
        BinaryOp::Lt => a < b,
        BinaryOp::Le => a <= b,
        BinaryOp::Gt => a > b,
        BinaryOp::Ge => a >= b,
        _ => panic!("binary {op} is unsupported on floats"),
    };
    Value::Bool(result)
}

fn int_binary(
    op: BinaryOp,
    lhs: Value,
    rhs: Value,
    scalar: ScalarType,
) -> Result<Value, NumericError> {
    let a = to_bits(lhs).math_value();
    let b = to_bits(rhs).math_value();

    if op.is_comparison() {
        let result = match op {
            BinaryOp::Eq => a == b,
            BinaryOp::Ne => a != b,
            BinaryOp::Lt => a < b,
            BinaryOp::Le => a <= b,
            BinaryOp::Gt => a > b,
            BinaryOp::Ge => a >= b,
            _ => unreachable!("non-comparison {op} after is_comparison"),
        };
        return Ok(Value::Bool(result));
    }

    // Operands fit 64 bits, so i128 arithmetic never overflows; only the
    // narrowing back to the operand type can.
    let result = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => {
            if b == 0 {
                return Err(NumericError::DivisionByZero);
            }
            a / b
        }
        BinaryOp::Rem => {
            if b == 0 {
                return Err(NumericError::DivisionByZero);
            }
            a % b
        }
        BinaryOp::And | BinaryOp::Or => panic!("binary {op} is unsupported on integers"),
        _ => unreachable!("comparison {op} handled above"),
    };
    narrow_int(result, scalar)
}

/// Narrow an exact `i128` result back to `scalar`, or report overflow.
fn narrow_int(math: i128, scalar: ScalarType) -> Result<Value, NumericError> {
    let (min, max) = int_bounds(scalar);
    if math < min || math > max {
        return Err(NumericError::Overflow);
    }
    Ok(from_bits(math as u64, scalar))
}
