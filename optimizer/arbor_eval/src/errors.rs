//! Evaluation errors.

use arbor_ir::NumericType;
use thiserror::Error;

/// A runtime failure while evaluating an expression tree.
///
/// Every variant corresponds to a tree shape the folder deliberately does
/// not fold away: checked conversions that overflow, arithmetic that would
/// trap, and nodes whose value only exists at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A checked conversion overflowed its target range.
    #[error("conversion from {from} to {to} overflowed")]
    Overflow {
        /// Type of the value being converted.
        from: NumericType,
        /// Target type of the conversion.
        to: NumericType,
    },

    /// Integer arithmetic left the range of the operand type.
    #[error("integer arithmetic overflowed")]
    IntegerOverflow,

    /// Integer division or remainder with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// A `Parameter` index with no binding in the parameter slice.
    #[error("parameter {0} is unbound")]
    UnboundParameter(u16),

    /// A `Call` node; callees are opaque to this evaluator.
    #[error("call target {0} is opaque to the evaluator")]
    OpaqueCall(u32),

    /// A null value reached an operator or condition that requires a
    /// non-null operand.
    #[error("null operand in a non-null position")]
    NullOperand,
}
