//! Reference evaluator for Arbor expression trees.
//!
//! This is the semantic ground truth the folder is measured against:
//! folding a tree must never change what [`evaluate`] observes, including
//! which error it fails with. To make that hold by construction, the
//! evaluator routes conversions through the same `arbor_num::convert` the
//! fold rule uses and operators through the same
//! `arbor_num::apply_binary`/`apply_unary`.
//!
//! # Design
//!
//! - Depth-first, call-stack recursion. Trees are expression-sized, not
//!   program-sized; no explicit stack needed.
//! - `Parameter` nodes read from a caller-supplied slice of values.
//! - `Call` nodes are opaque and always error. The evaluator exists to
//!   state equivalence for the parts folding touches, and folding never
//!   touches a call (only its arguments).
//! - Recoverable failures are [`EvalError`]; malformed trees (a non-bool
//!   condition, a parameter value that contradicts its static type) panic.

mod errors;

pub use errors::EvalError;

use arbor_ir::{Expr, ExprArena, ExprId, Value};
use arbor_num::{apply_binary, apply_unary, convert, NumericError};

/// Evaluate the tree rooted at `root`, binding `Parameter(i)` to
/// `params[i]`.
///
/// # Panics
///
/// Panics if a bound parameter value does not match the parameter node's
/// static type, or if a conditional's condition evaluates to a non-bool
/// non-null value. Both are tree-construction bugs, not runtime data.
pub fn evaluate(arena: &ExprArena, root: ExprId, params: &[Value]) -> Result<Value, EvalError> {
    match arena.kind(root) {
        Expr::Literal(value) => Ok(value),

        Expr::Parameter(index) => {
            let value = *params
                .get(usize::from(index))
                .ok_or(EvalError::UnboundParameter(index))?;
            let ty = arena.ty(root);
            assert!(
                value.matches(ty),
                "parameter {index} bound to {value:?}, expected {ty}"
            );
            Ok(value)
        }

        Expr::Convert { operand, checked } => {
            let value = evaluate(arena, operand, params)?;
            let source = arena.ty(operand);
            let target = arena.ty(root);
            convert(value, source, target, checked).map_err(|overflow| EvalError::Overflow {
                from: overflow.from,
                to: overflow.to,
            })
        }

        Expr::Unary { op, operand } => {
            let value = evaluate(arena, operand, params)?;
            if value.is_null() {
                return Err(EvalError::NullOperand);
            }
            apply_unary(op, value).map_err(numeric_error)
        }

        Expr::Binary { op, left, right } => {
            let lhs = evaluate(arena, left, params)?;
            let rhs = evaluate(arena, right, params)?;
            if lhs.is_null() || rhs.is_null() {
                return Err(EvalError::NullOperand);
            }
            apply_binary(op, lhs, rhs).map_err(numeric_error)
        }

        Expr::Conditional {
            condition,
            then_branch,
            else_branch,
        } => match evaluate(arena, condition, params)? {
            Value::Bool(true) => evaluate(arena, then_branch, params),
            Value::Bool(false) => evaluate(arena, else_branch, params),
            Value::Null(_) => Err(EvalError::NullOperand),
            other => panic!("conditional on non-bool value {other:?}"),
        },

        Expr::Call { callee, .. } => Err(EvalError::OpaqueCall(callee)),

        Expr::RaiseOverflow { from } => Err(EvalError::Overflow {
            from,
            to: arena.ty(root),
        }),
    }
}

fn numeric_error(err: NumericError) -> EvalError {
    match err {
        NumericError::Overflow => EvalError::IntegerOverflow,
        NumericError::DivisionByZero => EvalError::DivisionByZero,
    }
}
