//! Unary and binary operator folding.
//!
//! Pure operators over literal operands are evaluated through the shared
//! value-level semantics in `arbor_num::ops`. Operations that would fail at
//! runtime (integer overflow, division by zero) are *not* folded — they
//! stay in the tree and fail at evaluation time exactly as the unfolded
//! tree would. Null operands defer to runtime for the same reason: the
//! evaluator raises on them, and folding must preserve that.

use arbor_ir::{Expr, ExprArena, ExprId};
use arbor_num::{apply_binary, apply_unary};

use super::FoldRule;

/// Folds `Unary` nodes over literal operands.
pub struct UnaryFold;

impl FoldRule for UnaryFold {
    fn name(&self) -> &'static str {
        "unary_fold"
    }

    fn apply(&self, arena: &mut ExprArena, id: ExprId) -> Option<ExprId> {
        let Expr::Unary { op, operand } = arena.kind(id) else {
            return None;
        };
        let value = arena.kind(operand).as_literal()?;
        if value.is_null() {
            return None;
        }
        let folded = apply_unary(op, value).ok()?;
        Some(arena.push(Expr::Literal(folded), arena.ty(id)))
    }
}

/// Folds `Binary` nodes over literal operands.
pub struct BinaryFold;

impl FoldRule for BinaryFold {
    fn name(&self) -> &'static str {
        "binary_fold"
    }

    fn apply(&self, arena: &mut ExprArena, id: ExprId) -> Option<ExprId> {
        let Expr::Binary { op, left, right } = arena.kind(id) else {
            return None;
        };
        let lhs = arena.kind(left).as_literal()?;
        let rhs = arena.kind(right).as_literal()?;
        if lhs.is_null() || rhs.is_null() {
            return None;
        }
        let folded = apply_binary(op, lhs, rhs).ok()?;
        Some(arena.push(Expr::Literal(folded), arena.ty(id)))
    }
}
