//! Dead branch elimination.
//!
//! `Conditional` with a literal boolean condition reduces to the taken
//! branch. A null condition defers to runtime, where the evaluator raises
//! on it; a non-bool literal condition is a builder bug.

use arbor_ir::{Expr, ExprArena, ExprId, Value};

use super::FoldRule;

/// Folds `Conditional` nodes with a literal condition.
pub struct BranchFold;

impl FoldRule for BranchFold {
    fn name(&self) -> &'static str {
        "branch_fold"
    }

    fn apply(&self, arena: &mut ExprArena, id: ExprId) -> Option<ExprId> {
        let Expr::Conditional {
            condition,
            then_branch,
            else_branch,
        } = arena.kind(id)
        else {
            return None;
        };
        match arena.kind(condition).as_literal()? {
            Value::Bool(true) => Some(then_branch),
            Value::Bool(false) => Some(else_branch),
            Value::Null(_) => None,
            other => panic!("conditional on non-bool literal {other:?}"),
        }
    }
}
