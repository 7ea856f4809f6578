//! The conversion fold rule — the bridge from `Convert` tree nodes to the
//! conversion matrix.
//!
//! A `Convert` node over a literal operand folds to either a literal of the
//! target type or, when a checked conversion overflows, to a
//! `RaiseOverflow` node that raises the same error at evaluation time the
//! unfolded tree would have. Folding never raises anything itself.

use arbor_ir::{Expr, ExprArena, ExprId};
use arbor_num::convert;

use super::FoldRule;

/// Folds `Convert` nodes over literal operands.
pub struct ConvertFold;

impl FoldRule for ConvertFold {
    fn name(&self) -> &'static str {
        "convert_fold"
    }

    fn apply(&self, arena: &mut ExprArena, id: ExprId) -> Option<ExprId> {
        let Expr::Convert { operand, checked } = arena.kind(id) else {
            return None;
        };
        let value = arena.kind(operand).as_literal()?;

        let source = arena.ty(operand);
        let target = arena.ty(id);
        match convert(value, source, target, checked) {
            Ok(folded) => Some(arena.push(Expr::Literal(folded), target)),
            // Checked overflow becomes an explicit raise-on-evaluation
            // node, typed at the conversion target like the Convert it
            // replaces.
            Err(overflow) => Some(arena.push(
                Expr::RaiseOverflow {
                    from: overflow.from,
                },
                target,
            )),
        }
    }
}
