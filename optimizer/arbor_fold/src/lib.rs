//! Constant folding for Arbor expression trees.
//!
//! A tree goes in, an equivalent but cheaper tree comes out: every
//! sub-computation whose operands are literals is evaluated at fold time
//! and replaced by its result. Non-constant subtrees are left untouched,
//! and folding is semantics-preserving — a checked conversion that would
//! overflow at evaluation time folds to a node that still raises the same
//! overflow when evaluated, never to a wrong value.
//!
//! # Architecture
//!
//! ```text
//! tree → Rewriter (post-order, fixed point) → ConvertFold
//!                                           → UnaryFold / BinaryFold
//!                                           → BranchFold
//! ```
//!
//! The [`Rewriter`] owns traversal and iteration; each [`FoldRule`] sees a
//! single node whose children are already maximally folded and either
//! returns a replacement id or leaves the node alone. Folding is purely
//! functional per invocation — nodes are never mutated, replacements are
//! freshly allocated — so independent trees can be folded on independent
//! threads with no coordination.

mod rewrite;
mod rules;

pub use rewrite::Rewriter;
pub use rules::{BinaryFold, BranchFold, ConvertFold, FoldRule, UnaryFold};

use arbor_ir::{ExprArena, ExprId};

/// Fold `root` to a fixed point with the default rule set.
///
/// Returns the id of the folded tree's root; `root` itself is unchanged
/// (rewrites allocate fresh nodes).
pub fn fold(arena: &mut ExprArena, root: ExprId) -> ExprId {
    Rewriter::with_default_rules().rewrite(arena, root)
}
