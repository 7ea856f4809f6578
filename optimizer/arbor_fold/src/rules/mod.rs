//! Fold rules.
//!
//! Each rule inspects one node and either returns a replacement id or
//! `None`. The [`Rewriter`](crate::Rewriter) guarantees post-order: a rule
//! never sees a node whose children are not already maximally folded for
//! the current pass. Rules must be idempotent — re-applying a rule to its
//! own output is a no-op.
//!
//! Module structure:
//! - `mod.rs`: `FoldRule` trait
//! - `convert.rs`: conversion folding (the core rule)
//! - `arith.rs`: unary/binary operator folding
//! - `branch.rs`: dead branch elimination

mod arith;
mod branch;
mod convert;

pub use arith::{BinaryFold, UnaryFold};
pub use branch::BranchFold;
pub use convert::ConvertFold;

use arbor_ir::{ExprArena, ExprId};

/// A single constant-fold rewrite.
pub trait FoldRule {
    /// Name of this rule (for logging and enable/disable).
    fn name(&self) -> &'static str;

    /// Try to fold the node.
    ///
    /// Returns `Some(new_id)` if the rule rewrote the node (the replacement
    /// is freshly allocated in the arena), `None` if the node is not this
    /// rule's shape or is not foldable. A `None` is correctness, not an
    /// error: non-constant subtrees stay in the tree untouched.
    fn apply(&self, arena: &mut ExprArena, id: ExprId) -> Option<ExprId>;
}
