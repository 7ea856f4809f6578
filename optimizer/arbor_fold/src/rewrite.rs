//! The rewrite engine.
//!
//! Generic bottom-up driver for the fold rules: post-order traversal (a
//! rule never sees a node whose children are not already maximally folded
//! for the current pass), every enabled rule applied at every node in a
//! fixed deterministic order, repeated to a fixed point with a bounded
//! pass count as the termination backstop.
//!
//! The engine never mutates a node. A node whose child changed is rebuilt
//! as a fresh allocation; everything else keeps its id. Rewriting shares
//! no state across invocations, so independent trees can be rewritten on
//! independent threads.

use arbor_ir::{Expr, ExprArena, ExprId};
use rustc_hash::FxHashSet;

use crate::rules::{BinaryFold, BranchFold, ConvertFold, FoldRule, UnaryFold};

/// Fixed-point iteration cap. Folding strictly shrinks the live tree, so
/// in practice two passes suffice (one to fold, one to observe quiescence);
/// the cap guarantees termination even for a misbehaving rule.
const MAX_PASSES: u32 = 8;

/// Runs fold rules over a tree to a fixed point.
pub struct Rewriter {
    rules: Vec<Box<dyn FoldRule>>,
    disabled: FxHashSet<&'static str>,
}

impl Default for Rewriter {
    fn default() -> Self {
        Self::with_default_rules()
    }
}

impl Rewriter {
    /// Create a rewriter with no rules registered.
    #[must_use]
    pub fn new() -> Self {
        Rewriter {
            rules: Vec::new(),
            disabled: FxHashSet::default(),
        }
    }

    /// Create a rewriter with the default rule set, in its fixed order.
    #[must_use]
    pub fn with_default_rules() -> Self {
        let mut rewriter = Rewriter::new();
        rewriter.add(ConvertFold);
        rewriter.add(UnaryFold);
        rewriter.add(BinaryFold);
        rewriter.add(BranchFold);
        rewriter
    }

    /// Register a rule. Rules run in registration order at every node.
    pub fn add<R: FoldRule + 'static>(&mut self, rule: R) {
        self.rules.push(Box::new(rule));
    }

    /// Disable a rule by name.
    pub fn disable(&mut self, name: &'static str) {
        self.disabled.insert(name);
    }

    /// Re-enable a previously disabled rule.
    pub fn enable(&mut self, name: &str) {
        self.disabled.remove(name);
    }

    /// Check whether a rule is enabled.
    #[must_use]
    pub fn is_enabled(&self, name: &str) -> bool {
        !self.disabled.contains(name)
    }

    /// Names of registered rules, in application order.
    #[must_use]
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Rewrite the tree rooted at `root` to a fixed point.
    ///
    /// Returns the folded root id. The original nodes are untouched;
    /// replacement nodes are freshly allocated in `arena`.
    pub fn rewrite(&self, arena: &mut ExprArena, root: ExprId) -> ExprId {
        let mut current = root;
        for pass in 0..MAX_PASSES {
            let mut changed = false;
            current = self.rewrite_expr(arena, current, &mut changed);
            tracing::debug!(pass, changed, nodes = arena.len(), "fold pass complete");
            if !changed {
                break;
            }
        }
        current
    }

    /// Post-order rewrite of one node: children first, then every enabled
    /// rule in order.
    fn rewrite_expr(&self, arena: &mut ExprArena, id: ExprId, changed: &mut bool) -> ExprId {
        let ty = arena.ty(id);
        let rebuilt = match arena.kind(id) {
            // Leaves have no children to rebuild.
            Expr::Literal(_) | Expr::Parameter(_) | Expr::RaiseOverflow { .. } => id,

            Expr::Convert { operand, checked } => {
                let new_operand = self.rewrite_expr(arena, operand, changed);
                if new_operand == operand {
                    id
                } else {
                    arena.push(
                        Expr::Convert {
                            operand: new_operand,
                            checked,
                        },
                        ty,
                    )
                }
            }

            Expr::Unary { op, operand } => {
                let new_operand = self.rewrite_expr(arena, operand, changed);
                if new_operand == operand {
                    id
                } else {
                    arena.push(
                        Expr::Unary {
                            op,
                            operand: new_operand,
                        },
                        ty,
                    )
                }
            }

            Expr::Binary { op, left, right } => {
                let new_left = self.rewrite_expr(arena, left, changed);
                let new_right = self.rewrite_expr(arena, right, changed);
                if new_left == left && new_right == right {
                    id
                } else {
                    arena.push(
                        Expr::Binary {
                            op,
                            left: new_left,
                            right: new_right,
                        },
                        ty,
                    )
                }
            }

            Expr::Conditional {
                condition,
                then_branch,
                else_branch,
            } => {
                let new_condition = self.rewrite_expr(arena, condition, changed);
                let new_then = self.rewrite_expr(arena, then_branch, changed);
                let new_else = self.rewrite_expr(arena, else_branch, changed);
                if new_condition == condition && new_then == then_branch && new_else == else_branch
                {
                    id
                } else {
                    arena.push(
                        Expr::Conditional {
                            condition: new_condition,
                            then_branch: new_then,
                            else_branch: new_else,
                        },
                        ty,
                    )
                }
            }

            Expr::Call { callee, args } => {
                let old_args = arena.list(args).to_vec();
                let new_args: Vec<ExprId> = old_args
                    .iter()
                    .map(|&arg| self.rewrite_expr(arena, arg, changed))
                    .collect();
                if new_args == old_args {
                    id
                } else {
                    let range = arena.push_list(&new_args);
                    arena.push(Expr::Call { callee, args: range }, ty)
                }
            }
        };

        // Children are now maximally folded; pass the node through every
        // enabled rule in registration order.
        let mut current = rebuilt;
        for rule in &self.rules {
            if self.disabled.contains(rule.name()) {
                continue;
            }
            if let Some(new_id) = rule.apply(arena, current) {
                tracing::trace!(rule = rule.name(), ?current, ?new_id, "rule fired");
                *changed = true;
                current = new_id;
            }
        }
        current
    }
}
