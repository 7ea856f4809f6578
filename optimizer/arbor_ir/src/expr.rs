//! Expression node kinds.
//!
//! A node's static `NumericType` lives in the arena's parallel `types`
//! array, not in the kind itself. For `Convert` the node's static type *is*
//! the conversion target; for `RaiseOverflow` it is the target of the
//! conversion that overflowed.

use std::fmt;

use crate::ids::{ExprId, ExprRange};
use crate::numeric::NumericType;
use crate::value::Value;

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// Arithmetic negation.
    Neg,
    /// Boolean negation.
    Not,
}

impl UnaryOp {
    /// Operator symbol for display.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Not => "!",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    And,
    Or,
}

impl BinaryOp {
    /// Operator symbol for display.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::And => "&&",
            Self::Or => "||",
        }
    }

    /// `true` if the operator yields a boolean regardless of operand type.
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        matches!(
            self,
            Self::Eq | Self::Ne | Self::Lt | Self::Le | Self::Gt | Self::Ge
        )
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Expression node kind.
///
/// All variants are `Copy`: child links are `ExprId` indices and the only
/// inline payload is a small `Value`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Expr {
    /// Literal leaf. The value tag must agree with the node's static type.
    Literal(Value),
    /// Opaque runtime input, bound at evaluation time. Never folds.
    Parameter(u16),
    /// Numeric conversion of `operand` to this node's static type.
    ///
    /// `checked` selects overflow-raising semantics; unchecked wraps.
    Convert { operand: ExprId, checked: bool },
    /// Unary operator application.
    Unary { op: UnaryOp, operand: ExprId },
    /// Binary operator application.
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
    /// Two-armed conditional on a boolean condition.
    Conditional {
        condition: ExprId,
        then_branch: ExprId,
        else_branch: ExprId,
    },
    /// Opaque external call. Arguments are folded; the call itself never is.
    Call { callee: u32, args: ExprRange },
    /// Evaluating this node deterministically raises the overflow error for
    /// the conversion from `from` to this node's static type.
    ///
    /// Produced by folding a checked `Convert` whose literal operand does
    /// not fit the target.
    RaiseOverflow { from: NumericType },
}

impl Expr {
    /// `true` for `Literal` nodes.
    #[must_use]
    pub const fn is_literal(self) -> bool {
        matches!(self, Self::Literal(_))
    }

    /// The literal value, if this is a `Literal` node.
    #[must_use]
    pub const fn as_literal(self) -> Option<Value> {
        match self {
            Self::Literal(value) => Some(value),
            _ => None,
        }
    }
}
