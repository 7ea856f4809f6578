//! Expression arena.
//!
//! Parallel `kinds`/`types` arrays indexed by `ExprId`, plus a flattened
//! `expr_lists` vec indexed by `ExprRange` for call arguments. Nodes are
//! append-only: rewrites push replacement nodes and return new ids, old
//! nodes are never touched.

use crate::expr::Expr;
use crate::ids::{ExprId, ExprRange};
use crate::numeric::NumericType;

fn to_u32(value: usize, what: &str) -> u32 {
    match u32::try_from(value) {
        Ok(v) => v,
        Err(_) => panic!("too many {what} for u32 index space"),
    }
}

/// Arena for expression nodes.
#[derive(Clone, Debug, Default)]
pub struct ExprArena {
    /// Node kinds (parallel with `types`).
    kinds: Vec<Expr>,
    /// Static numeric type of each node (parallel with `kinds`).
    types: Vec<NumericType>,
    /// Flattened expression ID lists (call arguments).
    expr_lists: Vec<ExprId>,
}

impl ExprArena {
    /// Create an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an arena pre-allocated for roughly `nodes` nodes.
    #[must_use]
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            kinds: Vec::with_capacity(nodes),
            types: Vec::with_capacity(nodes),
            expr_lists: Vec::new(),
        }
    }

    /// Allocate a node, returning its ID.
    ///
    /// # Panics
    ///
    /// Panics if a `Literal` kind disagrees with its static type — that is
    /// a builder bug, and tolerating it would corrupt every downstream
    /// consumer of the tree.
    pub fn push(&mut self, kind: Expr, ty: NumericType) -> ExprId {
        if let Expr::Literal(value) = kind {
            assert!(
                value.matches(ty),
                "literal value {value:?} does not match static type {ty}"
            );
        }
        let id = ExprId::new(to_u32(self.kinds.len(), "expression nodes"));
        self.kinds.push(kind);
        self.types.push(ty);
        id
    }

    /// Get the node kind. Kinds are `Copy`, so this returns by value.
    #[inline]
    #[must_use]
    pub fn kind(&self, id: ExprId) -> Expr {
        self.kinds[id.index()]
    }

    /// Get the static numeric type of a node.
    #[inline]
    #[must_use]
    pub fn ty(&self, id: ExprId) -> NumericType {
        self.types[id.index()]
    }

    /// Store a list of expression IDs, returning the range that names it.
    pub fn push_list(&mut self, ids: &[ExprId]) -> ExprRange {
        let start = to_u32(self.expr_lists.len(), "expression list slots");
        let len = match u16::try_from(ids.len()) {
            Ok(len) => len,
            Err(_) => panic!("expression list too long for u16 length"),
        };
        self.expr_lists.extend_from_slice(ids);
        ExprRange::new(start, len)
    }

    /// Get the IDs named by a range.
    #[inline]
    #[must_use]
    pub fn list(&self, range: ExprRange) -> &[ExprId] {
        &self.expr_lists[range.start()..range.start() + range.len()]
    }

    /// Number of allocated nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// `true` if no nodes are allocated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ScalarType, Value};
    use pretty_assertions::assert_eq;

    #[test]
    fn push_and_read_back() {
        let mut arena = ExprArena::new();
        let ty = NumericType::new(ScalarType::I32);
        let id = arena.push(Expr::Literal(Value::I32(42)), ty);
        assert_eq!(arena.kind(id), Expr::Literal(Value::I32(42)));
        assert_eq!(arena.ty(id), ty);
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn lists_round_trip() {
        let mut arena = ExprArena::new();
        let ty = NumericType::new(ScalarType::I64);
        let a = arena.push(Expr::Literal(Value::I64(1)), ty);
        let b = arena.push(Expr::Literal(Value::I64(2)), ty);
        let range = arena.push_list(&[a, b]);
        assert_eq!(arena.list(range), &[a, b]);
        assert_eq!(arena.list(ExprRange::EMPTY), &[] as &[ExprId]);
    }

    #[test]
    #[should_panic(expected = "does not match static type")]
    fn literal_type_mismatch_is_fatal() {
        let mut arena = ExprArena::new();
        arena.push(
            Expr::Literal(Value::I32(1)),
            NumericType::new(ScalarType::I64),
        );
    }

    #[test]
    #[should_panic(expected = "does not match static type")]
    fn null_literal_with_non_nullable_type_is_fatal() {
        let mut arena = ExprArena::new();
        arena.push(
            Expr::Literal(Value::Null(ScalarType::I32)),
            NumericType::new(ScalarType::I32),
        );
    }
}
