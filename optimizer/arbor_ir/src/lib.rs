//! Arbor IR - Expression Tree Types
//!
//! This crate contains the core data structures shared by the Arbor
//! constant-folding optimizer and its reference evaluator:
//! - `ScalarType` / `NumericType` for the closed primitive numeric domain
//! - `Value` for typed literal payloads (including typed nulls)
//! - `Expr` node kinds and the `ExprArena` they live in
//!
//! # Design Philosophy
//!
//! - **Closed sets**: the numeric domain and the node kinds are fixed enums,
//!   so every dispatch over them is exhaustiveness-checked at compile time.
//! - **Flatten everything**: no `Box<Expr>`; nodes reference children through
//!   `ExprId(u32)` indices into an arena, argument lists through `ExprRange`.
//! - **Immutable nodes**: a node is never mutated after allocation. Rewrites
//!   allocate fresh nodes and return a new root id.

mod arena;
mod expr;
mod ids;
mod numeric;
mod value;

pub use arena::ExprArena;
pub use expr::{BinaryOp, Expr, UnaryOp};
pub use ids::{ExprId, ExprRange};
pub use numeric::{NumericType, ScalarType};
pub use value::Value;
