//! Arbor numeric core — value model and conversion matrix.
//!
//! Everything that gives a `Value` its numeric meaning lives here:
//!
//! - `bits`: the two canonical pivot representations. Integral and boolean
//!   values pivot through a 64-bit two's-complement bit pattern
//!   ([`IntBits`]); float values pivot through `f64`.
//! - `bounds`: immutable per-scalar min/max tables.
//! - `convert`: the total conversion function over every ordered pair of
//!   the closed numeric domain, in checked and unchecked modes.
//! - `ops`: value-level binary/unary arithmetic shared by the fold rules
//!   and the reference evaluator, so the two can never disagree.
//!
//! # Why pivots
//!
//! The domain has ~170 (source, target, mode) conversion combinations.
//! Routing every pair through the two pivots collapses that to one function
//! per *category* pair (int→int, int→float, float→int, float→float, plus
//! null propagation and bool-as-source), each exhaustively checked by the
//! compiler, instead of a hand-written per-pair switch.
//!
//! # Error policy
//!
//! The only recoverable error is [`Overflow`], returned as data so callers
//! decide how to represent it in a tree. Contract violations — a conversion
//! targeting `bool`, a null value with a non-nullable type, mismatched
//! operand tags — panic immediately: they are bugs in the tree builder, and
//! tolerating them would corrupt every downstream consumer.

mod bits;
mod bounds;
mod convert;
mod ops;

pub use bits::{from_bits, from_float, to_bits, to_float, IntBits};
pub use bounds::{float_range, int_bounds};
pub use convert::{convert, Overflow};
pub use ops::{apply_binary, apply_unary, NumericError};
