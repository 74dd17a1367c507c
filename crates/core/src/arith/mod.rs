//! Arithmetic engine.
//!
//! Every operation is a total function over two values of the same format:
//! special values are resolved first by a fixed dominance table, finite
//! operands go through integer-only significand arithmetic, and the raw
//! result is canonicalized by [`normalize`](crate::normalize).
//!
//! Operations are organized into submodules:
//! - [`addsub`]: Addition and subtraction with exponent alignment.
//! - [`mul`]: Multiplication through a split significand multiplier.
//! - [`rounding`]: Guard/sticky tracking and round-to-nearest, ties-to-even.
//! - [`ops`]: `+`, `-`, `*`, unary `-` and the assigning operators.
//!
//! Division is not provided.

/// Addition and subtraction.
pub mod addsub;

/// Multiplication.
pub mod mul;

/// Operator trait implementations.
pub mod ops;

/// Rounding helpers for extended significands.
pub mod rounding;

pub use self::addsub::{add, sub};
pub use self::mul::mul;
