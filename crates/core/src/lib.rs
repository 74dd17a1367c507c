//! Software IEEE-754 single-precision arithmetic.
//!
//! This crate emulates binary32 floating-point values and arithmetic using only
//! integer and bit manipulation. It provides:
//! 1. **Layout:** Field widths and bias of a format, validated at definition time.
//! 2. **Values:** [`SoftFloat`], a 32-bit representation with field accessors and mutators.
//! 3. **Classification:** Zero, subnormal, normal, infinity and NaN detection.
//! 4. **Arithmetic:** Addition, subtraction and multiplication, including the
//!    split multiplier with round-to-nearest, ties-to-even.
//! 5. **Formatting:** A deterministic ASCII scientific rendering for debugging.
//! 6. **Scenarios:** Single-operation checks against native results, driven by [`Config`].
//!
//! ```
//! use mantissa_core::SoftF32;
//!
//! let product = SoftF32::from(4.20_f32) * SoftF32::from(10.0_f32);
//! assert_eq!(f32::from(product), 42.0);
//! assert_eq!(product.ascii_scientific(), "1.3125x2^5");
//! ```

/// Addition, subtraction, multiplication and operator overloads.
pub mod arith;
/// Value classification (zero, subnormal, normal, infinity, NaN).
pub mod classify;
/// Demonstration driver configuration (defaults, JSON loading).
pub mod config;
/// Error types for layout validation and configuration loading.
pub mod error;
/// ASCII scientific formatting.
pub mod format;
/// Bit layout of a floating-point format.
pub mod layout;
/// Renormalization and encoding of raw magnitudes.
pub mod normalize;
/// Single-operation scenarios checked against native arithmetic.
pub mod scenario;
/// The 32-bit backed value type and its field accessors.
pub mod value;

/// Result of classifying a value.
pub use crate::classify::Class;
/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Error types.
pub use crate::error::{ConfigError, LayoutError};
/// Layout description, format trait and the binary32 format.
pub use crate::layout::{Binary32, BitLayout, Format};
/// Scenario types.
pub use crate::scenario::{Op, Outcome, Scenario};
/// Value type and the binary32 alias.
pub use crate::value::{SoftF32, SoftFloat};
