//! Error definitions.
//!
//! Arithmetic, classification and formatting are total over the full 32-bit
//! representation space and never fail. Errors only arise in two places:
//! 1. **Layout validation:** A [`BitLayout`](crate::layout::BitLayout) assembled at run time
//!    whose field widths or bias cannot describe a format.
//! 2. **Configuration loading:** Reading or parsing a driver configuration file.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Reasons a bit layout is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Field widths do not add up to the 32-bit representation.
    #[error("field widths {sign} + {exponent} + {mantissa} do not sum to {total} bits")]
    WidthMismatch {
        /// Sign field width.
        sign: u32,
        /// Exponent field width.
        exponent: u32,
        /// Mantissa field width.
        mantissa: u32,
        /// Width of the underlying representation.
        total: u32,
    },

    /// The sign field must be exactly one bit.
    #[error("sign field must be 1 bit wide, got {0}")]
    SignWidth(u32),

    /// The exponent field needs room for zero, at least one normal exponent
    /// and the all-ones pattern.
    #[error("exponent field must be at least 2 bits wide, got {0}")]
    ExponentTooNarrow(u32),

    /// At least one fraction bit is needed to tell infinity from NaN.
    #[error("mantissa field must be at least 1 bit wide, got {0}")]
    MantissaTooNarrow(u32),

    /// The bias must map at least one biased exponent onto each side of zero.
    #[error("bias {bias} is outside 1..{limit}")]
    BiasOutOfRange {
        /// Requested bias.
        bias: i32,
        /// Exclusive upper bound (the all-ones exponent field).
        limit: i32,
    },
}

/// Errors raised while loading a driver configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration text is not valid JSON for [`Config`](crate::config::Config).
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}
