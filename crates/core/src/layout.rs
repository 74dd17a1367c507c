//! Bit layout of a floating-point format.
//!
//! A [`BitLayout`] records how a 32-bit representation is carved into sign,
//! exponent and mantissa (fraction) fields, and the exponent bias. Every mask,
//! shift and limit used by the rest of the crate is derived from it, so the
//! arithmetic never hard-codes binary32 constants.
//!
//! | Field    | binary32 width | Position   |
//! |----------|----------------|------------|
//! | sign     | 1              | bit 31     |
//! | exponent | 8              | bits 30-23 |
//! | mantissa | 23             | bits 22-0  |
//!
//! Formats are types implementing [`Format`]. Because [`BitLayout::new`] is a
//! `const fn` that panics on an invalid layout, a malformed `Format::LAYOUT`
//! is rejected when the constant is evaluated, i.e. at compile time.

use std::fmt;
use std::hash::Hash;

use crate::error::LayoutError;

/// Width of the underlying representation in bits.
pub const REPR_BITS: u32 = u32::BITS;

/// Field widths and bias of one floating-point format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BitLayout {
    sign_width: u32,
    exponent_width: u32,
    mantissa_width: u32,
    bias: i32,
}

impl BitLayout {
    /// Builds a layout, panicking if it is invalid.
    ///
    /// Intended for constants, where the panic becomes a compile error.
    /// Use [`BitLayout::try_new`] for layouts assembled at run time.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions [`BitLayout::try_new`] returns an error.
    pub const fn new(sign_width: u32, exponent_width: u32, mantissa_width: u32, bias: i32) -> Self {
        match Self::try_new(sign_width, exponent_width, mantissa_width, bias) {
            Ok(layout) => layout,
            Err(LayoutError::WidthMismatch { .. }) => {
                panic!("bit layout field widths must sum to the 32-bit representation")
            }
            Err(LayoutError::SignWidth(_)) => panic!("bit layout sign field must be 1 bit"),
            Err(LayoutError::ExponentTooNarrow(_)) => {
                panic!("bit layout exponent field must be at least 2 bits")
            }
            Err(LayoutError::MantissaTooNarrow(_)) => {
                panic!("bit layout mantissa field must be at least 1 bit")
            }
            Err(LayoutError::BiasOutOfRange { .. }) => {
                panic!("bit layout bias must lie strictly between 0 and the all-ones exponent")
            }
        }
    }

    /// Validates and builds a layout.
    ///
    /// # Errors
    ///
    /// * [`LayoutError::WidthMismatch`] if the widths do not sum to [`REPR_BITS`].
    /// * [`LayoutError::SignWidth`] if the sign field is not exactly 1 bit.
    /// * [`LayoutError::ExponentTooNarrow`] if the exponent field is under 2 bits.
    /// * [`LayoutError::MantissaTooNarrow`] if there are no fraction bits.
    /// * [`LayoutError::BiasOutOfRange`] if the bias is not in `1..all_ones`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mantissa_core::{BitLayout, LayoutError};
    ///
    /// assert!(BitLayout::try_new(1, 8, 23, 127).is_ok());
    /// assert!(matches!(
    ///     BitLayout::try_new(1, 8, 22, 127),
    ///     Err(LayoutError::WidthMismatch { .. })
    /// ));
    /// ```
    pub const fn try_new(
        sign_width: u32,
        exponent_width: u32,
        mantissa_width: u32,
        bias: i32,
    ) -> Result<Self, LayoutError> {
        let total = match sign_width.checked_add(exponent_width) {
            Some(partial) => partial.checked_add(mantissa_width),
            None => None,
        };
        if !matches!(total, Some(REPR_BITS)) {
            return Err(LayoutError::WidthMismatch {
                sign: sign_width,
                exponent: exponent_width,
                mantissa: mantissa_width,
                total: REPR_BITS,
            });
        }
        if sign_width != 1 {
            return Err(LayoutError::SignWidth(sign_width));
        }
        if exponent_width < 2 {
            return Err(LayoutError::ExponentTooNarrow(exponent_width));
        }
        if mantissa_width < 1 {
            return Err(LayoutError::MantissaTooNarrow(mantissa_width));
        }
        // Exponent width is at most 30 here, so the all-ones field fits an i32.
        let limit = ((1_u32 << exponent_width) - 1) as i32;
        if bias < 1 || bias >= limit {
            return Err(LayoutError::BiasOutOfRange { bias, limit });
        }
        Ok(Self {
            sign_width,
            exponent_width,
            mantissa_width,
            bias,
        })
    }

    /// Sign field width in bits.
    pub const fn sign_width(&self) -> u32 {
        self.sign_width
    }

    /// Exponent field width in bits.
    pub const fn exponent_width(&self) -> u32 {
        self.exponent_width
    }

    /// Mantissa (fraction) field width in bits.
    pub const fn mantissa_width(&self) -> u32 {
        self.mantissa_width
    }

    /// Exponent bias.
    pub const fn bias(&self) -> i32 {
        self.bias
    }

    /// Significand precision including the implicit leading bit.
    pub const fn precision(&self) -> u32 {
        self.mantissa_width + 1
    }

    /// Bit index of the sign bit.
    pub const fn sign_shift(&self) -> u32 {
        self.mantissa_width + self.exponent_width
    }

    /// Mask selecting the sign bit.
    pub const fn sign_mask(&self) -> u32 {
        1 << self.sign_shift()
    }

    /// Bit index of the least significant exponent bit.
    pub const fn exponent_shift(&self) -> u32 {
        self.mantissa_width
    }

    /// The all-ones exponent field value (infinity / NaN).
    pub const fn exponent_all_ones(&self) -> u32 {
        (1 << self.exponent_width) - 1
    }

    /// Mask selecting the exponent field in place.
    pub const fn exponent_mask(&self) -> u32 {
        self.exponent_all_ones() << self.exponent_shift()
    }

    /// Mask selecting the stored fraction bits.
    pub const fn mantissa_mask(&self) -> u32 {
        self.implicit_bit() - 1
    }

    /// The implicit leading bit, one position above the fraction field.
    pub const fn implicit_bit(&self) -> u32 {
        1 << self.mantissa_width
    }

    /// Smallest unbiased exponent of a normal value (also the scale of subnormals).
    pub const fn min_exponent(&self) -> i32 {
        1 - self.bias
    }

    /// Largest unbiased exponent of a finite value.
    pub const fn max_exponent(&self) -> i32 {
        self.exponent_all_ones() as i32 - 1 - self.bias
    }
}

impl fmt::Display for BitLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{} bias {}",
            self.sign_width, self.exponent_width, self.mantissa_width, self.bias
        )
    }
}

/// A floating-point format stored in a 32-bit representation.
///
/// Implementors are zero-sized marker types; the engine reads everything it
/// needs from [`Format::LAYOUT`].
pub trait Format: Copy + Eq + Hash + Default + fmt::Debug + Send + Sync + 'static {
    /// Field widths and bias, validated when the constant is evaluated.
    const LAYOUT: BitLayout;

    /// Short human-readable name.
    const NAME: &'static str;
}

/// IEEE-754 single precision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Binary32;

impl Format for Binary32 {
    const LAYOUT: BitLayout = BitLayout::new(1, 8, 23, 127);
    const NAME: &'static str = "binary32";
}

const _: () = assert!(Binary32::LAYOUT.precision() == f32::MANTISSA_DIGITS);
