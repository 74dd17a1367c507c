//! Renormalization of raw magnitudes.
//!
//! Arithmetic produces a magnitude that may have carried out above the
//! significand (addition, rounding) or lost its leading bit (cancellation).
//! [`normalize`] shifts it back so exactly one bit sits in the implicit
//! leading-bit position, adjusting the exponent one step per shift:
//! - **Carry:** while any bit sits above the leading-bit position, shift right
//!   and increment the exponent. Shifted-out bits are dropped.
//! - **Cancellation:** while the leading-bit position is empty, shift left and
//!   decrement the exponent, stopping at the minimum normal exponent.
//!
//! [`encode`] then packs the result, producing infinity when the exponent
//! overflows and a subnormal when the leading bit could not be restored.

use tracing::debug;

use crate::layout::Format;
use crate::value::SoftFloat;

/// A magnitude and exponent after renormalization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Normalized {
    /// Unbiased exponent; never below the format's minimum normal exponent
    /// unless the magnitude is zero.
    pub exponent: i32,
    /// Significand; its leading bit is set unless the value is subnormal.
    pub magnitude: u32,
}

/// Shifts `magnitude` into canonical position.
///
/// Callers handle an exactly zero magnitude as a canonical zero before
/// getting here; a zero magnitude is returned unchanged.
///
/// # Examples
///
/// ```
/// use mantissa_core::Binary32;
/// use mantissa_core::normalize::{normalize, Normalized};
///
/// // 2.1 + 2.1 before renormalization: one carry bit above the significand.
/// let carried = normalize::<Binary32>(1, 0x10C_CCCC);
/// assert_eq!(carried, Normalized { exponent: 2, magnitude: 0x86_6666 });
///
/// // Cancellation leaves the leading bit empty.
/// let cancelled = normalize::<Binary32>(2, 0x43_3333);
/// assert_eq!(cancelled, Normalized { exponent: 1, magnitude: 0x86_6666 });
/// ```
pub fn normalize<F: Format>(exponent: i32, magnitude: u32) -> Normalized {
    let layout = F::LAYOUT;
    let mut exponent = exponent;
    let mut magnitude = magnitude;

    while magnitude >> layout.precision() != 0 {
        magnitude >>= 1;
        exponent += 1;
    }
    while magnitude != 0
        && magnitude & layout.implicit_bit() == 0
        && exponent > layout.min_exponent()
    {
        magnitude <<= 1;
        exponent -= 1;
    }
    if magnitude != 0 && exponent < layout.min_exponent() {
        let shift = layout.min_exponent().abs_diff(exponent);
        magnitude = magnitude.checked_shr(shift).unwrap_or(0);
        exponent = layout.min_exponent();
    }

    Normalized {
        exponent,
        magnitude,
    }
}

/// Renormalizes `magnitude` and packs it with `negative` into a value.
///
/// * A zero magnitude encodes as a zero of the given sign.
/// * An exponent above the largest finite exponent encodes as infinity.
/// * A magnitude whose leading bit cannot be restored encodes as a subnormal.
pub fn encode<F: Format>(negative: bool, exponent: i32, magnitude: u32) -> SoftFloat<F> {
    let layout = F::LAYOUT;
    let Normalized {
        exponent,
        magnitude,
    } = normalize::<F>(exponent, magnitude);

    if magnitude == 0 {
        return SoftFloat::zero(negative);
    }
    if exponent > layout.max_exponent() {
        debug!(exponent, format = F::NAME, "exponent overflow, result is infinite");
        return SoftFloat::infinity(negative);
    }

    let mut value = SoftFloat::zero(negative);
    if magnitude & layout.implicit_bit() == 0 {
        debug!(magnitude, format = F::NAME, "result is subnormal");
    } else {
        value.set_exponent(exponent);
    }
    value.set_mantissa(magnitude);
    value
}

impl<F: Format> SoftFloat<F> {
    /// Replaces exponent and mantissa with the canonical form of `magnitude`.
    ///
    /// `magnitude` is read at the value's current [effective
    /// exponent](SoftFloat::effective_exponent); carries above the
    /// significand are shifted out and a missing leading bit is shifted in,
    /// adjusting the exponent. The sign is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use mantissa_core::SoftF32;
    ///
    /// let mut value = SoftF32::from(2.0_f32);
    /// value.set_mantissa_normalized(0x180_0000);
    /// assert_eq!(f32::from(value), 6.0);
    /// ```
    pub fn set_mantissa_normalized(&mut self, magnitude: u32) {
        *self = encode::<F>(self.negative(), self.effective_exponent(), magnitude);
    }
}
