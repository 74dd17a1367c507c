//! Multiplication.
//!
//! The significands of two values each have `p` bits (24 for binary32), so
//! their product needs `2p`. Instead of a double-width native multiply, each
//! significand is split into a low block of `ceil(p/2)` bits and a high block
//! of the remaining bits, and the four partial products are recombined with
//! explicit carries into a high word and a low word:
//!
//! ```text
//! product = hi*hi << 2b  +  (lo*hi + hi*lo) << b  +  lo*lo        (b = ceil(p/2))
//!         = high << 2b   +  low                                    (low < 2^2b)
//! ```
//!
//! The product of two significands in `[1, 2)` lies in `[1, 4)`, so the top
//! set bit is at `2p - 1` or `2p - 2`. The `p` bits below it are kept, the next
//! bit becomes the guard bit and everything below it the sticky bit, and the
//! result is rounded to nearest, ties to even.

use tracing::trace;

use crate::arith::rounding::{extend, round_nearest_even, shift_right_sticky};
use crate::layout::Format;
use crate::normalize::encode;
use crate::value::SoftFloat;

/// A double-width product held as two words: `high << low_width | low`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplitProduct {
    /// Bits at and above `low_width`.
    pub high: u32,
    /// Bits below `low_width`.
    pub low: u32,
    /// Width of the low word (twice the low block width).
    pub low_width: u32,
}

/// Multiplies two significands of format `F` without a double-width multiply.
///
/// Inputs are masked to the format's precision.
///
/// # Examples
///
/// ```
/// use mantissa_core::Binary32;
/// use mantissa_core::arith::mul::split_multiply;
///
/// let product = split_multiply::<Binary32>(0x86_6666, 0xA0_0000);
/// let full = (u64::from(product.high) << product.low_width) | u64::from(product.low);
/// assert_eq!(full, 0x86_6666_u64 * 0xA0_0000);
/// ```
pub fn split_multiply<F: Format>(left: u32, right: u32) -> SplitProduct {
    let precision = F::LAYOUT.precision();
    let significand_mask = (1_u32 << precision) - 1;
    let (left, right) = (left & significand_mask, right & significand_mask);

    let block = precision.div_ceil(2);
    let block_mask = (1_u32 << block) - 1;
    let low_width = 2 * block;

    let (left_lo, left_hi) = (left & block_mask, left >> block);
    let (right_lo, right_hi) = (right & block_mask, right >> block);

    let lo_lo = left_lo * right_lo;
    let lo_hi = left_lo * right_hi;
    let hi_lo = left_hi * right_lo;
    let hi_hi = left_hi * right_hi;
    trace!(lo_lo, lo_hi, hi_lo, hi_hi, block, "partial products");

    let middle = lo_hi + hi_lo;
    let low_sum = lo_lo + ((middle & block_mask) << block);
    let low = low_sum & ((1 << low_width) - 1);
    let high = hi_hi + (middle >> block) + (low_sum >> low_width);

    SplitProduct {
        high,
        low,
        low_width,
    }
}

/// Absorbing operands: zero, infinity and NaN.
const fn absorbs<F: Format>(value: SoftFloat<F>) -> bool {
    value.is_zero() || !value.is_finite()
}

/// The left operand wins when both operands absorb.
fn dominant<F: Format>(
    lhs: SoftFloat<F>,
    rhs: SoftFloat<F>,
    negative: bool,
) -> Option<SoftFloat<F>> {
    let mut winner = if absorbs(lhs) {
        lhs
    } else if absorbs(rhs) {
        rhs
    } else {
        return None;
    };
    if !winner.is_not_a_number() {
        winner.set_negative(negative);
    }
    Some(winner)
}

/// Significand with its leading bit in place, and the matching exponent.
fn normalized_significand<F: Format>(value: SoftFloat<F>) -> (u32, i32) {
    let mut significand = value.mantissa();
    let mut exponent = value.effective_exponent();
    while significand & F::LAYOUT.implicit_bit() == 0 {
        significand <<= 1;
        exponent -= 1;
    }
    (significand, exponent)
}

/// Multiplies two values.
///
/// If the left operand is zero, infinite or NaN the result takes its
/// category, otherwise the right operand's if it is. NaN is returned
/// unchanged; zero and infinity take the product sign.
///
/// # Examples
///
/// ```
/// use mantissa_core::SoftF32;
/// use mantissa_core::arith::mul;
///
/// let product = mul(SoftF32::from(-4.20_f32), SoftF32::from(-10.0_f32));
/// assert_eq!(f32::from(product), 42.0);
/// ```
pub fn mul<F: Format>(lhs: SoftFloat<F>, rhs: SoftFloat<F>) -> SoftFloat<F> {
    let negative = lhs.negative() ^ rhs.negative();
    if let Some(result) = dominant(lhs, rhs, negative) {
        return result;
    }

    let layout = F::LAYOUT;
    let precision = layout.precision();
    let (left, left_exponent) = normalized_significand(lhs);
    let (right, right_exponent) = normalized_significand(rhs);
    let product = split_multiply::<F>(left, right);

    let carry = (product.high >> (2 * precision - 1 - product.low_width)) & 1 == 1;
    let discarded = if carry { precision } else { precision - 1 };
    let mut exponent = left_exponent + right_exponent + i32::from(carry);

    let kept = (product.high << (product.low_width - discarded)) | (product.low >> discarded);
    let guard = (product.low >> (discarded - 1)) & 1 == 1;
    let sticky = product.low & ((1 << (discarded - 1)) - 1) != 0;
    let mut extended = extend(kept, guard, sticky);

    if exponent < layout.min_exponent() {
        extended = shift_right_sticky(extended, layout.min_exponent().abs_diff(exponent));
        exponent = layout.min_exponent();
    }
    let rounded = round_nearest_even(extended);
    trace!(
        kept,
        guard,
        sticky,
        rounded,
        exponent,
        format = F::NAME,
        "rounded product"
    );

    encode::<F>(negative, exponent, rounded)
}
