//! Round-to-nearest, ties-to-even on extended significands.
//!
//! The multiplier keeps two extra bits below the significand while it works:
//!
//! | Bit      | Name   | Meaning                                     |
//! |----------|--------|---------------------------------------------|
//! | 1        | guard  | first bit below the least significant bit   |
//! | 0        | sticky | OR of every bit below the guard bit         |
//!
//! Any further right shift (gradual underflow) folds the shifted-out bits
//! into the sticky bit, so the final rounding decision always sees whether
//! the discarded part was below, exactly at, or above one half ulp.
//!
//! Addition and subtraction never come through here: their alignment shift
//! drops bits without guard or sticky tracking.

/// Number of bits kept below the significand in an extended value.
pub const EXTRA_BITS: u32 = 2;

/// Packs a significand with its guard and sticky bits.
#[inline]
pub const fn extend(significand: u32, guard: bool, sticky: bool) -> u32 {
    (significand << EXTRA_BITS) | ((guard as u32) << 1) | (sticky as u32)
}

/// Shifts an extended value right by `shift`, ORing lost bits into sticky.
#[inline]
pub const fn shift_right_sticky(extended: u32, shift: u32) -> u32 {
    if shift == 0 {
        extended
    } else if shift >= u32::BITS {
        (extended != 0) as u32
    } else {
        let lost = extended & ((1 << shift) - 1);
        (extended >> shift) | (lost != 0) as u32
    }
}

/// Drops the extra bits, rounding to nearest with ties to even.
///
/// The result may carry into one bit above the significand (all ones
/// rounding up); the normalizer absorbs that.
#[inline]
pub const fn round_nearest_even(extended: u32) -> u32 {
    let significand = extended >> EXTRA_BITS;
    let guard = extended & 0b10 != 0;
    let sticky = extended & 0b01 != 0;
    if guard && (sticky || significand & 1 == 1) {
        significand + 1
    } else {
        significand
    }
}
