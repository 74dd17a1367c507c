//! The 32-bit backed floating-point value.
//!
//! [`SoftFloat`] stores nothing but its representation. Sign, exponent and
//! mantissa are derived from it through the masks of the format's
//! [`BitLayout`](crate::layout::BitLayout), and each mutator rewrites only its
//! own field.

use std::marker::PhantomData;

use crate::layout::{Binary32, Format};

/// A floating-point value of format `F`, held as its raw representation.
///
/// Equality and hashing compare representations, so `+0` and `-0` differ and
/// a NaN equals itself.
///
/// # Examples
///
/// ```
/// use mantissa_core::SoftF32;
///
/// let value = SoftF32::from(-2.5_f32);
/// assert!(value.negative());
/// assert_eq!(value.exponent(), 1);
/// assert_eq!(value.mantissa_no_leading(), 0x20_0000);
/// assert_eq!(value.mantissa(), 0xA0_0000);
/// assert_eq!(f32::from(value), -2.5);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SoftFloat<F: Format = Binary32> {
    repr: u32,
    format: PhantomData<F>,
}

/// IEEE-754 single precision value.
pub type SoftF32 = SoftFloat<Binary32>;

impl<F: Format> SoftFloat<F> {
    /// Wraps a raw representation without inspecting it.
    #[inline]
    pub const fn from_bits(repr: u32) -> Self {
        Self {
            repr,
            format: PhantomData,
        }
    }

    /// Returns the raw representation.
    #[inline]
    pub const fn to_bits(self) -> u32 {
        self.repr
    }

    /// Builds a value from a sign, an unbiased exponent and a mantissa.
    ///
    /// The mantissa is masked to the fraction field, so passing a significand
    /// with its leading bit is fine. The exponent is biased and masked to the
    /// exponent field.
    pub fn from_parts(negative: bool, exponent: i32, mantissa: u32) -> Self {
        let mut value = Self::from_bits(0);
        value.set(negative, exponent, mantissa);
        value
    }

    /// Signed zero.
    pub const fn zero(negative: bool) -> Self {
        Self::from_bits(if negative { F::LAYOUT.sign_mask() } else { 0 })
    }

    /// Signed infinity.
    pub const fn infinity(negative: bool) -> Self {
        Self::from_bits(Self::zero(negative).repr | F::LAYOUT.exponent_mask())
    }

    /// The canonical quiet NaN (positive, only the top fraction bit set).
    pub const fn nan() -> Self {
        let layout = F::LAYOUT;
        Self::from_bits(layout.exponent_mask() | (layout.implicit_bit() >> 1))
    }

    /// Reads the sign bit.
    #[inline]
    pub const fn negative(self) -> bool {
        self.repr & F::LAYOUT.sign_mask() != 0
    }

    /// Rewrites the sign bit only.
    #[inline]
    pub const fn set_negative(&mut self, negative: bool) {
        self.repr &= !F::LAYOUT.sign_mask();
        if negative {
            self.repr |= F::LAYOUT.sign_mask();
        }
    }

    /// Returns the biased exponent field as stored.
    #[inline]
    pub const fn exponent_field(self) -> u32 {
        (self.repr & F::LAYOUT.exponent_mask()) >> F::LAYOUT.exponent_shift()
    }

    /// Returns the exponent field minus the bias.
    ///
    /// For zero and subnormals this is `-bias`, one below the exponent they
    /// are actually scaled by (see [`SoftFloat::effective_exponent`]).
    #[inline]
    pub const fn exponent(self) -> i32 {
        self.exponent_field() as i32 - F::LAYOUT.bias()
    }

    /// Returns the exponent the significand is scaled by.
    ///
    /// Equal to [`SoftFloat::exponent`] except for an all-zero exponent field,
    /// where it is the minimum normal exponent `1 - bias`.
    #[inline]
    pub const fn effective_exponent(self) -> i32 {
        if self.exponent_zero() {
            F::LAYOUT.min_exponent()
        } else {
            self.exponent()
        }
    }

    /// True iff every exponent bit is clear.
    #[inline]
    pub const fn exponent_zero(self) -> bool {
        self.repr & F::LAYOUT.exponent_mask() == 0
    }

    /// True iff every exponent bit is set.
    #[inline]
    pub const fn exponent_all_ones(self) -> bool {
        self.repr & F::LAYOUT.exponent_mask() == F::LAYOUT.exponent_mask()
    }

    /// Biases `exponent` and rewrites the exponent field only.
    ///
    /// Out-of-range exponents wrap into the field width.
    #[inline]
    pub const fn set_exponent(&mut self, exponent: i32) {
        let layout = F::LAYOUT;
        let field = exponent.wrapping_add(layout.bias()) as u32 & layout.exponent_all_ones();
        self.repr &= !layout.exponent_mask();
        self.repr |= field << layout.exponent_shift();
    }

    /// Returns the stored fraction bits.
    #[inline]
    pub const fn mantissa_no_leading(self) -> u32 {
        self.repr & F::LAYOUT.mantissa_mask()
    }

    /// Returns the significand: the fraction with the implicit leading bit.
    ///
    /// The leading bit is present unless the exponent field is all zero, so
    /// zero and subnormals yield their bare fraction.
    #[inline]
    pub const fn mantissa(self) -> u32 {
        if self.exponent_zero() {
            self.mantissa_no_leading()
        } else {
            self.mantissa_no_leading() | F::LAYOUT.implicit_bit()
        }
    }

    /// Rewrites the fraction field with the low bits of `mantissa`.
    #[inline]
    pub const fn set_mantissa(&mut self, mantissa: u32) {
        let mask = F::LAYOUT.mantissa_mask();
        self.repr &= !mask;
        self.repr |= mantissa & mask;
    }

    /// Rewrites all three fields.
    pub const fn set(&mut self, negative: bool, exponent: i32, mantissa: u32) {
        self.set_negative(negative);
        self.set_exponent(exponent);
        self.set_mantissa(mantissa);
    }

    /// Becomes a signed zero.
    pub const fn set_zero(&mut self, negative: bool) {
        *self = Self::zero(negative);
    }

    /// Becomes the canonical quiet NaN with the given sign.
    pub const fn set_not_a_number(&mut self, negative: bool) {
        *self = Self::nan();
        self.set_negative(negative);
    }

    /// Returns the value with its sign bit flipped.
    #[inline]
    pub const fn negated(self) -> Self {
        Self::from_bits(self.repr ^ F::LAYOUT.sign_mask())
    }
}

impl SoftF32 {
    /// Reinterprets a native `f32` bit pattern exactly.
    #[inline]
    pub const fn from_f32(value: f32) -> Self {
        Self::from_bits(value.to_bits())
    }

    /// Reinterprets the representation as a native `f32`.
    #[inline]
    pub const fn to_f32(self) -> f32 {
        f32::from_bits(self.repr)
    }
}

impl From<f32> for SoftF32 {
    fn from(value: f32) -> Self {
        Self::from_f32(value)
    }
}

impl From<SoftF32> for f32 {
    fn from(value: SoftF32) -> Self {
        value.to_f32()
    }
}
