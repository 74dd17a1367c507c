//! Value classification.
//!
//! | Exponent field | Fraction | Class       |
//! |----------------|----------|-------------|
//! | all zero       | zero     | Zero        |
//! | all zero       | non-zero | Subnormal   |
//! | all ones       | zero     | Infinite    |
//! | all ones       | non-zero | Nan         |
//! | otherwise      | any      | Normal      |
//!
//! Signalling and quiet NaNs are not distinguished.

use std::num::FpCategory;

use crate::layout::Format;
use crate::value::SoftFloat;

/// Category of a floating-point value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Class {
    /// Positive or negative zero.
    Zero,
    /// Non-zero value below the smallest normal magnitude, no implicit bit.
    Subnormal,
    /// Finite value with an implicit leading bit.
    Normal,
    /// Positive or negative infinity.
    Infinite,
    /// Not a number.
    Nan,
}

impl From<Class> for FpCategory {
    fn from(class: Class) -> Self {
        match class {
            Class::Zero => Self::Zero,
            Class::Subnormal => Self::Subnormal,
            Class::Normal => Self::Normal,
            Class::Infinite => Self::Infinite,
            Class::Nan => Self::Nan,
        }
    }
}

impl<F: Format> SoftFloat<F> {
    /// Exponent field all zero and fraction zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.exponent_zero() && self.mantissa_no_leading() == 0
    }

    /// Exponent field all zero and fraction non-zero.
    #[inline]
    pub const fn is_subnormal(self) -> bool {
        self.exponent_zero() && self.mantissa_no_leading() != 0
    }

    /// Exponent field neither all zero nor all ones.
    #[inline]
    pub const fn is_normal(self) -> bool {
        !self.exponent_zero() && !self.exponent_all_ones()
    }

    /// Exponent field all ones and fraction zero.
    #[inline]
    pub const fn is_infinity(self) -> bool {
        self.exponent_all_ones() && self.mantissa_no_leading() == 0
    }

    /// Exponent field all ones and fraction non-zero.
    #[inline]
    pub const fn is_not_a_number(self) -> bool {
        self.exponent_all_ones() && self.mantissa_no_leading() != 0
    }

    /// Neither infinity nor NaN.
    #[inline]
    pub const fn is_finite(self) -> bool {
        !self.exponent_all_ones()
    }

    /// Returns the category of the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use mantissa_core::{Class, SoftF32};
    ///
    /// assert_eq!(SoftF32::from(0.0_f32).classify(), Class::Zero);
    /// assert_eq!(SoftF32::from_bits(1).classify(), Class::Subnormal);
    /// assert_eq!(SoftF32::from(1.5_f32).classify(), Class::Normal);
    /// assert_eq!(SoftF32::from(f32::NEG_INFINITY).classify(), Class::Infinite);
    /// assert_eq!(SoftF32::from(f32::NAN).classify(), Class::Nan);
    /// ```
    pub const fn classify(self) -> Class {
        match (self.exponent_zero(), self.exponent_all_ones(), self.mantissa_no_leading() == 0) {
            (true, _, true) => Class::Zero,
            (true, _, false) => Class::Subnormal,
            (false, true, true) => Class::Infinite,
            (false, true, false) => Class::Nan,
            (false, false, _) => Class::Normal,
        }
    }
}
