//! ASCII scientific formatting.
//!
//! Values render as an exact binary scientific string:
//!
//! | Class     | Rendering                      | Example (binary32)                  |
//! |-----------|--------------------------------|-------------------------------------|
//! | Zero      | `0`                            | `-0`                                |
//! | Normal    | `1.<fraction>x2^<exponent>`    | `1.3125x2^5` (42.0)                 |
//! | Subnormal | `0.<fraction>x2^<min exponent>`| `0.00000011920928955078125x2^-126`  |
//! | Infinite  | `inf`                          | `-inf`                              |
//! | NaN       | `NaN`                          | `NaN`                               |
//!
//! The fraction is the stored fraction field written in decimal. It is exact:
//! a binary fraction of `n` bits always terminates after at most `n` decimal
//! digits, and the conversion stops as soon as the remainder is zero.

use std::fmt;

use crate::classify::Class;
use crate::layout::Format;
use crate::value::SoftFloat;

impl<F: Format> SoftFloat<F> {
    /// Writes the stored fraction as digits in `radix`.
    ///
    /// Each step multiplies the fraction by the radix, emits the integer part
    /// that overflowed the fraction field, and masks it off again. A zero
    /// fraction renders as `"0"`.
    ///
    /// # Panics
    ///
    /// Panics if `radix` is outside `2..=10`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mantissa_core::SoftF32;
    ///
    /// let value = SoftF32::from(1.375_f32);
    /// assert_eq!(value.fraction_digits(10), "375");
    /// assert_eq!(value.fraction_digits(2), "011");
    /// assert_eq!(value.fraction_digits(8), "3");
    /// ```
    pub fn fraction_digits(self, radix: u32) -> String {
        assert!((2..=10).contains(&radix), "radix must be in 2..=10");
        let layout = F::LAYOUT;
        let mask = u64::from(layout.mantissa_mask());
        let mut fraction = u64::from(self.mantissa_no_leading());
        if fraction == 0 {
            return String::from("0");
        }

        let mut digits = String::new();
        while fraction != 0 {
            fraction *= u64::from(radix);
            let digit = (fraction >> layout.mantissa_width()) as u8;
            digits.push(char::from(b'0' + digit));
            fraction &= mask;
        }
        digits
    }

    /// Renders the value as a deterministic scientific string.
    ///
    /// # Examples
    ///
    /// ```
    /// use mantissa_core::SoftF32;
    ///
    /// assert_eq!(SoftF32::from(2.1_f32).ascii_scientific(), "1.0499999523162841796875x2^1");
    /// assert_eq!(SoftF32::from(-5.0_f32).ascii_scientific(), "-1.25x2^2");
    /// assert_eq!(SoftF32::from(0.0_f32).ascii_scientific(), "0");
    /// assert_eq!(SoftF32::from(f32::INFINITY).ascii_scientific(), "inf");
    /// ```
    pub fn ascii_scientific(self) -> String {
        self.to_string()
    }
}

impl<F: Format> fmt::Display for SoftFloat<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative() {
            f.write_str("-")?;
        }
        match self.classify() {
            Class::Zero => f.write_str("0"),
            Class::Subnormal => write!(
                f,
                "0.{}x2^{}",
                self.fraction_digits(10),
                F::LAYOUT.min_exponent()
            ),
            Class::Normal => write!(f, "1.{}x2^{}", self.fraction_digits(10), self.exponent()),
            Class::Infinite => f.write_str("inf"),
            Class::Nan => f.write_str("NaN"),
        }
    }
}

impl<F: Format> fmt::Debug for SoftFloat<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SoftFloat<{}>({:#010x} = {})", F::NAME, self.to_bits(), self)
    }
}
