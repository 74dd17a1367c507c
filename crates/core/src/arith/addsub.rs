//! Addition and subtraction.
//!
//! Both operations share one path:
//! 1. **Dominance:** zero, NaN and infinity operands decide the result outright.
//! 2. **Sign reduction:** `a + (-b)` becomes `a - b` and `a - (-b)` becomes
//!    `a + b`, so the right operand is non-negative from then on.
//! 3. **Alignment:** the operand with the smaller exponent is shifted right
//!    until both exponents agree. Shifted-out bits are lost; there are no
//!    guard or sticky bits on this path.
//! 4. **Combine:** the aligned significands are added or subtracted as signed
//!    integers, then renormalized and packed by [`encode`].

use std::marker::PhantomData;

use tracing::trace;

use crate::layout::Format;
use crate::normalize::encode;
use crate::value::SoftFloat;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Combine {
    Add,
    Subtract,
}

/// One operand's significand while exponents are being aligned.
///
/// `magnitude` starts as the stored fraction with the leading bit still
/// implicit. The first alignment shift materializes it, after which
/// `magnitude` is the whole working significand.
#[derive(Clone, Copy, Debug)]
struct Operand<F: Format> {
    magnitude: u32,
    exponent: i32,
    explicit_leading: bool,
    format: PhantomData<F>,
}

impl<F: Format> Operand<F> {
    fn unpack(value: SoftFloat<F>) -> Self {
        Self {
            magnitude: value.mantissa_no_leading(),
            exponent: value.effective_exponent(),
            // Zero and subnormals have no hidden bit.
            explicit_leading: value.exponent_zero(),
            format: PhantomData,
        }
    }

    const fn significand(&self) -> u32 {
        if self.explicit_leading {
            self.magnitude
        } else {
            self.magnitude | F::LAYOUT.implicit_bit()
        }
    }

    fn align_to(&mut self, exponent: i32) {
        while self.exponent < exponent {
            self.magnitude = self.significand() >> 1;
            self.explicit_leading = true;
            self.exponent += 1;
            if self.magnitude == 0 {
                self.exponent = exponent;
            }
        }
    }
}

/// Results fixed by the special-value table, checked in priority order.
fn dominant<F: Format>(lhs: SoftFloat<F>, rhs: SoftFloat<F>, op: Combine) -> Option<SoftFloat<F>> {
    if rhs.is_zero() || lhs.is_not_a_number() || lhs.is_infinity() {
        return Some(lhs);
    }
    if rhs.is_not_a_number() {
        return Some(rhs);
    }
    if rhs.is_infinity() {
        return Some(match op {
            Combine::Add => rhs,
            Combine::Subtract => rhs.negated(),
        });
    }
    None
}

fn combine<F: Format>(lhs: SoftFloat<F>, rhs: SoftFloat<F>, op: Combine) -> SoftFloat<F> {
    let layout = F::LAYOUT;
    let mut left = Operand::unpack(lhs);
    let mut right = Operand::unpack(rhs);
    left.align_to(right.exponent);
    right.align_to(left.exponent);

    let mut left_value = i64::from(left.significand());
    if lhs.negative() {
        left_value = -left_value;
    }
    let right_value = i64::from(right.significand());
    let combined = match op {
        Combine::Add => left_value + right_value,
        Combine::Subtract => left_value - right_value,
    };

    // Zero test on the significand window (leading bit plus one carry bit),
    // not on the signed integer.
    let window = (1_u64 << (layout.precision() + 1)) - 1;
    let magnitude = (combined.unsigned_abs() & window) as u32;
    trace!(
        ?op,
        ?left,
        ?right,
        combined,
        format = F::NAME,
        "aligned operands"
    );
    if magnitude == 0 {
        return SoftFloat::zero(false);
    }
    encode::<F>(combined < 0, left.exponent, magnitude)
}

/// Adds two values.
///
/// Special values are resolved in this order: a zero right operand returns
/// the left operand unchanged; a NaN or infinite left operand is returned;
/// a NaN or infinite right operand is returned.
///
/// # Examples
///
/// ```
/// use mantissa_core::SoftF32;
/// use mantissa_core::arith::add;
///
/// let sum = add(SoftF32::from(2.1_f32), SoftF32::from(-4.2_f32));
/// assert_eq!(f32::from(sum), -2.1);
/// ```
pub fn add<F: Format>(lhs: SoftFloat<F>, rhs: SoftFloat<F>) -> SoftFloat<F> {
    if let Some(result) = dominant(lhs, rhs, Combine::Add) {
        return result;
    }
    if rhs.negative() {
        return sub(lhs, rhs.negated());
    }
    combine(lhs, rhs, Combine::Add)
}

/// Subtracts `rhs` from `lhs`.
///
/// Uses the same special-value order as [`add`]; an infinite right operand
/// yields the infinity of the opposite sign.
///
/// # Examples
///
/// ```
/// use mantissa_core::SoftF32;
/// use mantissa_core::arith::sub;
///
/// let difference = sub(SoftF32::from(-4.2_f32), SoftF32::from(-2.1_f32));
/// assert_eq!(f32::from(difference), -2.1);
/// ```
pub fn sub<F: Format>(lhs: SoftFloat<F>, rhs: SoftFloat<F>) -> SoftFloat<F> {
    if let Some(result) = dominant(lhs, rhs, Combine::Subtract) {
        return result;
    }
    if rhs.negative() {
        return add(lhs, rhs.negated());
    }
    combine(lhs, rhs, Combine::Subtract)
}
