//! # Multiplication Tests
//!
//! Covers the split multiplier, round-to-nearest-even on the product,
//! overflow, gradual underflow and the special-value priority of `mul`.

use mantissa_core::arith::mul;
use mantissa_core::arith::mul::split_multiply;
use mantissa_core::{Binary32, SoftF32};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::{Wide, WideExponent, init_tracing, soft};

// ─── Constants ───────────────────────────────────────────────────────────────

const POS_ZERO: u32 = 0x0000_0000;
const NEG_ZERO: u32 = 0x8000_0000;
const POS_INF: u32 = 0x7F80_0000;
const NEG_INF: u32 = 0xFF80_0000;
const NAN: u32 = 0x7FC0_0000;

fn mul_bits(lhs: u32, rhs: u32) -> u32 {
    mul(SoftF32::from_bits(lhs), SoftF32::from_bits(rhs)).to_bits()
}

fn reconstruct(high: u32, low: u32, low_width: u32) -> u64 {
    (u64::from(high) << low_width) | u64::from(low)
}

// ─── Split multiplier ────────────────────────────────────────────────────────

#[rstest]
#[case::two_point_one_by_ten(0x86_6666, 0xA0_0000)]
#[case::all_ones(0xFF_FFFF, 0xFF_FFFF)]
#[case::leading_bits_only(0x80_0000, 0x80_0000)]
#[case::mixed(0xFF_FFFF, 0x80_0001)]
#[case::small(0x3, 0x5)]
fn test_split_multiply_is_exact(#[case] left: u32, #[case] right: u32) {
    let product = split_multiply::<Binary32>(left, right);
    assert_eq!(product.low_width, 24);
    assert!(u64::from(product.low) < 1 << product.low_width);
    assert_eq!(
        reconstruct(product.high, product.low, product.low_width),
        u64::from(left) * u64::from(right)
    );
}

#[test]
fn test_split_multiply_masks_to_precision() {
    assert_eq!(
        split_multiply::<Binary32>(0x1FF_FFFF, 0x3),
        split_multiply::<Binary32>(0xFF_FFFF, 0x3)
    );
}

#[test]
fn test_split_multiply_wide_format() {
    let product = split_multiply::<WideExponent>(0x3F_FFFF, 0x20_0001);
    assert_eq!(product.low_width, 22);
    assert_eq!(
        reconstruct(product.high, product.low, product.low_width),
        0x3F_FFFF_u64 * 0x20_0001
    );
}

// ─── Finite operands ─────────────────────────────────────────────────────────

#[rstest]
#[case::regression(4.20, 10.0, 42.0)]
#[case::negatives(-4.20, -10.0, 42.0)]
#[case::exact_negatives(-42.0, -10.0, 420.0)]
#[case::mixed_signs(-4.20, 10.0, -42.0)]
#[case::exact(1.5, 1.5, 2.25)]
#[case::rounded(0.1, 0.1, 0.010000001)]
#[case::identity(2.1, 1.0, 2.1)]
fn test_mul(#[case] lhs: f32, #[case] rhs: f32, #[case] expected: f32) {
    init_tracing();
    assert_eq!(
        mul(soft(lhs), soft(rhs)).to_bits(),
        expected.to_bits(),
        "{lhs:?} * {rhs:?}"
    );
}

#[test]
fn test_square_just_below_four() {
    // (4 - 2^-22)^2 = 16 - 2^-19 + 2^-44 rounds to 16 - 2^-19, not to 16.
    let value = SoftF32::from_bits(0x407F_FFFF);
    let square = mul(value, value);
    assert_eq!(square.to_bits(), 0x417F_FFFE);
    assert_eq!(square.to_bits(), (value.to_f32() * value.to_f32()).to_bits());
}

#[test]
fn test_ties_to_even() {
    // 3 * 2^-150 is exactly halfway between the subnormals 1 and 2.
    assert_eq!(mul_bits(0x0000_0003, 0.5_f32.to_bits()), 0x0000_0002);
    // 1 * 2^-150 is halfway between 0 and 1.
    assert_eq!(mul_bits(0x0000_0001, 0.5_f32.to_bits()), POS_ZERO);
}

#[test]
fn test_overflow_to_infinity() {
    let max = f32::MAX.to_bits();
    assert_eq!(mul_bits(max, 2.0_f32.to_bits()), POS_INF);
    assert_eq!(mul_bits(max, (-2.0_f32).to_bits()), NEG_INF);
}

#[test]
fn test_gradual_underflow() {
    let min_normal = f32::MIN_POSITIVE.to_bits();
    assert_eq!(mul_bits(min_normal, 0.5_f32.to_bits()), 0x0040_0000);
    assert_eq!(mul_bits(0x0000_0001, 0x0000_0001), POS_ZERO);
    assert_eq!(mul_bits(0x8000_0001, 0x0000_0001), NEG_ZERO);
}

#[test]
fn test_subnormal_operand_is_normalized() {
    assert_eq!(mul_bits(0x0000_0001, 2.0_f32.powi(23).to_bits()), 0x0080_0000);
    assert_eq!(mul_bits(2.0_f32.powi(23).to_bits(), 0x0000_0001), 0x0080_0000);
}

#[test]
fn test_mul_in_wide_format() {
    let one_point_five = Wide::from_parts(false, 0, 0x10_0000);
    let two_point_two_five = Wide::from_parts(false, 1, 0x4_0000);
    assert_eq!(mul(one_point_five, one_point_five), two_point_two_five);
}

// ─── Special values ──────────────────────────────────────────────────────────

#[test]
fn test_left_absorbing_operand_wins() {
    assert_eq!(mul_bits(POS_ZERO, POS_INF), POS_ZERO);
    assert_eq!(mul_bits(POS_ZERO, NEG_INF), NEG_ZERO);
    assert_eq!(mul_bits(POS_INF, POS_ZERO), POS_INF);
    assert_eq!(mul_bits(NEG_INF, NEG_ZERO), POS_INF);
    assert_eq!(mul_bits(POS_ZERO, NAN), POS_ZERO);
    assert_eq!(mul_bits(POS_INF, NAN), POS_INF);
}

#[test]
fn test_nan_is_returned_unchanged() {
    assert_eq!(mul_bits(0xFFC0_1234, 0x3F80_0000), 0xFFC0_1234);
    assert_eq!(mul_bits(0xBF80_0000, 0x7FC0_0001), 0x7FC0_0001);
    assert_eq!(mul_bits(NAN, POS_ZERO), NAN);
}

#[test]
fn test_zero_and_infinity_take_product_sign() {
    assert_eq!(mul_bits(NEG_ZERO, 5.0_f32.to_bits()), NEG_ZERO);
    assert_eq!(mul_bits(5.0_f32.to_bits(), NEG_ZERO), NEG_ZERO);
    assert_eq!(mul_bits((-5.0_f32).to_bits(), NEG_ZERO), POS_ZERO);
    assert_eq!(mul_bits((-5.0_f32).to_bits(), POS_INF), NEG_INF);
    assert_eq!(mul_bits(NEG_INF, (-5.0_f32).to_bits()), POS_INF);
}
