//! # Normalization Tests
//!
//! Carry and cancellation handling, the minimum-exponent floor, and the
//! overflow/subnormal decisions made when packing a result.

use mantissa_core::normalize::{Normalized, encode, normalize};
use mantissa_core::{Binary32, SoftF32};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::{WideExponent, init_tracing, soft};

#[rstest]
#[case::already_normal(1, 0x86_6666, 1, 0x86_6666)]
#[case::one_carry(1, 0x10C_CCCC, 2, 0x86_6666)]
#[case::two_carries(0, 0x200_0000, 2, 0x80_0000)]
#[case::cancellation(2, 0x43_3333, 1, 0x86_6666)]
#[case::deep_cancellation(0, 0x1, -23, 0x80_0000)]
#[case::stops_at_min_exponent(-126, 0x40_0000, -126, 0x40_0000)]
#[case::partial_cancellation_to_subnormal(-125, 0x10_0000, -126, 0x20_0000)]
#[case::below_min_exponent(-127, 0x80_0000, -126, 0x40_0000)]
#[case::zero(5, 0, 5, 0)]
fn test_normalize(
    #[case] exponent: i32,
    #[case] magnitude: u32,
    #[case] expected_exponent: i32,
    #[case] expected_magnitude: u32,
) {
    assert_eq!(
        normalize::<Binary32>(exponent, magnitude),
        Normalized {
            exponent: expected_exponent,
            magnitude: expected_magnitude,
        }
    );
}

#[test]
fn test_normalize_far_below_min_exponent_flushes() {
    let result = normalize::<Binary32>(-200, 0x80_0000);
    assert_eq!(result.magnitude, 0);
}

#[test]
fn test_normalize_uses_format_precision() {
    let result = normalize::<WideExponent>(0, 0x40_0000);
    assert_eq!(
        result,
        Normalized {
            exponent: 1,
            magnitude: 0x20_0000,
        }
    );
}

#[test]
fn test_encode_normal() {
    let value: SoftF32 = encode(false, 2, 0x86_6666);
    assert_eq!(value.to_f32(), 4.2);
}

#[test]
fn test_encode_signed_zero() {
    let value: SoftF32 = encode(true, 0, 0);
    assert_eq!(value.to_bits(), 0x8000_0000);
}

#[test]
fn test_encode_overflow_is_infinite() {
    init_tracing();
    let value: SoftF32 = encode(true, 128, 0x80_0000);
    assert_eq!(value.to_f32(), f32::NEG_INFINITY);

    // Carry out of the largest finite exponent.
    let carried: SoftF32 = encode(false, 127, 0x1FF_FFFF);
    assert_eq!(carried.to_f32(), f32::INFINITY);
}

#[test]
fn test_encode_subnormal() {
    init_tracing();
    let value: SoftF32 = encode(false, -126, 0x40_0000);
    assert_eq!(value.to_bits(), 0x0040_0000);
    assert!(value.is_subnormal());
}

#[test]
fn test_set_mantissa_normalized_carry() {
    let mut value = soft(2.0);
    value.set_mantissa_normalized(0x180_0000);
    assert_eq!(value.to_f32(), 6.0);
}

#[test]
fn test_set_mantissa_normalized_cancellation_keeps_sign() {
    let mut value = soft(-1.0);
    value.set_mantissa_normalized(0x40_0000);
    assert_eq!(value.to_f32(), -0.5);
}

#[test]
fn test_set_mantissa_normalized_from_subnormal() {
    let mut value = SoftF32::from_bits(1);
    value.set_mantissa_normalized(0x80_0000);
    assert_eq!(value.to_bits(), 0x0080_0000);
}
