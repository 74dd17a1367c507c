//! # Classification Tests

use std::num::FpCategory;

use mantissa_core::{Class, SoftF32};
use rstest::rstest;

#[rstest]
#[case::positive_zero(0x0000_0000, Class::Zero)]
#[case::negative_zero(0x8000_0000, Class::Zero)]
#[case::smallest_subnormal(0x0000_0001, Class::Subnormal)]
#[case::largest_subnormal(0x007F_FFFF, Class::Subnormal)]
#[case::negative_subnormal(0x8000_0010, Class::Subnormal)]
#[case::smallest_normal(0x0080_0000, Class::Normal)]
#[case::one(0x3F80_0000, Class::Normal)]
#[case::largest_finite(0x7F7F_FFFF, Class::Normal)]
#[case::negative_normal(0xC006_6666, Class::Normal)]
#[case::positive_infinity(0x7F80_0000, Class::Infinite)]
#[case::negative_infinity(0xFF80_0000, Class::Infinite)]
#[case::quiet_nan(0x7FC0_0000, Class::Nan)]
#[case::signalling_nan(0x7F80_0001, Class::Nan)]
#[case::negative_nan(0xFFFF_FFFF, Class::Nan)]
fn test_classify(#[case] bits: u32, #[case] expected: Class) {
    let value = SoftF32::from_bits(bits);
    assert_eq!(value.classify(), expected);
    assert_eq!(
        FpCategory::from(value.classify()),
        f32::from_bits(bits).classify()
    );

    let predicates = [
        value.is_zero(),
        value.is_subnormal(),
        value.is_normal(),
        value.is_infinity(),
        value.is_not_a_number(),
    ];
    assert_eq!(
        predicates.iter().filter(|&&hit| hit).count(),
        1,
        "exactly one class predicate must hold for {bits:#010x}"
    );
    assert_eq!(
        value.is_finite(),
        !matches!(expected, Class::Infinite | Class::Nan)
    );
}

#[test]
fn test_classify_ignores_sign() {
    for bits in [0x0000_0000, 0x0000_0001, 0x3F80_0000, 0x7F80_0000, 0x7FC0_0000] {
        let positive = SoftF32::from_bits(bits);
        assert_eq!(positive.classify(), positive.negated().classify());
    }
}
