//! Tests for money formatting.

use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{format_amount, format_amount_or_zero};

#[rstest]
#[case(dec!(0), "0.00")]
#[case(dec!(1), "1.00")]
#[case(dec!(1.5), "1.50")]
#[case(dec!(1234.567), "1234.57")]
#[case(dec!(-42.009), "-42.01")]
#[case(dec!(0.1), "0.10")]
fn formats_with_two_decimal_places(#[case] amount: Decimal, #[case] expected: &str) {
    assert_eq!(format_amount(amount), expected);
}

#[test]
fn none_formats_as_zero() {
    assert_eq!(format_amount_or_zero(None), "0.00");
}

#[test]
fn some_formats_like_format_amount() {
    assert_eq!(format_amount_or_zero(Some(dec!(99.9))), "99.90");
}

#[test]
fn large_amounts_keep_exactness() {
    // 2^53 + 1 is where f64 would start losing integer precision.
    let amount = Decimal::from(9_007_199_254_740_993_i64);
    assert_eq!(format_amount(amount), "9007199254740993.00");
}
