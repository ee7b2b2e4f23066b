#![expect(clippy::unwrap_used, reason = "tests unwrap known-good parses")]

use pretty_assertions::assert_eq;

use crate::{ArithmeticError, BigInt, ParseIntError};

fn big(text: &str) -> BigInt {
    text.parse().unwrap()
}

fn int(value: i64) -> BigInt {
    BigInt::from_i64(value)
}

// === Construction & Normalization ===

#[test]
fn from_i32_sign_extension() {
    assert_eq!(int(0).words.len(), 0);
    assert_eq!(int(0).sign, 0);
    assert_eq!(int(-1).words.len(), 0);
    assert_eq!(int(-1).sign, -1);
    assert_eq!(int(5).words.as_slice(), &[5]);
    assert_eq!(int(-5).words.as_slice(), &[-5]);
}

#[test]
fn from_words_trims_redundant_high_words() {
    let value = BigInt::from_words([7, 0, 0, 0], 0);
    assert_eq!(value.words.as_slice(), &[7]);
    let negative = BigInt::from_words([-7, -1, -1], -1);
    assert_eq!(negative.words.as_slice(), &[-7]);
    assert_eq!(negative, int(-7));
}

#[test]
fn positive_value_with_high_bit_keeps_word() {
    // 2^31 needs its word even though the word is negative as an i32
    let value = BigInt::from_u64(1 << 31);
    assert_eq!(value.words.as_slice(), &[i32::MIN]);
    assert!(!value.is_negative());
    assert_eq!(value.to_f64(), 2_147_483_648.0);
}

#[test]
fn from_bits_reads_sign_from_top_word() {
    assert_eq!(BigInt::from_bits(&[]), BigInt::zero());
    assert_eq!(BigInt::from_bits(&[-1]), int(-1));
    assert_eq!(BigInt::from_bits(&[-1, 0]), BigInt::from_u64(0xFFFF_FFFF));
    assert_eq!(BigInt::from_bits(&[0, i32::MIN]), int(i64::MIN));
}

#[test]
fn small_values_equal_regardless_of_cache() {
    for value in -130..=130 {
        let cached = BigInt::from_i32(value);
        let built = BigInt::from_words([value], value >> 31);
        assert_eq!(cached, built);
    }
}

#[test]
fn from_i64_and_u64_extremes() {
    assert_eq!(int(i64::MAX).to_string(), "9223372036854775807");
    assert_eq!(int(i64::MIN).to_string(), "-9223372036854775808");
    assert_eq!(BigInt::from_u64(u64::MAX).to_string(), "18446744073709551615");
}

// === Doubles ===

#[test]
fn from_f64_non_finite_is_zero() {
    assert_eq!(BigInt::from_f64(f64::NAN), BigInt::zero());
    assert_eq!(BigInt::from_f64(f64::INFINITY), BigInt::zero());
    assert_eq!(BigInt::from_f64(f64::NEG_INFINITY), BigInt::zero());
}

#[test]
fn from_f64_truncates_toward_zero() {
    assert_eq!(BigInt::from_f64(0.75), BigInt::zero());
    assert_eq!(BigInt::from_f64(-0.75), BigInt::zero());
    assert_eq!(BigInt::from_f64(3.9), int(3));
    assert_eq!(BigInt::from_f64(-3.9), int(-3));
}

#[test]
fn from_f64_large_values() {
    assert_eq!(BigInt::from_f64(4_294_967_296.0), int(1 << 32));
    assert_eq!(BigInt::from_f64(1e20), big("100000000000000000000"));
    assert_eq!(BigInt::from_f64(-1e20), big("-100000000000000000000"));
    assert_eq!(BigInt::from_f64(2f64.powi(100)), BigInt::one() << 100);
}

#[test]
fn to_f64_reads_words_unsigned() {
    assert_eq!(BigInt::from_u64(u64::MAX).to_f64(), 18_446_744_073_709_551_615.0);
    assert_eq!(int(-4_294_967_296).to_f64(), -4_294_967_296.0);
    assert_eq!((BigInt::one() << 1100).to_f64(), f64::INFINITY);
}

#[test]
fn ratio_to_f64_divides_in_double_precision() {
    assert_eq!(BigInt::ratio_to_f64(&int(1), &int(4)), 0.25);
    assert_eq!(BigInt::ratio_to_f64(&int(-3), &int(2)), -1.5);
}

// === Predicates & Comparison ===

#[test]
fn predicates() {
    assert!(BigInt::zero().is_zero());
    assert!(!int(-1).is_zero());
    assert!(int(-1).is_negative());
    assert!(!int(0).is_negative());
    assert!(int(-1).is_odd());
    assert!(int(7).is_odd());
    assert!(!int(-4).is_odd());
    assert!(!BigInt::zero().is_odd());
}

#[test]
fn ordering_across_word_lengths() {
    assert!(int(-1) < int(0));
    assert!(int(1 << 40) > int(1 << 20));
    assert!(int(-(1 << 40)) < int(-(1 << 20)));
    assert!(big("-99999999999999999999") < int(i64::MIN));
    assert_eq!(big("123456789012345678901234567890").cmp(&big("123456789012345678901234567890")), std::cmp::Ordering::Equal);
}

#[test]
fn signum_and_abs() {
    assert_eq!(int(-42).signum(), int(-1));
    assert_eq!(int(0).signum(), int(0));
    assert_eq!(big("1000000000000000000000").signum(), int(1));
    assert_eq!(int(-42).abs(), int(42));
    assert_eq!(int(42).abs(), int(42));
}

// === Arithmetic ===

#[test]
fn add_carries_across_words() {
    assert_eq!(&int(0xFFFF_FFFF) + &int(1), int(1 << 32));
    assert_eq!(&int(-1) + &int(1), BigInt::zero());
    assert_eq!(&int(i64::MAX) + &int(1), big("9223372036854775808"));
}

#[test]
fn sub_and_neg() {
    assert_eq!(&int(5) - &int(8), int(-3));
    assert_eq!(-int(0), int(0));
    assert_eq!(-int(i64::MIN), big("9223372036854775808"));
    assert_eq!(-(-big("-98765432109876543210")), big("-98765432109876543210"));
}

#[test]
fn mul_small_operands_use_native_product() {
    assert_eq!(&int(4095) * &int(4097), int(4095 * 4097));
    assert_eq!(&int(-300) * &int(200), int(-60_000));
    assert_eq!(&int(0) * &int(-5), int(0));
}

#[test]
fn mul_schoolbook() {
    let a = big("12345678901234567890");
    let b = big("98765432109876543210");
    assert_eq!(&a * &b, big("1219326311370217952237463801111263526900"));
    assert_eq!(&(-&a) * &b, big("-1219326311370217952237463801111263526900"));
    assert_eq!(&(-&a) * &(-&b), big("1219326311370217952237463801111263526900"));
}

#[test]
fn mul_by_word_boundaries() {
    let max_word = BigInt::from_u64(0xFFFF_FFFF);
    assert_eq!(&max_word * &max_word, BigInt::from_u64(0xFFFF_FFFE_0000_0001));
    assert_eq!(&BigInt::from_u64(u64::MAX) * &int(2), &(BigInt::one() << 65) - &int(2));
}

// === Division ===

#[test]
fn quot_rem_truncate_toward_zero() {
    assert_eq!(int(7).quot(&int(2)).unwrap(), int(3));
    assert_eq!(int(-7).quot(&int(2)).unwrap(), int(-3));
    assert_eq!(int(7).quot(&int(-2)).unwrap(), int(-3));
    assert_eq!(int(-7).quot(&int(-2)).unwrap(), int(3));
    assert_eq!(int(-7).rem(&int(3)).unwrap(), int(-1));
    assert_eq!(int(7).rem(&int(-3)).unwrap(), int(1));
}

#[test]
fn div_mod_floor() {
    assert_eq!(int(-7).mod_floor(&int(3)).unwrap(), int(2));
    assert_eq!(int(7).mod_floor(&int(-3)).unwrap(), int(-2));
    assert_eq!(int(-7).div_floor(&int(2)).unwrap(), int(-4));
    assert_eq!(int(7).div_floor(&int(-2)).unwrap(), int(-4));
    assert_eq!(int(-7).div_floor(&int(-2)).unwrap(), int(3));
    assert_eq!(int(-6).div_floor(&int(3)).unwrap(), int(-2));
    assert_eq!(int(-6).mod_floor(&int(3)).unwrap(), int(0));
}

#[test]
fn truncating_and_flooring_agree_on_same_signs() {
    let a = big("-123456789012345678901234567890");
    let b = big("-987654321");
    assert_eq!(a.quot(&b).unwrap(), a.div_floor(&b).unwrap());
    assert_eq!(a.rem(&b).unwrap(), a.mod_floor(&b).unwrap());
}

#[test]
fn division_by_zero_is_an_error() {
    let zero = BigInt::zero();
    assert_eq!(int(1).quot(&zero), Err(ArithmeticError::DivisionByZero));
    assert_eq!(int(1).rem(&zero), Err(ArithmeticError::DivisionByZero));
    assert_eq!(int(1).div_floor(&zero), Err(ArithmeticError::DivisionByZero));
    assert_eq!(int(1).mod_floor(&zero), Err(ArithmeticError::DivisionByZero));
    assert_eq!(zero.quot_rem(&zero), Err(ArithmeticError::DivisionByZero));
    assert_eq!(zero.div_mod(&zero), Err(ArithmeticError::DivisionByZero));
}

#[test]
fn zero_dividend() {
    assert_eq!(BigInt::zero().quot(&int(-9)).unwrap(), BigInt::zero());
    assert_eq!(BigInt::zero().mod_floor(&int(-9)).unwrap(), BigInt::zero());
}

#[test]
fn quot_wide_operands() {
    let dividend = big("1219326311370217952237463801111263526900");
    let divisor = big("98765432109876543210");
    assert_eq!(dividend.quot(&divisor).unwrap(), big("12345678901234567890"));
    assert_eq!(dividend.rem(&divisor).unwrap(), BigInt::zero());

    let off_by_one = &dividend + &int(17);
    let (q, r) = off_by_one.quot_rem(&divisor).unwrap();
    assert_eq!(q, big("12345678901234567890"));
    assert_eq!(r, int(17));
}

#[test]
fn quot_estimate_above_48_bits_steps_down() {
    // Quotient of ~2^80 forces the geometric correction step.
    let dividend = &(BigInt::one() << 120) - &int(1);
    let divisor = &(BigInt::one() << 40) + &int(3);
    let (q, r) = dividend.quot_rem(&divisor).unwrap();
    assert_eq!(&(&q * &divisor) + &r, dividend);
    assert!(r >= BigInt::zero() && r < divisor);
}

#[test]
fn quot_beyond_double_range() {
    let dividend = &(BigInt::one() << 2100) + &big("123456789123456789");
    let divisor = &(BigInt::one() << 1500) - &int(7);
    let (q, r) = dividend.quot_rem(&divisor).unwrap();
    assert_eq!(&(&q * &divisor) + &r, dividend);
    assert!(r >= BigInt::zero() && r < divisor);

    let small_divisor = int(3);
    let (q, r) = dividend.quot_rem(&small_divisor).unwrap();
    assert_eq!(&(&q * &small_divisor) + &r, dividend);
    assert!(r >= BigInt::zero() && r < small_divisor);
}

#[test]
fn div_mod_pair() {
    let (q, m) = int(-17).div_mod(&int(5)).unwrap();
    assert_eq!((q, m), (int(-4), int(3)));
}

// === Bitwise & Shifts ===

#[test]
fn bitwise_with_sign_extension() {
    assert_eq!(&int(-1) & &big("123456789012345678901"), big("123456789012345678901"));
    assert_eq!(&int(0b1100) | &int(0b1010), int(0b1110));
    assert_eq!(&int(0b1100) ^ &int(0b1010), int(0b0110));
    assert_eq!(&int(-8) & &int(0xFF), int(0xF8));
    assert_eq!(&int(-8) | &int(3), int(-5));
    assert_eq!(!int(0), int(-1));
    assert_eq!(!big("18446744073709551616"), big("-18446744073709551617"));
}

#[test]
fn shifts() {
    assert_eq!(int(1) << 0, int(1));
    assert_eq!(int(1) << 32, int(1 << 32));
    assert_eq!(int(3) << 33, int(3 << 33));
    assert_eq!(int(-3) << 40, int(-3 << 40));
    assert_eq!(int(1 << 40) >> 8, int(1 << 32));
    assert_eq!(int(-8) >> 1, int(-4));
    assert_eq!(int(-1) >> 100, int(-1));
    assert_eq!(int(5) >> 100, int(0));
    assert_eq!(int(i64::MIN) >> 63, int(-1));
    assert_eq!((BigInt::one() << 200) >> 199, int(2));
}

#[test]
fn narrow_wraps_to_width() {
    assert_eq!(int(255).narrow(8), int(-1));
    assert_eq!(int(128).narrow(8), int(-128));
    assert_eq!(int(127).narrow(8), int(127));
    assert_eq!(int(0x1_0000_0005).narrow(32), int(5));
    assert_eq!(int(0x8000_0000).narrow(32), int(i64::from(i32::MIN)));
    assert_eq!(BigInt::from_u64(u64::MAX).narrow(64), int(-1));
    assert_eq!(int(-1).narrow(0), int(0));
}

// === Text ===

#[test]
fn decimal_round_trip() {
    let text = "12345678901234567890";
    assert_eq!(big(text).to_str_radix(10), text);
    assert_eq!(big("-12345678901234567890").to_string(), "-12345678901234567890");
}

#[test]
fn chunk_padding_is_preserved() {
    assert_eq!(big("1000000000001").to_string(), "1000000000001");
    assert_eq!(big("1000000").to_string(), "1000000");
    assert_eq!(big("999999").to_string(), "999999");
}

#[test]
fn radix_rendering() {
    assert_eq!(int(255).to_str_radix(16), "ff");
    assert_eq!(int(-255).to_str_radix(2), "-11111111");
    assert_eq!(BigInt::from_u64(u64::MAX).to_str_radix(36), "3w5e11264sgsf");
    assert_eq!(BigInt::zero().to_str_radix(7), "0");
}

#[test]
fn radix_parsing_accepts_either_case() {
    assert_eq!(BigInt::from_str_radix("FF", 16).unwrap(), int(255));
    assert_eq!(BigInt::from_str_radix("ff", 16).unwrap(), int(255));
    assert_eq!(BigInt::from_str_radix("-zz", 36).unwrap(), int(-1295));
    assert_eq!(BigInt::from_str_radix("3w5e11264sgsf", 36).unwrap(), BigInt::from_u64(u64::MAX));
}

#[test]
fn parse_errors() {
    assert_eq!(BigInt::from_str_radix("", 10), Err(ParseIntError::Empty));
    assert_eq!(BigInt::from_str_radix("-", 10), Err(ParseIntError::Empty));
    assert_eq!(
        BigInt::from_str_radix("12", 37),
        Err(ParseIntError::RadixOutOfRange { radix: 37 })
    );
    assert_eq!(
        BigInt::from_str_radix("12", 1),
        Err(ParseIntError::RadixOutOfRange { radix: 1 })
    );
    assert_eq!(
        BigInt::from_str_radix("12-3", 10),
        Err(ParseIntError::InteriorMinus { offset: 2 })
    );
    assert_eq!(
        BigInt::from_str_radix("--3", 10),
        Err(ParseIntError::InteriorMinus { offset: 1 })
    );
    assert_eq!(
        BigInt::from_str_radix("129", 8),
        Err(ParseIntError::InvalidDigit { digit: '9', offset: 2, radix: 8 })
    );
    assert_eq!(
        BigInt::from_str_radix("+5", 10),
        Err(ParseIntError::InvalidDigit { digit: '+', offset: 0, radix: 10 })
    );
}

#[test]
fn parse_error_messages() {
    assert_eq!(ParseIntError::Empty.to_string(), "number format error: empty string");
    assert_eq!(
        ParseIntError::RadixOutOfRange { radix: 40 }.to_string(),
        "radix out of range: 40"
    );
}

#[test]
fn display_honours_width() {
    assert_eq!(format!("{:>6}", int(-42)), "   -42");
    assert_eq!(format!("{:+}", int(42)), "+42");
    assert_eq!(format!("{:?}", int(-42)), "-42");
}
