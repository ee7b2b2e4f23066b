//! Fixed-width 64-bit signed integers as a pair of 32-bit words.
//!
//! `Int64` deliberately does NOT implement `Add`, `Sub`, `Mul` or `Neg`.
//! Every arithmetic operation wraps modulo 2^64 and is spelled out as a
//! `wrapping_*` method so the wraparound is visible at the call site. Division
//! returns `Result` because a zero divisor has no value.
//!
//! Bitwise traits (`BitAnd`, `BitOr`, `BitXor`, `Not`) are implemented because
//! they cannot overflow.


use std::cmp::Ordering;
use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};
use std::str::FromStr;

use crate::big_int::{correction_step, NATIVE_PRODUCT_BOUND, TWO_PWR_32};
use crate::error::{ArithmeticError, ParseIntError};
use crate::BigInt;

const TWO_PWR_63: f64 = 9_223_372_036_854_775_808.0;

/// A 64-bit two's-complement integer, `high * 2^32 + (low as u32)`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Int64 {
    low: i32,
    high: i32,
}

impl Int64 {
    pub const ZERO: Self = Self::from_bits(0, 0);
    pub const ONE: Self = Self::from_bits(1, 0);
    pub const NEG_ONE: Self = Self::from_bits(-1, -1);
    /// `-2^63`.
    pub const MIN: Self = Self::from_bits(0, i32::MIN);
    /// `2^63 - 1`.
    pub const MAX: Self = Self::from_bits(-1, i32::MAX);

    /// Build from the low and high 32-bit words.
    #[inline]
    pub const fn from_bits(low: i32, high: i32) -> Self {
        Self { low, high }
    }

    #[inline]
    pub const fn from_i32(value: i32) -> Self {
        Self::from_bits(value, value >> 31)
    }

    #[inline]
    pub const fn from_i64(value: i64) -> Self {
        Self::from_bits(value as i32, (value >> 32) as i32)
    }

    #[inline]
    pub const fn to_i64(self) -> i64 {
        ((self.high as i64) << 32) | (self.low as u32 as i64)
    }

    /// Convert a double, truncating toward zero and saturating at `MIN` and
    /// `MAX`. NaN and the infinities convert to zero.
    pub fn from_f64(value: f64) -> Self {
        if !value.is_finite() {
            tracing::debug!(value, "non-finite double converted to zero");
            return Self::ZERO;
        }
        if value <= -TWO_PWR_63 {
            return Self::MIN;
        }
        if value + 1.0 >= TWO_PWR_63 {
            return Self::MAX;
        }
        if value < 0.0 {
            return Self::from_f64(-value).wrapping_neg();
        }
        Self::from_bits(
            (value % TWO_PWR_32) as u32 as i32,
            (value / TWO_PWR_32) as i32,
        )
    }

    /// The nearest double.
    pub fn to_f64(self) -> f64 {
        f64::from(self.high) * TWO_PWR_32 + f64::from(self.low_bits_unsigned())
    }

    #[inline]
    pub const fn low_bits(self) -> i32 {
        self.low
    }

    #[inline]
    pub const fn high_bits(self) -> i32 {
        self.high
    }

    #[inline]
    pub const fn low_bits_unsigned(self) -> u32 {
        self.low as u32
    }

    /// The low 32 bits as a signed machine integer.
    #[inline]
    pub const fn to_i32(self) -> i32 {
        self.low
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.low == 0 && self.high == 0
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.high < 0
    }

    #[inline]
    pub const fn is_odd(self) -> bool {
        self.low & 1 != 0
    }

    /// `-1`, `0` or `1` according to the sign of the value.
    pub fn signum(self) -> Self {
        match self.cmp(&Self::ZERO) {
            Ordering::Less => Self::NEG_ONE,
            Ordering::Equal => Self::ZERO,
            Ordering::Greater => Self::ONE,
        }
    }

    /// Absolute value; `MIN.abs()` is `MIN`.
    pub fn abs(self) -> Self {
        if self.is_negative() {
            self.wrapping_neg()
        } else {
            self
        }
    }

    /// Two's-complement negation; `MIN.wrapping_neg()` is `MIN`.
    pub fn wrapping_neg(self) -> Self {
        if self == Self::MIN {
            Self::MIN
        } else {
            (!self).wrapping_add(Self::ONE)
        }
    }

    /// Sum modulo 2^64, carrying from the low word into the high word.
    pub fn wrapping_add(self, rhs: Self) -> Self {
        let low = u64::from(self.low_bits_unsigned()) + u64::from(rhs.low_bits_unsigned());
        let carry = (low >> 32) as u32;
        let high = (self.high as u32)
            .wrapping_add(rhs.high as u32)
            .wrapping_add(carry);
        Self::from_bits(low as u32 as i32, high as i32)
    }

    #[inline]
    pub fn wrapping_sub(self, rhs: Self) -> Self {
        self.wrapping_add(rhs.wrapping_neg())
    }

    /// Product modulo 2^64.
    ///
    /// A `MIN` operand yields `MIN` when the other operand is odd and zero when
    /// it is even. Two small non-negative operands multiply natively.
    pub fn wrapping_mul(self, rhs: Self) -> Self {
        if self.is_zero() || rhs.is_zero() {
            return Self::ZERO;
        }
        if self == Self::MIN {
            return if rhs.is_odd() { Self::MIN } else { Self::ZERO };
        }
        if rhs == Self::MIN {
            return if self.is_odd() { Self::MIN } else { Self::ZERO };
        }
        if self.below_native_bound() && rhs.below_native_bound() {
            return Self::from_f64(self.to_f64() * rhs.to_f64());
        }
        // high * high lands entirely above bit 63 and drops out.
        let low_product =
            u64::from(self.low_bits_unsigned()) * u64::from(rhs.low_bits_unsigned());
        let high = ((low_product >> 32) as u32)
            .wrapping_add(self.low_bits_unsigned().wrapping_mul(rhs.high as u32))
            .wrapping_add((self.high as u32).wrapping_mul(rhs.low_bits_unsigned()));
        Self::from_bits(low_product as u32 as i32, high as i32)
    }

    fn below_native_bound(self) -> bool {
        self.high == 0 && self.low_bits_unsigned() < NATIVE_PRODUCT_BOUND
    }

    /// Quotient rounded toward zero. `MIN.quot(-1)` wraps to `MIN`.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::DivisionByZero`] when `divisor` is zero.
    pub fn quot(self, divisor: Self) -> Result<Self, ArithmeticError> {
        if divisor.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(self.quot_nonzero(divisor))
    }

    fn quot_nonzero(self, divisor: Self) -> Self {
        if self.is_zero() {
            return Self::ZERO;
        }
        if self == Self::MIN {
            return Self::quot_min(divisor);
        }
        if divisor == Self::MIN {
            return Self::ZERO;
        }
        match (self.is_negative(), divisor.is_negative()) {
            (true, true) => self.wrapping_neg().quot_positive(divisor.wrapping_neg()),
            (true, false) => self.wrapping_neg().quot_positive(divisor).wrapping_neg(),
            (false, true) => self.quot_positive(divisor.wrapping_neg()).wrapping_neg(),
            (false, false) => self.quot_positive(divisor),
        }
    }

    /// `MIN / divisor`; `MIN` has no positive counterpart, so divide half of
    /// it and settle the leftover with one more division.
    fn quot_min(divisor: Self) -> Self {
        if divisor == Self::ONE || divisor == Self::NEG_ONE {
            return Self::MIN;
        }
        if divisor == Self::MIN {
            return Self::ONE;
        }
        let approx = Self::MIN
            .wrapping_shr(1)
            .quot_nonzero(divisor)
            .wrapping_shl(1);
        if approx.is_zero() {
            return if divisor.is_negative() {
                Self::ONE
            } else {
                Self::NEG_ONE
            };
        }
        let leftover = Self::MIN.wrapping_sub(divisor.wrapping_mul(approx));
        approx.wrapping_add(leftover.quot_nonzero(divisor))
    }

    /// Truncating quotient of two positive values by `f64` estimation.
    fn quot_positive(self, divisor: Self) -> Self {
        let mut quotient = Self::ZERO;
        let mut remainder = self;
        while remainder >= divisor {
            let mut approx = (remainder.to_f64() / divisor.to_f64()).floor().max(1.0);
            let delta = correction_step(approx);
            let mut step = Self::from_f64(approx);
            let mut product = step.wrapping_mul(divisor);
            let mut corrections = 0u32;
            while product.is_negative() || product > remainder {
                approx -= delta;
                step = Self::from_f64(approx);
                product = step.wrapping_mul(divisor);
                corrections += 1;
            }
            if corrections > 0 {
                tracing::trace!(corrections, delta, "division estimate lowered");
            }
            if step.is_zero() {
                step = Self::ONE;
                product = divisor;
            }
            quotient = quotient.wrapping_add(step);
            remainder = remainder.wrapping_sub(product);
        }
        quotient
    }

    /// Remainder of [`Int64::quot`]; takes the sign of the dividend.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::DivisionByZero`] when `divisor` is zero.
    pub fn rem(self, divisor: Self) -> Result<Self, ArithmeticError> {
        let quotient = self.quot(divisor)?;
        Ok(self.wrapping_sub(quotient.wrapping_mul(divisor)))
    }

    /// Quotient rounded toward negative infinity.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::DivisionByZero`] when `divisor` is zero.
    pub fn div_floor(self, divisor: Self) -> Result<Self, ArithmeticError> {
        let (quotient, remainder) = self.quot_rem(divisor)?;
        if !remainder.is_zero() && self.is_negative() != divisor.is_negative() {
            Ok(quotient.wrapping_sub(Self::ONE))
        } else {
            Ok(quotient)
        }
    }

    /// Remainder of [`Int64::div_floor`]; takes the sign of the divisor.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::DivisionByZero`] when `divisor` is zero.
    pub fn mod_floor(self, divisor: Self) -> Result<Self, ArithmeticError> {
        let remainder = self.rem(divisor)?;
        if !remainder.is_zero() && remainder.is_negative() != divisor.is_negative() {
            Ok(remainder.wrapping_add(divisor))
        } else {
            Ok(remainder)
        }
    }

    /// `(quot, rem)` in one call.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::DivisionByZero`] when `divisor` is zero.
    pub fn quot_rem(self, divisor: Self) -> Result<(Self, Self), ArithmeticError> {
        let quotient = self.quot(divisor)?;
        Ok((quotient, self.wrapping_sub(quotient.wrapping_mul(divisor))))
    }

    /// `(div_floor, mod_floor)` in one call.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::DivisionByZero`] when `divisor` is zero.
    pub fn div_mod(self, divisor: Self) -> Result<(Self, Self), ArithmeticError> {
        Ok((self.div_floor(divisor)?, self.mod_floor(divisor)?))
    }

    /// Left shift by `amount mod 64`.
    pub fn wrapping_shl(self, amount: u32) -> Self {
        let amount = amount & 63;
        match amount {
            0 => self,
            1..=31 => Self::from_bits(
                self.low << amount,
                (self.high << amount) | (self.low_bits_unsigned() >> (32 - amount)) as i32,
            ),
            _ => Self::from_bits(0, self.low << (amount - 32)),
        }
    }

    /// Arithmetic right shift by `amount mod 64`.
    pub fn wrapping_shr(self, amount: u32) -> Self {
        let amount = amount & 63;
        match amount {
            0 => self,
            1..=31 => Self::from_bits(
                (self.low_bits_unsigned() >> amount) as i32 | (self.high << (32 - amount)),
                self.high >> amount,
            ),
            _ => Self::from_bits(self.high >> (amount - 32), self.high >> 31),
        }
    }

    /// Logical right shift by `amount mod 64`; vacated bits are zero.
    pub fn wrapping_ushr(self, amount: u32) -> Self {
        let amount = amount & 63;
        let high = self.high as u32;
        match amount {
            0 => self,
            1..=31 => Self::from_bits(
                (self.low_bits_unsigned() >> amount) as i32 | (self.high << (32 - amount)),
                (high >> amount) as i32,
            ),
            _ => Self::from_bits((high >> (amount - 32)) as i32, 0),
        }
    }

    /// Parse text in `radix`, wrapping values outside the 64-bit range
    /// modulo 2^64.
    ///
    /// # Errors
    ///
    /// The same failures as [`BigInt::from_str_radix`].
    pub fn from_str_radix(text: &str, radix: u32) -> Result<Self, ParseIntError> {
        BigInt::from_str_radix(text, radix).map(|value| value.to_int64())
    }

    /// Render in `radix`, lowercase, with a leading `-` for negative values.
    ///
    /// # Panics
    ///
    /// Panics if `radix` is outside `2..=36`.
    pub fn to_str_radix(self, radix: u32) -> String {
        BigInt::from_int64(self).to_str_radix(radix)
    }
}

impl Ord for Int64 {
    /// Orders by sign first, then by the sign of the difference.
    fn cmp(&self, other: &Self) -> Ordering {
        if self == other {
            return Ordering::Equal;
        }
        match (self.is_negative(), other.is_negative()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ if self.wrapping_sub(*other).is_negative() => Ordering::Less,
            _ => Ordering::Greater,
        }
    }
}

impl PartialOrd for Int64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl BigInt {
    /// Exact widening of a 64-bit value.
    pub fn from_int64(value: Int64) -> BigInt {
        BigInt::from_bits(&[value.low_bits(), value.high_bits()])
    }

    /// The low 64 bits, reinterpreted as a signed 64-bit value.
    pub fn to_int64(&self) -> Int64 {
        Int64::from_bits(self.word(0), self.word(1))
    }
}

// Bitwise Traits (cannot overflow)

impl BitAnd for Int64 {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self::from_bits(self.low & rhs.low, self.high & rhs.high)
    }
}

impl BitOr for Int64 {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self::from_bits(self.low | rhs.low, self.high | rhs.high)
    }
}

impl BitXor for Int64 {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Self::from_bits(self.low ^ rhs.low, self.high ^ rhs.high)
    }
}

impl Not for Int64 {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self::from_bits(!self.low, !self.high)
    }
}

// Conversions

impl From<i32> for Int64 {
    #[inline]
    fn from(value: i32) -> Self {
        Self::from_i32(value)
    }
}

impl From<i64> for Int64 {
    #[inline]
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<Int64> for i64 {
    #[inline]
    fn from(value: Int64) -> Self {
        value.to_i64()
    }
}

impl From<Int64> for BigInt {
    fn from(value: Int64) -> Self {
        BigInt::from_int64(value)
    }
}

impl FromStr for Int64 {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(s, 10)
    }
}

// Formatting

impl fmt::Debug for Int64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Int64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&BigInt::from_int64(*self), f)
    }
}
