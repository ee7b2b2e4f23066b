//! Unsigned 64-bit values carried as a [`BigInt`] in `[0, 2^64)`.
//!
//! Every constructor and operation reduces its result modulo 2^64, so a
//! `Word64` never holds a negative value or one with bits at or above bit 64.


use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr};

use crate::error::{ArithmeticError, ParseIntError};
use crate::{BigInt, Int64};

/// `2^64`.
fn modulus() -> BigInt {
    BigInt::from_words([0, 0, 1], 0)
}

/// `2^64 - 1`, the all-ones 64-bit pattern.
fn mask() -> BigInt {
    BigInt::from_u64(u64::MAX)
}

/// An unsigned 64-bit integer.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Word64(BigInt);

impl Word64 {
    /// The low 64 bits of `value`, read as unsigned.
    pub fn from_bigint(value: &BigInt) -> Self {
        Word64(value & &mask())
    }

    #[inline]
    pub fn from_u64(value: u64) -> Self {
        Word64(BigInt::from_u64(value))
    }

    /// `(value + 2^64) mod 2^64`: the unsigned reading of a signed 64-bit
    /// value.
    pub fn from_int64(value: Int64) -> Self {
        let modulus = modulus();
        Word64((&modulus + &BigInt::from_int64(value)).rem_nonzero(&modulus))
    }

    /// Parse unsigned text in `radix`, wrapping values outside `[0, 2^64)`.
    ///
    /// # Errors
    ///
    /// The same failures as [`BigInt::from_str_radix`].
    pub fn from_str_radix(text: &str, radix: u32) -> Result<Self, ParseIntError> {
        BigInt::from_str_radix(text, radix).map(|value| Self::from_bigint(&value))
    }

    pub fn to_u64(&self) -> u64 {
        u64::from(self.0.word_unsigned(0)) | (u64::from(self.0.word_unsigned(1)) << 32)
    }

    /// Reinterpret the 64 bits as a signed value.
    pub fn to_int64(&self) -> Int64 {
        self.0.to_int64()
    }

    #[inline]
    pub fn as_bigint(&self) -> &BigInt {
        &self.0
    }

    #[inline]
    pub fn into_bigint(self) -> BigInt {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Render in `radix`, lowercase.
    ///
    /// # Panics
    ///
    /// Panics if `radix` is outside `2..=36`.
    pub fn to_str_radix(&self, radix: u32) -> String {
        self.0.to_str_radix(radix)
    }

    pub fn wrapping_add(&self, rhs: &Self) -> Self {
        Self::from_bigint(&(&self.0 + &rhs.0))
    }

    pub fn wrapping_sub(&self, rhs: &Self) -> Self {
        Self::from_bigint(&(&self.0 - &rhs.0))
    }

    pub fn wrapping_mul(&self, rhs: &Self) -> Self {
        Self::from_bigint(&(&self.0 * &rhs.0))
    }

    /// Truncating quotient.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::DivisionByZero`] when `divisor` is zero.
    pub fn quot(&self, divisor: &Self) -> Result<Self, ArithmeticError> {
        self.0.quot(&divisor.0).map(Word64)
    }

    /// Remainder of [`Word64::quot`].
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::DivisionByZero`] when `divisor` is zero.
    pub fn rem(&self, divisor: &Self) -> Result<Self, ArithmeticError> {
        self.0.rem(&divisor.0).map(Word64)
    }
}

impl BitAnd for &Word64 {
    type Output = Word64;

    #[inline]
    fn bitand(self, rhs: &Word64) -> Word64 {
        Word64(&self.0 & &rhs.0)
    }
}

impl BitOr for &Word64 {
    type Output = Word64;

    #[inline]
    fn bitor(self, rhs: &Word64) -> Word64 {
        Word64(&self.0 | &rhs.0)
    }
}

impl BitXor for &Word64 {
    type Output = Word64;

    #[inline]
    fn bitxor(self, rhs: &Word64) -> Word64 {
        Word64(&self.0 ^ &rhs.0)
    }
}

/// Flips all 64 bits.
impl Not for &Word64 {
    type Output = Word64;

    #[inline]
    fn not(self) -> Word64 {
        Word64(&self.0 ^ &mask())
    }
}

/// Left shift modulo 2^64; amounts of 64 or more give zero.
impl Shl<u32> for &Word64 {
    type Output = Word64;

    fn shl(self, amount: u32) -> Word64 {
        Word64::from_bigint(&(&self.0 << amount))
    }
}

/// Logical right shift.
impl Shr<u32> for &Word64 {
    type Output = Word64;

    fn shr(self, amount: u32) -> Word64 {
        Word64(&self.0 >> amount)
    }
}

// Conversions

impl From<u64> for Word64 {
    #[inline]
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<Word64> for u64 {
    #[inline]
    fn from(value: Word64) -> Self {
        value.to_u64()
    }
}

impl From<Word64> for BigInt {
    #[inline]
    fn from(value: Word64) -> Self {
        value.into_bigint()
    }
}

// Formatting

impl fmt::Debug for Word64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Display for Word64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
