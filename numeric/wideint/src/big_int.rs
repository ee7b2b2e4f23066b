//! Arbitrary-precision signed integers.
//!
//! A `BigInt` is a little-endian run of 32-bit words followed by an implicit,
//! infinite run of its sign word (`0` for non-negative values, `-1` for
//! negative ones). Every constructor trims stored words equal to the sign
//! word, so two values are equal as data exactly when they are equal as
//! numbers. `Eq` and `Hash` are derived on that basis.
//!
//! Operations that cannot fail are exposed through the `std::ops` traits on
//! both owned values and references. Division can fail and is method-only:
//! see [`BigInt::quot`], [`BigInt::rem`], [`BigInt::div_floor`] and
//! [`BigInt::mod_floor`].

mod arith;
mod bits;
mod division;
mod text;

#[cfg(test)]
mod tests;

use std::cmp::Ordering;
use std::fmt;

use smallvec::SmallVec;

use crate::cache::SmallIntCache;

pub(crate) use arith::NATIVE_PRODUCT_BOUND;
pub(crate) use division::correction_step;

/// Word storage; one- and two-word values stay inline.
pub(crate) type Words = SmallVec<[i32; 2]>;

pub(crate) const TWO_PWR_32: f64 = 4_294_967_296.0;

static SMALL_VALUES: SmallIntCache<BigInt> = SmallIntCache::new();

/// An arbitrary-precision signed integer.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    words: Words,
    /// `0` or `-1`: the value of every word past `words`.
    sign: i32,
}

impl BigInt {
    /// Build a value from words and an explicit sign word, trimming redundant
    /// high words.
    pub(crate) fn from_words(words: impl IntoIterator<Item = i32>, sign: i32) -> Self {
        debug_assert!(sign == 0 || sign == -1, "sign word must be 0 or -1");
        let mut words: Words = words.into_iter().collect();
        while words.last() == Some(&sign) {
            words.pop();
        }
        BigInt { words, sign }
    }

    /// Build a value from two's-complement words; the top bit of the last
    /// word decides the sign. An empty slice is zero.
    pub fn from_bits(words: &[i32]) -> Self {
        let sign = match words.last() {
            Some(&top) if top < 0 => -1,
            _ => 0,
        };
        Self::from_words(words.iter().copied(), sign)
    }

    /// Wrap a machine integer. Values in `-128..=127` share cached instances.
    pub fn from_i32(value: i32) -> Self {
        SMALL_VALUES.get_or_build(value, || Self::from_words([value], value >> 31))
    }

    pub fn from_i64(value: i64) -> Self {
        if let Ok(small) = i32::try_from(value) {
            return Self::from_i32(small);
        }
        Self::from_words([value as i32, (value >> 32) as i32], (value >> 63) as i32)
    }

    pub fn from_u64(value: u64) -> Self {
        Self::from_words([value as i32, (value >> 32) as i32], 0)
    }

    /// Convert a double, truncating toward zero.
    ///
    /// NaN and the infinities convert to zero.
    pub fn from_f64(value: f64) -> Self {
        if !value.is_finite() {
            tracing::debug!(value, "non-finite double converted to zero");
            return Self::zero();
        }
        if value < 0.0 {
            return -Self::from_f64(-value);
        }
        let mut words = Words::new();
        let mut pow = 1.0;
        while value >= pow {
            words.push(((value / pow).trunc() % TWO_PWR_32) as u32 as i32);
            pow *= TWO_PWR_32;
        }
        Self::from_words(words, 0)
    }

    pub fn zero() -> Self {
        Self::from_i32(0)
    }

    pub fn one() -> Self {
        Self::from_i32(1)
    }

    /// Word `index`, reading the sign word past the stored words.
    #[inline]
    pub(crate) fn word(&self, index: usize) -> i32 {
        self.words.get(index).copied().unwrap_or(self.sign)
    }

    #[inline]
    pub(crate) fn word_unsigned(&self, index: usize) -> u32 {
        self.word(index) as u32
    }

    /// Bit length of a non-negative value (`0` for zero).
    pub(crate) fn magnitude_bits(&self) -> u32 {
        debug_assert!(!self.is_negative());
        match self.words.last() {
            Some(&top) => {
                32 * (self.words.len() as u32 - 1) + (u32::BITS - (top as u32).leading_zeros())
            }
            None => 0,
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.sign == 0 && self.words.is_empty()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == -1
    }

    #[inline]
    pub fn is_odd(&self) -> bool {
        self.word(0) & 1 != 0
    }

    /// `-1`, `0` or `1` according to the sign of the value.
    pub fn signum(&self) -> BigInt {
        match self.cmp(&Self::zero()) {
            Ordering::Less => Self::from_i32(-1),
            Ordering::Equal => Self::zero(),
            Ordering::Greater => Self::one(),
        }
    }

    pub fn abs(&self) -> BigInt {
        if self.is_negative() {
            -self
        } else {
            self.clone()
        }
    }

    /// The low 32 bits as a signed machine integer.
    pub fn to_i32(&self) -> i32 {
        self.word(0)
    }

    /// The low 32 bits as an unsigned machine integer.
    pub fn to_u32(&self) -> u32 {
        self.word_unsigned(0)
    }

    /// Convert to the nearest double; magnitudes beyond `f64::MAX` become
    /// infinite.
    pub fn to_f64(&self) -> f64 {
        if self.is_negative() {
            return -(-self).to_f64();
        }
        self.words
            .iter()
            .rev()
            .fold(0.0, |acc, &word| acc * TWO_PWR_32 + f64::from(word as u32))
    }

    /// `a / b` computed in double precision.
    pub fn ratio_to_f64(numerator: &BigInt, denominator: &BigInt) -> f64 {
        numerator.to_f64() / denominator.to_f64()
    }
}

impl Ord for BigInt {
    /// Orders by the sign of `self - other`.
    fn cmp(&self, other: &Self) -> Ordering {
        let difference = self - other;
        if difference.is_negative() {
            Ordering::Less
        } else if difference.is_zero() {
            Ordering::Equal
        } else {
            Ordering::Greater
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}

// Conversions

impl From<i32> for BigInt {
    fn from(value: i32) -> Self {
        Self::from_i32(value)
    }
}

impl From<u32> for BigInt {
    fn from(value: u32) -> Self {
        Self::from_u64(u64::from(value))
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<u64> for BigInt {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

// Formatting

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(
            !self.is_negative(),
            "",
            self.abs().to_str_radix(10).as_str(),
        )
    }
}
