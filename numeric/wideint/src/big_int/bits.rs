//! Bitwise operations and shifts.
//!
//! The sign word takes part in every word-wise operation, so results stay
//! correctly sign-extended without padding the operands.

use std::iter;
use std::ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr};

use super::arith::forward_binop;
use super::BigInt;

fn word_wise(lhs: &BigInt, rhs: &BigInt, op: fn(i32, i32) -> i32) -> BigInt {
    let len = lhs.words.len().max(rhs.words.len());
    BigInt::from_words(
        (0..len).map(|index| op(lhs.word(index), rhs.word(index))),
        op(lhs.sign, rhs.sign),
    )
}

fn and(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    word_wise(lhs, rhs, |a, b| a & b)
}

fn or(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    word_wise(lhs, rhs, |a, b| a | b)
}

fn xor(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    word_wise(lhs, rhs, |a, b| a ^ b)
}

fn not(value: &BigInt) -> BigInt {
    BigInt::from_words(value.words.iter().map(|word| !word), !value.sign)
}

/// Word `index - back`, or zero when that falls below word 0.
fn word_below(value: &BigInt, index: usize, back: usize) -> i32 {
    index.checked_sub(back).map_or(0, |i| value.word(i))
}

fn shift_left(value: &BigInt, amount: u32) -> BigInt {
    let word_shift = (amount >> 5) as usize;
    let bit_shift = amount % 32;
    let len = value.words.len() + word_shift + usize::from(bit_shift > 0);
    let words = (0..len).map(|index| {
        let word = word_below(value, index, word_shift);
        if bit_shift == 0 {
            word
        } else {
            let carried = (word_below(value, index, word_shift + 1) as u32) >> (32 - bit_shift);
            (word << bit_shift) | carried as i32
        }
    });
    BigInt::from_words(words, value.sign)
}

fn shift_right(value: &BigInt, amount: u32) -> BigInt {
    let word_shift = (amount >> 5) as usize;
    let bit_shift = amount % 32;
    let len = value.words.len().saturating_sub(word_shift);
    let words = (0..len).map(|index| {
        let word = value.word(index + word_shift);
        if bit_shift == 0 {
            word
        } else {
            let carried = value.word(index + word_shift + 1) << (32 - bit_shift);
            (((word as u32) >> bit_shift) as i32) | carried
        }
    });
    BigInt::from_words(words, value.sign)
}

impl BigInt {
    /// Keep the low `bits` bits and sign-extend from bit `bits - 1`.
    ///
    /// This is the narrowing used to wrap a value into an `N`-bit signed
    /// integer. `narrow(0)` is zero.
    pub fn narrow(&self, bits: u32) -> BigInt {
        if bits == 0 {
            return BigInt::zero();
        }
        let top = ((bits - 1) >> 5) as usize;
        let top_bit = (bits - 1) % 32;
        let mask = if top_bit == 31 {
            u32::MAX
        } else {
            (1u32 << (top_bit + 1)) - 1
        };
        let value = self.word_unsigned(top) & mask;
        let negative = value & (1 << top_bit) != 0;
        let (top_word, sign) = if negative {
            ((value | !mask) as i32, -1)
        } else {
            (value as i32, 0)
        };
        BigInt::from_words(
            (0..top).map(|index| self.word(index)).chain(iter::once(top_word)),
            sign,
        )
    }
}

forward_binop!(BitAnd, bitand, and);
forward_binop!(BitOr, bitor, or);
forward_binop!(BitXor, bitxor, xor);

impl Not for &BigInt {
    type Output = BigInt;

    #[inline]
    fn not(self) -> BigInt {
        not(self)
    }
}

impl Not for BigInt {
    type Output = BigInt;

    #[inline]
    fn not(self) -> BigInt {
        not(&self)
    }
}

impl Shl<u32> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn shl(self, amount: u32) -> BigInt {
        shift_left(self, amount)
    }
}

impl Shl<u32> for BigInt {
    type Output = BigInt;

    #[inline]
    fn shl(self, amount: u32) -> BigInt {
        shift_left(&self, amount)
    }
}

/// Arithmetic shift: the sign word fills vacated high bits.
impl Shr<u32> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn shr(self, amount: u32) -> BigInt {
        shift_right(self, amount)
    }
}

impl Shr<u32> for BigInt {
    type Output = BigInt;

    #[inline]
    fn shr(self, amount: u32) -> BigInt {
        shift_right(&self, amount)
    }
}
