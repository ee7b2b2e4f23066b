//! Addition, subtraction, negation and multiplication.

use std::ops::{Add, Mul, Neg, Sub};

use super::{BigInt, Words};

/// Operands below this bound multiply exactly in double precision.
pub(crate) const NATIVE_PRODUCT_BOUND: u32 = 1 << 24;

/// Word-wise two's-complement addition over `max(len) + 1` words.
fn add(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    let len = lhs.words.len().max(rhs.words.len());
    let mut carry = 0u64;
    let words: Words = (0..=len)
        .map(|index| {
            let sum =
                u64::from(lhs.word_unsigned(index)) + u64::from(rhs.word_unsigned(index)) + carry;
            carry = sum >> 32;
            sum as u32 as i32
        })
        .collect();
    BigInt::from_bits(&words)
}

fn negate(value: &BigInt) -> BigInt {
    add(&!value, &BigInt::one())
}

fn subtract(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    add(lhs, &negate(rhs))
}

fn multiply(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    if lhs.is_zero() || rhs.is_zero() {
        return BigInt::zero();
    }
    match (lhs.is_negative(), rhs.is_negative()) {
        (true, true) => return multiply(&negate(lhs), &negate(rhs)),
        (true, false) => return negate(&multiply(&negate(lhs), rhs)),
        (false, true) => return negate(&multiply(lhs, &negate(rhs))),
        (false, false) => {}
    }
    if below_native_bound(lhs) && below_native_bound(rhs) {
        return BigInt::from_f64(lhs.to_f64() * rhs.to_f64());
    }
    schoolbook(lhs, rhs)
}

fn below_native_bound(value: &BigInt) -> bool {
    value.words.len() <= 1 && value.word_unsigned(0) < NATIVE_PRODUCT_BOUND
}

/// Product of two positive values, one row of partial products per word of
/// `lhs`, carried into a buffer of `len(lhs) + len(rhs)` words.
fn schoolbook(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    let rhs_len = rhs.words.len();
    let mut product = vec![0u32; lhs.words.len() + rhs_len];
    for (i, &a) in lhs.words.iter().enumerate() {
        let a = u64::from(a as u32);
        let mut carry = 0u64;
        for (j, &b) in rhs.words.iter().enumerate() {
            // a * b + two u32 addends never exceeds u64::MAX
            let t = a * u64::from(b as u32) + u64::from(product[i + j]) + carry;
            product[i + j] = t as u32;
            carry = t >> 32;
        }
        product[i + rhs_len] = carry as u32;
    }
    BigInt::from_words(product.into_iter().map(|word| word as i32), 0)
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident, $func:ident) => {
        impl $imp<&BigInt> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: &BigInt) -> BigInt {
                $func(self, rhs)
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: BigInt) -> BigInt {
                $func(self, &rhs)
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: &BigInt) -> BigInt {
                $func(&self, rhs)
            }
        }

        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: BigInt) -> BigInt {
                $func(&self, &rhs)
            }
        }
    };
}

pub(super) use forward_binop;

forward_binop!(Add, add, add);
forward_binop!(Sub, sub, subtract);
forward_binop!(Mul, mul, multiply);

impl Neg for &BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(self) -> BigInt {
        negate(self)
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(self) -> BigInt {
        negate(&self)
    }
}
