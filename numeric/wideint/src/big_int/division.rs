//! Long division by floating-point approximation.
//!
//! Each outer pass estimates `remainder / divisor` with native `f64`
//! division, multiplies the estimate back, and lowers it until the product no
//! longer exceeds the remainder. Estimates above 2^48 are lowered in steps of
//! `2^(log2(estimate) - 48)`, which keeps the correction loop short when the
//! estimate carries more bits than a double resolves. Every pass removes about
//! the top 48 bits of the remainder.
//!
//! Operands past the `f64` range are estimated from their top 64 bits and the
//! estimate is rescaled by a power of two.

use crate::error::ArithmeticError;

use super::BigInt;

/// Remainders up to this many bits convert to a finite `f64`.
const DIRECT_ESTIMATE_BITS: u32 = 1000;

/// Bits kept from each operand when estimating past the `f64` range.
const TOP_BITS: u32 = 64;

/// Bits of an estimate a double resolves exactly.
const MANTISSA_BITS: u32 = 52;

/// Amount by which an overshooting estimate is lowered.
///
/// One while the estimate fits in 48 bits, otherwise a power of two scaled to
/// the estimate's magnitude.
pub(crate) fn correction_step(estimate: f64) -> f64 {
    let log2 = estimate.log2().ceil();
    if log2 <= 48.0 {
        1.0
    } else {
        (log2 - 48.0).exp2()
    }
}

/// A quotient estimate `approx * 2^scale`.
struct Estimate {
    approx: f64,
    scale: u32,
}

impl Estimate {
    fn new(remainder: &BigInt, divisor: &BigInt) -> Self {
        let remainder_bits = remainder.magnitude_bits();
        if remainder_bits <= DIRECT_ESTIMATE_BITS {
            let approx = (remainder.to_f64() / divisor.to_f64()).floor().max(1.0);
            return Estimate { approx, scale: 0 };
        }
        let remainder_shift = remainder_bits - TOP_BITS;
        let divisor_shift = divisor.magnitude_bits().saturating_sub(TOP_BITS);
        let ratio = (remainder >> remainder_shift).to_f64() / (divisor >> divisor_shift).to_f64();
        let exponent = remainder_shift - divisor_shift;
        if exponent <= DIRECT_ESTIMATE_BITS - TOP_BITS {
            let approx = (ratio * f64::from(exponent).exp2()).floor().max(1.0);
            Estimate { approx, scale: 0 }
        } else {
            let approx = (ratio * f64::from(MANTISSA_BITS).exp2()).floor().max(1.0);
            Estimate {
                approx,
                scale: exponent - MANTISSA_BITS,
            }
        }
    }

    fn to_big_int(&self) -> BigInt {
        BigInt::from_f64(self.approx) << self.scale
    }

    /// Lower the estimate until `estimate * divisor <= remainder`.
    ///
    /// Returns the quotient step and its product with the divisor.
    fn settle(mut self, remainder: &BigInt, divisor: &BigInt) -> (BigInt, BigInt) {
        let delta = correction_step(self.approx);
        let mut step = self.to_big_int();
        let mut product = &step * divisor;
        let mut corrections = 0u32;
        while product > *remainder {
            self.approx -= delta;
            step = self.to_big_int();
            product = &step * divisor;
            corrections += 1;
        }
        if corrections > 0 {
            tracing::trace!(corrections, delta, "division estimate lowered");
        }
        if step.is_zero() {
            return (BigInt::one(), divisor.clone());
        }
        (step, product)
    }
}

/// Truncating quotient of two positive values.
fn quot_positive(dividend: &BigInt, divisor: &BigInt) -> BigInt {
    let mut quotient = BigInt::zero();
    let mut remainder = dividend.clone();
    while remainder >= *divisor {
        tracing::trace!(
            remainder_bits = remainder.magnitude_bits(),
            "long division pass"
        );
        let (step, product) = Estimate::new(&remainder, divisor).settle(&remainder, divisor);
        quotient = &quotient + &step;
        remainder = &remainder - &product;
    }
    quotient
}

impl BigInt {
    /// Truncating quotient for a divisor already known to be nonzero.
    pub(crate) fn quot_nonzero(&self, divisor: &BigInt) -> BigInt {
        debug_assert!(!divisor.is_zero());
        if self.is_zero() {
            return BigInt::zero();
        }
        match (self.is_negative(), divisor.is_negative()) {
            (true, true) => quot_positive(&-self, &-divisor),
            (true, false) => -quot_positive(&-self, divisor),
            (false, true) => -quot_positive(self, &-divisor),
            (false, false) => quot_positive(self, divisor),
        }
    }

    /// Truncating remainder for a divisor already known to be nonzero.
    pub(crate) fn rem_nonzero(&self, divisor: &BigInt) -> BigInt {
        self - &(&self.quot_nonzero(divisor) * divisor)
    }

    /// Quotient rounded toward zero.
    pub fn quot(&self, divisor: &BigInt) -> Result<BigInt, ArithmeticError> {
        if divisor.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(self.quot_nonzero(divisor))
    }

    /// Remainder of [`BigInt::quot`]; takes the sign of the dividend.
    pub fn rem(&self, divisor: &BigInt) -> Result<BigInt, ArithmeticError> {
        if divisor.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(self.rem_nonzero(divisor))
    }

    /// Quotient rounded toward negative infinity.
    ///
    /// Differs from [`BigInt::quot`] exactly when the operand signs differ and
    /// the division is inexact:
    /// - `7.div_floor(2)` = `3` (same as truncating)
    /// - `(-7).div_floor(2)` = `-4` (not -3)
    pub fn div_floor(&self, divisor: &BigInt) -> Result<BigInt, ArithmeticError> {
        let quotient = self.quot(divisor)?;
        if self.is_negative() != divisor.is_negative() && !self.rem_nonzero(divisor).is_zero() {
            Ok(&quotient - &BigInt::one())
        } else {
            Ok(quotient)
        }
    }

    /// Remainder of [`BigInt::div_floor`]; takes the sign of the divisor.
    pub fn mod_floor(&self, divisor: &BigInt) -> Result<BigInt, ArithmeticError> {
        let remainder = self.rem(divisor)?;
        Ok((divisor + &remainder).rem_nonzero(divisor))
    }

    /// `(quot, rem)` in one call.
    pub fn quot_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt), ArithmeticError> {
        let quotient = self.quot(divisor)?;
        let remainder = self - &(&quotient * divisor);
        Ok((quotient, remainder))
    }

    /// `(div_floor, mod_floor)` in one call.
    pub fn div_mod(&self, divisor: &BigInt) -> Result<(BigInt, BigInt), ArithmeticError> {
        Ok((self.div_floor(divisor)?, self.mod_floor(divisor)?))
    }
}
