//! IEEE-754 decomposition of doubles and singles into integer mantissa and
//! binary exponent, and the inverse for `BigInt` mantissas.
//!
//! A finite nonzero value decodes to `mantissa * 2^exponent` exactly. Zero
//! decodes to a zero mantissa and a zero exponent. Infinities and NaN decode
//! their raw fields like a normal value; the result carries no meaning.

use crate::BigInt;

const DOUBLE_BIAS: i32 = 1075;
const DOUBLE_EXPONENT_MASK: u64 = 0x7ff;
const DOUBLE_HIGH_MANTISSA_MASK: u32 = 0x000f_ffff;
const DOUBLE_IMPLICIT_BIT: u32 = 1 << 20;

const FLOAT_BIAS: i32 = 150;
const FLOAT_EXPONENT_MASK: u32 = 0xff;
const FLOAT_MANTISSA_MASK: u32 = 0x007f_ffff;
const FLOAT_IMPLICIT_BIT: u32 = 1 << 23;

/// Largest power of two applied in one step by [`encode_double`].
const SCALE_STEP: i32 = 1000;

/// Raw fields of a double.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DoubleParts {
    pub negative: bool,
    /// Mantissa bits 32..=52, including the implicit leading bit for normal
    /// values.
    pub mantissa_high: u32,
    /// Mantissa bits 0..=31.
    pub mantissa_low: u32,
    pub exponent: i32,
}

/// A double as `mantissa * 2^exponent` with a signed mantissa.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedDouble {
    pub exponent: i32,
    pub mantissa: BigInt,
}

/// Split a double into sign, mantissa halves and unbiased exponent.
///
/// Normal values get the implicit leading mantissa bit. Subnormal values (an
/// exponent field of zero) have no implicit bit and exponent `-1074`.
pub fn decode_double_parts(value: f64) -> DoubleParts {
    let bits = value.to_bits();
    let negative = bits >> 63 == 1;
    let field = ((bits >> 52) & DOUBLE_EXPONENT_MASK) as i32;
    let mut mantissa_high = (bits >> 32) as u32 & DOUBLE_HIGH_MANTISSA_MASK;
    let mantissa_low = bits as u32;
    let exponent = if field == 0 {
        if mantissa_high == 0 && mantissa_low == 0 {
            0
        } else {
            1 - DOUBLE_BIAS
        }
    } else {
        mantissa_high |= DOUBLE_IMPLICIT_BIT;
        field - DOUBLE_BIAS
    };
    DoubleParts {
        negative,
        mantissa_high,
        mantissa_low,
        exponent,
    }
}

/// Decode a double into an exact `(exponent, mantissa)` pair.
///
/// `decode_double(1.5)` is exponent `-52` with mantissa `3 * 2^51`.
pub fn decode_double(value: f64) -> DecodedDouble {
    let parts = decode_double_parts(value);
    let magnitude = BigInt::from_u64(
        (u64::from(parts.mantissa_high) << 32) | u64::from(parts.mantissa_low),
    );
    DecodedDouble {
        exponent: parts.exponent,
        mantissa: if parts.negative { -magnitude } else { magnitude },
    }
}

/// Decode a single into `(mantissa, exponent)` with a signed mantissa.
pub fn decode_float(value: f32) -> (i32, i32) {
    let bits = value.to_bits();
    let field = ((bits >> 23) & FLOAT_EXPONENT_MASK) as i32;
    let mut mantissa = bits & FLOAT_MANTISSA_MASK;
    let exponent = if field == 0 {
        if mantissa == 0 {
            0
        } else {
            1 - FLOAT_BIAS
        }
    } else {
        mantissa |= FLOAT_IMPLICIT_BIT;
        field - FLOAT_BIAS
    };
    let mantissa = mantissa as i32;
    if bits >> 31 == 1 {
        (-mantissa, exponent)
    } else {
        (mantissa, exponent)
    }
}

/// `mantissa * 2^exponent` as the nearest double.
///
/// Mantissas wider than the double range are narrowed to their top bits
/// first, and the exponent is applied in steps so that intermediate powers of
/// two never overflow or underflow on their own.
pub fn encode_double(mantissa: &BigInt, exponent: i32) -> f64 {
    if mantissa.is_zero() {
        return 0.0;
    }
    let magnitude = mantissa.abs();
    let bits = magnitude.magnitude_bits();
    let (magnitude, mut exponent) = if bits > SCALE_STEP as u32 {
        let shift = bits - 64;
        (&magnitude >> shift, exponent.saturating_add(shift as i32))
    } else {
        (magnitude, exponent)
    };
    let mut value = magnitude.to_f64();
    while exponent > SCALE_STEP && value.is_finite() {
        value *= 2f64.powi(SCALE_STEP);
        exponent -= SCALE_STEP;
    }
    while exponent < -SCALE_STEP && value != 0.0 {
        value *= 2f64.powi(-SCALE_STEP);
        exponent += SCALE_STEP;
    }
    value *= 2f64.powi(exponent);
    if mantissa.is_negative() {
        -value
    } else {
        value
    }
}
