//! Radix text conversion.
//!
//! Parsing folds the digits in chunks of up to eight, so each chunk's value is
//! exact in a machine word before it meets the accumulator. Rendering peels off
//! six digits per division for the same reason.

use std::str::FromStr;

use crate::error::ParseIntError;

use super::BigInt;

const PARSE_CHUNK_DIGITS: usize = 8;
const RENDER_CHUNK_DIGITS: usize = 6;
const MIN_RADIX: u32 = 2;
const MAX_RADIX: u32 = 36;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn check_radix(radix: u32) -> Result<(), ParseIntError> {
    if (MIN_RADIX..=MAX_RADIX).contains(&radix) {
        Ok(())
    } else {
        Err(ParseIntError::RadixOutOfRange { radix })
    }
}

/// Parse unsigned digits starting at byte `offset` of the original text.
fn parse_magnitude(digits: &str, radix: u32, offset: usize) -> Result<BigInt, ParseIntError> {
    if digits.is_empty() {
        return Err(ParseIntError::Empty);
    }
    if let Some(index) = digits.find('-') {
        return Err(ParseIntError::InteriorMinus {
            offset: offset + index,
        });
    }
    let mut values = Vec::with_capacity(digits.len());
    for (index, ch) in digits.char_indices() {
        match ch.to_digit(radix) {
            Some(value) => values.push(value),
            None => {
                return Err(ParseIntError::InvalidDigit {
                    digit: ch,
                    offset: offset + index,
                    radix,
                })
            }
        }
    }

    let radix = u64::from(radix);
    let full_power = BigInt::from_u64(radix.pow(PARSE_CHUNK_DIGITS as u32));
    let mut result = BigInt::zero();
    for chunk in values.chunks(PARSE_CHUNK_DIGITS) {
        let value = chunk
            .iter()
            .fold(0u64, |acc, &digit| acc * radix + u64::from(digit));
        let power = if chunk.len() == PARSE_CHUNK_DIGITS {
            full_power.clone()
        } else {
            BigInt::from_u64(radix.pow(chunk.len() as u32))
        };
        result = &(&result * &power) + &BigInt::from_u64(value);
    }
    Ok(result)
}

/// Append `value` in `radix`, left-padded with zeros to `width` digits.
fn push_digits(out: &mut String, mut value: u32, radix: u32, width: usize) {
    let mut buf = [b'0'; 32];
    let mut start = buf.len();
    while value > 0 {
        start -= 1;
        buf[start] = DIGITS[(value % radix) as usize];
        value /= radix;
    }
    let written = buf.len() - start;
    for _ in written..width {
        out.push('0');
    }
    out.extend(buf[start..].iter().map(|&b| char::from(b)));
}

impl BigInt {
    /// Parse text in `radix` (2 through 36).
    ///
    /// Accepts an optional leading `-` followed by one or more digits; letters
    /// of either case serve as digits above 9.
    ///
    /// # Errors
    ///
    /// Empty text, a radix outside `2..=36`, a `-` past the first character,
    /// or a character that is not a digit of `radix`.
    pub fn from_str_radix(text: &str, radix: u32) -> Result<BigInt, ParseIntError> {
        if text.is_empty() {
            return Err(ParseIntError::Empty);
        }
        check_radix(radix)?;
        let parsed = match text.strip_prefix('-') {
            Some(rest) => parse_magnitude(rest, radix, 1).map(|magnitude| -magnitude),
            None => parse_magnitude(text, radix, 0),
        };
        if let Err(error) = &parsed {
            tracing::debug!(%error, radix, "integer text rejected");
        }
        parsed
    }

    /// Render in `radix` (2 through 36), lowercase, with a leading `-` for
    /// negative values.
    ///
    /// # Panics
    ///
    /// Panics if `radix` is outside `2..=36`, as `char::from_digit` does.
    pub fn to_str_radix(&self, radix: u32) -> String {
        assert!(
            (MIN_RADIX..=MAX_RADIX).contains(&radix),
            "radix out of range: {radix}"
        );
        if self.is_zero() {
            return "0".to_owned();
        }
        if self.is_negative() {
            let mut out = String::from("-");
            out.push_str(&(-self).to_str_radix(radix));
            return out;
        }

        let chunk_divisor = BigInt::from_u64(u64::from(radix).pow(RENDER_CHUNK_DIGITS as u32));
        // Least significant chunk first.
        let mut chunks = Vec::new();
        let mut rest = self.clone();
        while !rest.is_zero() {
            let quotient = rest.quot_nonzero(&chunk_divisor);
            let chunk = &rest - &(&quotient * &chunk_divisor);
            chunks.push(chunk.to_u32());
            rest = quotient;
        }

        let mut out = String::with_capacity(chunks.len() * RENDER_CHUNK_DIGITS);
        let mut chunks = chunks.into_iter().rev();
        if let Some(leading) = chunks.next() {
            push_digits(&mut out, leading, radix, 1);
        }
        for chunk in chunks {
            push_digits(&mut out, chunk, radix, RENDER_CHUNK_DIGITS);
        }
        out
    }
}

impl FromStr for BigInt {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigInt::from_str_radix(s, 10)
    }
}
