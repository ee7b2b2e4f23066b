//! Error types for integer arithmetic and parsing.
//!
//! Division by zero and malformed text are the only failures in the crate.
//! They are separate types so callers can tell an arithmetic fault from a
//! format fault without matching on message strings.

use thiserror::Error;

/// Failure of an arithmetic operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// The divisor of `quot`, `rem`, `div_floor` or `mod_floor` was zero.
    #[error("division by zero")]
    DivisionByZero,
}

/// Failure to parse an integer from text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseIntError {
    /// The text (or the part after a leading `-`) had no digits.
    #[error("number format error: empty string")]
    Empty,

    /// The radix was outside `2..=36`.
    #[error("radix out of range: {radix}")]
    RadixOutOfRange { radix: u32 },

    /// A `-` appeared anywhere other than the first character.
    #[error("number format error: interior \"-\" character at offset {offset}")]
    InteriorMinus { offset: usize },

    /// A character was not a digit of the radix.
    #[error("number format error: invalid digit {digit:?} for radix {radix} at offset {offset}")]
    InvalidDigit {
        digit: char,
        offset: usize,
        radix: u32,
    },
}
