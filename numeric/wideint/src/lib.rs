//! Wideint - exact integer arithmetic beyond `f64` precision.
//!
//! This crate provides the numeric core used by hosts that need integers wider
//! than the 53 bits a double can hold exactly:
//! - [`BigInt`]: unbounded signed integers stored as 32-bit words with implicit
//!   sign extension
//! - [`Int64`]: fixed-width two's-complement 64-bit integers stored as a
//!   `(low, high)` word pair, with wraparound semantics
//! - [`Word64`]: unsigned 64-bit values carried as a `BigInt` in `[0, 2^64)`
//! - IEEE-754 helpers for splitting doubles into mantissa and exponent
//!
//! # Division
//!
//! Both integer types divide with the same approximation scheme: estimate the
//! quotient with native `f64` division, multiply back, and step the estimate
//! down until it no longer overshoots. Each pass clears roughly the top 48 bits
//! of the remainder. Division is the only fallible arithmetic; it returns
//! [`ArithmeticError::DivisionByZero`] instead of producing a value.
//!
//! # Debugging
//!
//! The crate emits `tracing` events and installs no subscriber. Hosts enable
//! them with their own subscriber, e.g. `RUST_LOG=wideint=trace` for the long
//! division steps.

// Word arithmetic moves between i32 storage words, u32 digits, u64
// accumulators and f64 approximations; the casts are the algorithm.
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss
)]

mod big_int;
mod cache;
mod error;
mod ieee754;
mod int64;
mod word64;

pub use big_int::BigInt;
pub use error::{ArithmeticError, ParseIntError};
pub use ieee754::{
    decode_double, decode_double_parts, decode_float, encode_double, DecodedDouble, DoubleParts,
};
pub use int64::Int64;
pub use word64::Word64;
