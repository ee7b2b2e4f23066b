//! Command handlers for the `wideint` binary.
//!
//! Each handler returns the text to print on success; `main.rs` prints it or
//! reports the error.


use std::str::FromStr;

use wideint::{decode_double, BigInt, Int64, Word64};

use crate::config::{parse_options, CliConfig, Width};
use crate::error::CliError;

pub const USAGE: &str = "\
Usage: wideint <command> [options]

Commands:
  eval <lhs> <op> <rhs>    Apply a binary operator
  convert <value>          Re-render a value in another radix
  decode <double>          Split a double into exponent and mantissa
  help                     Show this help message

Operators:
  + - * quot rem div mod and or xor shl shr ushr cmp

Options:
  --radix=N, --from=N      Radix of operands (default: 10)
  --to=N                   Radix of results (default: operand radix)
  --int64                  Signed 64-bit wrapping arithmetic
  --word64                 Unsigned 64-bit wrapping arithmetic";

/// A binary operator accepted by `eval`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Quot,
    Rem,
    /// Flooring division.
    Div,
    /// Flooring remainder.
    Mod,
    And,
    Or,
    Xor,
    Shl,
    /// Arithmetic right shift.
    Shr,
    /// Logical right shift.
    Ushr,
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Quot => "quot",
            BinaryOp::Rem => "rem",
            BinaryOp::Div => "div",
            BinaryOp::Mod => "mod",
            BinaryOp::And => "and",
            BinaryOp::Or => "or",
            BinaryOp::Xor => "xor",
            BinaryOp::Shl => "shl",
            BinaryOp::Shr => "shr",
            BinaryOp::Ushr => "ushr",
        }
    }
}

impl FromStr for BinaryOp {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "+" => BinaryOp::Add,
            "-" => BinaryOp::Sub,
            "*" => BinaryOp::Mul,
            "quot" => BinaryOp::Quot,
            "rem" => BinaryOp::Rem,
            "div" => BinaryOp::Div,
            "mod" => BinaryOp::Mod,
            "and" => BinaryOp::And,
            "or" => BinaryOp::Or,
            "xor" => BinaryOp::Xor,
            "shl" => BinaryOp::Shl,
            "shr" => BinaryOp::Shr,
            "ushr" => BinaryOp::Ushr,
            _ => return Err(CliError::UnknownOperator(s.to_string())),
        })
    }
}

/// Shift amount for unbounded values: a non-negative machine integer.
fn shift_amount(amount: &BigInt) -> Result<u32, CliError> {
    if amount.is_negative() || amount > &BigInt::from(u32::MAX) {
        return Err(CliError::InvalidShift(amount.to_string()));
    }
    Ok(amount.to_u32())
}

/// Evaluate `lhs op rhs` on arbitrary-precision values.
pub fn eval_big_binary(op: BinaryOp, lhs: &BigInt, rhs: &BigInt) -> Result<BigInt, CliError> {
    Ok(match op {
        BinaryOp::Add => lhs + rhs,
        BinaryOp::Sub => lhs - rhs,
        BinaryOp::Mul => lhs * rhs,
        BinaryOp::Quot => lhs.quot(rhs)?,
        BinaryOp::Rem => lhs.rem(rhs)?,
        BinaryOp::Div => lhs.div_floor(rhs)?,
        BinaryOp::Mod => lhs.mod_floor(rhs)?,
        BinaryOp::And => lhs & rhs,
        BinaryOp::Or => lhs | rhs,
        BinaryOp::Xor => lhs ^ rhs,
        BinaryOp::Shl => lhs << shift_amount(rhs)?,
        BinaryOp::Shr => lhs >> shift_amount(rhs)?,
        BinaryOp::Ushr => {
            return Err(CliError::Unsupported {
                op: op.symbol(),
                width: Width::Unbounded.name(),
            })
        }
    })
}

/// Evaluate `lhs op rhs` with signed 64-bit wraparound. Shift amounts use the
/// low bits of `rhs`, modulo 64.
pub fn eval_int64_binary(op: BinaryOp, lhs: Int64, rhs: Int64) -> Result<Int64, CliError> {
    let amount = rhs.low_bits_unsigned();
    Ok(match op {
        BinaryOp::Add => lhs.wrapping_add(rhs),
        BinaryOp::Sub => lhs.wrapping_sub(rhs),
        BinaryOp::Mul => lhs.wrapping_mul(rhs),
        BinaryOp::Quot => lhs.quot(rhs)?,
        BinaryOp::Rem => lhs.rem(rhs)?,
        BinaryOp::Div => lhs.div_floor(rhs)?,
        BinaryOp::Mod => lhs.mod_floor(rhs)?,
        BinaryOp::And => lhs & rhs,
        BinaryOp::Or => lhs | rhs,
        BinaryOp::Xor => lhs ^ rhs,
        BinaryOp::Shl => lhs.wrapping_shl(amount),
        BinaryOp::Shr => lhs.wrapping_shr(amount),
        BinaryOp::Ushr => lhs.wrapping_ushr(amount),
    })
}

/// Evaluate `lhs op rhs` with unsigned 64-bit wraparound. Flooring and
/// truncating division agree on unsigned values, as do both right shifts.
pub fn eval_word64_binary(op: BinaryOp, lhs: &Word64, rhs: &Word64) -> Result<Word64, CliError> {
    let amount = || shift_amount(rhs.as_bigint());
    Ok(match op {
        BinaryOp::Add => lhs.wrapping_add(rhs),
        BinaryOp::Sub => lhs.wrapping_sub(rhs),
        BinaryOp::Mul => lhs.wrapping_mul(rhs),
        BinaryOp::Quot | BinaryOp::Div => lhs.quot(rhs)?,
        BinaryOp::Rem | BinaryOp::Mod => lhs.rem(rhs)?,
        BinaryOp::And => lhs & rhs,
        BinaryOp::Or => lhs | rhs,
        BinaryOp::Xor => lhs ^ rhs,
        BinaryOp::Shl => lhs << amount()?,
        BinaryOp::Shr | BinaryOp::Ushr => lhs >> amount()?,
    })
}

/// `cmp`: `-1`, `0` or `1`, ordering the operands in the selected width.
pub fn compare(lhs: &str, rhs: &str, config: &CliConfig) -> Result<String, CliError> {
    let radix = config.radix;
    let ordering = match config.width {
        Width::Unbounded => {
            BigInt::from_str_radix(lhs, radix)?.cmp(&BigInt::from_str_radix(rhs, radix)?)
        }
        Width::Int64 => {
            Int64::from_str_radix(lhs, radix)?.cmp(&Int64::from_str_radix(rhs, radix)?)
        }
        Width::Word64 => {
            Word64::from_str_radix(lhs, radix)?.cmp(&Word64::from_str_radix(rhs, radix)?)
        }
    };
    Ok((ordering as i32).to_string())
}

/// `eval <lhs> <op> <rhs>`.
pub fn eval(lhs: &str, op: &str, rhs: &str, config: &CliConfig) -> Result<String, CliError> {
    if op == "cmp" {
        return compare(lhs, rhs, config);
    }
    let op: BinaryOp = op.parse()?;
    let radix = config.radix;
    let out = config.output_radix();
    tracing::debug!(?op, width = config.width.name(), radix, "eval");

    Ok(match config.width {
        Width::Unbounded => {
            let lhs = BigInt::from_str_radix(lhs, radix)?;
            let rhs = BigInt::from_str_radix(rhs, radix)?;
            eval_big_binary(op, &lhs, &rhs)?.to_str_radix(out)
        }
        Width::Int64 => {
            let lhs = Int64::from_str_radix(lhs, radix)?;
            let rhs = Int64::from_str_radix(rhs, radix)?;
            eval_int64_binary(op, lhs, rhs)?.to_str_radix(out)
        }
        Width::Word64 => {
            let lhs = Word64::from_str_radix(lhs, radix)?;
            let rhs = Word64::from_str_radix(rhs, radix)?;
            eval_word64_binary(op, &lhs, &rhs)?.to_str_radix(out)
        }
    })
}

/// `convert <value>`: parse in the operand radix, print in the output radix,
/// wrapping to the selected width.
pub fn convert(value: &str, config: &CliConfig) -> Result<String, CliError> {
    let radix = config.radix;
    let out = config.output_radix();
    Ok(match config.width {
        Width::Unbounded => BigInt::from_str_radix(value, radix)?.to_str_radix(out),
        Width::Int64 => Int64::from_str_radix(value, radix)?.to_str_radix(out),
        Width::Word64 => Word64::from_str_radix(value, radix)?.to_str_radix(out),
    })
}

/// `decode <double>`: the exact `(exponent, mantissa)` pair of a double.
pub fn decode(text: &str) -> Result<String, CliError> {
    let value: f64 = text
        .parse()
        .map_err(|_| CliError::InvalidDouble(text.to_string()))?;
    let decoded = decode_double(value);
    Ok(format!(
        "exponent: {}\nmantissa: {}",
        decoded.exponent, decoded.mantissa
    ))
}

/// Run one invocation; `args` excludes the program name.
pub fn run(args: &[String]) -> Result<String, CliError> {
    let Some((command, rest)) = args.split_first() else {
        return Ok(USAGE.to_string());
    };
    let (positional, config) = parse_options(rest)?;

    match command.as_str() {
        "eval" => match positional.as_slice() {
            [lhs, op, rhs] => eval(lhs, op, rhs, &config),
            _ => Err(CliError::Usage("wideint eval <lhs> <op> <rhs> [options]")),
        },
        "convert" => match positional.as_slice() {
            [value] => convert(value, &config),
            _ => Err(CliError::Usage("wideint convert <value> --from=R --to=R")),
        },
        "decode" => match positional.as_slice() {
            [value] => decode(value),
            _ => Err(CliError::Usage("wideint decode <double>")),
        },
        "help" | "--help" | "-h" => Ok(USAGE.to_string()),
        "version" | "--version" => Ok(format!("wideint {}", env!("CARGO_PKG_VERSION"))),
        _ => Err(CliError::Usage("wideint <eval|convert|decode|help> ...")),
    }
}
