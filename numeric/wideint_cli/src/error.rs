//! Errors reported by the CLI.

use thiserror::Error;
use wideint::{ArithmeticError, ParseIntError};

/// Any failure of a CLI invocation. Printed to stderr with exit code 1.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Parse(#[from] ParseIntError),

    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),

    #[error("unknown operator '{0}'")]
    UnknownOperator(String),

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("invalid radix '{0}': expected 2 through 36")]
    InvalidRadix(String),

    #[error("invalid double '{0}'")]
    InvalidDouble(String),

    #[error("invalid shift amount {0}")]
    InvalidShift(String),

    #[error("'{op}' is not defined for {width} values")]
    Unsupported { op: &'static str, width: &'static str },

    #[error("usage: {0}")]
    Usage(&'static str),
}
