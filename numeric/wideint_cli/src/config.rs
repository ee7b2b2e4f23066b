//! Command-line options shared by the `eval` and `convert` commands.

use crate::error::CliError;

/// Which integer type operands are read into.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Width {
    /// Arbitrary precision (`BigInt`).
    #[default]
    Unbounded,
    /// Signed 64-bit with wraparound (`Int64`).
    Int64,
    /// Unsigned 64-bit with wraparound (`Word64`).
    Word64,
}

impl Width {
    pub fn name(self) -> &'static str {
        match self {
            Width::Unbounded => "unbounded",
            Width::Int64 => "int64",
            Width::Word64 => "word64",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    /// Radix operands are parsed in.
    pub radix: u32,
    /// Radix results are printed in; `None` reuses `radix`.
    pub output_radix: Option<u32>,
    pub width: Width,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            radix: 10,
            output_radix: None,
            width: Width::Unbounded,
        }
    }
}

impl CliConfig {
    pub fn output_radix(&self) -> u32 {
        self.output_radix.unwrap_or(self.radix)
    }
}

fn parse_radix(text: &str) -> Result<u32, CliError> {
    match text.parse::<u32>() {
        Ok(radix) if (2..=36).contains(&radix) => Ok(radix),
        _ => Err(CliError::InvalidRadix(text.to_string())),
    }
}

/// Split arguments into positional values and a [`CliConfig`].
///
/// Anything starting with `--` is an option; negative operands such as `-5`
/// stay positional.
pub fn parse_options(args: &[String]) -> Result<(Vec<String>, CliConfig), CliError> {
    let mut config = CliConfig::default();
    let mut positional = Vec::new();

    for arg in args {
        if let Some(radix) = arg
            .strip_prefix("--radix=")
            .or_else(|| arg.strip_prefix("--from="))
        {
            config.radix = parse_radix(radix)?;
        } else if let Some(radix) = arg.strip_prefix("--to=") {
            config.output_radix = Some(parse_radix(radix)?);
        } else if arg == "--int64" {
            config.width = Width::Int64;
        } else if arg == "--word64" {
            config.width = Width::Word64;
        } else if arg.starts_with("--") {
            return Err(CliError::UnknownOption(arg.clone()));
        } else {
            positional.push(arg.clone());
        }
    }

    tracing::debug!(?config, "parsed options");
    Ok((positional, config))
}
