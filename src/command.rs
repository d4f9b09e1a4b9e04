//! Parsing of the single-letter command line

use std::num::ParseIntError;

use thiserror::Error;

use crate::types::{ParseRefreshRateError, RefreshRate, Resolution};

/// Printed by `h` and on every command line error that is not specific to `t`
pub const USAGE: &str = "Usage:

  displaymode [options...]

Options:
  t <width> <height> [@<refresh>] [display]
      sets a display's resolution to width x height, optionally at the
      given refresh rate in Hz; display is the index printed by `d`
      and defaults to 0 (the main display)

  d
      prints available modes for all displays

  h
      prints this message

  v
      prints version and copyright notice
";

pub const COPYRIGHT: &str = "Copyright 2019 Dean Scarff";

/// Returns the banner printed by `v`
pub fn version() -> String {
    format!(
        "{} {}\n{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        COPYRIGHT
    )
}

/// The mode requested by `t`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ConfigureRequest {
    pub resolution: Resolution,
    /// `None` accepts any refresh rate
    pub refresh_rate: Option<RefreshRate>,
    /// Index into the display list, 0 being the main display
    pub display: usize,
}

/// Errors in the arguments following `t`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigureArgsError {
    #[error("missing {0}; expected `t <width> <height> [@<refresh>] [display]`")]
    Missing(&'static str),
    #[error("{field} '{value}' is not a valid number: {source}")]
    NotANumber {
        field: &'static str,
        value: String,
        source: ParseIntError,
    },
    #[error("{0} must be greater than zero")]
    Zero(&'static str),
    #[error("refresh rate '{value}' is invalid: {source}")]
    RefreshRate {
        value: String,
        source: ParseRefreshRateError,
    },
}

/// A command line after parsing
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedCommand {
    /// No command was given
    Missing,
    /// The command token is not a known single letter
    Invalid(String),
    /// `t`
    Configure(ConfigureRequest),
    /// `t` with unusable arguments
    InvalidConfigureArguments(ConfigureArgsError),
    /// `d`
    ListModes,
    /// `h`
    Help,
    /// `v`
    Version,
}

impl ParsedCommand {
    /// Parses the arguments following the program name
    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let owned: Vec<S> = args.into_iter().collect();
        let args: Vec<&str> = owned.iter().map(AsRef::as_ref).collect();
        let Some(&option) = args.first() else {
            return ParsedCommand::Missing;
        };

        let mut chars = option.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(letter), None) => letter,
            _ => return ParsedCommand::Invalid(option.to_string()),
        };

        match letter {
            'd' => ParsedCommand::ListModes,
            'h' => ParsedCommand::Help,
            'v' => ParsedCommand::Version,
            't' => match parse_configure(args[1..].iter().copied()) {
                Ok(request) => ParsedCommand::Configure(request),
                Err(err) => ParsedCommand::InvalidConfigureArguments(err),
            },
            _ => ParsedCommand::Invalid(option.to_string()),
        }
    }
}

/// Parses `<width> <height> [@<refresh>] [display]`
fn parse_configure<'a>(
    mut args: impl Iterator<Item = &'a str>,
) -> Result<ConfigureRequest, ConfigureArgsError> {
    let width = parse_dimension(args.next(), "width")?;
    let height = parse_dimension(args.next(), "height")?;

    let mut next = args.next();
    let refresh_rate = match next.and_then(|arg| arg.strip_prefix('@')) {
        Some(rate) => {
            let rate = rate
                .parse::<RefreshRate>()
                .map_err(|source| ConfigureArgsError::RefreshRate {
                    value: rate.to_string(),
                    source,
                })?;
            next = args.next();
            Some(rate)
        }
        None => None,
    };

    let display = match next {
        Some(value) => parse_number::<usize>(value, "display")?,
        None => 0,
    };

    Ok(ConfigureRequest {
        resolution: Resolution::new(width, height),
        refresh_rate,
        display,
    })
}

fn parse_dimension(value: Option<&str>, field: &'static str) -> Result<u32, ConfigureArgsError> {
    let value = value.ok_or(ConfigureArgsError::Missing(field))?;
    match parse_number::<u32>(value, field)? {
        0 => Err(ConfigureArgsError::Zero(field)),
        n => Ok(n),
    }
}

fn parse_number<T>(value: &str, field: &'static str) -> Result<T, ConfigureArgsError>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    value
        .parse()
        .map_err(|source| ConfigureArgsError::NotANumber {
            field,
            value: value.to_string(),
            source,
        })
}
