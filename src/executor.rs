//! Runs a parsed command against a display provider

use core::fmt;
use std::io::{self, Write};

use thiserror::Error;

use crate::command::{ConfigureRequest, ParsedCommand, USAGE, version};
use crate::display::{DisplayError, DisplayProvider};
use crate::types::{DisplayMode, RefreshRate, Resolution};

/// Errors while running a command
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Display {index} not found; {count} display(s) attached")]
    DisplayNotFound { index: usize, count: usize },
    #[error("Could not find a mode for resolution {resolution}{}", requested_rate(.refresh_rate))]
    NoMatchingMode {
        resolution: Resolution,
        refresh_rate: Option<RefreshRate>,
    },
    #[error(transparent)]
    Display(#[from] DisplayError),
    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
}

fn requested_rate(rate: &Option<RefreshRate>) -> String {
    rate.map(|rate| format!(" @{} Hz", rate.hz()))
        .unwrap_or_default()
}

impl CommandError {
    /// Process exit code reported for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CommandError::Display(err) => err.exit_code(),
            _ => 1,
        }
    }
}

type Result<T = ()> = std::result::Result<T, CommandError>;

/// A completed mode change
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transition {
    pub from: DisplayMode,
    pub to: DisplayMode,
    /// Whether the refresh rates are part of the report
    pub with_refresh_rate: bool,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.with_refresh_rate {
            write!(
                f,
                "Changed display resolution from {} @{} to {} @{}",
                self.from.resolution,
                self.from.refresh_rate,
                self.to.resolution,
                self.to.refresh_rate
            )
        } else {
            write!(
                f,
                "Changed display resolution from {} to {}",
                self.from.resolution, self.to.resolution
            )
        }
    }
}

/// Runs `command`, writing results to `out` and diagnostics to `err`.
///
/// Returns the process exit code. Only failures to write the output are returned as errors.
pub fn execute<P, O, E>(
    command: &ParsedCommand,
    provider: &P,
    out: &mut O,
    err: &mut E,
) -> io::Result<i32>
where
    P: DisplayProvider,
    O: Write,
    E: Write,
{
    log::debug!("Executing {:?}", command);

    let result = match command {
        ParsedCommand::Missing => {
            writeln!(err, "Missing option; server mode is not supported\n")?;
            write!(err, "{}", USAGE)?;
            return Ok(1);
        }
        ParsedCommand::Invalid(option) => {
            writeln!(err, "Invalid option: '{}'\n", option)?;
            write!(err, "{}", USAGE)?;
            return Ok(1);
        }
        ParsedCommand::InvalidConfigureArguments(reason) => {
            writeln!(err, "Invalid mode: {}", reason)?;
            return Ok(1);
        }
        ParsedCommand::Help => {
            write!(out, "{}", USAGE)?;
            return Ok(0);
        }
        ParsedCommand::Version => {
            writeln!(out, "{}", version())?;
            return Ok(0);
        }
        ParsedCommand::ListModes => list_modes(provider, out),
        ParsedCommand::Configure(request) => configure(provider, request)
            .and_then(|transition| writeln!(out, "{}", transition).map_err(CommandError::from)),
    };

    match result {
        Ok(()) => Ok(0),
        Err(CommandError::Io(e)) => Err(e),
        Err(e) => {
            writeln!(err, "{}", e)?;
            Ok(e.exit_code())
        }
    }
}

/// Prints every mode of every display, marking the current mode with `*` and modes that are
/// not usable for the desktop with `!`
pub fn list_modes<P: DisplayProvider, W: Write>(provider: &P, out: &mut W) -> Result {
    let displays = provider.list_displays()?;
    log::debug!("Found {} display(s)", displays.len());

    for (index, display) in displays.iter().enumerate() {
        let current = provider.current_mode(display)?;
        let modes = provider.all_modes(display)?;
        log::debug!("Display {} ({:?}): {} mode(s)", index, display, modes.len());

        if index == 0 {
            writeln!(out, "Display {} (MAIN):", index)?;
        } else {
            writeln!(out, "Display {}:", index)?;
        }

        let mut marked = false;
        for mode in &modes {
            let is_current = !marked && mode.same_timing(&current);
            marked |= is_current;
            writeln!(out, "{}", mode_line(mode, is_current))?;
        }

        // the OS does not always list the current mode
        if !marked {
            writeln!(out, "{}", mode_line(&current, true))?;
        }
    }

    Ok(())
}

fn mode_line(mode: &DisplayMode, current: bool) -> String {
    let mut line = format!("  {}", mode);
    if !mode.usable_for_desktop {
        line.push_str(" !");
    }
    if current {
        line.push_str(" *");
    }
    line
}

/// Returns the first mode, in the given order, that fulfills the request
pub fn find_matching_mode(
    modes: &[DisplayMode],
    resolution: Resolution,
    refresh_rate: Option<RefreshRate>,
) -> Option<&DisplayMode> {
    modes.iter().find(|mode| mode.matches(resolution, refresh_rate))
}

/// Switches the requested display to the first mode matching the request
pub fn configure<P: DisplayProvider>(
    provider: &P,
    request: &ConfigureRequest,
) -> Result<Transition> {
    let mut displays = provider.list_displays()?;
    let count = displays.len();
    if request.display >= count {
        return Err(CommandError::DisplayNotFound {
            index: request.display,
            count,
        });
    }
    let display = displays.swap_remove(request.display);

    let modes = provider.all_modes(&display)?;
    let target = *find_matching_mode(&modes, request.resolution, request.refresh_rate).ok_or(
        CommandError::NoMatchingMode {
            resolution: request.resolution,
            refresh_rate: request.refresh_rate,
        },
    )?;

    let original = provider.current_mode(&display)?;
    log::debug!(
        "Switching display {} ({:?}) from {} to {}",
        request.display,
        display,
        original,
        target
    );
    provider.apply_mode(&display, &target)?;

    Ok(Transition {
        from: original,
        to: target,
        with_refresh_rate: request.refresh_rate.is_some(),
    })
}
