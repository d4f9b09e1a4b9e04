use core::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Largest difference between a requested and a reported refresh rate that still counts as a match
pub const REFRESH_RATE_TOLERANCE: f64 = 0.005;

/// Contains the resolution of a display
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    /// Creates a new resolution
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Refresh rate in Hz. Zero means the OS did not report one.
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
pub struct RefreshRate(pub f64);

impl RefreshRate {
    pub fn new(hz: f64) -> Self {
        Self(hz)
    }

    pub fn hz(&self) -> f64 {
        self.0
    }

    /// Whether a mode reporting `self` satisfies the `requested` rate.
    ///
    /// No request matches everything. Otherwise the difference has to be strictly below
    /// [`REFRESH_RATE_TOLERANCE`].
    pub fn satisfies(&self, requested: Option<RefreshRate>) -> bool {
        match requested {
            None => true,
            Some(requested) => (requested.0 - self.0).abs() < REFRESH_RATE_TOLERANCE,
        }
    }
}

impl fmt::Display for RefreshRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} Hz", self.0)
    }
}

/// Errors that occur while parsing a refresh rate from a string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseRefreshRateError {
    #[error("{0}")]
    Float(#[from] std::num::ParseFloatError),
    #[error("must be a finite, non-negative number")]
    OutOfRange,
}

impl FromStr for RefreshRate {
    type Err = ParseRefreshRateError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let hz: f64 = s.parse()?;
        if !hz.is_finite() || hz < 0.0 {
            return Err(ParseRefreshRateError::OutOfRange);
        }
        Ok(Self(hz))
    }
}

/// One resolution and timing a display supports
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DisplayMode {
    pub resolution: Resolution,
    pub refresh_rate: RefreshRate,
    pub usable_for_desktop: bool,
}

impl DisplayMode {
    /// Creates a mode that is usable for the desktop
    pub fn new(width: u32, height: u32, refresh_rate: f64) -> Self {
        Self {
            resolution: Resolution::new(width, height),
            refresh_rate: RefreshRate(refresh_rate),
            usable_for_desktop: true,
        }
    }

    /// Marks the mode as unusable for the desktop
    pub fn unusable(mut self) -> Self {
        self.usable_for_desktop = false;
        self
    }

    pub fn width(&self) -> u32 {
        self.resolution.width
    }

    pub fn height(&self) -> u32 {
        self.resolution.height
    }

    /// Compares resolution and refresh rate, ignoring the desktop flag
    pub fn same_timing(&self, other: &DisplayMode) -> bool {
        self.resolution == other.resolution && self.refresh_rate == other.refresh_rate
    }

    /// Whether this mode fulfills a request for `resolution` at the optional `refresh_rate`
    pub fn matches(&self, resolution: Resolution, refresh_rate: Option<RefreshRate>) -> bool {
        self.resolution == resolution && self.refresh_rate.satisfies(refresh_rate)
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} x {} @{}",
            self.resolution.width, self.resolution.height, self.refresh_rate
        )
    }
}
