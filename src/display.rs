use core::fmt;

use thiserror::Error;

use crate::types::DisplayMode;

/// The steps of applying a mode, in the order they are issued
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ConfigStage {
    Begin,
    Configure,
    Complete,
}

impl fmt::Display for ConfigStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigStage::Begin => write!(f, "Beginning display configuration"),
            ConfigStage::Configure => write!(f, "Configuring display mode"),
            ConfigStage::Complete => write!(f, "Completing display configuration"),
        }
    }
}

/// Error type for the display module
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DisplayError {
    #[error("Querying {what} failed with error code {code}")]
    Query { what: &'static str, code: i32 },
    #[error("{stage} failed with error code {code}")]
    ApplyFailed { stage: ConfigStage, code: i32 },
    #[error("Changing display modes is not supported on this platform")]
    Unsupported,
}

impl DisplayError {
    /// Process exit code reported for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DisplayError::Query { code, .. } | DisplayError::ApplyFailed { code, .. }
                if *code != 0 =>
            {
                *code
            }
            _ => 1,
        }
    }
}

pub(crate) type Result<T = ()> = std::result::Result<T, DisplayError>;

/// Access to the displays attached to the system and the modes they support.
///
/// Every call goes to the OS; nothing is cached between calls.
pub trait DisplayProvider {
    /// Opaque identifier of one display
    type Handle: fmt::Debug;

    /// Returns the attached displays, main display first
    fn list_displays(&self) -> Result<Vec<Self::Handle>>;

    /// Returns the mode the display is currently using
    fn current_mode(&self, display: &Self::Handle) -> Result<DisplayMode>;

    /// Returns every mode the display supports, in the order the OS reports them.
    ///
    /// The current mode is usually, but not always, among them.
    fn all_modes(&self, display: &Self::Handle) -> Result<Vec<DisplayMode>>;

    /// Switches the display to `mode` permanently.
    ///
    /// Begins a configuration, sets the mode and commits it. Steps that succeeded before a
    /// failing one are not undone.
    fn apply_mode(&self, display: &Self::Handle, mode: &DisplayMode) -> Result;
}
