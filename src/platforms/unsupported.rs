use crate::display::{DisplayError, DisplayProvider, Result};
use crate::types::DisplayMode;

/// Stands in for the system displays where no backend exists; every call fails
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemDisplays;

impl SystemDisplays {
    pub fn new() -> Self {
        Self
    }
}

impl DisplayProvider for SystemDisplays {
    type Handle = ();

    fn list_displays(&self) -> Result<Vec<()>> {
        log::debug!("No display backend for this platform");
        Err(DisplayError::Unsupported)
    }

    fn current_mode(&self, _display: &()) -> Result<DisplayMode> {
        Err(DisplayError::Unsupported)
    }

    fn all_modes(&self, _display: &()) -> Result<Vec<DisplayMode>> {
        Err(DisplayError::Unsupported)
    }

    fn apply_mode(&self, _display: &(), _mode: &DisplayMode) -> Result {
        Err(DisplayError::Unsupported)
    }
}
