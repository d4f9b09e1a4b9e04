//! A display provider that lives entirely in memory.
//!
//! Useful for exercising the command executor without touching real hardware.

use std::cell::{Cell, RefCell};

use crate::display::{ConfigStage, DisplayError, DisplayProvider, Result};
use crate::types::DisplayMode;

/// A simulated display
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedDisplay {
    /// Modes in the order they are reported
    pub modes: Vec<DisplayMode>,
    pub current: DisplayMode,
}

impl SimulatedDisplay {
    pub fn new(modes: Vec<DisplayMode>, current: DisplayMode) -> Self {
        Self { modes, current }
    }
}

/// A set of simulated displays, the first one being the main display
#[derive(Debug, Default)]
pub struct InMemoryDisplays {
    displays: RefCell<Vec<SimulatedDisplay>>,
    /// Stage and code at which `apply_mode` fails
    failure: Option<(ConfigStage, i32)>,
    /// Successful and failed apply attempts, in order
    applied: RefCell<Vec<(usize, DisplayMode)>>,
    calls: Cell<usize>,
}

impl InMemoryDisplays {
    pub fn new(displays: Vec<SimulatedDisplay>) -> Self {
        Self {
            displays: RefCell::new(displays),
            ..Default::default()
        }
    }

    /// Makes every `apply_mode` call fail at `stage` with `code`
    pub fn failing_at(mut self, stage: ConfigStage, code: i32) -> Self {
        self.failure = Some((stage, code));
        self
    }

    /// Returns a copy of the display at `index`
    pub fn display(&self, index: usize) -> Option<SimulatedDisplay> {
        self.displays.borrow().get(index).cloned()
    }

    /// Every `apply_mode` call so far, as display index and requested mode
    pub fn applied(&self) -> Vec<(usize, DisplayMode)> {
        self.applied.borrow().clone()
    }

    /// Number of provider calls of any kind so far
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    fn count_call(&self) {
        self.calls.set(self.calls.get() + 1);
    }

    fn with_display<T>(&self, index: usize, f: impl FnOnce(&SimulatedDisplay) -> T) -> Result<T> {
        self.displays
            .borrow()
            .get(index)
            .map(f)
            .ok_or(DisplayError::Query {
                what: "display",
                code: 1,
            })
    }
}

impl DisplayProvider for InMemoryDisplays {
    type Handle = usize;

    fn list_displays(&self) -> Result<Vec<usize>> {
        self.count_call();
        Ok((0..self.displays.borrow().len()).collect())
    }

    fn current_mode(&self, display: &usize) -> Result<DisplayMode> {
        self.count_call();
        self.with_display(*display, |d| d.current)
    }

    fn all_modes(&self, display: &usize) -> Result<Vec<DisplayMode>> {
        self.count_call();
        self.with_display(*display, |d| d.modes.clone())
    }

    fn apply_mode(&self, display: &usize, mode: &DisplayMode) -> Result {
        self.count_call();
        self.applied.borrow_mut().push((*display, *mode));

        if let Some((stage, code)) = self.failure {
            log::error!("Simulated failure: {} failed with code {}", stage, code);
            return Err(DisplayError::ApplyFailed { stage, code });
        }

        let mut displays = self.displays.borrow_mut();
        let target = displays.get_mut(*display).ok_or(DisplayError::ApplyFailed {
            stage: ConfigStage::Configure,
            code: 1,
        })?;
        target.current = *mode;
        log::debug!("Display {} switched to {}", display, mode);
        Ok(())
    }
}
