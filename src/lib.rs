//! A library to list and switch the modes of the attached displays.
//!
//! Display access goes through the [`DisplayProvider`] trait. [`SystemDisplays`] talks to the
//! OS, [`InMemoryDisplays`] simulates displays for tests.

mod command;
mod display;
mod executor;
mod memory;
mod platforms;
mod types;

pub use command::*;
pub use display::*;
pub use executor::*;
pub use memory::*;
pub use platforms::*;
pub use types::*;
