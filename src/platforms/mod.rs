//! Display providers backed by the host OS

#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "windows")]
pub use windows::*;

#[cfg(not(target_os = "windows"))]
mod unsupported;

#[cfg(not(target_os = "windows"))]
pub use unsupported::*;
