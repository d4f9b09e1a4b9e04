use winsafe::{
    ChangeDisplaySettingsEx, DEVMODE, DISPLAY_DEVICE, EnumDisplayDevices, EnumDisplaySettings,
    GmidxEnum, co, prelude::NativeBitflag,
};

use crate::display::{ConfigStage, DisplayError, DisplayProvider, Result};
use crate::types::{DisplayMode, RefreshRate, Resolution};

/// A display device attached to the desktop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinDisplay {
    /// Device name, e.g. `\\.\DISPLAY1`
    pub name: String,
    pub string: String,
    pub primary: bool,
}

/// The displays attached to this machine
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemDisplays;

impl SystemDisplays {
    pub fn new() -> Self {
        Self
    }
}

fn query_error(what: &'static str, err: co::ERROR) -> DisplayError {
    DisplayError::Query {
        what,
        code: u32::from(err) as i32,
    }
}

/// Converts a `winsafe::DEVMODE` into a mode
fn mode_from_devmode(devmode: &DEVMODE) -> DisplayMode {
    // 0 and 1 stand for the hardware default
    let hz = match devmode.dmDisplayFrequency {
        0 | 1 => 0.0,
        hz => f64::from(hz),
    };

    DisplayMode {
        resolution: Resolution::new(devmode.dmPelsWidth, devmode.dmPelsHeight),
        refresh_rate: RefreshRate::new(hz),
        usable_for_desktop: true,
    }
}

/// Converts a mode into a `winsafe::DEVMODE` carrying only the fields to change
fn devmode_from_mode(mode: &DisplayMode) -> DEVMODE {
    let mut devmode = DEVMODE::default();
    devmode.dmPelsWidth = mode.width();
    devmode.dmPelsHeight = mode.height();
    devmode.dmFields = co::DM::PELSWIDTH | co::DM::PELSHEIGHT;

    if mode.refresh_rate.hz() > 0.0 {
        devmode.dmDisplayFrequency = mode.refresh_rate.hz().round() as u32;
        devmode.dmFields |= co::DM::DISPLAYFREQUENCY;
    }
    devmode
}

/// Issues one `ChangeDisplaySettingsEx` call as part of the given stage
fn change_settings(
    name: Option<&str>,
    devmode: Option<&mut DEVMODE>,
    flags: co::CDS,
    stage: ConfigStage,
) -> Result {
    match ChangeDisplaySettingsEx(name, devmode, flags) {
        Ok(_) => {
            log::debug!("{} succeeded", stage);
            Ok(())
        }
        Err(err) => {
            log::error!("{} failed, returned flags: {}", stage, err);
            Err(DisplayError::ApplyFailed {
                stage,
                code: i32::from(err),
            })
        }
    }
}

impl DisplayProvider for SystemDisplays {
    type Handle = WinDisplay;

    fn list_displays(&self) -> Result<Vec<WinDisplay>> {
        let mut result = Vec::<WinDisplay>::new();

        let mut dev_num: u32 = 0;
        loop {
            let mut display_device = DISPLAY_DEVICE::default();
            let is_good = EnumDisplayDevices(None, dev_num, &mut display_device, co::EDD::NoValue)
                .map_err(|e| query_error("display devices", e))?;

            if !is_good {
                break;
            }

            log::debug!(
                "{}: {} - {}",
                dev_num,
                display_device.DeviceName(),
                display_device.DeviceString()
            );

            dev_num += 1; // advance to next display device

            if !display_device.StateFlags.has(co::DISPLAY_DEVICE::ACTIVE) {
                continue;
            }

            result.push(WinDisplay {
                name: display_device.DeviceName(),
                string: display_device.DeviceString(),
                primary: display_device
                    .StateFlags
                    .has(co::DISPLAY_DEVICE::PRIMARY_DEVICE),
            });
        }

        // the primary display is the main display; the sort is stable
        result.sort_by_key(|display| !display.primary);
        Ok(result)
    }

    fn current_mode(&self, display: &WinDisplay) -> Result<DisplayMode> {
        let mut devmode = DEVMODE::default();
        EnumDisplaySettings(
            Some(&display.name),
            GmidxEnum::Enum(co::ENUM_SETTINGS::CURRENT),
            &mut devmode,
        )
        .map_err(|e| query_error("current display mode", e))?;

        Ok(mode_from_devmode(&devmode))
    }

    fn all_modes(&self, display: &WinDisplay) -> Result<Vec<DisplayMode>> {
        let mut modes = Vec::new();

        // enumeration ends with the first index the OS rejects
        for index in 0u32.. {
            let mut devmode = DEVMODE::default();
            if EnumDisplaySettings(Some(&display.name), GmidxEnum::Gmidx(index), &mut devmode)
                .is_err()
            {
                break;
            }
            modes.push(mode_from_devmode(&devmode));
        }

        log::debug!("{}: {} mode(s)", display.name, modes.len());
        Ok(modes)
    }

    fn apply_mode(&self, display: &WinDisplay, mode: &DisplayMode) -> Result {
        let mut devmode = devmode_from_mode(mode);

        change_settings(
            Some(&display.name),
            Some(&mut devmode),
            co::CDS::TEST,
            ConfigStage::Begin,
        )?;
        change_settings(
            Some(&display.name),
            Some(&mut devmode),
            co::CDS::UPDATEREGISTRY | co::CDS::NORESET | co::CDS::GLOBAL,
            ConfigStage::Configure,
        )?;
        change_settings(None, None, co::CDS::DYNAMICALLY, ConfigStage::Complete)
    }
}
