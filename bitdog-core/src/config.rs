//! Configuration types
//!
//! Board configuration is read from `board.toml` at build time by the
//! firmware build script. The defaults below reproduce the stock BitDogLab
//! behaviour, so an empty file is a valid configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::joystick::JoystickConfig;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// I2C address outside the SSD1306 range (0x3C or 0x3D)
    InvalidDisplayAddress(u8),
    /// I2C clock of zero or above fast mode plus
    InvalidBusFrequency(u32),
    /// ADC full scale of zero
    InvalidAdcRange,
    /// Joystick center outside the ADC range
    InvalidCenter(u16),
    /// Dead zone wider than the distance from center to either end stop
    InvalidDeadZone(u16),
    /// Square of zero size or larger than the panel
    InvalidSquareSize(u8),
    /// Frame interval of zero
    InvalidFrameInterval,
}

/// Display bus configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct DisplayConfig {
    /// 7-bit I2C address of the controller
    pub address: u8,
    /// I2C clock in Hz
    pub frequency_hz: u32,
    /// Contrast applied after init
    pub contrast: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            address: 0x3C,
            frequency_hz: 400_000,
            contrast: 0xCF,
        }
    }
}

/// UI timing and geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct UiConfig {
    /// Side of the moving square in pixels
    pub square_size: u8,
    /// Joystick poll and redraw period
    pub frame_interval_ms: u32,
    /// Minimum time between two accepted button presses
    pub debounce_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            square_size: 8,
            frame_interval_ms: 20,
            debounce_ms: 200,
        }
    }
}

/// Complete board configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct BoardConfig {
    /// OLED bus settings
    pub display: DisplayConfig,
    /// Joystick calibration and axis mapping
    pub joystick: JoystickConfig,
    /// UI settings
    pub ui: UiConfig,
}

impl BoardConfig {
    /// Check the configuration against a panel of `width` x `height` pixels
    pub fn validate(&self, width: u32, height: u32) -> Result<(), ConfigError> {
        let display = &self.display;
        if !(0x3C..=0x3D).contains(&display.address) {
            return Err(ConfigError::InvalidDisplayAddress(display.address));
        }
        if display.frequency_hz == 0 || display.frequency_hz > 1_000_000 {
            return Err(ConfigError::InvalidBusFrequency(display.frequency_hz));
        }

        let joystick = &self.joystick;
        if joystick.adc_max == 0 {
            return Err(ConfigError::InvalidAdcRange);
        }
        if joystick.center == 0 || joystick.center >= joystick.adc_max {
            return Err(ConfigError::InvalidCenter(joystick.center));
        }
        let reach = joystick.center.min(joystick.adc_max - joystick.center);
        if joystick.dead_zone >= reach {
            return Err(ConfigError::InvalidDeadZone(joystick.dead_zone));
        }

        let ui = &self.ui;
        let size = u32::from(ui.square_size);
        if size == 0 || size > width || size > height {
            return Err(ConfigError::InvalidSquareSize(ui.square_size));
        }
        if ui.frame_interval_ms == 0 {
            return Err(ConfigError::InvalidFrameInterval);
        }
        Ok(())
    }
}
