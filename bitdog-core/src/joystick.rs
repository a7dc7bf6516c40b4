//! Joystick mapping
//!
//! Converts raw 12-bit ADC samples of the two stick axes into LED
//! brightness and a square position on the panel.
//!
//! Board revisions disagree on the dead zone around the rest position and
//! on which axis is mirrored, so both are part of [`JoystickConfig`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::render::Position;

/// One reading of both axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JoystickSample {
    /// Raw X axis ADC value
    pub x: u16,
    /// Raw Y axis ADC value
    pub y: u16,
}

impl JoystickSample {
    /// Create a sample from raw ADC values
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Joystick calibration and axis mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct JoystickConfig {
    /// ADC full-scale reading
    pub adc_max: u16,
    /// Reading with the stick at rest
    pub center: u16,
    /// Half-width of the band around `center` treated as rest
    pub dead_zone: u16,
    /// Mirror the X axis when positioning the square
    pub invert_x: bool,
    /// Mirror the Y axis when positioning the square
    pub invert_y: bool,
}

impl Default for JoystickConfig {
    fn default() -> Self {
        Self::SYMMETRIC
    }
}

impl JoystickConfig {
    /// 12-bit ADC, rest at 2048, no dead zone
    pub const SYMMETRIC: Self = Self {
        adc_max: 4095,
        center: 2048,
        dead_zone: 0,
        invert_x: false,
        invert_y: false,
    };

    /// Symmetric mapping with a rest band of `center ± dead_zone`
    ///
    /// `with_dead_zone(100)` gives the 1948-2148 band.
    pub const fn with_dead_zone(dead_zone: u16) -> Self {
        Self {
            dead_zone,
            ..Self::SYMMETRIC
        }
    }

    /// LED brightness (0-255) for one axis reading
    ///
    /// Zero inside the dead zone, rising linearly to full brightness at
    /// `center - dead_zone` of deflection beyond the band. The division
    /// truncates, so the first step (1) needs `span / 255` counts past the
    /// band edge; with no dead zone this is exactly `|v - c| * 255 / c`.
    pub fn led_intensity(&self, sample: u16) -> u8 {
        let sample = sample.min(self.adc_max);
        let deflection = sample.abs_diff(self.center);
        if deflection <= self.dead_zone {
            return 0;
        }
        let span = u32::from(self.center.saturating_sub(self.dead_zone)).max(1);
        let scaled = u32::from(deflection - self.dead_zone) * 255 / span;
        scaled.min(255) as u8
    }

    /// Offset (0..=span) along one axis for a reading
    fn axis_offset(&self, sample: u16, span: u32, invert: bool) -> i32 {
        let adc_max = u64::from(self.adc_max.max(1));
        let sample = u64::from(sample).min(adc_max);
        let sample = if invert { adc_max - sample } else { sample };
        i32::try_from(u64::from(span) * sample / adc_max).unwrap_or(i32::MAX)
    }

    /// Top-left corner of a `square` pixel square on a `width` x `height` panel
    ///
    /// The full stick travel maps onto `0..=width - square` and
    /// `0..=height - square`, so the square never leaves the panel.
    pub fn square_position(
        &self,
        sample: JoystickSample,
        width: u32,
        height: u32,
        square: u32,
    ) -> Position {
        let span_x = width.saturating_sub(square);
        let span_y = height.saturating_sub(square);
        Position {
            x: self.axis_offset(sample.x, span_x, self.invert_x),
            y: self.axis_offset(sample.y, span_y, self.invert_y),
        }
    }
}
