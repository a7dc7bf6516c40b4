//! Hardware driver implementations
//!
//! Peripheral drivers built on the `embedded-hal` 1.0 traits, so they run
//! against any HAL (and against mocks in the host tests):
//!
//! - PWM LEDs following the joystick deflection
//! - The on/off status LED

#![no_std]
#![deny(unsafe_code)]

pub mod led;

pub use led::{LedError, PwmLed, RgbIndicator, StatusLed};
