//! LED drivers
//!
//! - PWM LEDs: brightness 0-255 scaled onto the channel's duty range
//! - Status LED: plain GPIO output, optionally active-low

pub mod pwm;
pub mod status;

pub use pwm::{PwmLed, RgbIndicator};
pub use status::StatusLed;

/// LED driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError<E> {
    /// The PWM channel rejected the duty cycle
    Pwm(E),
    /// The GPIO write failed
    Pin(E),
}
