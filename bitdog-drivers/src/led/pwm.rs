//! PWM LED output
//!
//! The red and blue LEDs of the RGB package sit on PWM channels. Their
//! brightness follows the deflection of the joystick axes: red for X, blue
//! for Y. Turning the PWM output off holds both at zero until it is turned
//! back on.
//!
//! ```ignore
//! let mut rgb = RgbIndicator::new(red_channel, blue_channel);
//!
//! // Every frame:
//! rgb.update(sample, &config.joystick, ui.pwm_enabled)?;
//! ```

use embedded_hal::pwm::SetDutyCycle;

use bitdog_core::joystick::{JoystickConfig, JoystickSample};

use super::LedError;

/// Full brightness
pub const MAX_INTENSITY: u8 = u8::MAX;

/// A single LED on a PWM channel
pub struct PwmLed<P> {
    channel: P,
    intensity: u8,
}

impl<P: SetDutyCycle> PwmLed<P> {
    /// Wrap a PWM channel; the LED is left untouched until the first write
    pub fn new(channel: P) -> Self {
        Self {
            channel,
            intensity: 0,
        }
    }

    /// Set the brightness (0 = off, 255 = full duty)
    pub fn set_intensity(&mut self, intensity: u8) -> Result<(), LedError<P::Error>> {
        self.channel
            .set_duty_cycle_fraction(u16::from(intensity), u16::from(MAX_INTENSITY))
            .map_err(LedError::Pwm)?;
        self.intensity = intensity;
        Ok(())
    }

    /// Turn the LED off
    pub fn off(&mut self) -> Result<(), LedError<P::Error>> {
        self.set_intensity(0)
    }

    /// Last brightness written successfully
    pub fn intensity(&self) -> u8 {
        self.intensity
    }

    /// Release the PWM channel
    pub fn release(self) -> P {
        self.channel
    }
}

/// Red and blue LEDs driven by the joystick
pub struct RgbIndicator<P> {
    red: PwmLed<P>,
    blue: PwmLed<P>,
}

impl<P: SetDutyCycle> RgbIndicator<P> {
    /// Create the indicator from the red and blue channels
    pub fn new(red: P, blue: P) -> Self {
        Self {
            red: PwmLed::new(red),
            blue: PwmLed::new(blue),
        }
    }

    /// Apply one joystick sample
    ///
    /// With `enabled` false both channels are forced to zero.
    pub fn update(
        &mut self,
        sample: JoystickSample,
        config: &JoystickConfig,
        enabled: bool,
    ) -> Result<(), LedError<P::Error>> {
        if !enabled {
            return self.off();
        }
        self.red.set_intensity(config.led_intensity(sample.x))?;
        self.blue.set_intensity(config.led_intensity(sample.y))
    }

    /// Turn both LEDs off
    pub fn off(&mut self) -> Result<(), LedError<P::Error>> {
        self.red.off()?;
        self.blue.off()
    }

    /// Current (red, blue) brightness
    pub fn levels(&self) -> (u8, u8) {
        (self.red.intensity(), self.blue.intensity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::pwm::{Error, ErrorKind, ErrorType};
    use proptest::prelude::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Stalled;

    impl Error for Stalled {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    /// Mock PWM channel for testing
    struct MockPwm {
        max: u16,
        duty: u16,
        fail: bool,
    }

    impl MockPwm {
        fn new(max: u16) -> Self {
            Self {
                max,
                duty: 0,
                fail: false,
            }
        }
    }

    impl ErrorType for MockPwm {
        type Error = Stalled;
    }

    impl SetDutyCycle for MockPwm {
        fn max_duty_cycle(&self) -> u16 {
            self.max
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
            if self.fail {
                return Err(Stalled);
            }
            self.duty = duty;
            Ok(())
        }
    }

    #[test]
    fn test_intensity_scales_to_duty_range() {
        let mut led = PwmLed::new(MockPwm::new(1000));

        led.set_intensity(255).unwrap();
        assert_eq!(led.channel.duty, 1000);

        led.set_intensity(127).unwrap();
        assert_eq!(led.channel.duty, 498);
        assert_eq!(led.intensity(), 127);

        led.off().unwrap();
        assert_eq!(led.channel.duty, 0);
    }

    #[test]
    fn test_matching_duty_range_is_identity() {
        let mut led = PwmLed::new(MockPwm::new(255));
        led.set_intensity(200).unwrap();
        assert_eq!(led.release().duty, 200);
    }

    #[test]
    fn test_failed_write_keeps_last_intensity() {
        let mut led = PwmLed::new(MockPwm::new(255));
        led.set_intensity(40).unwrap();

        led.channel.fail = true;
        assert_eq!(led.set_intensity(90), Err(LedError::Pwm(Stalled)));
        assert_eq!(led.intensity(), 40);
    }

    #[test]
    fn test_indicator_follows_axes() {
        let mut rgb = RgbIndicator::new(MockPwm::new(255), MockPwm::new(255));
        let config = JoystickConfig::SYMMETRIC;

        rgb.update(JoystickSample::new(0, 2048), &config, true).unwrap();
        assert_eq!(rgb.levels(), (255, 0));

        rgb.update(JoystickSample::new(2048, 1024), &config, true).unwrap();
        assert_eq!(rgb.levels(), (0, 127));
    }

    #[test]
    fn test_indicator_disabled_forces_off() {
        let mut rgb = RgbIndicator::new(MockPwm::new(255), MockPwm::new(255));
        let config = JoystickConfig::SYMMETRIC;

        rgb.update(JoystickSample::new(0, 0), &config, true).unwrap();
        assert_eq!(rgb.levels(), (255, 255));

        rgb.update(JoystickSample::new(0, 0), &config, false).unwrap();
        assert_eq!(rgb.levels(), (0, 0));
        assert_eq!(rgb.red.channel.duty, 0);
        assert_eq!(rgb.blue.channel.duty, 0);
    }

    #[test]
    fn test_indicator_dead_zone() {
        let mut rgb = RgbIndicator::new(MockPwm::new(255), MockPwm::new(255));
        let config = JoystickConfig::with_dead_zone(100);

        rgb.update(JoystickSample::new(1990, 2140), &config, true).unwrap();
        assert_eq!(rgb.levels(), (0, 0));
    }

    proptest! {
        #[test]
        fn prop_duty_never_exceeds_max(level in any::<u8>(), max in 1u16..=u16::MAX) {
            let mut led = PwmLed::new(MockPwm::new(max));
            led.set_intensity(level).unwrap();
            prop_assert!(led.channel.duty <= max);
        }
    }
}
