//! Status LED on a GPIO pin

use embedded_hal::digital::StatefulOutputPin;

use super::LedError;

/// On/off LED
///
/// The pin can be configured as active-high (default) or active-low.
pub struct StatusLed<P> {
    pin: P,
    /// If true, LED on = pin low
    inverted: bool,
}

impl<P: StatefulOutputPin> StatusLed<P> {
    /// Create a status LED and switch it off
    pub fn new(pin: P, inverted: bool) -> Result<Self, LedError<P::Error>> {
        let mut led = Self { pin, inverted };
        led.set(false)?;
        Ok(led)
    }

    /// Create an active-high status LED
    pub fn new_active_high(pin: P) -> Result<Self, LedError<P::Error>> {
        Self::new(pin, false)
    }

    /// Create an active-low status LED
    pub fn new_active_low(pin: P) -> Result<Self, LedError<P::Error>> {
        Self::new(pin, true)
    }

    /// Switch the LED on or off
    pub fn set(&mut self, on: bool) -> Result<(), LedError<P::Error>> {
        let result = if on != self.inverted {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        result.map_err(LedError::Pin)
    }

    /// Flip the LED, returning the new state
    pub fn toggle(&mut self) -> Result<bool, LedError<P::Error>> {
        self.pin.toggle().map_err(LedError::Pin)?;
        self.is_on()
    }

    /// Whether the LED is lit, read back from the pin's output latch
    pub fn is_on(&mut self) -> Result<bool, LedError<P::Error>> {
        let high = self.pin.is_set_high().map_err(LedError::Pin)?;
        Ok(high != self.inverted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::{ErrorType, OutputPin};

    /// Mock GPIO pin for testing
    struct MockPin {
        high: bool,
    }

    impl MockPin {
        fn new() -> Self {
            Self { high: false }
        }
    }

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            Ok(())
        }
    }

    impl StatefulOutputPin for MockPin {
        fn is_set_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self.high)
        }

        fn is_set_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.high)
        }
    }

    #[test]
    fn test_active_high_led() {
        let mut led = StatusLed::new_active_high(MockPin::new()).unwrap();

        // Initially off
        assert!(!led.is_on().unwrap());
        assert!(!led.pin.high);

        led.set(true).unwrap();
        assert!(led.is_on().unwrap());
        assert!(led.pin.high);
    }

    #[test]
    fn test_active_low_led() {
        let mut led = StatusLed::new_active_low(MockPin::new()).unwrap();

        // Off means the pin is driven high
        assert!(!led.is_on().unwrap());
        assert!(led.pin.high);

        led.set(true).unwrap();
        assert!(led.is_on().unwrap());
        assert!(!led.pin.high);
    }

    #[test]
    fn test_toggle() {
        let mut led = StatusLed::new_active_high(MockPin::new()).unwrap();
        assert_eq!(led.toggle(), Ok(true));
        assert_eq!(led.toggle(), Ok(false));
        assert_eq!(led.toggle(), Ok(true));
        assert!(led.pin.high);
    }
}
