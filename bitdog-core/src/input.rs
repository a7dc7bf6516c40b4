//! Button input and debouncing

/// Physical buttons on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Push switch of the joystick
    Joystick,
    /// Button A
    A,
}

/// A falling edge seen on a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEvent {
    /// Which button was pressed
    pub button: Button,
    /// Timestamp of the edge in microseconds (free-running 32-bit clock)
    pub at_us: u32,
}

/// Debouncer shared by all buttons
///
/// A press is dropped when it arrives less than `window_us` after the last
/// accepted press of *any* button. Timestamps wrap at `u32::MAX`.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    window_us: u32,
    last_accepted_us: Option<u32>,
}

impl Debouncer {
    /// Create a debouncer with the given window in milliseconds
    pub const fn new(window_ms: u32) -> Self {
        Self {
            window_us: window_ms.saturating_mul(1000),
            last_accepted_us: None,
        }
    }

    /// Feed an edge; returns the event if it is accepted
    pub fn accept(&mut self, event: ButtonEvent) -> Option<ButtonEvent> {
        if let Some(last) = self.last_accepted_us {
            if event.at_us.wrapping_sub(last) < self.window_us {
                return None;
            }
        }
        self.last_accepted_us = Some(event.at_us);
        Some(event)
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(200)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(button: Button, at_us: u32) -> ButtonEvent {
        ButtonEvent { button, at_us }
    }

    #[test]
    fn test_first_press_accepted() {
        let mut debouncer = Debouncer::default();
        assert!(debouncer.accept(press(Button::A, 0)).is_some());
    }

    #[test]
    fn test_bounce_rejected() {
        let mut debouncer = Debouncer::new(200);
        assert!(debouncer.accept(press(Button::A, 1_000)).is_some());
        assert!(debouncer.accept(press(Button::A, 1_500)).is_none());
        assert!(debouncer.accept(press(Button::A, 200_999)).is_none());
        assert!(debouncer.accept(press(Button::A, 201_000)).is_some());
    }

    #[test]
    fn test_window_is_shared_between_buttons() {
        let mut debouncer = Debouncer::new(200);
        assert!(debouncer.accept(press(Button::Joystick, 0)).is_some());
        assert!(debouncer.accept(press(Button::A, 50_000)).is_none());
        assert!(debouncer.accept(press(Button::A, 250_000)).is_some());
    }

    #[test]
    fn test_rejected_press_does_not_extend_window() {
        let mut debouncer = Debouncer::new(200);
        assert!(debouncer.accept(press(Button::A, 0)).is_some());
        assert!(debouncer.accept(press(Button::A, 150_000)).is_none());
        assert!(debouncer.accept(press(Button::A, 200_000)).is_some());
    }

    #[test]
    fn test_clock_wrap() {
        let mut debouncer = Debouncer::new(200);
        assert!(debouncer.accept(press(Button::A, u32::MAX - 50_000)).is_some());
        assert!(debouncer.accept(press(Button::A, 100_000)).is_none());
        assert!(debouncer.accept(press(Button::A, 150_001)).is_some());
    }
}
