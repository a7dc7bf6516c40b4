//! UI state
//!
//! Button presses change a small piece of state (border style, status LED,
//! PWM enable). The button task writes it and the render loop reads it once
//! per frame, so it lives in a single atomic byte: every read is a complete,
//! consistent snapshot.

use portable_atomic::{AtomicU8, Ordering};

use crate::input::Button;

/// Border drawn around the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BorderStyle {
    /// Continuous outline
    #[default]
    Solid,
    /// Every other pixel
    Dashed,
    /// Every third pixel
    Dotted,
}

impl BorderStyle {
    /// Style selected by the next joystick button press
    pub const fn next(self) -> Self {
        match self {
            BorderStyle::Solid => BorderStyle::Dashed,
            BorderStyle::Dashed => BorderStyle::Dotted,
            BorderStyle::Dotted => BorderStyle::Solid,
        }
    }

    /// Style for a raw index, `None` outside 0..=2
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(BorderStyle::Solid),
            1 => Some(BorderStyle::Dashed),
            2 => Some(BorderStyle::Dotted),
            _ => None,
        }
    }

    /// Raw index of the style
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Snapshot of the UI state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UiState {
    /// Red/blue LEDs follow the joystick
    pub pwm_enabled: bool,
    /// Green status LED lit
    pub green_led: bool,
    /// Current border style
    pub border: BorderStyle,
}

impl Default for UiState {
    fn default() -> Self {
        Self::INITIAL
    }
}

const PWM_BIT: u8 = 1 << 0;
const GREEN_BIT: u8 = 1 << 1;
const BORDER_SHIFT: u8 = 2;
const BORDER_MASK: u8 = 0b11 << BORDER_SHIFT;

impl UiState {
    /// State at power-up
    pub const INITIAL: Self = Self {
        pwm_enabled: true,
        green_led: false,
        border: BorderStyle::Solid,
    };

    /// State after a press of `button`
    ///
    /// The joystick button toggles the green LED and cycles the border;
    /// button A toggles the PWM LEDs.
    pub const fn apply(self, button: Button) -> Self {
        match button {
            Button::Joystick => Self {
                green_led: !self.green_led,
                border: self.border.next(),
                ..self
            },
            Button::A => Self {
                pwm_enabled: !self.pwm_enabled,
                ..self
            },
        }
    }

    const fn to_bits(self) -> u8 {
        let mut bits = self.border.index() << BORDER_SHIFT;
        if self.pwm_enabled {
            bits |= PWM_BIT;
        }
        if self.green_led {
            bits |= GREEN_BIT;
        }
        bits
    }

    const fn from_bits(bits: u8) -> Self {
        let border = match BorderStyle::from_index((bits & BORDER_MASK) >> BORDER_SHIFT) {
            Some(border) => border,
            None => BorderStyle::Solid,
        };
        Self {
            pwm_enabled: bits & PWM_BIT != 0,
            green_led: bits & GREEN_BIT != 0,
            border,
        }
    }
}

/// UI state shared between the button task and the render loop
pub struct SharedUiState {
    bits: AtomicU8,
}

impl Default for SharedUiState {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedUiState {
    /// Shared state holding [`UiState::INITIAL`]
    pub const fn new() -> Self {
        Self {
            bits: AtomicU8::new(UiState::INITIAL.to_bits()),
        }
    }

    /// Current snapshot
    pub fn load(&self) -> UiState {
        UiState::from_bits(self.bits.load(Ordering::Acquire))
    }

    /// Apply a button press atomically, returning the new state
    pub fn apply(&self, button: Button) -> UiState {
        let update = |bits: u8| Some(UiState::from_bits(bits).apply(button).to_bits());
        let previous = match self
            .bits
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, update)
        {
            Ok(bits) | Err(bits) => bits,
        };
        UiState::from_bits(previous).apply(button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_cycle() {
        let style = BorderStyle::Solid;
        assert_eq!(style.next(), BorderStyle::Dashed);
        assert_eq!(style.next().next(), BorderStyle::Dotted);
        assert_eq!(style.next().next().next(), BorderStyle::Solid);
    }

    #[test]
    fn test_border_from_index() {
        assert_eq!(BorderStyle::from_index(0), Some(BorderStyle::Solid));
        assert_eq!(BorderStyle::from_index(2), Some(BorderStyle::Dotted));
        assert_eq!(BorderStyle::from_index(3), None);
        assert_eq!(BorderStyle::Dashed.index(), 1);
    }

    #[test]
    fn test_joystick_button() {
        let state = UiState::INITIAL.apply(Button::Joystick);
        assert!(state.green_led);
        assert_eq!(state.border, BorderStyle::Dashed);
        assert!(state.pwm_enabled);

        let state = state.apply(Button::Joystick);
        assert!(!state.green_led);
        assert_eq!(state.border, BorderStyle::Dotted);
    }

    #[test]
    fn test_button_a() {
        let state = UiState::INITIAL.apply(Button::A);
        assert!(!state.pwm_enabled);
        assert!(!state.green_led);
        assert_eq!(state.border, BorderStyle::Solid);
        assert!(state.apply(Button::A).pwm_enabled);
    }

    #[test]
    fn test_bits_round_trip() {
        let mut state = UiState::INITIAL;
        for button in [Button::Joystick, Button::A, Button::Joystick, Button::Joystick] {
            state = state.apply(button);
            assert_eq!(UiState::from_bits(state.to_bits()), state);
        }
    }

    #[test]
    fn test_shared_state() {
        let shared = SharedUiState::new();
        assert_eq!(shared.load(), UiState::INITIAL);

        let after = shared.apply(Button::Joystick);
        assert_eq!(after.border, BorderStyle::Dashed);
        assert_eq!(shared.load(), after);

        shared.apply(Button::A);
        let snapshot = shared.load();
        assert!(!snapshot.pwm_enabled);
        assert!(snapshot.green_led);
        assert_eq!(snapshot.border, BorderStyle::Dashed);
    }
}
