//! Inter-task communication
//!
//! Defines the statics shared between Embassy tasks.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use bitdog_core::joystick::JoystickSample;
use bitdog_core::ui::SharedUiState;

/// Border style, status LED and PWM enable, written by the button task
pub static UI_STATE: SharedUiState = SharedUiState::new();

/// Latest joystick sample (only the newest one matters to the renderer)
pub static JOYSTICK: Signal<CriticalSectionRawMutex, JoystickSample> = Signal::new();

/// Redraw request after a UI state change
pub static REDRAW: Signal<CriticalSectionRawMutex, ()> = Signal::new();
