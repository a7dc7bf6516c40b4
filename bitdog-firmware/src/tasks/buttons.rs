//! Button handling task
//!
//! Waits for a falling edge on either button, debounces it and applies the
//! press to the shared UI state.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::{Input, Output};
use embassy_time::Instant;

use bitdog_core::input::{Button, ButtonEvent, Debouncer};
use bitdog_drivers::StatusLed;

use crate::channels::{REDRAW, UI_STATE};
use crate::config::BOARD_CONFIG;

/// Button task
///
/// - Joystick button: toggle the green LED, cycle the border style
/// - Button A: toggle the PWM LEDs
#[embassy_executor::task]
pub async fn button_task(
    mut joystick_button: Input<'static>,
    mut button_a: Input<'static>,
    mut green: StatusLed<Output<'static>>,
) {
    info!("Button task started");

    // One window for both buttons
    let mut debouncer = Debouncer::new(BOARD_CONFIG.ui.debounce_ms);

    loop {
        let button = match select(
            joystick_button.wait_for_falling_edge(),
            button_a.wait_for_falling_edge(),
        )
        .await
        {
            Either::First(()) => Button::Joystick,
            Either::Second(()) => Button::A,
        };

        let event = ButtonEvent {
            button,
            // Free-running microsecond clock, wraps after ~71 minutes
            at_us: Instant::now().as_micros() as u32,
        };
        let Some(event) = debouncer.accept(event) else {
            trace!("Bounce on {} ignored", button);
            continue;
        };

        let state = UI_STATE.apply(event.button);
        debug!("{} pressed: {}", event.button, state);

        if event.button == Button::Joystick {
            if let Err(e) = green.set(state.green_led) {
                warn!("Status LED write failed: {}", Debug2Format(&e));
            }
        }

        REDRAW.signal(());
    }
}
