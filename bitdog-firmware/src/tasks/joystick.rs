//! Joystick sampling task
//!
//! Reads both axes every frame interval, drives the red/blue LEDs from the
//! deflection and hands the sample to the display task.

use defmt::*;
use embassy_rp::adc::{Adc, Async, Channel};
use embassy_rp::pwm::PwmOutput;
use embassy_time::{Duration, Ticker};

use bitdog_core::joystick::JoystickSample;
use bitdog_drivers::RgbIndicator;

use crate::channels::{JOYSTICK, UI_STATE};
use crate::config::BOARD_CONFIG;

/// Joystick task
///
/// Runs at `ui.frame_interval_ms`. The display task only ever sees the
/// newest sample, so a slow flush never queues up stale frames.
#[embassy_executor::task]
pub async fn joystick_task(
    mut adc: Adc<'static, Async>,
    mut x_axis: Channel<'static>,
    mut y_axis: Channel<'static>,
    mut rgb: RgbIndicator<PwmOutput<'static>>,
) {
    info!("Joystick task started");

    let joystick = BOARD_CONFIG.joystick;
    let interval = Duration::from_millis(u64::from(BOARD_CONFIG.ui.frame_interval_ms));
    let mut ticker = Ticker::every(interval);
    let mut pwm_was_enabled = true;

    loop {
        ticker.next().await;

        let x = adc.read(&mut x_axis).await;
        let y = adc.read(&mut y_axis).await;
        let sample = match (x, y) {
            (Ok(x), Ok(y)) => JoystickSample::new(x, y),
            (Err(e), _) | (_, Err(e)) => {
                warn!("Joystick ADC read failed: {}", Debug2Format(&e));
                continue;
            }
        };

        let ui = UI_STATE.load();
        if ui.pwm_enabled != pwm_was_enabled {
            debug!("PWM LEDs {}", if ui.pwm_enabled { "enabled" } else { "disabled" });
            pwm_was_enabled = ui.pwm_enabled;
        }

        if let Err(e) = rgb.update(sample, &joystick, ui.pwm_enabled) {
            warn!("LED update failed: {}", Debug2Format(&e));
        }

        trace!("Joystick x={} y={} leds={}", sample.x, sample.y, rgb.levels());
        JOYSTICK.signal(sample);
    }
}
