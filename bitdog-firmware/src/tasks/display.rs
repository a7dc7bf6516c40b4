//! OLED render task
//!
//! Owns the SSD1306. Every joystick sample or redraw request produces one
//! complete frame (clear, border, square) and a single flush.

use defmt::*;
use embassy_futures::select::{select, Either};

use bitdog_core::render::{compose_frame, Position};

use crate::board::{Display, DISPLAY_PAGES, DISPLAY_WIDTH};
use crate::channels::{JOYSTICK, REDRAW, UI_STATE};
use crate::config::BOARD_CONFIG;

const WIDTH: u32 = DISPLAY_WIDTH as u32;
const HEIGHT: u32 = (DISPLAY_PAGES * 8) as u32;

/// Display task
///
/// Expects an initialized display. Flush errors are logged and the next
/// frame is tried as usual.
#[embassy_executor::task]
pub async fn display_task(mut display: Display) {
    info!("Display task started");

    let joystick = BOARD_CONFIG.joystick;
    let square_size = BOARD_CONFIG.ui.square_size;
    let size = u32::from(square_size);

    let mut square = Position::centered(WIDTH, HEIGHT, size);
    let mut failing = false;

    loop {
        let ui = UI_STATE.load();
        compose_frame(display.framebuffer_mut(), ui.border, square, square_size);

        match display.flush() {
            Ok(()) => {
                if failing {
                    info!("Display recovered");
                    failing = false;
                }
            }
            Err(e) => {
                // Log once per outage, not every frame
                if !failing {
                    error!("Display flush failed: {}", Debug2Format(&e));
                    failing = true;
                }
            }
        }

        match select(JOYSTICK.wait(), REDRAW.wait()).await {
            Either::First(sample) => {
                square = joystick.square_position(sample, WIDTH, HEIGHT, size);
            }
            Either::Second(()) => {}
        }
    }
}
