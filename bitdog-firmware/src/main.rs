//! BitDog - joystick display demo firmware
//!
//! Firmware for the RP2040-based BitDogLab board. The analog joystick moves
//! a square across the 128x64 SSD1306 OLED and sets the brightness of the
//! red/blue LEDs. The joystick button cycles the border style and toggles
//! the green LED; button A switches the red/blue LEDs on and off.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig, InterruptHandler as AdcInterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_time::{Delay, Timer};
use {defmt_rtt as _, panic_probe as _};

use bitdog_core::config::DisplayConfig;
use bitdog_drivers::{RgbIndicator, StatusLed};
use bitdog_ssd1306::I2cTransport;

use crate::board::{Display, PWM_TOP};
use crate::channels::UI_STATE;
use crate::config::BOARD_CONFIG;

mod board;
mod channels;
mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => AdcInterruptHandler;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("BitDog firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = BOARD_CONFIG;
    info!(
        "Board config: display={=u8:#x} @ {} Hz, dead_zone={}, square={}px, frame={}ms",
        config.display.address,
        config.display.frequency_hz,
        config.joystick.dead_zone,
        config.ui.square_size,
        config.ui.frame_interval_ms
    );

    // Buttons (active low)
    let joystick_button = Input::new(p.PIN_22, Pull::Up);
    let button_a = Input::new(p.PIN_5, Pull::Up);

    // Red (GPIO11, PWM5 B) and blue (GPIO13, PWM6 B), one count per brightness step
    let mut pwm_config = PwmConfig::default();
    pwm_config.top = PWM_TOP;
    let (_, red) = Pwm::new_output_b(p.PWM_SLICE5, p.PIN_11, pwm_config.clone()).split();
    let (_, blue) = Pwm::new_output_b(p.PWM_SLICE6, p.PIN_13, pwm_config).split();

    // Joystick axes
    let adc = Adc::new(p.ADC, Irqs, AdcConfig::default());
    let x_axis = Channel::new_pin(p.PIN_26, Pull::None);
    let y_axis = Channel::new_pin(p.PIN_27, Pull::None);

    // OLED on I2C1 (SDA GPIO14, SCL GPIO15)
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = config.display.frequency_hz;
    let bus = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c_config);
    let mut display = Display::new(I2cTransport::with_address(bus, config.display.address));

    match init_display(&mut display, &config.display) {
        Ok(()) => {
            info!("Display initialized");
            spawner.spawn(tasks::display_task(display)).unwrap();
        }
        Err(e) => {
            // LEDs and buttons keep working without the panel
            error!("Display init failed, running headless: {}", Debug2Format(&e));
        }
    }

    match (red, blue) {
        (Some(red), Some(blue)) => {
            let rgb = RgbIndicator::new(red, blue);
            spawner
                .spawn(tasks::joystick_task(adc, x_axis, y_axis, rgb))
                .unwrap();
        }
        _ => error!("PWM outputs unavailable, joystick task not started"),
    }

    // Green status LED (GPIO12)
    match StatusLed::new_active_high(Output::new(p.PIN_12, Level::Low)) {
        Ok(green) => {
            spawner
                .spawn(tasks::button_task(joystick_button, button_a, green))
                .unwrap();
        }
        Err(e) => error!("Status LED init failed: {}", Debug2Format(&e)),
    }

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat: {}", UI_STATE.load());
    }
}

/// Run the controller init sequence and apply the configured contrast
fn init_display(
    display: &mut Display,
    config: &DisplayConfig,
) -> Result<(), bitdog_ssd1306::Error<i2c::Error>> {
    display.init(&mut Delay)?;
    display.set_contrast(config.contrast)?;
    Ok(())
}
