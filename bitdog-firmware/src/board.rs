//! BitDogLab pin assignment
//!
//! | Function          | GPIO | Peripheral |
//! |-------------------|------|------------|
//! | Red LED           | 11   | PWM5 B     |
//! | Green LED         | 12   | SIO        |
//! | Blue LED          | 13   | PWM6 B     |
//! | Joystick button   | 22   | SIO, pull-up |
//! | Button A          | 5    | SIO, pull-up |
//! | Joystick X        | 26   | ADC0       |
//! | Joystick Y        | 27   | ADC1       |
//! | OLED SDA          | 14   | I2C1       |
//! | OLED SCL          | 15   | I2C1       |

use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C1;

use bitdog_ssd1306::{I2cTransport, Ssd1306};

/// OLED width in pixels
pub const DISPLAY_WIDTH: usize = 128;

/// OLED height in 8-pixel pages
pub const DISPLAY_PAGES: usize = 8;

/// PWM counter top; one count per brightness step
pub const PWM_TOP: u16 = 255;

/// I2C bus the OLED sits on
pub type DisplayBus = I2c<'static, I2C1, Blocking>;

/// The 128x64 SSD1306 on I2C1
pub type Display = Ssd1306<I2cTransport<DisplayBus>, DISPLAY_WIDTH, DISPLAY_PAGES>;
