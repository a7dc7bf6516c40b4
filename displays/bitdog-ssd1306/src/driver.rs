//! SSD1306 OLED display driver
//!
//! Owns a [`Framebuffer`] and a [`Transport`]. Drawing calls only touch the
//! framebuffer; [`Ssd1306::flush`] pushes the whole buffer in one transfer.

use embedded_hal::delay::DelayNs;

use crate::command::{AddressingMode, Command};
use crate::framebuffer::Framebuffer;
use crate::transport::Transport;

/// Power-up settle time before the first command
pub const POWER_UP_DELAY_MS: u32 = 100;

/// Contrast level programmed by [`Ssd1306::init`]
pub const DEFAULT_CONTRAST: u8 = 0xCF;

/// Errors from display operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Bus transfer failed or was not acknowledged
    Transport(E),
    /// Flush attempted before [`Ssd1306::init`]
    NotInitialized,
}

/// Controller state as known to the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayState {
    /// Power-on state, configuration unknown
    Uninitialized,
    /// Init sequence sent, controller matches the framebuffer layout
    Ready,
}

/// SSD1306 OLED driver
pub struct Ssd1306<T, const WIDTH: usize, const PAGES: usize> {
    transport: T,
    /// Frame buffer (1 bit per pixel, organized as pages)
    buffer: Framebuffer<WIDTH, PAGES>,
    state: DisplayState,
}

impl<T, const WIDTH: usize, const PAGES: usize> Ssd1306<T, WIDTH, PAGES>
where
    T: Transport,
{
    /// Create a new driver; the controller is not touched until `init`
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            buffer: Framebuffer::new(),
            state: DisplayState::Uninitialized,
        }
    }

    /// Current controller state
    pub fn state(&self) -> DisplayState {
        self.state
    }

    /// Initialize the display
    ///
    /// Waits for the controller to power up, programs horizontal addressing
    /// over the whole panel and pushes a blank frame.
    pub fn init(&mut self, delay: &mut impl DelayNs) -> Result<(), Error<T::Error>> {
        delay.delay_ms(POWER_UP_DELAY_MS);

        let rows = PAGES * 8;
        let init_cmds = [
            Command::DisplayOn(false),
            Command::ClockDivider(0x80),
            Command::Multiplex((rows - 1) as u8),
            Command::DisplayOffset(0),
            Command::StartLine(0),
            Command::ChargePump(true),
            Command::AddressingMode(AddressingMode::Horizontal),
            Command::ColumnAddress(0, (WIDTH - 1) as u8),
            Command::PageAddress(0, (PAGES - 1) as u8),
            Command::SegmentRemap(true),
            Command::ReverseComScan(true),
            // Alternative COM layout on 64-row panels, sequential on 32-row
            Command::ComPinConfig(if rows > 32 { 0x12 } else { 0x02 }),
            Command::Contrast(DEFAULT_CONTRAST),
            Command::PreCharge(0xF1),
            Command::VcomDeselect(0x40),
            Command::EntireDisplayOn(false),
            Command::Invert(false),
            Command::DisplayOn(true),
        ];

        for cmd in init_cmds {
            self.command(cmd)?;
        }
        self.state = DisplayState::Ready;

        self.buffer.clear();
        self.flush()
    }

    /// Send a command, one framed transfer per byte
    fn command(&mut self, cmd: Command) -> Result<(), Error<T::Error>> {
        let mut buf = [0u8; 3];
        for &byte in cmd.encode(&mut buf) {
            self.transport.send_command(byte).map_err(Error::Transport)?;
        }
        Ok(())
    }

    /// Flush the frame buffer to the display
    ///
    /// On failure the framebuffer is left as it was, so the same frame can
    /// be flushed again.
    pub fn flush(&mut self) -> Result<(), Error<T::Error>> {
        if self.state != DisplayState::Ready {
            return Err(Error::NotInitialized);
        }
        self.transport
            .send_data(self.buffer.as_bytes())
            .map_err(Error::Transport)
    }

    /// Alias of [`Ssd1306::flush`]
    pub fn show(&mut self) -> Result<(), Error<T::Error>> {
        self.flush()
    }

    /// Set display contrast (0-255)
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), Error<T::Error>> {
        self.command(Command::Contrast(contrast))
    }

    /// Turn display on/off
    pub fn set_display_on(&mut self, on: bool) -> Result<(), Error<T::Error>> {
        self.command(Command::DisplayOn(on))
    }

    /// Invert display colors
    pub fn set_inverted(&mut self, inverted: bool) -> Result<(), Error<T::Error>> {
        self.command(Command::Invert(inverted))
    }

    /// Shared access to the frame buffer
    pub fn framebuffer(&self) -> &Framebuffer<WIDTH, PAGES> {
        &self.buffer
    }

    /// Mutable access to the frame buffer
    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer<WIDTH, PAGES> {
        &mut self.buffer
    }

    /// Clear the frame buffer
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// See [`Framebuffer::draw_pixel`]
    pub fn draw_pixel(&mut self, x: i32, y: i32, color: bool) {
        self.buffer.draw_pixel(x, y, color);
    }

    /// See [`Framebuffer::draw_rectangle`]
    pub fn draw_rectangle(&mut self, x: i32, y: i32, w: i32, h: i32, color: bool) {
        self.buffer.draw_rectangle(x, y, w, h, color);
    }

    /// See [`Framebuffer::fill_rectangle`]
    pub fn fill_rectangle(&mut self, x: i32, y: i32, w: i32, h: i32, color: bool) {
        self.buffer.fill_rectangle(x, y, w, h, color);
    }

    /// See [`Framebuffer::draw_dashed_rectangle`]
    pub fn draw_dashed_rectangle(&mut self, x: i32, y: i32, w: i32, h: i32, color: bool) {
        self.buffer.draw_dashed_rectangle(x, y, w, h, color);
    }

    /// See [`Framebuffer::draw_dotted_rectangle`]
    pub fn draw_dotted_rectangle(&mut self, x: i32, y: i32, w: i32, h: i32, color: bool) {
        self.buffer.draw_dotted_rectangle(x, y, w, h, color);
    }

    /// Release the transport
    pub fn release(self) -> T {
        self.transport
    }
}
