//! SSD1306 OLED driver for the BitDog joystick demo
//!
//! This crate provides:
//! - `Transport` trait and an I2C implementation with command/data framing
//! - `Command` set for the SSD1306 controller
//! - `Framebuffer` with bit-packed page layout and drawing primitives
//! - `Ssd1306` driver tying the framebuffer to a transport
//! - `DrawTarget` for the framebuffer behind the `graphics` feature (always
//!   enabled for the crate's own tests)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Ssd1306 (init / flush / contrast)      │
//! └─────────────────────────────────────────┘
//!          │                     │
//!          ▼                     ▼
//! ┌─────────────────┐   ┌─────────────────┐
//! │   Framebuffer   │   │    Transport    │
//! │ (pure drawing)  │   │ (I2C, 0x00/0x40)│
//! └─────────────────┘   └─────────────────┘
//! ```
//!
//! Drawing never touches the bus. A frame is built with any number of
//! drawing calls and pushed with a single [`Ssd1306::flush`].

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod driver;
pub mod framebuffer;
#[cfg(feature = "graphics")]
pub mod graphics;
pub mod transport;

// Re-export key types
pub use command::Command;
pub use driver::{DisplayState, Error, Ssd1306};
pub use framebuffer::{Framebuffer, Framebuffer128x32, Framebuffer128x64};
pub use transport::{I2cTransport, Transport, DEFAULT_ADDRESS};
