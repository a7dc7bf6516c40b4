//! Board-agnostic core logic for the joystick display demo
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Configuration type definitions (display, joystick, UI timing)
//! - Joystick mapping (LED intensity, square position, dead zone)
//! - Button debouncing
//! - UI state and the lock-free snapshot shared between tasks
//! - Frame composition on top of the SSD1306 framebuffer

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod input;
pub mod joystick;
pub mod render;
pub mod ui;
