//! Board configuration
//!
//! `board.toml` is parsed and validated by the build script, which emits
//! `BOARD_CONFIG` into OUT_DIR. Edit board.toml and rebuild to customize.

use bitdog_core::config::{BoardConfig, DisplayConfig, UiConfig};
use bitdog_core::joystick::JoystickConfig;

include!(concat!(env!("OUT_DIR"), "/board_config.rs"));
