//! Embassy async tasks
//!
//! Each task runs independently and communicates via the statics in
//! `channels`.

pub mod buttons;
pub mod display;
pub mod joystick;

pub use buttons::button_task;
pub use display::display_task;
pub use joystick::joystick_task;
