//! Frame composition
//!
//! One frame is always built the same way: clear, border, square. The
//! caller flushes once afterwards, so a half-drawn frame never reaches
//! the panel.

use bitdog_ssd1306::Framebuffer;

use crate::ui::BorderStyle;

/// Pixel position of the square's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Position {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
}

impl Position {
    /// Position of a `size` square centered on a `width` x `height` panel
    pub const fn centered(width: u32, height: u32, size: u32) -> Self {
        Self {
            x: (width.saturating_sub(size) / 2) as i32,
            y: (height.saturating_sub(size) / 2) as i32,
        }
    }
}

/// Draw a full-panel border in the given style
pub fn draw_border<const WIDTH: usize, const PAGES: usize>(
    fb: &mut Framebuffer<WIDTH, PAGES>,
    style: BorderStyle,
) {
    let (w, h) = (fb.width() as i32, fb.height() as i32);
    match style {
        BorderStyle::Solid => fb.draw_rectangle(0, 0, w, h, true),
        BorderStyle::Dashed => fb.draw_dashed_rectangle(0, 0, w, h, true),
        BorderStyle::Dotted => fb.draw_dotted_rectangle(0, 0, w, h, true),
    }
}

/// Build one frame: clear, border, then the square at `square`
pub fn compose_frame<const WIDTH: usize, const PAGES: usize>(
    fb: &mut Framebuffer<WIDTH, PAGES>,
    border: BorderStyle,
    square: Position,
    square_size: u8,
) {
    fb.clear();
    draw_border(fb, border);
    let size = i32::from(square_size);
    fb.fill_rectangle(square.x, square.y, size, size, true);
}
