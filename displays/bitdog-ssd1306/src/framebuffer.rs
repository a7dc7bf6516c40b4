//! Bit-packed monochrome framebuffer
//!
//! The buffer mirrors the SSD1306 display RAM in horizontal addressing
//! mode. Rows are grouped in pages of 8; each byte holds one column of a
//! page with the topmost row in bit 0:
//!
//! ```text
//! byte index = x + (y / 8) * WIDTH
//! bit index  = y % 8
//! ```
//!
//! All drawing is clipped per pixel. Coordinates and extents are signed
//! so shapes may hang off any edge of the panel.

/// Monochrome framebuffer of `WIDTH` columns and `PAGES * 8` rows
#[derive(Clone, PartialEq, Eq)]
pub struct Framebuffer<const WIDTH: usize, const PAGES: usize> {
    pages: [[u8; WIDTH]; PAGES],
}

/// 128x64 panel (the BitDogLab OLED)
pub type Framebuffer128x64 = Framebuffer<128, 8>;

/// 128x32 panel
pub type Framebuffer128x32 = Framebuffer<128, 4>;

impl<const WIDTH: usize, const PAGES: usize> Default for Framebuffer<WIDTH, PAGES> {
    fn default() -> Self {
        Self::new()
    }
}

/// Widest panel the controller can address
pub const MAX_WIDTH: usize = 128;

/// Most pages the controller can address (64 rows)
pub const MAX_PAGES: usize = 8;

impl<const WIDTH: usize, const PAGES: usize> Framebuffer<WIDTH, PAGES> {
    /// Buffer length in bytes
    pub const SIZE: usize = WIDTH * PAGES;

    /// Evaluated at monomorphization; rejects sizes the controller cannot address
    const GEOMETRY: () = assert!(
        WIDTH > 0 && WIDTH <= MAX_WIDTH && PAGES > 0 && PAGES <= MAX_PAGES,
        "SSD1306 panels are 1-128 columns by 1-8 pages"
    );

    /// Create a cleared framebuffer
    ///
    /// Fails to compile for a geometry outside 1-128 x 1-8 pages.
    pub const fn new() -> Self {
        let () = Self::GEOMETRY;
        Self {
            pages: [[0; WIDTH]; PAGES],
        }
    }

    /// Width in pixels
    pub const fn width(&self) -> usize {
        WIDTH
    }

    /// Height in pixels
    pub const fn height(&self) -> usize {
        PAGES * 8
    }

    /// Raw buffer in display RAM order
    pub fn as_bytes(&self) -> &[u8] {
        self.pages.as_flattened()
    }

    /// Clear every pixel
    pub fn clear(&mut self) {
        for page in self.pages.iter_mut() {
            page.fill(0);
        }
    }

    /// Map a coordinate to (page, column, bit mask), or `None` off-panel
    fn locate(x: i32, y: i32) -> Option<(usize, usize, u8)> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= WIDTH || y >= PAGES * 8 {
            return None;
        }
        Some((y / 8, x, 1 << (y % 8)))
    }

    /// Read a pixel, `None` when off-panel
    pub fn pixel(&self, x: i32, y: i32) -> Option<bool> {
        Self::locate(x, y).map(|(page, col, mask)| self.pages[page][col] & mask != 0)
    }

    /// Set (`color = true`) or clear a single pixel
    ///
    /// Off-panel coordinates are ignored.
    pub fn draw_pixel(&mut self, x: i32, y: i32, color: bool) {
        if let Some((page, col, mask)) = Self::locate(x, y) {
            if color {
                self.pages[page][col] |= mask;
            } else {
                self.pages[page][col] &= !mask;
            }
        }
    }

    /// Outline of a `w` x `h` rectangle with its top-left corner at (x, y)
    pub fn draw_rectangle(&mut self, x: i32, y: i32, w: i32, h: i32, color: bool) {
        self.stroke_rectangle(x, y, w, h, 1, color);
    }

    /// Outline with every other pixel lit, phase restarting on each edge
    pub fn draw_dashed_rectangle(&mut self, x: i32, y: i32, w: i32, h: i32, color: bool) {
        self.stroke_rectangle(x, y, w, h, 2, color);
    }

    /// Outline with every third pixel lit, phase restarting on each edge
    pub fn draw_dotted_rectangle(&mut self, x: i32, y: i32, w: i32, h: i32, color: bool) {
        self.stroke_rectangle(x, y, w, h, 3, color);
    }

    /// Every pixel of the `w` x `h` region, clipped to the panel
    pub fn fill_rectangle(&mut self, x: i32, y: i32, w: i32, h: i32, color: bool) {
        if w <= 0 || h <= 0 {
            return;
        }
        let (x0, x1) = clip(x, w, WIDTH);
        let (y0, y1) = clip(y, h, PAGES * 8);
        for yy in y0..y1 {
            for xx in x0..x1 {
                self.draw_pixel(xx, yy, color);
            }
        }
    }

    /// Rectangle outline stepping `step` pixels along each edge
    ///
    /// Top and bottom rows run from `x`, left and right columns from `y`.
    fn stroke_rectangle(&mut self, x: i32, y: i32, w: i32, h: i32, step: usize, color: bool) {
        if w <= 0 || h <= 0 {
            return;
        }
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);

        for i in (0..w).step_by(step) {
            self.draw_pixel(x.saturating_add(i), y, color);
            self.draw_pixel(x.saturating_add(i), bottom, color);
        }
        for j in (0..h).step_by(step) {
            self.draw_pixel(x, y.saturating_add(j), color);
            self.draw_pixel(right, y.saturating_add(j), color);
        }
    }
}

/// Clip the span `[start, start + len)` to `[0, limit)`
fn clip(start: i32, len: i32, limit: usize) -> (i32, i32) {
    let limit = limit as i32;
    let lo = start.clamp(0, limit);
    let hi = start.saturating_add(len).clamp(0, limit);
    (lo, hi.max(lo))
}

impl<const WIDTH: usize, const PAGES: usize> core::fmt::Debug for Framebuffer<WIDTH, PAGES> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let lit = self.as_bytes().iter().map(|b| b.count_ones()).sum::<u32>();
        write!(f, "Framebuffer<{}x{}>({} lit)", WIDTH, PAGES * 8, lit)
    }
}

#[cfg(feature = "defmt")]
impl<const WIDTH: usize, const PAGES: usize> defmt::Format for Framebuffer<WIDTH, PAGES> {
    fn format(&self, f: defmt::Formatter) {
        let lit = self.as_bytes().iter().map(|b| b.count_ones()).sum::<u32>();
        defmt::write!(f, "Framebuffer<{}x{}>({} lit)", WIDTH, PAGES * 8, lit);
    }
}
