//! embedded-graphics support
//!
//! Lets embedded-graphics primitives render into the framebuffer. Every
//! pixel goes through [`Framebuffer::draw_pixel`], so clipping behaves the
//! same as with the built-in primitives.

use core::convert::Infallible;

use embedded_graphics_core::draw_target::DrawTarget;
use embedded_graphics_core::geometry::{OriginDimensions, Size};
use embedded_graphics_core::pixelcolor::BinaryColor;
use embedded_graphics_core::Pixel;

use crate::framebuffer::Framebuffer;

impl<const WIDTH: usize, const PAGES: usize> OriginDimensions for Framebuffer<WIDTH, PAGES> {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, (PAGES * 8) as u32)
    }
}

impl<const WIDTH: usize, const PAGES: usize> DrawTarget for Framebuffer<WIDTH, PAGES> {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.draw_pixel(point.x, point.y, color.is_on());
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let width = WIDTH as i32;
        let height = (PAGES * 8) as i32;
        self.fill_rectangle(0, 0, width, height, color.is_on());
        Ok(())
    }
}
