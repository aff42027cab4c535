//! embedded-graphics integration
//!
//! Lets the framebuffer act as a [`DrawTarget`] so the usual primitives,
//! text styles, and images render into it. Pixels outside the panel are
//! ignored, per the `DrawTarget` contract.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Size};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::Pixel;

use crate::framebuffer::Framebuffer;

impl<const WIDTH: usize, const PAGES: usize> OriginDimensions for Framebuffer<WIDTH, PAGES> {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, (PAGES * 8) as u32)
    }
}

impl<const WIDTH: usize, const PAGES: usize> DrawTarget for Framebuffer<WIDTH, PAGES> {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }
            // Off-panel pixels are dropped, not errors
            let _ = self.set_point(point.x as usize, point.y as usize, color.is_on());
        }
        Ok(())
    }
}
