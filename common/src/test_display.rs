//! In-memory framebuffer for rendering tests.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

pub struct TestDisplay {
    size: Size,
    pixels: Vec<Rgb565>,
}

impl TestDisplay {
    /// Screen-sized display filled with magenta so untouched pixels stand out.
    pub fn new() -> Self {
        Self {
            size: Size::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            pixels: vec![Rgb565::MAGENTA; (SCREEN_WIDTH * SCREEN_HEIGHT) as usize],
        }
    }

    fn index(
        &self,
        point: Point,
    ) -> Option<usize> {
        let (w, h) = (self.size.width as i32, self.size.height as i32);
        ((0..w).contains(&point.x) && (0..h).contains(&point.y)).then(|| (point.y * w + point.x) as usize)
    }

    pub fn pixel(
        &self,
        x: i32,
        y: i32,
    ) -> Rgb565 {
        self.pixels[self.index(Point::new(x, y)).expect("pixel inside the display")]
    }

    pub fn count(
        &self,
        color: Rgb565,
    ) -> usize {
        self.pixels.iter().filter(|&&c| c == color).count()
    }
}

impl DrawTarget for TestDisplay {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(i) = self.index(point) {
                self.pixels[i] = color;
            }
        }
        Ok(())
    }
}

impl OriginDimensions for TestDisplay {
    fn size(&self) -> Size { self.size }
}
