use core::convert::Infallible;

use embedded_graphics::{pixelcolor::Rgb565, prelude::*};

/// Off-screen pixel buffer composed once per frame and handed to the display
/// sink as a whole. Out-of-bounds draws are clipped, like the panel itself.
pub struct Canvas<const W: usize, const H: usize> {
    pixels: [[Rgb565; W]; H],
}

impl<const W: usize, const H: usize> Canvas<W, H> {
    pub fn new() -> Self {
        Self {
            pixels: [[Rgb565::BLACK; W]; H],
        }
    }

    /// Read back a single pixel, `None` outside the canvas.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb565> {
        self.pixels.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Row-major pixel stream, for sinks that blit the whole canvas.
    pub fn iter_pixels(&self) -> impl Iterator<Item = Rgb565> + '_ {
        self.pixels.iter().flat_map(|row| row.iter().copied())
    }
}

impl<const W: usize, const H: usize> Default for Canvas<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> OriginDimensions for Canvas<W, H> {
    fn size(&self) -> Size {
        Size::new(W as u32, H as u32)
    }
}

impl<const W: usize, const H: usize> DrawTarget for Canvas<W, H> {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if (0..W as i32).contains(&point.x) && (0..H as i32).contains(&point.y) {
                self.pixels[point.y as usize][point.x as usize] = color;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas_is_black() {
        let canvas: Canvas<8, 4> = Canvas::new();
        assert!(canvas.iter_pixels().all(|p| p == Rgb565::BLACK));
        assert_eq!(canvas.size(), Size::new(8, 4));
    }

    #[test]
    fn test_draw_and_read_back() {
        let mut canvas: Canvas<8, 4> = Canvas::new();
        canvas
            .draw_iter([Pixel(Point::new(3, 2), Rgb565::RED)])
            .unwrap();
        assert_eq!(canvas.pixel(3, 2), Some(Rgb565::RED));
        assert_eq!(canvas.pixel(3, 1), Some(Rgb565::BLACK));
    }

    #[test]
    fn test_out_of_bounds_pixels_are_clipped() {
        let mut canvas: Canvas<8, 4> = Canvas::new();
        canvas
            .draw_iter([
                Pixel(Point::new(-1, 0), Rgb565::RED),
                Pixel(Point::new(8, 0), Rgb565::RED),
                Pixel(Point::new(0, 4), Rgb565::RED),
                Pixel(Point::new(0, -7), Rgb565::RED),
            ])
            .unwrap();
        assert!(canvas.iter_pixels().all(|p| p == Rgb565::BLACK));
        assert_eq!(canvas.pixel(9, 9), None);
    }

    #[test]
    fn test_clear_overwrites_every_pixel() {
        let mut canvas: Canvas<8, 4> = Canvas::new();
        canvas
            .draw_iter([Pixel(Point::new(1, 1), Rgb565::RED)])
            .unwrap();
        canvas.clear(Rgb565::BLACK).unwrap();
        assert!(canvas.iter_pixels().all(|p| p == Rgb565::BLACK));
    }
}
