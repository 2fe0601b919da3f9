use embedded_graphics::{pixelcolor::Rgb565, prelude::*, primitives::Rectangle};

use crate::FrameCanvas;

/// Receiving end for fully-drawn canvases. `flush` copies the canvas to the
/// physical panel at the given offset and blocks until the transfer is done;
/// the pipeline never hands over a partially drawn canvas.
pub trait DisplaySink {
    type Error;

    fn flush(&mut self, canvas: &FrameCanvas, origin: Point) -> Result<(), Self::Error>;
}

/// Sink over any `DrawTarget`, blitting the whole canvas at the configured
/// origin. Covers both the panel driver on hardware and the simulator
/// display on the host.
pub struct DrawTargetSink<D> {
    target: D,
}

impl<D> DrawTargetSink<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(target: D) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    pub fn into_inner(self) -> D {
        self.target
    }
}

impl<D> DisplaySink for DrawTargetSink<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    type Error = D::Error;

    fn flush(&mut self, canvas: &FrameCanvas, origin: Point) -> Result<(), Self::Error> {
        let area = Rectangle::new(origin, canvas.size());
        self.target.fill_contiguous(&area, canvas.iter_pixels())
    }
}
