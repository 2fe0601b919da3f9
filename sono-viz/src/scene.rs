use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Line, PrimitiveStyle},
};

/// Draws one composed visual frame: a time-domain polyline over a
/// frequency-domain bar chart. Both passes run into a freshly cleared
/// target, so no pixels survive from the previous frame.
pub struct SceneRenderer {
    width: u32,
    height: u32,
    wave_center_y: i32,
    wave_color: Rgb565,
    bar_color: Rgb565,
}

impl SceneRenderer {
    pub const fn new(
        width: u32,
        height: u32,
        wave_center_y: i32,
        wave_color: Rgb565,
        bar_color: Rgb565,
    ) -> Self {
        Self {
            width,
            height,
            wave_center_y,
            wave_color,
            bar_color,
        }
    }

    /// Clear the target and run both draw passes.
    pub fn draw<D>(&self, target: &mut D, samples: &[i8], magnitudes: &[u8]) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        target.clear(Rgb565::BLACK)?;
        self.draw_waveform(target, samples)?;
        self.draw_spectrum(target, magnitudes)
    }

    /// Amplitude-to-row mapping: halved, vertically inverted, offset onto
    /// the waveform band. Signed division truncates toward zero.
    fn sample_to_y(&self, sample: i8) -> i32 {
        sample as i32 / -2 + self.wave_center_y
    }

    /// Connect each adjacent sample pair with a line segment, one column
    /// per sample.
    fn draw_waveform<D>(&self, target: &mut D, samples: &[i8]) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let columns = (self.width as usize).min(samples.len());
        for t in 1..columns {
            let from = Point::new(t as i32 - 1, self.sample_to_y(samples[t - 1]));
            let to = Point::new(t as i32, self.sample_to_y(samples[t]));
            Line::new(from, to)
                .into_styled(PrimitiveStyle::with_stroke(self.wave_color, 1))
                .draw(target)?;
        }
        Ok(())
    }

    /// One bar per even column; odd columns stay blank for spacing. The
    /// anchor sits just above the bottom edge, lifted by magnitude / 8, and
    /// the bar extends downward by the full magnitude. Whatever runs past
    /// the bottom edge is clipped by the target.
    fn draw_spectrum<D>(&self, target: &mut D, magnitudes: &[u8]) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        for x in (0..self.width as usize).step_by(2) {
            let Some(&magnitude) = magnitudes.get(x / 2) else {
                break;
            };
            if magnitude == 0 {
                continue;
            }
            let m = magnitude as i32;
            let top = -m / 8 + self.height as i32 - 1;
            Line::new(Point::new(x as i32, top), Point::new(x as i32, top + m - 1))
                .into_styled(PrimitiveStyle::with_stroke(self.bar_color, 1))
                .draw(target)?;
        }
        Ok(())
    }
}
