//! Panel bring-up helpers: wiring check and the static header line.

use embassy_time::{Duration, Timer};
use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::Rgb565,
    prelude::*,
    text::{Baseline, Text},
};

pub const HEADER_TEXT: &str = "Speak or Play Music!";

/// Solid RGB fill sequence to confirm panel wiring before the pipeline
/// starts, one second per color.
pub async fn screen_test<D>(display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    for color in [Rgb565::RED, Rgb565::GREEN, Rgb565::BLUE] {
        display.clear(color)?;
        Timer::after(Duration::from_millis(1000)).await;
    }
    display.clear(Rgb565::BLACK)
}

/// Draw the header line into the reserved rows above the canvas origin.
/// Flushes never touch these rows, so this is drawn exactly once.
pub fn draw_header<D>(display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = MonoTextStyle::new(&FONT_6X10, Rgb565::GREEN);
    Text::with_baseline(HEADER_TEXT, Point::new(7, 0), style, Baseline::Top).draw(display)?;
    Ok(())
}
