use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::Rgb565,
    prelude::*,
    text::{Baseline, Text},
};
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
};
use sono_dsp::{FRAME_LEN, SAMPLE_RATE_HZ};
use sono_pipeline::{DrawTargetSink, Pipeline};
use std::{thread, time::Duration};

// Full panel including the 8 header rows above the canvas origin.
pub const PANEL_WIDTH: u32 = 128;
pub const PANEL_HEIGHT: u32 = 128;
pub const FRAME_DELAY_MS: u64 = 16;

/// Synthesize one wire payload: a sweeping tone with a quieter fixed
/// overtone, quantized to the signed 8-bit sample format.
fn synth_frame(time: f32) -> [u8; FRAME_LEN] {
    let sweep_hz = 400.0 + (time * 0.4).sin() * 300.0;
    let mut payload = [0u8; FRAME_LEN];
    for (i, byte) in payload.iter_mut().enumerate() {
        let t = i as f32 / SAMPLE_RATE_HZ as f32;
        let tone = (2.0 * core::f32::consts::PI * sweep_hz * t + time).sin() * 90.0;
        let overtone = (2.0 * core::f32::consts::PI * 1500.0 * t).sin() * 25.0;
        *byte = ((tone + overtone) as i8) as u8;
    }
    payload
}

fn main() {
    let mut display: SimulatorDisplay<Rgb565> =
        SimulatorDisplay::new(Size::new(PANEL_WIDTH, PANEL_HEIGHT));

    // Header drawn once; pipeline flushes never touch rows above the origin.
    let style = MonoTextStyle::new(&FONT_6X10, Rgb565::GREEN);
    Text::with_baseline("Speak or Play Music!", Point::new(7, 0), style, Baseline::Top)
        .draw(&mut display)
        .unwrap();

    let mut window = Window::new(
        "Sonoscope Simulator",
        &OutputSettingsBuilder::new().scale(3).build(),
    );

    let mut pipeline = Pipeline::new(DrawTargetSink::new(display))
        .expect("invalid build-time geometry");

    let mut time: f32 = 0.0;

    'running: loop {
        let payload = synth_frame(time);
        pipeline
            .ingest(&payload)
            .expect("synthesized frames are always well-formed");

        window.update(pipeline.sink().target());

        time += 0.05;
        thread::sleep(Duration::from_millis(FRAME_DELAY_MS));

        for event in window.events() {
            if let SimulatorEvent::Quit = event {
                break 'running;
            }
        }
    }
}
