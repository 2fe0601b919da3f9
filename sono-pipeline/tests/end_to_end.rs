use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use sono_pipeline::config::{CANVAS_ORIGIN_Y, FRAME_LEN, WAVE_CENTER_Y, WAVE_COLOR};
use sono_pipeline::{DrawTargetSink, Pipeline};
use sono_viz::Canvas;

/// Stand-in for the physical panel: full 128x128 pixel field including the
/// header rows above the canvas origin.
type Panel = Canvas<128, 128>;

#[test]
fn test_flush_lands_at_the_panel_origin() {
    let sink = DrawTargetSink::new(Panel::new());
    let mut pipeline = Pipeline::new(sink).unwrap();

    pipeline.ingest(&[0u8; FRAME_LEN]).unwrap();

    let panel = pipeline.sink().target();
    let baseline_row = (CANVAS_ORIGIN_Y + WAVE_CENTER_Y) as usize;
    for x in 0..128 {
        assert_eq!(panel.pixel(x, baseline_row), Some(WAVE_COLOR));
    }
    // The header region above the origin is never touched by a flush.
    for y in 0..CANVAS_ORIGIN_Y as usize {
        for x in 0..128 {
            assert_eq!(panel.pixel(x, y), Some(Rgb565::BLACK));
        }
    }
}

#[test]
fn test_each_ingested_frame_repaints_the_panel() {
    let sink = DrawTargetSink::new(Panel::new());
    let mut pipeline = Pipeline::new(sink).unwrap();

    // Constant 80 puts the baseline at 80 / -2 + 40 = row 0 of the canvas.
    pipeline.ingest(&[80u8; FRAME_LEN]).unwrap();
    let shifted_row = CANVAS_ORIGIN_Y as usize;
    assert_eq!(
        pipeline.sink().target().pixel(64, shifted_row),
        Some(WAVE_COLOR)
    );

    // A silent frame afterwards moves the line back to center and clears
    // the old one.
    pipeline.ingest(&[0u8; FRAME_LEN]).unwrap();
    let panel = pipeline.sink().target();
    assert_eq!(panel.pixel(64, shifted_row), Some(Rgb565::BLACK));
    assert_eq!(
        panel.pixel(64, (CANVAS_ORIGIN_Y + WAVE_CENTER_Y) as usize),
        Some(WAVE_COLOR)
    );
    assert_eq!(pipeline.drops().total(), 0);
}
