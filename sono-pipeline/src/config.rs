//! Build-time configuration. None of this is runtime-negotiable: the sender
//! and the panel are fixed, and the geometry is validated once at pipeline
//! construction.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

// --- Audio ---
pub use sono_dsp::{FRAME_LEN, SAMPLE_RATE_HZ, SPECTRUM_LEN};

// --- Canvas geometry ---
pub const CANVAS_WIDTH: usize = 128;
pub const CANVAS_HEIGHT: usize = 120;

/// Panel offset of the canvas. The rows above it hold the header line and
/// are never drawn by the pipeline.
pub const CANVAS_ORIGIN_X: i32 = 0;
pub const CANVAS_ORIGIN_Y: i32 = 8;

/// Waveform baseline row, roughly a third of the way down the canvas.
pub const WAVE_CENTER_Y: i32 = 40;

// --- Draw pass colors ---
pub const WAVE_COLOR: Rgb565 = Rgb565::BLUE;
pub const BAR_COLOR: Rgb565 = Rgb565::RED;
