use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use embedded_graphics::prelude::*;
use sono_viz::SceneRenderer;

#[cfg(feature = "logging")]
use defmt::warn;
#[cfg(feature = "logging")]
use defmt_rtt as _;

use crate::config::{
    BAR_COLOR, CANVAS_HEIGHT, CANVAS_ORIGIN_X, CANVAS_ORIGIN_Y, CANVAS_WIDTH, FRAME_LEN,
    WAVE_CENTER_Y, WAVE_COLOR,
};
use crate::error::{ConfigError, PipelineError};
use crate::frame::FrameStore;
use crate::sink::DisplaySink;
use crate::FrameCanvas;

/// Non-reentrant guard around the pipeline. The transition is explicit:
/// Idle -> Processing on acquire, Processing -> Idle on release. A frame
/// arriving while Processing is dropped, never queued, so the notification
/// source is never blocked.
pub struct PipelineGate {
    busy: AtomicBool,
}

impl PipelineGate {
    pub const fn new() -> Self {
        Self {
            busy: AtomicBool::new(false),
        }
    }

    /// Attempt Idle -> Processing. Returns false if already Processing.
    pub fn try_acquire(&self) -> bool {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub fn release(&self) {
        self.busy.store(false, Ordering::Release);
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

impl Default for PipelineGate {
    fn default() -> Self {
        Self::new()
    }
}

/// Monotonic dropped-frame accounting, readable from outside the pipeline
/// while a frame is in flight. Drops are the only failure surface per frame;
/// the pipeline itself never halts.
pub struct DropCounters {
    malformed: AtomicU32,
    busy: AtomicU32,
}

impl DropCounters {
    pub const fn new() -> Self {
        Self {
            malformed: AtomicU32::new(0),
            busy: AtomicU32::new(0),
        }
    }

    fn record_malformed(&self) {
        self.malformed.fetch_add(1, Ordering::Relaxed);
    }

    fn record_busy(&self) {
        self.busy.fetch_add(1, Ordering::Relaxed);
    }

    pub fn malformed(&self) -> u32 {
        self.malformed.load(Ordering::Relaxed)
    }

    pub fn busy(&self) -> u32 {
        self.busy.load(Ordering::Relaxed)
    }

    pub fn total(&self) -> u32 {
        self.malformed().wrapping_add(self.busy())
    }
}

/// The frame-triggered pipeline: copy -> analyze -> render -> flush, run to
/// completion synchronously inside each delivery notification. Owns all
/// per-frame state exclusively; nothing is shared across invocations.
pub struct Pipeline<S: DisplaySink> {
    store: FrameStore,
    scene: SceneRenderer,
    canvas: FrameCanvas,
    gate: PipelineGate,
    drops: DropCounters,
    sink: S,
}

impl<S: DisplaySink> Pipeline<S> {
    /// Validate the build-time geometry and assemble the pipeline. A
    /// configuration fault here is fatal: the pipeline is never constructed
    /// and no frame is ever processed.
    pub fn new(sink: S) -> Result<Self, ConfigError> {
        validate_geometry(FRAME_LEN, CANVAS_WIDTH, CANVAS_HEIGHT, WAVE_CENTER_Y)?;
        Ok(Self {
            store: FrameStore::new(),
            scene: SceneRenderer::new(
                CANVAS_WIDTH as u32,
                CANVAS_HEIGHT as u32,
                WAVE_CENTER_Y,
                WAVE_COLOR,
                BAR_COLOR,
            ),
            canvas: FrameCanvas::new(),
            gate: PipelineGate::new(),
            drops: DropCounters::new(),
            sink,
        })
    }

    /// Entry point for the transport layer's delivery notification.
    ///
    /// Runs the whole frame synchronously and returns once the flush has
    /// completed. A frame rejected before the copy leaves every piece of
    /// prior state untouched, so the panel keeps showing the last good frame.
    pub fn ingest(&mut self, payload: &[u8]) -> Result<(), PipelineError<S::Error>> {
        if !self.gate.try_acquire() {
            self.drops.record_busy();
            #[cfg(feature = "logging")]
            warn!("frame dropped: pipeline busy");
            return Err(PipelineError::PipelineBusy);
        }
        let result = self.run_frame(payload);
        self.gate.release();
        result
    }

    fn run_frame(&mut self, payload: &[u8]) -> Result<(), PipelineError<S::Error>> {
        if payload.len() != FRAME_LEN {
            self.drops.record_malformed();
            #[cfg(feature = "logging")]
            warn!("frame dropped: malformed payload of {} bytes", payload.len());
            return Err(PipelineError::MalformedFrame {
                len: payload.len(),
            });
        }

        self.store.load(payload);
        let magnitudes = sono_dsp::analyze(self.store.samples());
        self.store.set_magnitudes(magnitudes);

        self.scene
            .draw(&mut self.canvas, self.store.samples(), self.store.magnitudes())
            .map_err(|never| match never {})?;

        self.sink
            .flush(
                &self.canvas,
                Point::new(CANVAS_ORIGIN_X, CANVAS_ORIGIN_Y),
            )
            .map_err(PipelineError::Flush)
    }

    pub fn drops(&self) -> &DropCounters {
        &self.drops
    }

    pub fn gate(&self) -> &PipelineGate {
        &self.gate
    }

    pub fn store(&self) -> &FrameStore {
        &self.store
    }

    pub fn canvas(&self) -> &FrameCanvas {
        &self.canvas
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}

fn validate_geometry(
    frame_len: usize,
    width: usize,
    height: usize,
    wave_center_y: i32,
) -> Result<(), ConfigError> {
    if !frame_len.is_power_of_two() {
        return Err(ConfigError::FrameLenNotPowerOfTwo { frame_len });
    }
    if width < frame_len {
        return Err(ConfigError::CanvasNarrowerThanFrame { frame_len, width });
    }
    if wave_center_y < 0 || wave_center_y >= height as i32 {
        return Err(ConfigError::WaveCenterOutsideCanvas {
            wave_center_y,
            height,
        });
    }
    Ok(())
}
