#![no_std]

pub mod config;
mod error;
mod frame;
mod pipeline;
mod sink;

pub use error::{ConfigError, PipelineError};
pub use frame::FrameStore;
pub use pipeline::{DropCounters, Pipeline, PipelineGate};
pub use sink::{DisplaySink, DrawTargetSink};

use config::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// Off-screen canvas sized to the visualization area of the panel.
pub type FrameCanvas = sono_viz::Canvas<CANVAS_WIDTH, CANVAS_HEIGHT>;
