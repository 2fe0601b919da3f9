use core::fmt;

/// Startup-time configuration faults. These halt bring-up; none of them can
/// occur per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The radix-2 transform requires a power-of-two frame length.
    FrameLenNotPowerOfTwo { frame_len: usize },
    /// The waveform pass needs one canvas column per sample.
    CanvasNarrowerThanFrame { frame_len: usize, width: usize },
    /// The waveform baseline must lie inside the canvas.
    WaveCenterOutsideCanvas { wave_center_y: i32, height: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ConfigError::FrameLenNotPowerOfTwo { frame_len } => {
                write!(f, "frame length {} is not a power of two", frame_len)
            }
            ConfigError::CanvasNarrowerThanFrame { frame_len, width } => {
                write!(
                    f,
                    "canvas width {} cannot hold {} waveform columns",
                    width, frame_len
                )
            }
            ConfigError::WaveCenterOutsideCanvas {
                wave_center_y,
                height,
            } => {
                write!(
                    f,
                    "waveform baseline {} outside canvas of height {}",
                    wave_center_y, height
                )
            }
        }
    }
}

/// Per-frame ingestion faults. Always recovered locally: the frame is
/// dropped, a counter ticks, and the pipeline keeps accepting frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineError<E> {
    /// Declared payload length does not match the fixed frame size. The
    /// payload is not copied at all, so prior state stays intact.
    MalformedFrame { len: usize },
    /// A prior frame is still mid-pipeline; this one is dropped, not queued.
    PipelineBusy,
    /// The display sink failed to transfer the composed canvas.
    Flush(E),
}
