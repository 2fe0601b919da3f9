use sono_dsp::{FRAME_LEN, SAMPLE_RATE_HZ};
use wavegen::{sine, wf};

/// Build one frame of a pure tone, quantized to the wire's signed 8-bit range.
pub fn sine_frame(frequency_hz: f32, amplitude: f32) -> [i8; FRAME_LEN] {
    let waveform = wf!(
        f32,
        SAMPLE_RATE_HZ as f32,
        sine!(frequency: frequency_hz, amplitude: amplitude)
    );
    let mut frame = [0i8; FRAME_LEN];
    for (slot, value) in frame.iter_mut().zip(waveform.iter()) {
        *slot = value.round() as i8;
    }
    frame
}

/// Center frequency of bin `k` for the fixed frame length and sample rate.
pub fn bin_frequency(bin: usize) -> f32 {
    bin as f32 * SAMPLE_RATE_HZ as f32 / FRAME_LEN as f32
}
