#![no_std]

use core::f32::consts::PI;

use microfft::real::rfft_128;
use microfft::Complex32;
#[allow(unused_imports)]
use micromath::F32Ext;

/// Samples per incoming audio frame. The radix-2 FFT fixes this to a power
/// of two at compile time.
pub const FRAME_LEN: usize = 128;

/// Usable frequency bins. Real input yields a conjugate-symmetric spectrum,
/// so everything above the Nyquist bin is redundant.
pub const SPECTRUM_LEN: usize = FRAME_LEN / 2;

/// Sender-side sampling frequency in Hz. Informational only: no rate
/// negotiation happens, frames simply arrive.
pub const SAMPLE_RATE_HZ: u32 = 8_000;

/// Widen signed 8-bit samples into a fresh real-valued FFT input buffer.
pub fn prepare_samples(samples: &[i8; FRAME_LEN]) -> [f32; FRAME_LEN] {
    let mut real = [0.0; FRAME_LEN];
    for (slot, &sample) in real.iter_mut().zip(samples.iter()) {
        *slot = sample as f32;
    }
    real
}

/// Apply a Hamming window in place to reduce spectral leakage.
pub fn apply_hamming_window(samples: &mut [f32; FRAME_LEN]) {
    for (i, sample) in samples.iter_mut().enumerate() {
        let phase = 2.0 * PI * i as f32 / (FRAME_LEN - 1) as f32;
        *sample *= 0.54 - 0.46 * phase.cos();
    }
}

/// Compute the forward FFT of one windowed frame, in place.
///
/// `rfft_128` packs the real-valued Nyquist coefficient into the imaginary
/// part of bin 0; it is cleared here so bin 0 is the plain DC term.
pub fn compute_fft(samples: &mut [f32; FRAME_LEN]) -> &mut [Complex32; SPECTRUM_LEN] {
    let spectrum = rfft_128(samples);
    spectrum[0].im = 0.0;
    spectrum
}

/// Compute the magnitude of each FFT bin.
pub fn compute_magnitudes(spectrum: &[Complex32; SPECTRUM_LEN]) -> [f32; SPECTRUM_LEN] {
    let mut magnitudes = [0.0; SPECTRUM_LEN];
    for (magnitude, bin) in magnitudes.iter_mut().zip(spectrum.iter()) {
        *magnitude = (bin.re * bin.re + bin.im * bin.im).sqrt();
    }
    magnitudes
}

/// Quantize raw magnitudes to display-range bytes.
///
/// Values outside [0, 255] clamp instead of wrapping, so an overdriven bin
/// saturates at full bar height rather than folding back to a short one.
pub fn quantize_magnitudes(magnitudes: &[f32; SPECTRUM_LEN]) -> [u8; SPECTRUM_LEN] {
    let mut quantized = [0u8; SPECTRUM_LEN];
    for (slot, &magnitude) in quantized.iter_mut().zip(magnitudes.iter()) {
        *slot = magnitude.clamp(0.0, 255.0) as u8;
    }
    quantized
}

/// Process one frame of samples into display-ready spectral magnitudes.
///
/// Stateless per invocation: the working buffer is rebuilt from the frame
/// each call, so identical input always yields identical output.
pub fn analyze(samples: &[i8; FRAME_LEN]) -> [u8; SPECTRUM_LEN] {
    let mut real = prepare_samples(samples);
    apply_hamming_window(&mut real);
    let spectrum = compute_fft(&mut real);
    let magnitudes = compute_magnitudes(spectrum);
    quantize_magnitudes(&magnitudes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_frame_has_zero_spectrum() {
        let frame = [0i8; FRAME_LEN];
        assert_eq!(analyze(&frame), [0u8; SPECTRUM_LEN]);
    }

    #[test]
    fn test_hamming_window_tapers_edges() {
        let mut buf = [1.0f32; FRAME_LEN];
        apply_hamming_window(&mut buf);

        // Endpoints sit at the 0.08 floor, the middle stays near unity.
        assert!((buf[0] - 0.08).abs() < 1e-2);
        assert!((buf[FRAME_LEN - 1] - 0.08).abs() < 1e-2);
        assert!(buf[FRAME_LEN / 2] > 0.99);
    }

    #[test]
    fn test_compute_magnitudes() {
        let mut spectrum = [Complex32 { re: 0.0, im: 0.0 }; SPECTRUM_LEN];
        spectrum[0] = Complex32 { re: 1.0, im: 0.0 };
        spectrum[1] = Complex32 { re: 3.0, im: 4.0 };
        spectrum[63] = Complex32 { re: -1.0, im: 0.0 };

        let magnitudes = compute_magnitudes(&spectrum);
        assert!((magnitudes[0] - 1.0).abs() < 1e-3);
        assert!((magnitudes[1] - 5.0).abs() < 1e-2);
        assert!((magnitudes[63] - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_quantization_clamps_instead_of_wrapping() {
        let mut raw = [0.0f32; SPECTRUM_LEN];
        raw[0] = 300.0;
        raw[1] = 255.0;
        raw[2] = 254.9;
        raw[3] = -4.0;

        let quantized = quantize_magnitudes(&raw);
        assert_eq!(quantized[0], 255);
        assert_eq!(quantized[1], 255);
        assert_eq!(quantized[2], 254);
        assert_eq!(quantized[3], 0);
    }

    #[test]
    fn test_quantization_is_monotonic() {
        let mut low = [0.0f32; SPECTRUM_LEN];
        let mut high = [0.0f32; SPECTRUM_LEN];
        for i in 0..SPECTRUM_LEN {
            low[i] = i as f32 * 5.0;
            high[i] = i as f32 * 5.0 + 40.0;
        }

        let q_low = quantize_magnitudes(&low);
        let q_high = quantize_magnitudes(&high);
        for i in 0..SPECTRUM_LEN {
            assert!(q_low[i] <= q_high[i], "ordering lost at bin {}", i);
        }
    }

    #[test]
    fn test_dc_bin_saturates_for_loud_constant_frame() {
        // A constant frame concentrates its (windowed) energy in bin 0; at
        // this level the raw magnitude is far above 255 and must saturate.
        // The reference's narrowing cast would wrap it to a small value.
        let frame = [100i8; FRAME_LEN];
        let magnitudes = analyze(&frame);
        assert_eq!(magnitudes[0], 255);
    }
}
