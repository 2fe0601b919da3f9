use crate::config::{FRAME_LEN, SPECTRUM_LEN};

/// Single-slot holder for the current audio frame and its derived spectral
/// magnitudes. There is no queue: each arrival overwrites the previous
/// contents wholesale, and nothing is read across invocations.
pub struct FrameStore {
    samples: [i8; FRAME_LEN],
    magnitudes: [u8; SPECTRUM_LEN],
}

impl FrameStore {
    pub const fn new() -> Self {
        Self {
            samples: [0; FRAME_LEN],
            magnitudes: [0; SPECTRUM_LEN],
        }
    }

    /// Copy a payload in. The caller has already validated the length; only
    /// the invariant is asserted here.
    pub fn load(&mut self, payload: &[u8]) {
        debug_assert_eq!(payload.len(), FRAME_LEN);
        for (slot, &byte) in self.samples.iter_mut().zip(payload.iter()) {
            *slot = byte as i8;
        }
    }

    pub fn set_magnitudes(&mut self, magnitudes: [u8; SPECTRUM_LEN]) {
        self.magnitudes = magnitudes;
    }

    pub fn samples(&self) -> &[i8; FRAME_LEN] {
        &self.samples
    }

    pub fn magnitudes(&self) -> &[u8; SPECTRUM_LEN] {
        &self.magnitudes
    }
}

impl Default for FrameStore {
    fn default() -> Self {
        Self::new()
    }
}
