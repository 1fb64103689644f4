//! Audio-rate noise source.

/// Seed used by noise generators that are not explicitly seeded.
pub const DEFAULT_NOISE_SEED: u32 = 0x1234_5678;

/// Xorshift32 pseudo-random generator for audio-rate noise.
///
/// Cheap and allocation-free; not suitable for cryptography. Xorshift locks
/// up on an all-zero state, so a zero seed is remapped to
/// [`DEFAULT_NOISE_SEED`]. Two generators built from the same seed produce
/// identical streams, which keeps noise-based renders reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoiseRng {
    state: u32,
}

impl NoiseRng {
    /// Creates a generator from an explicit seed.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { DEFAULT_NOISE_SEED } else { seed },
        }
    }

    /// Advances the stream and returns the next raw word.
    #[inline]
    fn next_word(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform noise in approximately `[-1, 1]`.
    #[inline]
    pub fn next_bipolar(&mut self) -> f64 {
        (self.next_word() as i32 as f64) / f64::from(i32::MAX)
    }
}

impl Default for NoiseRng {
    fn default() -> Self {
        Self::new(DEFAULT_NOISE_SEED)
    }
}
