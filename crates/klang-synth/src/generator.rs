//! Sound generators.
//!
//! The raw signal producers behind every component: broadband noise, an
//! exponentially decaying sine, and a decaying noise burst. A generator is
//! a pure function of the queried time — apart from noise stream
//! advancement — and generation never fails. Parameters that would make a
//! generator meaningless are rejected at construction instead.

use core::f64::consts::PI;
use klang_core::{DEFAULT_NOISE_SEED, NoiseRng, ParamError, Result};

/// Uniform broadband noise in `[-amplitude, amplitude]`.
///
/// Silent before its start time. Every query at or past the start draws a
/// fresh value, so two queries at the same instant differ.
#[derive(Debug, Clone)]
pub struct WhiteNoise {
    amplitude: f64,
    start_time: f64,
    rng: NoiseRng,
}

impl WhiteNoise {
    /// Creates a noise generator audible from `start_time` onward.
    pub fn new(amplitude: f64, start_time: f64) -> Self {
        Self::with_seed(amplitude, start_time, DEFAULT_NOISE_SEED)
    }

    /// Like [`WhiteNoise::new`], with an explicit seed for reproducible
    /// output.
    pub fn with_seed(amplitude: f64, start_time: f64, seed: u32) -> Self {
        Self {
            amplitude,
            start_time,
            rng: NoiseRng::new(seed),
        }
    }

    /// Peak amplitude.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Time the generator becomes audible, seconds.
    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    fn generate(&mut self, time: f64) -> f64 {
        if time < self.start_time {
            return 0.0;
        }
        self.amplitude * self.rng.next_bipolar()
    }
}

/// A sine burst with an exponential amplitude envelope.
///
/// For `t >= start_time`, with `u = t - start_time`:
///
/// ```text
/// amplitude * exp(-u / decay_time) * sin(2*pi*frequency*u + phase)
/// ```
///
/// so the very first audible sample is `amplitude * sin(phase)`.
#[derive(Debug, Clone, Copy)]
pub struct DecayingSine {
    amplitude: f64,
    frequency: f64,
    phase: f64,
    start_time: f64,
    decay_time: f64,
}

impl DecayingSine {
    /// Creates a decaying sine.
    ///
    /// `decay_time` is the 1/e time of the envelope in seconds and must be
    /// positive; anything else fails with
    /// [`ParamError::InvalidParameter`].
    pub fn new(amplitude: f64, frequency: f64, phase: f64, start_time: f64, decay_time: f64) -> Result<Self> {
        if decay_time <= 0.0 {
            return Err(ParamError::InvalidParameter {
                context: "decaying sine",
                param: "decay_time",
                reason: format!("must be positive, got {decay_time}"),
            });
        }
        Ok(Self {
            amplitude,
            frequency,
            phase,
            start_time,
            decay_time,
        })
    }

    /// Peak amplitude.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Oscillation frequency in Hz.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Time the envelope opens, seconds.
    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    /// Envelope 1/e time in seconds.
    pub fn decay_time(&self) -> f64 {
        self.decay_time
    }

    fn generate(self, time: f64) -> f64 {
        if time < self.start_time {
            return 0.0;
        }
        let u = time - self.start_time;
        self.amplitude * (-u / self.decay_time).exp() * (2.0 * PI * self.frequency * u + self.phase).sin()
    }
}

/// Noise under the same exponential envelope as [`DecayingSine`].
///
/// Each audible sample is `amplitude * exp(-u / decay_time)` times a fresh
/// uniform draw in approximately `[-1, 1]`.
#[derive(Debug, Clone)]
pub struct DecayingNoise {
    amplitude: f64,
    start_time: f64,
    decay_time: f64,
    rng: NoiseRng,
}

impl DecayingNoise {
    /// Creates a decaying noise burst; `decay_time` must be positive.
    pub fn new(amplitude: f64, start_time: f64, decay_time: f64) -> Result<Self> {
        Self::with_seed(amplitude, start_time, decay_time, DEFAULT_NOISE_SEED)
    }

    /// Like [`DecayingNoise::new`], with an explicit seed.
    pub fn with_seed(amplitude: f64, start_time: f64, decay_time: f64, seed: u32) -> Result<Self> {
        if decay_time <= 0.0 {
            return Err(ParamError::InvalidParameter {
                context: "decaying noise",
                param: "decay_time",
                reason: format!("must be positive, got {decay_time}"),
            });
        }
        Ok(Self {
            amplitude,
            start_time,
            decay_time,
            rng: NoiseRng::new(seed),
        })
    }

    /// Peak amplitude.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Time the envelope opens, seconds.
    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    /// Envelope 1/e time in seconds.
    pub fn decay_time(&self) -> f64 {
        self.decay_time
    }

    fn generate(&mut self, time: f64) -> f64 {
        if time < self.start_time {
            return 0.0;
        }
        let u = time - self.start_time;
        self.amplitude * (-u / self.decay_time).exp() * self.rng.next_bipolar()
    }
}

/// The closed set of signal producers a component can own.
///
/// Dispatch is a plain match — adding a producer means adding a variant,
/// and every mixing path handles the full set. There is deliberately no
/// open trait here.
#[derive(Debug, Clone)]
pub enum Generator {
    /// Uniform broadband noise.
    WhiteNoise(WhiteNoise),
    /// Exponentially decaying sine.
    DecayingSine(DecayingSine),
    /// Exponentially decaying noise burst.
    DecayingNoise(DecayingNoise),
}

impl Generator {
    /// Produces the sample for the given absolute time in seconds.
    ///
    /// Exactly zero before the variant's start time, for every variant.
    /// The caller owns the clock: generators never advance time themselves,
    /// and the mixer queries with a monotonically non-decreasing cursor.
    #[inline]
    pub fn generate(&mut self, time: f64) -> f64 {
        match self {
            Self::WhiteNoise(g) => g.generate(time),
            Self::DecayingSine(g) => g.generate(time),
            Self::DecayingNoise(g) => g.generate(time),
        }
    }

    /// Time the underlying generator becomes audible, seconds.
    pub fn start_time(&self) -> f64 {
        match self {
            Self::WhiteNoise(g) => g.start_time(),
            Self::DecayingSine(g) => g.start_time(),
            Self::DecayingNoise(g) => g.start_time(),
        }
    }
}

impl From<WhiteNoise> for Generator {
    fn from(g: WhiteNoise) -> Self {
        Self::WhiteNoise(g)
    }
}

impl From<DecayingSine> for Generator {
    fn from(g: DecayingSine) -> Self {
        Self::DecayingSine(g)
    }
}

impl From<DecayingNoise> for Generator {
    fn from(g: DecayingNoise) -> Self {
        Self::DecayingNoise(g)
    }
}
