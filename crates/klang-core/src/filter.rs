//! Configured filters over the biquad kernel.
//!
//! [`FilterDesign`] is the closed set of responses the synthesis layer can
//! attach to a component; [`Filter`] binds a design to a sample rate,
//! validates the parameters once, and owns the running biquad state.

use crate::biquad::{
    Biquad, bandpass_coefficients, highpass_coefficients, lowpass_coefficients,
    peaking_eq_coefficients, resonator_coefficients,
};
use crate::error::{ParamError, Result};

/// Filter response selection with its design parameters.
///
/// All frequencies are in Hz. Adding a variant means touching the match
/// arms here and nowhere else; there is deliberately no open trait seam.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterDesign {
    /// Second-order low-pass.
    LowPass {
        /// Cutoff frequency.
        cutoff_hz: f64,
        /// Resonance; 0.707 is maximally flat.
        q: f64,
    },
    /// Second-order high-pass.
    HighPass {
        /// Cutoff frequency.
        cutoff_hz: f64,
        /// Resonance; 0.707 is maximally flat.
        q: f64,
    },
    /// Band-pass with 0 dB peak gain at the center.
    BandPass {
        /// Center frequency.
        center_hz: f64,
        /// Width as `center_hz / q`.
        q: f64,
    },
    /// Narrow two-pole resonator with unity gain at the center.
    Resonator {
        /// Center frequency, strictly inside (0, Nyquist).
        center_hz: f64,
        /// -3 dB bandwidth in Hz.
        bandwidth_hz: f64,
    },
    /// Peaking parametric EQ band.
    PeakingEq {
        /// Center frequency.
        center_hz: f64,
        /// Boost (positive) or cut (negative) in dB.
        gain_db: f64,
        /// Bell width.
        q: f64,
    },
}

impl FilterDesign {
    /// Human-readable name used in error messages.
    fn context(self) -> &'static str {
        match self {
            Self::LowPass { .. } => "low-pass filter",
            Self::HighPass { .. } => "high-pass filter",
            Self::BandPass { .. } => "band-pass filter",
            Self::Resonator { .. } => "resonator",
            Self::PeakingEq { .. } => "peaking EQ",
        }
    }

    /// Rejects parameter values that would make the coefficient math
    /// divide by zero or go unstable.
    fn validate(self) -> Result<()> {
        match self {
            Self::LowPass { q, .. } | Self::HighPass { q, .. } | Self::BandPass { q, .. } | Self::PeakingEq { q, .. } => {
                if q <= 0.0 {
                    return Err(ParamError::InvalidParameter {
                        context: self.context(),
                        param: "q",
                        reason: format!("must be positive, got {q}"),
                    });
                }
            }
            Self::Resonator { bandwidth_hz, .. } => {
                if bandwidth_hz <= 0.0 {
                    return Err(ParamError::InvalidParameter {
                        context: self.context(),
                        param: "bandwidth_hz",
                        reason: format!("must be positive, got {bandwidth_hz}"),
                    });
                }
            }
        }
        Ok(())
    }

    /// Raw coefficient tuple for this design at the given rate.
    fn coefficients(self, sample_rate: f64) -> (f64, f64, f64, f64, f64, f64) {
        match self {
            Self::LowPass { cutoff_hz, q } => lowpass_coefficients(cutoff_hz, q, sample_rate),
            Self::HighPass { cutoff_hz, q } => highpass_coefficients(cutoff_hz, q, sample_rate),
            Self::BandPass { center_hz, q } => bandpass_coefficients(center_hz, q, sample_rate),
            Self::Resonator { center_hz, bandwidth_hz } => {
                resonator_coefficients(center_hz, bandwidth_hz, sample_rate)
            }
            Self::PeakingEq { center_hz, gain_db, q } => {
                peaking_eq_coefficients(center_hz, q, gain_db, sample_rate)
            }
        }
    }
}

/// A design bound to a sample rate, with running state.
///
/// Coefficients are computed exactly once per configuration — at
/// construction and on [`Filter::set_design`] — never per sample.
#[derive(Debug, Clone)]
pub struct Filter {
    design: FilterDesign,
    sample_rate: f64,
    biquad: Biquad,
}

impl Filter {
    /// Builds a filter, validating the design parameters.
    ///
    /// Fails with [`ParamError::InvalidParameter`] when `q` or the
    /// resonator bandwidth is non-positive, or when `sample_rate <= 0`.
    pub fn new(design: FilterDesign, sample_rate: f64) -> Result<Self> {
        if sample_rate <= 0.0 {
            return Err(ParamError::InvalidParameter {
                context: design.context(),
                param: "sample_rate",
                reason: format!("must be positive, got {sample_rate}"),
            });
        }
        design.validate()?;

        let mut biquad = Biquad::new();
        let (b0, b1, b2, a0, a1, a2) = design.coefficients(sample_rate);
        biquad.set_coefficients(b0, b1, b2, a0, a1, a2);

        Ok(Self { design, sample_rate, biquad })
    }

    /// Runs one sample through the filter.
    #[inline]
    pub fn process(&mut self, input: f64) -> f64 {
        self.biquad.process(input)
    }

    /// Clears the delay lines; the configuration is untouched, so the
    /// post-reset impulse response matches a freshly built filter.
    pub fn reset(&mut self) {
        self.biquad.clear();
    }

    /// Swaps in a new design, recomputing coefficients once.
    ///
    /// Delay-line history is preserved — reconfiguring is not a reset. On
    /// validation failure the previous design stays installed.
    pub fn set_design(&mut self, design: FilterDesign) -> Result<()> {
        design.validate()?;
        let (b0, b1, b2, a0, a1, a2) = design.coefficients(self.sample_rate);
        self.biquad.set_coefficients(b0, b1, b2, a0, a1, a2);
        self.design = design;
        Ok(())
    }

    /// The active design.
    pub fn design(&self) -> FilterDesign {
        self.design
    }

    /// The sample rate the coefficients were computed for.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }
}
