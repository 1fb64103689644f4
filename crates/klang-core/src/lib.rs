//! Klang Core - DSP primitives for procedural synthesis
//!
//! Foundational building blocks shared by the synthesis layer: a biquad
//! filter kernel with its coefficient design functions, a validated filter
//! configuration type, and a deterministic noise source.
//!
//! # Core Abstractions
//!
//! - [`Biquad`] - Direct Form I second-order IIR section
//! - [`FilterDesign`] / [`Filter`] - closed set of filter responses bound to
//!   a sample rate, validated at construction
//! - [`NoiseRng`] - seedable xorshift32 noise for reproducible renders
//! - [`ParamError`] - construction-time parameter rejection
//!
//! Everything runs in `f64`; quantization to integer PCM happens downstream
//! at the mixing boundary.
//!
//! # Example
//!
//! ```rust
//! use klang_core::{Filter, FilterDesign};
//!
//! let mut filter = Filter::new(
//!     FilterDesign::LowPass { cutoff_hz: 1000.0, q: 0.707 },
//!     44100.0,
//! )?;
//!
//! let y = filter.process(1.0);
//! assert!(y > 0.0);
//! # Ok::<(), klang_core::ParamError>(())
//! ```

pub mod biquad;
pub mod error;
pub mod filter;
pub mod rng;

// Re-export main types at crate root
pub use biquad::{
    Biquad, bandpass_coefficients, highpass_coefficients, lowpass_coefficients,
    peaking_eq_coefficients, resonator_coefficients,
};
pub use error::{ParamError, Result};
pub use filter::{Filter, FilterDesign};
pub use rng::{DEFAULT_NOISE_SEED, NoiseRng};
