//! Modal object builders.
//!
//! Turn physical descriptions of simple resonant objects into sound
//! sources: one exponentially decaying sine per vibrational mode, with
//! frequency, amplitude, and decay derived from the geometry. Modes that
//! would alias are dropped instead of folded.
//!
//! Both builders place the source at the origin and leave every component's
//! window start at zero — the requested onset lives in the mode generators,
//! so expiry is measured from scene time zero.

use core::f64::consts::PI;
use klang_core::Result;

use crate::component::SoundComponent;
use crate::generator::DecayingSine;
use crate::source::SoundSource;

/// Longitudinal speed of sound in glass, m/s.
pub const GLASS_SPEED_OF_SOUND: f64 = 5291.0;

/// Default plate frequency constant (see [`PlateParams::freq_const`]).
pub const PLATE_FREQ_CONST: f64 = 31.0;

/// Geometry and excitation of a struck hollow glass sphere.
#[derive(Debug, Clone, Copy)]
pub struct SphereParams {
    /// Sphere radius in meters.
    pub radius: f64,
    /// Amplitude budget shared across all modes.
    pub base_amplitude: f64,
    /// Decay time of the slowest mode, seconds.
    pub base_decay: f64,
    /// Number of radial mode indices (`n`).
    pub radial_modes: usize,
    /// Number of angular mode indices (`l`).
    pub angular_modes: usize,
    /// Onset time of the strike, seconds.
    pub start_time: f64,
}

impl Default for SphereParams {
    fn default() -> Self {
        Self {
            radius: 0.35,
            base_amplitude: 0.8,
            base_decay: 0.5,
            radial_modes: 4,
            angular_modes: 4,
            start_time: 0.0,
        }
    }
}

/// Builds a struck-sphere source at the origin.
///
/// The fundamental scale is `f_base = c_glass / (2*pi*radius)`; mode
/// `(n, l)` sounds at `f_base * sqrt(l*(l+1) + n)` with proportionally less
/// amplitude and faster decay as the mode factor grows. Modes at or above
/// Nyquist are skipped entirely, so a tiny sphere at a low sample rate can
/// legitimately come back empty.
///
/// Fails only if `base_decay` is non-positive (each mode is a
/// [`DecayingSine`], which validates its decay).
pub fn sphere_source(params: &SphereParams, sample_rate: f64) -> Result<SoundSource> {
    let nyquist = sample_rate / 2.0;
    let f_base = GLASS_SPEED_OF_SOUND / (2.0 * PI * params.radius);
    let mode_count = (params.radial_modes * params.angular_modes) as f64;

    let mut source = SoundSource::new();
    for n in 1..=params.radial_modes {
        for l in 1..=params.angular_modes {
            let alpha = ((l * (l + 1) + n) as f64).sqrt();
            let frequency = f_base * alpha;
            if frequency >= nyquist {
                continue;
            }

            let amplitude = params.base_amplitude / mode_count / ((n * l) as f64);
            let decay = params.base_decay / (1.0 + 0.2 * alpha);
            let sine = DecayingSine::new(amplitude, frequency, 0.0, params.start_time, decay)?;
            source.add_component(SoundComponent::new(sine, 0.0, 3.0 * decay));
        }
    }

    Ok(source)
}

/// Geometry and excitation of a struck rectangular plate.
#[derive(Debug, Clone, Copy)]
pub struct PlateParams {
    /// Plate extent along x, meters.
    pub width: f64,
    /// Plate extent along y, meters.
    pub height: f64,
    /// Number of mode indices along the width (`m`).
    pub width_modes: usize,
    /// Number of mode indices along the height (`n`).
    pub height_modes: usize,
    /// Amplitude budget shared across all modes.
    pub base_amplitude: f64,
    /// Decay time of the slowest mode, seconds.
    pub base_decay: f64,
    /// Onset time of the strike, seconds.
    pub start_time: f64,
    /// Stiffness constant scaling every mode frequency.
    ///
    /// Empirical. The default of 31.0 reproduces the reference plate
    /// voicing; tune by ear rather than deriving it from material
    /// properties.
    pub freq_const: f64,
}

impl Default for PlateParams {
    fn default() -> Self {
        Self {
            width: 0.4,
            height: 0.3,
            width_modes: 8,
            height_modes: 8,
            base_amplitude: 0.8,
            base_decay: 1.2,
            start_time: 0.0,
            freq_const: PLATE_FREQ_CONST,
        }
    }
}

/// Builds a struck-plate source at the origin.
///
/// Mode `(m, n)` sounds at `freq_const * sqrt((m/width)^2 + (n/height)^2)`.
/// Amplitude and decay shrink with the index sum `m + n`. A mode exactly at
/// Nyquist is kept; anything above is skipped.
pub fn plate_source(params: &PlateParams, sample_rate: f64) -> Result<SoundSource> {
    let nyquist = sample_rate / 2.0;
    let mode_count = (params.width_modes * params.height_modes) as f64;

    let mut source = SoundSource::new();
    for m in 1..=params.width_modes {
        for n in 1..=params.height_modes {
            let fx = m as f64 / params.width;
            let fy = n as f64 / params.height;
            let frequency = params.freq_const * (fx * fx + fy * fy).sqrt();
            if frequency > nyquist {
                continue;
            }

            let damping = 1.0 + 0.1 * (m + n) as f64;
            let amplitude = params.base_amplitude / mode_count / damping;
            let decay = params.base_decay / damping;
            let sine = DecayingSine::new(amplitude, frequency, 0.0, params.start_time, decay)?;
            source.add_component(SoundComponent::new(sine, 0.0, 3.0 * decay));
        }
    }

    Ok(source)
}
