//! Biquad (bi-quadratic) filter kernel.
//!
//! A single second-order IIR section plus the coefficient design functions
//! used by [`crate::Filter`]: RBJ Audio EQ Cookbook low/high/band-pass and
//! peaking EQ, and a bandwidth-driven two-pole resonator.

use core::f64::consts::PI;

/// Direct Form I biquad state.
///
/// ```text
/// y[n] = b0*x[n] + b1*x[n-1] + b2*x[n-2]
///                - a1*y[n-1] - a2*y[n-2]
/// ```
///
/// Coefficients are set once per configuration; the per-sample path is four
/// multiplies and an add chain over the delay lines.
#[derive(Debug, Clone)]
pub struct Biquad {
    /// Feedforward coefficients
    b0: f64,
    b1: f64,
    b2: f64,

    /// Feedback coefficients (a0 already divided out)
    a1: f64,
    a2: f64,

    /// Input delay line: x[n-1], x[n-2]
    x1: f64,
    x2: f64,

    /// Output delay line: y[n-1], y[n-2]
    y1: f64,
    y2: f64,
}

impl Biquad {
    /// Creates a biquad with identity coefficients (`y[n] = x[n]`).
    pub fn new() -> Self {
        Self {
            b0: 1.0,
            b1: 0.0,
            b2: 0.0,
            a1: 0.0,
            a2: 0.0,
            x1: 0.0,
            x2: 0.0,
            y1: 0.0,
            y2: 0.0,
        }
    }

    /// Installs a coefficient set, normalizing by `a0`.
    ///
    /// Callers are expected to hand over the raw six-tuple from one of the
    /// design functions in this module; `a0` must be nonzero.
    pub fn set_coefficients(&mut self, b0: f64, b1: f64, b2: f64, a0: f64, a1: f64, a2: f64) {
        let a0_inv = 1.0 / a0;
        self.b0 = b0 * a0_inv;
        self.b1 = b1 * a0_inv;
        self.b2 = b2 * a0_inv;
        self.a1 = a1 * a0_inv;
        self.a2 = a2 * a0_inv;
    }

    /// Runs one sample through the section.
    #[inline]
    pub fn process(&mut self, input: f64) -> f64 {
        let output = self.b0 * input + self.b1 * self.x1 + self.b2 * self.x2
            - self.a1 * self.y1
            - self.a2 * self.y2;

        self.x2 = self.x1;
        self.x1 = input;
        self.y2 = self.y1;
        self.y1 = output;

        output
    }

    /// Zeroes the delay lines without touching coefficients.
    pub fn clear(&mut self) {
        self.x1 = 0.0;
        self.x2 = 0.0;
        self.y1 = 0.0;
        self.y2 = 0.0;
    }
}

impl Default for Biquad {
    fn default() -> Self {
        Self::new()
    }
}

/// Low-pass coefficients (RBJ cookbook).
///
/// `frequency` is the cutoff in Hz, `q` the resonance (0.707 for a
/// Butterworth response). Returns the raw `(b0, b1, b2, a0, a1, a2)` tuple.
pub fn lowpass_coefficients(frequency: f64, q: f64, sample_rate: f64) -> (f64, f64, f64, f64, f64, f64) {
    let omega = 2.0 * PI * frequency / sample_rate;
    let cos_omega = omega.cos();
    let alpha = omega.sin() / (2.0 * q);

    let b0 = (1.0 - cos_omega) / 2.0;
    let b1 = 1.0 - cos_omega;
    let b2 = (1.0 - cos_omega) / 2.0;
    let a0 = 1.0 + alpha;
    let a1 = -2.0 * cos_omega;
    let a2 = 1.0 - alpha;

    (b0, b1, b2, a0, a1, a2)
}

/// High-pass coefficients (RBJ cookbook).
pub fn highpass_coefficients(frequency: f64, q: f64, sample_rate: f64) -> (f64, f64, f64, f64, f64, f64) {
    let omega = 2.0 * PI * frequency / sample_rate;
    let cos_omega = omega.cos();
    let alpha = omega.sin() / (2.0 * q);

    let b0 = (1.0 + cos_omega) / 2.0;
    let b1 = -(1.0 + cos_omega);
    let b2 = (1.0 + cos_omega) / 2.0;
    let a0 = 1.0 + alpha;
    let a1 = -2.0 * cos_omega;
    let a2 = 1.0 - alpha;

    (b0, b1, b2, a0, a1, a2)
}

/// Band-pass coefficients (RBJ cookbook, constant 0 dB peak gain).
///
/// `q` sets the bandwidth as `frequency / q`.
pub fn bandpass_coefficients(frequency: f64, q: f64, sample_rate: f64) -> (f64, f64, f64, f64, f64, f64) {
    let omega = 2.0 * PI * frequency / sample_rate;
    let cos_omega = omega.cos();
    let alpha = omega.sin() / (2.0 * q);

    let b0 = alpha;
    let b1 = 0.0;
    let b2 = -alpha;
    let a0 = 1.0 + alpha;
    let a1 = -2.0 * cos_omega;
    let a2 = 1.0 - alpha;

    (b0, b1, b2, a0, a1, a2)
}

/// Two-pole resonator coefficients from center frequency and bandwidth.
///
/// Pole radius `R = 1 - 3*bandwidth/sample_rate` places the conjugate pole
/// pair; the numerator gain `K` normalizes the response to unity at the
/// center frequency. Narrow bandwidths ring longer. The center frequency
/// must sit strictly inside (0, Nyquist): the normalization divides by
/// `2 - 2*cos(omega)`, which vanishes at DC.
pub fn resonator_coefficients(frequency: f64, bandwidth: f64, sample_rate: f64) -> (f64, f64, f64, f64, f64, f64) {
    let omega = 2.0 * PI * frequency / sample_rate;
    let cos_omega = omega.cos();
    let r = 1.0 - 3.0 * bandwidth / sample_rate;
    let k = (1.0 - 2.0 * r * cos_omega + r * r) / (2.0 - 2.0 * cos_omega);

    let b0 = 1.0 - k;
    let b1 = 2.0 * (k - r) * cos_omega;
    let b2 = r * r - k;
    let a0 = 1.0;
    let a1 = -2.0 * r * cos_omega;
    let a2 = r * r;

    (b0, b1, b2, a0, a1, a2)
}

/// Peaking parametric EQ coefficients (RBJ cookbook).
///
/// Boosts (`gain_db > 0`) or cuts (`gain_db < 0`) around the center
/// frequency; `q` sets the bell width.
pub fn peaking_eq_coefficients(frequency: f64, q: f64, gain_db: f64, sample_rate: f64) -> (f64, f64, f64, f64, f64, f64) {
    let a = 10.0_f64.powf(gain_db / 40.0); // sqrt(10^(dB/20))
    let omega = 2.0 * PI * frequency / sample_rate;
    let cos_omega = omega.cos();
    let alpha = omega.sin() / (2.0 * q);

    let b0 = 1.0 + alpha * a;
    let b1 = -2.0 * cos_omega;
    let b2 = 1.0 - alpha * a;
    let a0 = 1.0 + alpha / a;
    let a1 = -2.0 * cos_omega;
    let a2 = 1.0 - alpha / a;

    (b0, b1, b2, a0, a1, a2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::PI;

    #[test]
    fn passthrough_by_default() {
        let mut biquad = Biquad::new();

        for i in 0..10 {
            let input = f64::from(i) * 0.1;
            let output = biquad.process(input);
            assert!((output - input).abs() < 1e-12);
        }
    }

    #[test]
    fn clear_zeroes_state() {
        let mut biquad = Biquad::new();

        for _ in 0..10 {
            biquad.process(1.0);
        }

        biquad.clear();

        assert_eq!(biquad.x1, 0.0);
        assert_eq!(biquad.x2, 0.0);
        assert_eq!(biquad.y1, 0.0);
        assert_eq!(biquad.y2, 0.0);
    }

    #[test]
    fn lowpass_quarter_rate_closed_form() {
        // At cutoff = fs/4 and Q = 1: omega = pi/2, cos = 0, alpha = 1/2.
        // Normalized coefficients collapse to b = (1/3, 2/3, 1/3),
        // a1 = 0, a2 = 1/3.
        let sample_rate = 44100.0;
        let (b0, b1, b2, a0, a1, a2) = lowpass_coefficients(sample_rate / 4.0, 1.0, sample_rate);

        let third = 1.0 / 3.0;
        assert!((b0 / a0 - third).abs() < 1e-12);
        assert!((b1 / a0 - 2.0 * third).abs() < 1e-12);
        assert!((b2 / a0 - third).abs() < 1e-12);
        assert!((a1 / a0).abs() < 1e-12);
        assert!((a2 / a0 - third).abs() < 1e-12);
    }

    #[test]
    fn lowpass_passes_dc() {
        let mut biquad = Biquad::new();
        let (b0, b1, b2, a0, a1, a2) = lowpass_coefficients(1000.0, 0.707, 44100.0);
        biquad.set_coefficients(b0, b1, b2, a0, a1, a2);

        let mut output = 0.0;
        for _ in 0..1000 {
            output = biquad.process(1.0);
        }

        assert!((output - 1.0).abs() < 0.01, "DC gain should be unity, got {output}");
    }

    #[test]
    fn highpass_blocks_dc() {
        let mut biquad = Biquad::new();
        let (b0, b1, b2, a0, a1, a2) = highpass_coefficients(1000.0, 0.707, 44100.0);
        biquad.set_coefficients(b0, b1, b2, a0, a1, a2);

        let mut output = 1.0;
        for _ in 0..2000 {
            output = biquad.process(1.0);
        }

        assert!(output.abs() < 1e-3, "DC should be rejected, got {output}");
    }

    #[test]
    fn bandpass_blocks_dc() {
        let mut biquad = Biquad::new();
        let (b0, b1, b2, a0, a1, a2) = bandpass_coefficients(1000.0, 1.0, 44100.0);
        biquad.set_coefficients(b0, b1, b2, a0, a1, a2);

        let mut output = 1.0;
        for _ in 0..2000 {
            output = biquad.process(1.0);
        }

        assert!(output.abs() < 1e-3, "DC should be rejected, got {output}");
    }

    #[test]
    fn resonator_unity_gain_at_center() {
        let sample_rate = 44100.0;
        let center = 1000.0;
        let mut biquad = Biquad::new();
        let (b0, b1, b2, a0, a1, a2) = resonator_coefficients(center, 100.0, sample_rate);
        biquad.set_coefficients(b0, b1, b2, a0, a1, a2);

        // Drive with a sine at the center frequency and measure the
        // steady-state peak after the transient dies out.
        let mut peak: f64 = 0.0;
        for i in 0..8820 {
            let t = f64::from(i) / sample_rate;
            let y = biquad.process((2.0 * PI * center * t).sin());
            if i >= 4410 {
                peak = peak.max(y.abs());
            }
        }

        assert!((peak - 1.0).abs() < 0.05, "center-frequency gain should be ~1, got {peak}");
    }

    #[test]
    fn resonator_attenuates_far_frequencies() {
        let sample_rate = 44100.0;
        let mut biquad = Biquad::new();
        let (b0, b1, b2, a0, a1, a2) = resonator_coefficients(1000.0, 50.0, sample_rate);
        biquad.set_coefficients(b0, b1, b2, a0, a1, a2);

        // A tone two octaves above the center should come out well below
        // unity.
        let mut peak: f64 = 0.0;
        for i in 0..8820 {
            let t = f64::from(i) / sample_rate;
            let y = biquad.process((2.0 * PI * 4000.0 * t).sin());
            if i >= 4410 {
                peak = peak.max(y.abs());
            }
        }

        assert!(peak < 0.2, "off-center gain should be small, got {peak}");
    }

    #[test]
    fn peaking_eq_unity_at_zero_gain() {
        let mut biquad = Biquad::new();
        let (b0, b1, b2, a0, a1, a2) = peaking_eq_coefficients(1000.0, 1.0, 0.0, 44100.0);
        biquad.set_coefficients(b0, b1, b2, a0, a1, a2);

        let mut output = 0.0;
        for _ in 0..1000 {
            output = biquad.process(1.0);
        }

        assert!((output - 1.0).abs() < 0.01, "0 dB peaking EQ should be transparent, got {output}");
    }

    #[test]
    fn peaking_eq_boost_and_cut_are_finite() {
        for gain_db in [-12.0, -6.0, 6.0, 12.0] {
            let (b0, b1, b2, a0, a1, a2) = peaking_eq_coefficients(1000.0, 1.0, gain_db, 44100.0);
            for c in [b0, b1, b2, a0, a1, a2] {
                assert!(c.is_finite());
            }
        }
    }
}
