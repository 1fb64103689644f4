//! A single voice of a sound: generator, optional filter, lifetime window.

use crate::generator::Generator;
use klang_core::Filter;

/// One generator with an optional filter and a finite lifetime.
///
/// Components are the unit of expiry. The owning source drops a component
/// once the mix time reaches `start_time + lifetime` — the bound is
/// inclusive, so a two-second component is alive at `t = 1.999` and expired
/// at exactly `t = 2.0`. Expiry does not gate generation: a component that
/// cleanup has not yet reaped keeps producing samples.
#[derive(Debug, Clone)]
pub struct SoundComponent {
    generator: Generator,
    filter: Option<Filter>,
    start_time: f64,
    lifetime: f64,
}

impl SoundComponent {
    /// Creates a component alive on `[start_time, start_time + lifetime]`.
    ///
    /// Negative lifetimes are clamped to zero, which makes the component
    /// expired from its very first instant.
    pub fn new(generator: impl Into<Generator>, start_time: f64, lifetime: f64) -> Self {
        Self {
            generator: generator.into(),
            filter: None,
            start_time,
            lifetime: lifetime.max(0.0),
        }
    }

    /// Attaches a filter that the generator output runs through.
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Produces the sample for the given absolute time.
    ///
    /// Before the generator's start time this is exactly zero even with a
    /// filter attached: the biquad maps zero state and zero input to zero.
    #[inline]
    pub fn generate(&mut self, time: f64) -> f64 {
        let raw = self.generator.generate(time);
        match &mut self.filter {
            Some(filter) => filter.process(raw),
            None => raw,
        }
    }

    /// Whether the component's window has closed (inclusive bound).
    pub fn is_expired(&self, time: f64) -> bool {
        time >= self.start_time + self.lifetime
    }

    /// Start of the lifetime window, seconds.
    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    /// Length of the lifetime window, seconds.
    pub fn lifetime(&self) -> f64 {
        self.lifetime
    }

    /// The attached filter, if any.
    pub fn filter(&self) -> Option<&Filter> {
        self.filter.as_ref()
    }

    /// The owned generator.
    pub fn generator(&self) -> &Generator {
        &self.generator
    }
}
