//! Block mixer: the pipeline's clock and integration point.

use klang_core::{ParamError, Result};

use crate::sink::AudioSink;
use crate::source::SoundSource;

/// Converts a mixed sample to 16-bit PCM, clamping to full scale first.
#[inline]
fn quantize(sample: f64) -> i16 {
    (sample.clamp(-1.0, 1.0) * f64::from(i16::MAX)) as i16
}

/// Mixes sound sources into fixed-size blocks of 16-bit mono PCM.
///
/// [`Mixer::tick`] renders one block: for each sample it sums every source
/// at the current cursor, advances the cursor by one sample period, and
/// quantizes; the finished block goes to the sink, and only then does the
/// cleanup pass run — expired components are reaped and removable sources
/// dropped, exactly once per tick. Everything rendered is also appended to
/// an in-memory recording, so a WAV file can be assembled in one pass after
/// the final tick.
///
/// # Example
///
/// ```rust
/// use klang_synth::{DecayingSine, Mixer, NullSink, SoundComponent, SoundSource};
///
/// let mut mixer = Mixer::new(44100.0, 512)?;
///
/// let mut source = SoundSource::new();
/// let sine = DecayingSine::new(0.5, 440.0, 0.0, 0.0, 0.3)?;
/// source.add_component(SoundComponent::new(sine, 0.0, 1.0));
/// mixer.add_source(source);
///
/// let mut sink = NullSink::new();
/// mixer.tick(&mut sink);
///
/// assert_eq!(mixer.samples_rendered(), 512);
/// # Ok::<(), klang_synth::ParamError>(())
/// ```
#[derive(Debug)]
pub struct Mixer {
    sources: Vec<SoundSource>,
    sample_rate: f64,
    block_size: usize,
    current_time: f64,
    block: Vec<i16>,
    recorded: Vec<i16>,
}

impl Mixer {
    /// Creates a mixer producing `block_size`-sample blocks at the given
    /// rate.
    ///
    /// Fails with [`ParamError::InvalidParameter`] when `sample_rate` is
    /// non-positive or `block_size` is zero.
    pub fn new(sample_rate: f64, block_size: usize) -> Result<Self> {
        if sample_rate <= 0.0 {
            return Err(ParamError::InvalidParameter {
                context: "mixer",
                param: "sample_rate",
                reason: format!("must be positive, got {sample_rate}"),
            });
        }
        if block_size == 0 {
            return Err(ParamError::InvalidParameter {
                context: "mixer",
                param: "block_size",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            sources: Vec::new(),
            sample_rate,
            block_size,
            current_time: 0.0,
            block: Vec::with_capacity(block_size),
            recorded: Vec::new(),
        })
    }

    /// Adds a source to the mix.
    pub fn add_source(&mut self, source: SoundSource) {
        self.sources.push(source);
    }

    /// Renders one block and hands it to the sink.
    ///
    /// Per sample: sum sources at the cursor, advance the cursor, quantize,
    /// record. Per tick, after the hand-off: reap expired components, then
    /// drop sources that are marked and empty. Generation in a tick always
    /// happens before that tick's cleanup, so a component expiring
    /// mid-block still contributes its final samples.
    pub fn tick(&mut self, sink: &mut dyn AudioSink) {
        let dt = 1.0 / self.sample_rate;

        self.block.clear();
        for _ in 0..self.block_size {
            let mut mixed = 0.0;
            for source in &mut self.sources {
                mixed += source.generate(self.current_time);
            }
            self.current_time += dt;

            let sample = quantize(mixed);
            self.block.push(sample);
            self.recorded.push(sample);
        }

        sink.submit_block(&self.block);

        for source in &mut self.sources {
            source.remove_expired_components(self.current_time);
        }
        self.sources.retain(|s| !s.can_be_removed());
    }

    /// Renders enough ticks to cover `duration` seconds of audio.
    pub fn render(&mut self, duration: f64, sink: &mut dyn AudioSink) {
        for _ in 0..self.ticks_for(duration) {
            self.tick(sink);
        }
    }

    /// Number of ticks needed to cover `duration` seconds from now.
    pub fn ticks_for(&self, duration: f64) -> usize {
        let samples = (duration * self.sample_rate).ceil().max(0.0) as usize;
        samples.div_ceil(self.block_size)
    }

    /// The global time cursor, seconds.
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Samples per block.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Sources still in the mix.
    pub fn sources(&self) -> &[SoundSource] {
        &self.sources
    }

    /// Mutable access to the sources, e.g. to mark one for deletion.
    pub fn sources_mut(&mut self) -> &mut [SoundSource] {
        &mut self.sources
    }

    /// Number of sources still in the mix.
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Total samples rendered so far.
    pub fn samples_rendered(&self) -> usize {
        self.recorded.len()
    }

    /// The cumulative quantized recording.
    pub fn recorded(&self) -> &[i16] {
        &self.recorded
    }

    /// Consumes the mixer, returning the recording for serialization.
    pub fn into_recorded(self) -> Vec<i16> {
        self.recorded
    }
}
