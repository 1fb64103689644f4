//! Integration tests for klang-synth.
//!
//! Tests cover the full mixing pipeline: modal sources feeding the block
//! mixer, quantization, lifecycle cleanup, and the sink hand-off.

use core::f64::consts::PI;
use klang_synth::{
    AudioSink, DecayingSine, Mixer, NullSink, PlateParams, SoundComponent, SoundSource,
    SphereParams, Vec3, plate_source, sphere_source,
};

const SR: f64 = 44100.0;

/// Sink that keeps every submitted block for inspection.
#[derive(Default)]
struct CaptureSink {
    blocks: Vec<Vec<i16>>,
}

impl AudioSink for CaptureSink {
    fn submit_block(&mut self, samples: &[i16]) {
        self.blocks.push(samples.to_vec());
    }

    fn is_playing(&self) -> bool {
        false
    }

    fn finished_blocks(&self) -> usize {
        self.blocks.len()
    }
}

fn steady_sine(amplitude: f64) -> SoundComponent {
    // A decay time this long keeps the envelope within one quantization
    // step of unity for the durations tested here.
    let sine = DecayingSine::new(amplitude, 440.0, 0.0, 0.0, 1.0e9).unwrap();
    SoundComponent::new(sine, 0.0, 100.0)
}

// ---------------------------------------------------------------------------
// 1. End-to-end mixing against the closed form
// ---------------------------------------------------------------------------

#[test]
fn silent_plus_distant_sine_matches_closed_form() {
    let mut silent = SoundSource::new();
    silent.add_component(steady_sine(0.0));

    let mut tone = SoundSource::new();
    tone.add_component(steady_sine(1.0));
    tone.set_position(Vec3::new(1.0, 0.0, 0.0)); // attenuation exactly 0.5

    let mut mixer = Mixer::new(SR, 1024).unwrap();
    mixer.add_source(silent);
    mixer.add_source(tone);

    let mut sink = NullSink::new();
    mixer.tick(&mut sink);
    mixer.tick(&mut sink);

    for (i, &sample) in mixer.recorded().iter().enumerate() {
        let t = i as f64 / SR;
        let expected = 0.5 * (-t / 1.0e9).exp() * (2.0 * PI * 440.0 * t).sin();
        let expected_q = (expected.clamp(-1.0, 1.0) * f64::from(i16::MAX)) as i16;

        let diff = (i32::from(sample) - i32::from(expected_q)).abs();
        assert!(diff <= 1, "sample {i}: got {sample}, expected {expected_q}");
    }
}

#[test]
fn submitted_blocks_equal_the_recording() {
    let mut mixer = Mixer::new(SR, 256).unwrap();
    mixer.add_source(sphere_source(&SphereParams::default(), SR).unwrap());

    let mut sink = CaptureSink::default();
    for _ in 0..4 {
        mixer.tick(&mut sink);
    }

    let streamed: Vec<i16> = sink.blocks.iter().flatten().copied().collect();
    assert_eq!(streamed, mixer.recorded());
    assert_eq!(sink.finished_blocks(), 4);
}

// ---------------------------------------------------------------------------
// 2. Onset and decay behavior of modal sources
// ---------------------------------------------------------------------------

#[test]
fn delayed_sphere_is_silent_until_its_onset() {
    let params = SphereParams {
        start_time: 0.5,
        ..SphereParams::default()
    };

    let mut mixer = Mixer::new(SR, 1024).unwrap();
    mixer.add_source(sphere_source(&params, SR).unwrap());

    let mut sink = NullSink::new();
    mixer.render(1.0, &mut sink);

    let recorded = mixer.recorded();
    assert!(
        recorded.iter().take(22_000).all(|&s| s == 0),
        "audible before the 0.5 s onset"
    );
    assert!(
        recorded[22_060..44_100].iter().any(|&s| s != 0),
        "still silent after the onset"
    );
}

#[test]
fn sphere_ring_decays_toward_silence() {
    let params = SphereParams {
        base_decay: 0.2,
        ..SphereParams::default()
    };

    let mut mixer = Mixer::new(SR, 1024).unwrap();
    mixer.add_source(sphere_source(&params, SR).unwrap());

    let mut sink = NullSink::new();
    mixer.render(2.0, &mut sink);

    let recorded = mixer.recorded();
    let early: f64 = recorded[..4410]
        .iter()
        .map(|&s| f64::from(s).abs())
        .sum::<f64>()
        / 4410.0;
    let late: f64 = recorded[recorded.len() - 4410..]
        .iter()
        .map(|&s| f64::from(s).abs())
        .sum::<f64>()
        / 4410.0;

    assert!(early > 10.0 * late.max(1.0), "no audible decay: early {early}, late {late}");
    assert!(recorded[..4410].iter().any(|&s| s.abs() > 100), "strike should be audible");
}

#[test]
fn plate_and_sphere_mix_together() {
    let mut mixer = Mixer::new(SR, 1024).unwrap();
    mixer.add_source(sphere_source(&SphereParams::default(), SR).unwrap());
    mixer.add_source(plate_source(&PlateParams::default(), SR).unwrap());

    let mut sink = NullSink::new();
    mixer.render(0.5, &mut sink);

    assert_eq!(mixer.source_count(), 2);
    assert!(mixer.recorded().iter().any(|&s| s != 0));
}

// ---------------------------------------------------------------------------
// 3. Lifecycle: expiry and two-phase removal through the mixer
// ---------------------------------------------------------------------------

#[test]
fn marked_modal_source_is_reaped_after_its_tail() {
    let params = SphereParams {
        base_decay: 0.1,
        ..SphereParams::default()
    };
    // Slowest mode: decay 0.1 / (1 + 0.2*sqrt(3)), lifetime 3x that, well
    // under half a second.
    let mut mixer = Mixer::new(SR, 1024).unwrap();
    mixer.add_source(sphere_source(&params, SR).unwrap());
    mixer.sources_mut()[0].mark_for_deletion();

    let mut sink = NullSink::new();

    mixer.tick(&mut sink);
    assert_eq!(mixer.source_count(), 1, "marking must not cut the sound off");

    mixer.render(0.5, &mut sink);
    assert_eq!(mixer.source_count(), 0, "marked source should be gone after its tail");
}

#[test]
fn unmarked_source_stays_after_expiry() {
    let mut source = SoundSource::new();
    let sine = DecayingSine::new(0.5, 440.0, 0.0, 0.0, 0.01).unwrap();
    source.add_component(SoundComponent::new(sine, 0.0, 0.03));

    let mut mixer = Mixer::new(SR, 1024).unwrap();
    mixer.add_source(source);

    let mut sink = NullSink::new();
    mixer.render(0.2, &mut sink);

    assert_eq!(mixer.source_count(), 1);
    assert!(mixer.sources()[0].components().is_empty());
}

// ---------------------------------------------------------------------------
// 4. Recording geometry
// ---------------------------------------------------------------------------

#[test]
fn recording_grows_by_whole_blocks() {
    let mut mixer = Mixer::new(SR, 512).unwrap();
    let mut sink = NullSink::new();

    for ticks in 1..=5 {
        mixer.tick(&mut sink);
        assert_eq!(mixer.samples_rendered(), ticks * 512);
    }
}

#[test]
fn into_recorded_returns_all_samples() {
    let mut mixer = Mixer::new(SR, 256).unwrap();
    mixer.add_source(sphere_source(&SphereParams::default(), SR).unwrap());

    let mut sink = NullSink::new();
    mixer.render(0.1, &mut sink);

    let expected_len = mixer.samples_rendered();
    let samples = mixer.into_recorded();
    assert_eq!(samples.len(), expected_len);
}
