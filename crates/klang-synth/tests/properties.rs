//! Property-based tests for klang-synth.
//!
//! These verify structural identities of the mixing pipeline: a source is
//! exactly its attenuated component sum, a mixer block is exactly the
//! quantized source sum, and lifecycle predicates hold across the whole
//! parameter space.

use core::f64::consts::TAU;
use klang_synth::{
    DecayingNoise, DecayingSine, Generator, Mixer, NullSink, SoundComponent, SoundSource, Vec3,
    WhiteNoise,
};
use proptest::prelude::*;

const SR: f64 = 44100.0;

fn arb_generator() -> impl Strategy<Value = Generator> {
    prop_oneof![
        (0.01f64..1.0, 20.0f64..5000.0, 0.0f64..TAU, 0.0f64..0.5, 0.01f64..2.0).prop_map(
            |(amplitude, frequency, phase, start, decay)| {
                DecayingSine::new(amplitude, frequency, phase, start, decay)
                    .unwrap()
                    .into()
            }
        ),
        (0.01f64..1.0, 0.0f64..0.5, any::<u32>())
            .prop_map(|(amplitude, start, seed)| WhiteNoise::with_seed(amplitude, start, seed)
                .into()),
        (0.01f64..1.0, 0.0f64..0.5, 0.01f64..2.0, any::<u32>()).prop_map(
            |(amplitude, start, decay, seed)| {
                DecayingNoise::with_seed(amplitude, start, decay, seed)
                    .unwrap()
                    .into()
            }
        ),
    ]
}

fn arb_position() -> impl Strategy<Value = Vec3> {
    (-20.0f64..20.0, -20.0f64..20.0, -20.0f64..20.0).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn arb_source() -> impl Strategy<Value = SoundSource> {
    (proptest::collection::vec(arb_generator(), 1..4), arb_position()).prop_map(
        |(generators, position)| {
            let mut source = SoundSource::new();
            for generator in generators {
                source.add_component(SoundComponent::new(generator, 0.0, 10.0));
            }
            source.set_position(position);
            source
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A source is nothing more than its attenuated component sum. The
    /// cloned generators replay the same noise draws in the same order,
    /// so the comparison is exact.
    #[test]
    fn source_output_is_attenuated_component_sum(
        generators in proptest::collection::vec(arb_generator(), 1..8),
        position in arb_position(),
        times in proptest::collection::vec(0.0f64..2.0, 1..16),
    ) {
        let mut source = SoundSource::new();
        let mut clones = Vec::new();
        for generator in &generators {
            clones.push(generator.clone());
            source.add_component(SoundComponent::new(generator.clone(), 0.0, 10.0));
        }
        source.set_position(position);
        let attenuation = source.attenuation();

        for t in times {
            let mut sum = 0.0;
            for clone in &mut clones {
                sum += clone.generate(t);
            }
            prop_assert_eq!(source.generate(t), attenuation * sum);
        }
    }

    /// One mixer tick is exactly the per-sample quantized sum of its
    /// sources, reproduced here from cloned sources.
    #[test]
    fn tick_matches_manually_quantized_sum(
        sources in proptest::collection::vec(arb_source(), 1..4),
        block_size in 16usize..256,
    ) {
        let mut clones = sources.clone();
        let mut mixer = Mixer::new(SR, block_size).unwrap();
        for source in sources {
            mixer.add_source(source);
        }

        let mut sink = NullSink::new();
        mixer.tick(&mut sink);

        let mut expected = Vec::with_capacity(block_size);
        let mut t = 0.0;
        for _ in 0..block_size {
            let mut mixed = 0.0;
            for clone in &mut clones {
                mixed += clone.generate(t);
            }
            t += 1.0 / SR;
            expected.push((mixed.clamp(-1.0, 1.0) * f64::from(i16::MAX)) as i16);
        }

        prop_assert_eq!(expected.as_slice(), mixer.recorded());
    }

    /// Every generator kind is exactly silent before its start time.
    #[test]
    fn generators_are_silent_before_start(
        generator in arb_generator(),
        offsets in proptest::collection::vec(0.0f64..1.0, 1..8),
    ) {
        let start = generator.start_time();
        let mut generator = generator;
        for offset in offsets {
            // Query strictly before the onset.
            let t = start - 0.001 - offset;
            prop_assert_eq!(generator.generate(t), 0.0);
        }
    }

    /// The expiry window closes exactly at `start + lifetime`, inclusive.
    #[test]
    fn expiry_boundary_is_inclusive(
        start in 0.0f64..10.0,
        lifetime in 0.001f64..5.0,
    ) {
        let sine = DecayingSine::new(0.5, 440.0, 0.0, start, 1.0).unwrap();
        let component = SoundComponent::new(sine, start, lifetime);

        prop_assert!(!component.is_expired(start + lifetime * 0.5));
        prop_assert!(component.is_expired(start + lifetime));
        prop_assert!(component.is_expired(start + lifetime * 2.0));
    }

    /// Negative lifetimes clamp to zero, expiring the component at its
    /// own start time.
    #[test]
    fn negative_lifetime_expires_at_start(
        start in 0.0f64..10.0,
        lifetime in -5.0f64..-0.001,
    ) {
        let sine = DecayingSine::new(0.5, 440.0, 0.0, start, 1.0).unwrap();
        let component = SoundComponent::new(sine, start, lifetime);

        prop_assert!(component.is_expired(start));
        prop_assert_eq!(component.lifetime(), 0.0);
    }
}
