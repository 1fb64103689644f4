//! Klang Synth - procedural synthesis of physically voiced objects
//!
//! Models simple resonant objects (glass spheres, rectangular plates) as
//! banks of decaying sine modes, organizes them into positioned sound
//! sources, and mixes everything into blocks of 16-bit mono PCM.
//!
//! # Pipeline
//!
//! - [`Generator`] - closed set of producers: [`WhiteNoise`],
//!   [`DecayingSine`], [`DecayingNoise`]
//! - [`SoundComponent`] - one generator, an optional filter, and a finite
//!   lifetime window
//! - [`SoundSource`] - components behind a cached distance attenuation and
//!   a two-phase removal flag
//! - [`sphere_source`] / [`plate_source`] - modal builders that voice
//!   geometry into component banks
//! - [`Mixer`] - the clock: sums sources block by block, quantizes, records
//!   and hands blocks to an [`AudioSink`]
//!
//! Time is owned by the mixer. Generators are pure functions of the
//! queried instant (noise streams aside) and never fail; constructors
//! validate instead.
//!
//! # Example
//!
//! ```rust
//! use klang_synth::{Mixer, NullSink, SphereParams, sphere_source};
//!
//! let mut mixer = Mixer::new(44100.0, 1024)?;
//! mixer.add_source(sphere_source(&SphereParams::default(), 44100.0)?);
//!
//! let mut sink = NullSink::new();
//! mixer.render(1.0, &mut sink);
//!
//! assert!(mixer.samples_rendered() >= 44100);
//! # Ok::<(), klang_synth::ParamError>(())
//! ```

pub mod component;
pub mod generator;
pub mod mixer;
pub mod modal;
pub mod position;
pub mod sink;
pub mod source;

// Re-export main types at crate root
pub use component::SoundComponent;
pub use generator::{DecayingNoise, DecayingSine, Generator, WhiteNoise};
pub use mixer::Mixer;
pub use modal::{
    GLASS_SPEED_OF_SOUND, PLATE_FREQ_CONST, PlateParams, SphereParams, plate_source, sphere_source,
};
pub use position::{Vec3, distance_attenuation};
pub use sink::{AudioSink, NullSink};
pub use source::SoundSource;

// The filter and error types travel with the synthesis API.
pub use klang_core::{Filter, FilterDesign, ParamError};
