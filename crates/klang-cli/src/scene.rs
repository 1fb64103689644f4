//! Declarative scene files.
//!
//! A scene is a TOML document listing positioned sound objects that are
//! mixed into one mono render. Object tables are tagged with
//! `kind = "sphere" | "plate" | "noise"`; keys are kebab-case and every
//! field beyond the kind is optional.

use klang_synth::{
    DecayingNoise, Filter, FilterDesign, Mixer, ParamError, PlateParams, SoundComponent,
    SoundSource, SphereParams, Vec3, plate_source, sphere_source,
};
use serde::Deserialize;

/// Scene rendered by `klang demo`: a glass strike, a plate answering half a
/// second later, and a band-passed noise burst at the one second mark.
pub const DEMO_SCENE: &str = r#"
sample-rate = 44100
block-size = 1024
duration = 4.5

[[objects]]
kind = "sphere"
radius = 0.3
amplitude = 0.9
decay = 0.6
position = [-2.0, 0.0, 1.0]

[[objects]]
kind = "plate"
width = 0.5
height = 0.35
decay = 1.5
start = 0.5
position = [2.0, 0.0, 1.0]

[[objects]]
kind = "noise"
amplitude = 0.6
decay = 0.25
start = 1.0
seed = 1234
position = [0.0, 0.0, 0.5]
filter = { center = 2500.0, q = 4.0 }
"#;

/// A complete renderable scene.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Scene {
    /// Sample rate in Hz.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    /// Samples per mixing block.
    #[serde(default = "default_block_size")]
    pub block_size: usize,
    /// Render length in seconds.
    #[serde(default = "default_duration")]
    pub duration: f64,
    /// Listener position shared by every object.
    #[serde(default)]
    pub listener: [f64; 3],
    /// The sound objects in the scene.
    #[serde(default)]
    pub objects: Vec<SceneObject>,
}

fn default_sample_rate() -> u32 {
    44100
}

fn default_block_size() -> usize {
    1024
}

fn default_duration() -> f64 {
    4.0
}

impl Scene {
    /// Builds a mixer with every object voiced, positioned, and attenuated
    /// against the scene listener.
    pub fn build(&self) -> Result<Mixer, ParamError> {
        let sample_rate = f64::from(self.sample_rate);
        let listener = to_vec3(self.listener);

        let mut mixer = Mixer::new(sample_rate, self.block_size)?;
        for object in &self.objects {
            let mut source = object.voice(sample_rate)?;
            source.set_listener_position(listener);
            mixer.add_source(source);
        }
        Ok(mixer)
    }
}

/// One positioned sound object.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SceneObject {
    /// A struck hollow glass sphere.
    Sphere(SphereObject),
    /// A struck rectangular plate.
    Plate(PlateObject),
    /// A decaying noise burst, optionally band-passed.
    Noise(NoiseObject),
}

impl SceneObject {
    fn voice(&self, sample_rate: f64) -> Result<SoundSource, ParamError> {
        match self {
            Self::Sphere(object) => object.voice(sample_rate),
            Self::Plate(object) => object.voice(sample_rate),
            Self::Noise(object) => object.voice(sample_rate),
        }
    }
}

/// A struck glass sphere; missing fields take the [`SphereParams`] defaults.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SphereObject {
    pub radius: f64,
    pub amplitude: f64,
    pub decay: f64,
    pub start: f64,
    pub radial_modes: usize,
    pub angular_modes: usize,
    pub position: [f64; 3],
}

impl Default for SphereObject {
    fn default() -> Self {
        let params = SphereParams::default();
        Self {
            radius: params.radius,
            amplitude: params.base_amplitude,
            decay: params.base_decay,
            start: params.start_time,
            radial_modes: params.radial_modes,
            angular_modes: params.angular_modes,
            position: [0.0; 3],
        }
    }
}

impl SphereObject {
    fn voice(&self, sample_rate: f64) -> Result<SoundSource, ParamError> {
        let params = SphereParams {
            radius: self.radius,
            base_amplitude: self.amplitude,
            base_decay: self.decay,
            radial_modes: self.radial_modes,
            angular_modes: self.angular_modes,
            start_time: self.start,
        };
        let mut source = sphere_source(&params, sample_rate)?;
        source.set_position(to_vec3(self.position));
        Ok(source)
    }
}

/// A struck rectangular plate; missing fields take the [`PlateParams`]
/// defaults.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PlateObject {
    pub width: f64,
    pub height: f64,
    pub width_modes: usize,
    pub height_modes: usize,
    pub amplitude: f64,
    pub decay: f64,
    pub start: f64,
    pub freq_const: f64,
    pub position: [f64; 3],
}

impl Default for PlateObject {
    fn default() -> Self {
        let params = PlateParams::default();
        Self {
            width: params.width,
            height: params.height,
            width_modes: params.width_modes,
            height_modes: params.height_modes,
            amplitude: params.base_amplitude,
            decay: params.base_decay,
            start: params.start_time,
            freq_const: params.freq_const,
            position: [0.0; 3],
        }
    }
}

impl PlateObject {
    fn voice(&self, sample_rate: f64) -> Result<SoundSource, ParamError> {
        let params = PlateParams {
            width: self.width,
            height: self.height,
            width_modes: self.width_modes,
            height_modes: self.height_modes,
            base_amplitude: self.amplitude,
            base_decay: self.decay,
            start_time: self.start,
            freq_const: self.freq_const,
        };
        let mut source = plate_source(&params, sample_rate)?;
        source.set_position(to_vec3(self.position));
        Ok(source)
    }
}

/// A decaying white-noise burst, optionally run through a band-pass so the
/// hiss reads as pitched percussion.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct NoiseObject {
    pub amplitude: f64,
    pub decay: f64,
    pub start: f64,
    /// Seconds the burst stays alive; defaults to three decay times like
    /// the modal builders.
    pub lifetime: Option<f64>,
    /// Noise seed; omit for the shared default stream.
    pub seed: Option<u32>,
    /// Optional band-pass shaping.
    pub filter: Option<BandPass>,
    pub position: [f64; 3],
}

impl Default for NoiseObject {
    fn default() -> Self {
        Self {
            amplitude: 0.5,
            decay: 0.3,
            start: 0.0,
            lifetime: None,
            seed: None,
            filter: None,
            position: [0.0; 3],
        }
    }
}

impl NoiseObject {
    fn voice(&self, sample_rate: f64) -> Result<SoundSource, ParamError> {
        let noise = match self.seed {
            Some(seed) => DecayingNoise::with_seed(self.amplitude, self.start, self.decay, seed)?,
            None => DecayingNoise::new(self.amplitude, self.start, self.decay)?,
        };

        let lifetime = self.lifetime.unwrap_or(3.0 * self.decay);
        let mut component = SoundComponent::new(noise, self.start, lifetime);
        if let Some(band) = self.filter {
            let design = FilterDesign::BandPass { center_hz: band.center, q: band.q };
            component = component.with_filter(Filter::new(design, sample_rate)?);
        }

        let mut source = SoundSource::new();
        source.add_component(component);
        source.set_position(to_vec3(self.position));
        Ok(source)
    }
}

/// Band-pass parameters for a noise object.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BandPass {
    /// Center frequency in Hz.
    pub center: f64,
    /// Quality factor.
    pub q: f64,
}

fn to_vec3(p: [f64; 3]) -> Vec3 {
    Vec3::new(p[0], p[1], p[2])
}
