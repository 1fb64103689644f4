//! Struck glass sphere rendering command.

use clap::Args;
use klang_synth::{Mixer, SphereParams, Vec3, sphere_source};

use super::common::{self, RenderOpts};

#[derive(Args)]
pub struct SphereArgs {
    /// Sphere radius in meters
    #[arg(long, default_value = "0.35")]
    radius: f64,

    /// Amplitude budget shared across all modes (0-1)
    #[arg(long, default_value = "0.8")]
    amplitude: f64,

    /// Decay time of the slowest mode in seconds
    #[arg(long, default_value = "0.5")]
    decay: f64,

    /// Number of radial mode indices
    #[arg(long, default_value = "4")]
    radial_modes: usize,

    /// Number of angular mode indices
    #[arg(long, default_value = "4")]
    angular_modes: usize,

    /// Onset time of the strike in seconds
    #[arg(long, default_value = "0.0")]
    start: f64,

    /// Source position as "x,y,z" in meters
    #[arg(long, default_value = "0,0,0", value_parser = common::parse_position)]
    position: Vec3,

    /// Duration in seconds
    #[arg(long, default_value = "3.0")]
    duration: f64,

    #[command(flatten)]
    opts: RenderOpts,
}

pub fn run(args: SphereArgs) -> anyhow::Result<()> {
    let params = SphereParams {
        radius: args.radius,
        base_amplitude: args.amplitude,
        base_decay: args.decay,
        radial_modes: args.radial_modes,
        angular_modes: args.angular_modes,
        start_time: args.start,
    };

    let sample_rate = f64::from(args.opts.sample_rate);
    let mut source = sphere_source(&params, sample_rate)?;
    source.set_position(args.position);

    println!("Generating struck sphere...");
    println!(
        "  radius {} m, decay {:.2}s, {} modes below Nyquist",
        args.radius,
        args.decay,
        source.components().len()
    );

    let mut mixer = Mixer::new(sample_rate, args.opts.block_size)?;
    mixer.add_source(source);

    common::render_and_deliver(&mut mixer, args.duration, &args.opts)
}
