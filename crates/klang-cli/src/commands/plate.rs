//! Struck rectangular plate rendering command.

use clap::Args;
use klang_synth::{Mixer, PlateParams, Vec3, plate_source};

use super::common::{self, RenderOpts};

#[derive(Args)]
pub struct PlateArgs {
    /// Plate extent along x in meters
    #[arg(long, default_value = "0.4")]
    width: f64,

    /// Plate extent along y in meters
    #[arg(long, default_value = "0.3")]
    height: f64,

    /// Number of mode indices along the width
    #[arg(long, default_value = "8")]
    width_modes: usize,

    /// Number of mode indices along the height
    #[arg(long, default_value = "8")]
    height_modes: usize,

    /// Amplitude budget shared across all modes (0-1)
    #[arg(long, default_value = "0.8")]
    amplitude: f64,

    /// Decay time of the slowest mode in seconds
    #[arg(long, default_value = "1.2")]
    decay: f64,

    /// Onset time of the strike in seconds
    #[arg(long, default_value = "0.0")]
    start: f64,

    /// Stiffness constant scaling every mode frequency
    #[arg(long, default_value = "31.0")]
    freq_const: f64,

    /// Source position as "x,y,z" in meters
    #[arg(long, default_value = "0,0,0", value_parser = common::parse_position)]
    position: Vec3,

    /// Duration in seconds
    #[arg(long, default_value = "3.0")]
    duration: f64,

    #[command(flatten)]
    opts: RenderOpts,
}

pub fn run(args: PlateArgs) -> anyhow::Result<()> {
    let params = PlateParams {
        width: args.width,
        height: args.height,
        width_modes: args.width_modes,
        height_modes: args.height_modes,
        base_amplitude: args.amplitude,
        base_decay: args.decay,
        start_time: args.start,
        freq_const: args.freq_const,
    };

    let sample_rate = f64::from(args.opts.sample_rate);
    let mut source = plate_source(&params, sample_rate)?;
    source.set_position(args.position);

    println!("Generating struck plate...");
    println!(
        "  {} m x {} m, decay {:.2}s, {} modes at or below Nyquist",
        args.width,
        args.height,
        args.decay,
        source.components().len()
    );

    let mut mixer = Mixer::new(sample_rate, args.opts.block_size)?;
    mixer.add_source(source);

    common::render_and_deliver(&mut mixer, args.duration, &args.opts)
}
