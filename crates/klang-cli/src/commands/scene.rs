//! Declarative scene rendering command.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use super::common::{self, RenderOpts};
use crate::scene::Scene;

#[derive(Args)]
pub struct SceneArgs {
    /// Scene TOML file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Output WAV file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Play through an output device while rendering
    #[arg(long)]
    play: bool,

    /// Output device for --play (case-insensitive partial name match)
    #[arg(long)]
    device: Option<String>,
}

pub fn run(args: SceneArgs) -> anyhow::Result<()> {
    let text = fs::read_to_string(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;
    let scene: Scene =
        toml::from_str(&text).with_context(|| format!("parsing {}", args.file.display()))?;

    println!("Loading scene: {}", args.file.display());
    println!(
        "  {} objects, {:.2}s at {} Hz",
        scene.objects.len(),
        scene.duration,
        scene.sample_rate
    );

    let mut mixer = scene.build()?;

    // Rate, block size, and duration come from the file; the flags only
    // steer delivery.
    let opts = RenderOpts {
        sample_rate: scene.sample_rate,
        block_size: scene.block_size,
        output: args.output,
        play: args.play,
        device: args.device,
    };
    common::render_and_deliver(&mut mixer, scene.duration, &opts)
}
