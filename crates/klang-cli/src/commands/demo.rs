//! Built-in showcase scene command.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use super::common::{self, RenderOpts};
use crate::scene::{DEMO_SCENE, Scene};

#[derive(Args)]
pub struct DemoArgs {
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

pub fn run(args: DemoArgs) -> anyhow::Result<()> {
    let scene: Scene = toml::from_str(DEMO_SCENE).context("parsing the built-in demo scene")?;

    println!("Generating demo scene...");
    println!("  sphere strike at 0.0s, plate at 0.5s, noise burst at 1.0s");

    let mut mixer = scene.build()?;
    let opts = RenderOpts {
        sample_rate: scene.sample_rate,
        block_size: scene.block_size,
        output: args.output,
        play: args.play,
        device: args.device,
    };
    common::render_and_deliver(&mut mixer, scene.duration, &opts)
}
