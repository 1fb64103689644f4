//! Shared rendering plumbing for the CLI commands.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Context;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use klang_io::{CpalSink, write_wav};
use klang_synth::{AudioSink, Mixer, NullSink, Vec3};

/// Flags shared by every render command.
#[derive(Args)]
pub struct RenderOpts {
    /// Sample rate in Hz
    #[arg(long, default_value = "44100")]
    pub sample_rate: u32,

    /// Samples per mixing block
    #[arg(long, default_value = "1024")]
    pub block_size: usize,

    /// Output WAV file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Play through an output device while rendering
    #[arg(long)]
    pub play: bool,

    /// Output device for --play (case-insensitive partial name match)
    #[arg(long)]
    pub device: Option<String>,
}

/// Parse an "x,y,z" triple into a position.
pub fn parse_position(s: &str) -> Result<Vec3, String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
        return Err(format!("expected x,y,z but got '{s}'"));
    }
    let mut coords = [0.0f64; 3];
    for (slot, part) in coords.iter_mut().zip(&parts) {
        *slot = part
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("bad coordinate '{part}': {e}"))?;
    }
    Ok(Vec3::new(coords[0], coords[1], coords[2]))
}

/// Ticks the mixer to completion against the chosen sink, then writes the
/// requested WAV and prints a one-line summary.
///
/// Ctrl-C stops the render at the next block boundary; whatever was
/// recorded up to that point is still written out.
pub fn render_and_deliver(
    mixer: &mut Mixer,
    duration: f64,
    opts: &RenderOpts,
) -> anyhow::Result<()> {
    let interrupted = Arc::new(AtomicBool::new(false));
    {
        let flag = Arc::clone(&interrupted);
        ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))
            .context("installing Ctrl-C handler")?;
    }

    if opts.play {
        let mut sink = CpalSink::new(opts.sample_rate, opts.device.as_deref())
            .context("opening output stream")?;
        run_ticks(mixer, duration, &mut sink, &interrupted);
        sink.drain();
    } else {
        let mut sink = NullSink::new();
        run_ticks(mixer, duration, &mut sink, &interrupted);
    }

    let seconds = mixer.samples_rendered() as f64 / f64::from(opts.sample_rate);
    println!(
        "Rendered {} samples ({:.2}s at {} Hz)",
        mixer.samples_rendered(),
        seconds,
        opts.sample_rate
    );

    if let Some(path) = &opts.output {
        write_wav(path, mixer.recorded(), opts.sample_rate)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}

fn run_ticks(mixer: &mut Mixer, duration: f64, sink: &mut dyn AudioSink, interrupted: &AtomicBool) {
    let ticks = mixer.ticks_for(duration);
    let pb = ProgressBar::new(ticks as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap()
            .progress_chars("##-"),
    );

    for _ in 0..ticks {
        if interrupted.load(Ordering::SeqCst) {
            pb.abandon_with_message("interrupted");
            return;
        }
        mixer.tick(sink);
        pb.inc(1);
    }

    pb.finish_and_clear();
}
