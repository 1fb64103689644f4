//! Strikes a virtual glass sphere and renders the ring-down offline.
//!
//! Run with: cargo run -p klang-synth --example struck_sphere

use klang_synth::{AudioSink, Generator, Mixer, NullSink, SphereParams, sphere_source};

fn main() {
    let sample_rate = 44100.0;

    let params = SphereParams::default();
    let source = sphere_source(&params, sample_rate).expect("default parameters are valid");

    println!(
        "=== Sphere modes (radius {} m, {}x{} mode grid) ===\n",
        params.radius, params.radial_modes, params.angular_modes
    );
    println!("Mode | Freq (Hz) | Amplitude | Decay (s) | Lifetime (s)");
    println!("-----+-----------+-----------+-----------+-------------");
    for (i, component) in source.components().iter().enumerate() {
        if let Generator::DecayingSine(sine) = component.generator() {
            println!(
                "{:>4} | {:>9.1} | {:>9.5} | {:>9.3} | {:>11.3}",
                i,
                sine.frequency(),
                sine.amplitude(),
                sine.decay_time(),
                component.lifetime()
            );
        }
    }

    // Two seconds covers the longest mode lifetime at the default decay.
    let mut mixer = Mixer::new(sample_rate, 1024).expect("valid mixer configuration");
    mixer.add_source(source);

    let mut sink = NullSink::new();
    mixer.render(2.0, &mut sink);

    println!("\n=== Ring-down envelope (100 ms windows) ===\n");
    let samples = mixer.recorded();
    for (i, chunk) in samples.chunks(4410).enumerate().step_by(2) {
        let peak = chunk.iter().map(|s| s.unsigned_abs()).max().unwrap_or(0);
        let rms = (chunk.iter().map(|&s| f64::from(s) * f64::from(s)).sum::<f64>()
            / chunk.len() as f64)
            .sqrt();
        let bar = "#".repeat((rms / 200.0) as usize);
        println!(
            "{:>4.1} s | peak {:>5} | rms {:>7.1} | {bar}",
            i as f64 * 0.1,
            peak,
            rms
        );
    }

    println!(
        "\nRendered {} samples in {} blocks.",
        mixer.samples_rendered(),
        sink.finished_blocks()
    );
}
