//! Audio output device listing command.

use klang_io::{default_output_device, list_output_devices};

pub fn run() -> anyhow::Result<()> {
    let devices = list_output_devices()?;
    if devices.is_empty() {
        println!("No audio output devices found");
        return Ok(());
    }

    let default = default_output_device().ok();

    println!("Audio output devices:");
    for device in &devices {
        let marker = match &default {
            Some(d) if d.name == device.name => " (default)",
            _ => "",
        };
        println!(
            "  {} - {} Hz, {} channel(s){}",
            device.name, device.default_sample_rate, device.channels, marker
        );
    }

    Ok(())
}
