//! Output device enumeration via cpal.

use cpal::Device;
use cpal::traits::{DeviceTrait, HostTrait};

use crate::{Error, Result};

/// Extract device name via `description()` (cpal 0.17+).
pub(crate) fn device_name(device: &Device) -> std::result::Result<String, cpal::DeviceNameError> {
    device.description().map(|d| d.name().to_string())
}

/// Audio output device information.
#[derive(Debug, Clone)]
pub struct AudioDevice {
    /// Human-readable device name.
    pub name: String,
    /// Default sample rate in Hz.
    pub default_sample_rate: u32,
    /// Default channel count.
    pub channels: u16,
}

/// List all available output devices on the default host.
///
/// Devices whose name or configuration cannot be queried are skipped
/// rather than failing the whole listing.
pub fn list_output_devices() -> Result<Vec<AudioDevice>> {
    let host = cpal::default_host();
    let mut devices = Vec::new();

    if let Ok(outputs) = host.output_devices() {
        for device in outputs {
            if let Ok(name) = device_name(&device) {
                let (default_sample_rate, channels) = device
                    .default_output_config()
                    .map(|c| (c.sample_rate(), c.channels()))
                    .unwrap_or((48000, 2));

                devices.push(AudioDevice {
                    name,
                    default_sample_rate,
                    channels,
                });
            }
        }
    }

    Ok(devices)
}

/// The default output device, if the host has one.
pub fn default_output_device() -> Result<AudioDevice> {
    let host = cpal::default_host();
    let device = host.default_output_device().ok_or(Error::NoDevice)?;
    let name = device_name(&device).map_err(|e| Error::Stream(e.to_string()))?;
    let (default_sample_rate, channels) = device
        .default_output_config()
        .map(|c| (c.sample_rate(), c.channels()))
        .unwrap_or((48000, 2));

    Ok(AudioDevice {
        name,
        default_sample_rate,
        channels,
    })
}

/// Resolve a cpal output device by case-insensitive substring match, or
/// fall back to the host default.
pub(crate) fn resolve_output_device(name: Option<&str>) -> Result<Device> {
    let host = cpal::default_host();
    match name {
        Some(search) => {
            let devices = host
                .output_devices()
                .map_err(|e| Error::Stream(e.to_string()))?;
            let search_lower = search.to_lowercase();
            for device in devices {
                if device_name(&device).is_ok_and(|n| n.to_lowercase().contains(&search_lower)) {
                    return Ok(device);
                }
            }
            Err(Error::DeviceNotFound(format!(
                "no output device matching '{search}'"
            )))
        }
        None => host.default_output_device().ok_or(Error::NoDevice),
    }
}
