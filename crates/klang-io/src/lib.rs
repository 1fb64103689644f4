//! Audio output layer for the klang synthesizer.
//!
//! This crate provides:
//!
//! - **WAV serialization**: [`encode_wav`] and [`write_wav`] turn the
//!   mixer's recorded `i16` samples into mono PCM files
//! - **Real-time playback**: [`CpalSink`] streams blocks to an output
//!   device, pacing the renderer through a bounded queue
//! - **Device enumeration**: [`list_output_devices`] and
//!   [`default_output_device`] for driver UIs
//!
//! ## Quick start
//!
//! ```
//! use klang_io::encode_wav;
//!
//! let bytes = encode_wav(&[0, 1000, -1000, 0], 44100);
//! assert_eq!(&bytes[..4], b"RIFF");
//! assert_eq!(bytes.len(), 44 + 8);
//! ```

mod devices;
mod sink;
mod wav;

pub use devices::{AudioDevice, default_output_device, list_output_devices};
pub use sink::CpalSink;
pub use wav::{encode_wav, write_wav};

/// Error types for audio output operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Audio stream setup or runtime error.
    #[error("Audio stream error: {0}")]
    Stream(String),

    /// No audio device available on the system.
    #[error("No audio device available")]
    NoDevice,

    /// The requested audio device was not found.
    #[error("Device not found: {0}")]
    DeviceNotFound(String),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for audio output operations.
pub type Result<T> = std::result::Result<T, Error>;
