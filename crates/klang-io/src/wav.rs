//! WAV serialization for rendered audio.
//!
//! The mixer records mono `i16` samples; this module assembles them into a
//! canonical 44-byte-header PCM file. Assembly is deferred until the sample
//! count is final, so the header is written exactly once.

use std::fs;
use std::path::Path;

use crate::Result;

/// Builds the complete byte image of a mono 16-bit PCM WAV file.
///
/// Layout is the canonical header (RIFF chunk, `fmt ` chunk, `data` chunk)
/// followed by little-endian samples.
///
/// # Example
///
/// ```
/// use klang_io::encode_wav;
///
/// let bytes = encode_wav(&[0, 1, -1], 44100);
/// assert_eq!(&bytes[36..40], b"data");
/// assert_eq!(bytes.len(), 44 + 6);
/// ```
#[must_use]
pub fn encode_wav(samples: &[i16], sample_rate: u32) -> Vec<u8> {
    let data_bytes = (samples.len() * 2) as u32;

    let mut bytes = Vec::with_capacity(44 + samples.len() * 2);
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_bytes).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");

    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes()); // fmt chunk size
    bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
    bytes.extend_from_slice(&1u16.to_le_bytes()); // mono
    bytes.extend_from_slice(&sample_rate.to_le_bytes());
    bytes.extend_from_slice(&(sample_rate * 2).to_le_bytes()); // byte rate
    bytes.extend_from_slice(&2u16.to_le_bytes()); // block align
    bytes.extend_from_slice(&16u16.to_le_bytes()); // bits per sample

    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_bytes.to_le_bytes());
    for sample in samples {
        bytes.extend_from_slice(&sample.to_le_bytes());
    }

    bytes
}

/// Encodes a mono recording and writes it to disk.
pub fn write_wav<P: AsRef<Path>>(path: P, samples: &[i16], sample_rate: u32) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, encode_wav(samples, sample_rate))?;
    tracing::info!(
        path = %path.display(),
        samples = samples.len(),
        sample_rate,
        "wrote WAV file"
    );
    Ok(())
}
