//! Real-time playback sink over a cpal output stream.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{Receiver, SyncSender, sync_channel};
use std::thread;
use std::time::Duration;

use cpal::traits::{DeviceTrait, StreamTrait};
use klang_synth::AudioSink;

use crate::devices::{device_name, resolve_output_device};
use crate::{Error, Result};

/// Blocks the queue holds before `submit_block` applies backpressure.
const QUEUE_DEPTH: usize = 4;

/// Walks submitted blocks sample by sample inside the stream callback.
struct BlockCursor {
    rx: Receiver<Vec<i16>>,
    current: Vec<i16>,
    offset: usize,
    finished: Arc<AtomicUsize>,
}

impl BlockCursor {
    /// Next queued sample, or `None` when the queue has run dry.
    fn next_sample(&mut self) -> Option<i16> {
        loop {
            if self.offset < self.current.len() {
                let sample = self.current[self.offset];
                self.offset += 1;
                if self.offset == self.current.len() {
                    self.current.clear();
                    self.offset = 0;
                    self.finished.fetch_add(1, Ordering::Release);
                }
                return Some(sample);
            }
            match self.rx.try_recv() {
                Ok(block) => {
                    if block.is_empty() {
                        self.finished.fetch_add(1, Ordering::Release);
                        continue;
                    }
                    self.current = block;
                    self.offset = 0;
                }
                Err(_) => return None,
            }
        }
    }
}

/// Streams rendered blocks to an audio output device.
///
/// Blocks travel over a bounded queue; when the device falls behind,
/// [`CpalSink::submit_block`] blocks until space frees up, which paces an
/// offline renderer to real time. When the renderer falls behind instead,
/// the device plays silence until the next block lands.
///
/// Dropping the sink stops the stream.
pub struct CpalSink {
    tx: SyncSender<Vec<i16>>,
    submitted: usize,
    finished: Arc<AtomicUsize>,
    _stream: cpal::Stream,
}

impl CpalSink {
    /// Opens an output stream on the named device (case-insensitive
    /// substring match), or the host default when `device` is `None`.
    ///
    /// The stream runs at `sample_rate` with the device's default channel
    /// count; mono samples are duplicated across channels.
    pub fn new(sample_rate: u32, device: Option<&str>) -> Result<Self> {
        let device = resolve_output_device(device)?;
        let channels = device
            .default_output_config()
            .map(|c| c.channels())
            .map_err(|e| Error::Stream(e.to_string()))?;

        let config = cpal::StreamConfig {
            channels,
            sample_rate,
            buffer_size: cpal::BufferSize::Default,
        };

        let (tx, rx) = sync_channel::<Vec<i16>>(QUEUE_DEPTH);
        let finished = Arc::new(AtomicUsize::new(0));

        let mut cursor = BlockCursor {
            rx,
            current: Vec::new(),
            offset: 0,
            finished: Arc::clone(&finished),
        };

        let stream = device
            .build_output_stream(
                &config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    for frame in data.chunks_mut(usize::from(channels)) {
                        let sample = cursor
                            .next_sample()
                            .map_or(0.0, |s| f32::from(s) / 32768.0);
                        frame.fill(sample);
                    }
                },
                |err| tracing::warn!("output stream error: {err}"),
                None,
            )
            .map_err(|e| Error::Stream(e.to_string()))?;

        stream.play().map_err(|e| Error::Stream(e.to_string()))?;

        if let Ok(name) = device_name(&device) {
            tracing::info!(device = %name, sample_rate, channels, "output stream started");
        }

        Ok(Self {
            tx,
            submitted: 0,
            finished,
            _stream: stream,
        })
    }

    /// Number of blocks handed to the sink so far.
    #[must_use]
    pub fn submitted_blocks(&self) -> usize {
        self.submitted
    }

    /// Waits until every submitted block has been played out.
    pub fn drain(&self) {
        while self.is_playing() {
            thread::sleep(Duration::from_millis(10));
        }
    }
}

impl AudioSink for CpalSink {
    fn submit_block(&mut self, samples: &[i16]) {
        // A dead stream disconnects the queue; dropping the block then
        // keeps is_playing() honest instead of waiting on audio that will
        // never play.
        if self.tx.send(samples.to_vec()).is_ok() {
            self.submitted += 1;
        }
    }

    fn is_playing(&self) -> bool {
        self.finished.load(Ordering::Acquire) < self.submitted
    }

    fn finished_blocks(&self) -> usize {
        self.finished.load(Ordering::Acquire)
    }
}
