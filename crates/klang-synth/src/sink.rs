//! The playback hand-off seam.

/// Receiver for finished sample blocks.
///
/// The mixer pushes quantized blocks through this trait without knowing
/// whether they reach a sound card, a test capture, or nothing at all.
/// Submission is the pipeline's only sanctioned blocking point: an
/// implementation may stall the caller to apply back-pressure, which is
/// what paces real-time playback.
pub trait AudioSink {
    /// Accepts one finished block of mono 16-bit samples.
    fn submit_block(&mut self, samples: &[i16]);

    /// Whether previously submitted audio is still being consumed.
    fn is_playing(&self) -> bool;

    /// Number of submitted blocks fully consumed so far.
    fn finished_blocks(&self) -> usize;
}

/// A sink that discards every block instantly.
///
/// Used for offline rendering, where the recording inside the mixer is the
/// real product, and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink {
    submitted: usize,
}

impl NullSink {
    /// Creates a sink that consumes blocks instantly.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AudioSink for NullSink {
    fn submit_block(&mut self, _samples: &[i16]) {
        self.submitted += 1;
    }

    fn is_playing(&self) -> bool {
        false
    }

    fn finished_blocks(&self) -> usize {
        self.submitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_sink_counts_blocks_as_finished() {
        let mut sink = NullSink::new();
        assert_eq!(sink.finished_blocks(), 0);

        sink.submit_block(&[0, 1, 2]);
        sink.submit_block(&[3]);

        assert_eq!(sink.finished_blocks(), 2);
        assert!(!sink.is_playing());
    }
}
