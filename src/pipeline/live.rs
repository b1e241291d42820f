//! Live pipeline (component K): biquad -> envelope -> streaming decode, buffer-boundary safe.
//!
//! Per §9's "streaming decoder boundary coupling" note, the filter, envelope tracker, and
//! decoder are owned together for the lifetime of one stream and must not be recreated per
//! buffer — their persistent state is exactly what makes cross-buffer decoding correct.

use crate::biquad::BiquadFilter;
use crate::decoder::StreamingDecoder;
use crate::envelope::{EnvelopeDetector, DEFAULT_LIVE_THRESHOLD};
use crate::error::Result;

/// Incremental decoder over a live audio stream, fed one chunk at a time via
/// [`Self::process_buffer`].
///
/// The filter is configured lazily from the first chunk's sample rate (mirroring how a
/// realtime audio graph only learns its format once the stream negotiates it); subsequent
/// chunks reuse the same filter and envelope state regardless of their own reported rate, since
/// a single stream's rate cannot legitimately change mid-session.
pub struct LivePipeline {
    center_hz: f64,
    q: f64,
    threshold: f32,
    wpm: f64,
    filter: Option<BiquadFilter>,
    envelope: Option<EnvelopeDetector>,
    decoder: StreamingDecoder,
}

impl LivePipeline {
    pub fn new(wpm: f64) -> Self {
        Self {
            center_hz: 600.0,
            q: 5.0,
            threshold: DEFAULT_LIVE_THRESHOLD,
            wpm,
            filter: None,
            envelope: None,
            decoder: StreamingDecoder::new(wpm),
        }
    }

    pub fn with_filter(mut self, center_hz: f64, q: f64) -> Self {
        self.center_hz = center_hz;
        self.q = q;
        self
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Recompute decode thresholds from a new WPM without disturbing filter/envelope state or
    /// the decoder's in-progress symbol.
    pub fn set_wpm(&mut self, wpm: f64) {
        self.wpm = wpm;
        self.decoder.set_wpm(wpm);
    }

    /// Reset filter history, envelope state, and the streaming decoder — use when starting a
    /// fresh session on an already-constructed pipeline.
    pub fn reset(&mut self) {
        if let Some(filter) = &mut self.filter {
            filter.reset();
        }
        self.envelope = None;
        self.decoder = StreamingDecoder::new(self.wpm);
    }

    /// Feed one chunk of mono float32 PCM. Returns the text decoded so far from this chunk
    /// (possibly empty), including any word space flushed by the chunk's trailing silence.
    pub fn process_buffer(&mut self, samples: &[f32], sample_rate_hz: f64) -> Result<String> {
        if self.filter.is_none() {
            self.filter = Some(BiquadFilter::bandpass(
                self.center_hz,
                sample_rate_hz,
                self.q,
            )?);
            tracing::debug!(sample_rate_hz, "live pipeline configured filter from first chunk");
        }
        if self.envelope.is_none() {
            self.envelope = Some(EnvelopeDetector::new(sample_rate_hz, self.threshold)?);
        }

        let filter = self.filter.as_mut().expect("filter configured above");
        let envelope = self.envelope.as_mut().expect("envelope configured above");

        let mut out = String::new();
        for &raw in samples {
            let filtered = filter.process(raw as f64) as f32;
            if let Some(event) = envelope.push(filtered) {
                out.push_str(&self.decoder.process_event(event.duration_seconds, event.is_on));
            }
        }

        if !envelope.is_signal_on() {
            out.push_str(&self.decoder.check_timeout(envelope.current_run_duration_seconds()));
        }

        tracing::trace!(emitted = %out, "live pipeline processed buffer");
        Ok(out)
    }
}
