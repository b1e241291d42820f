//! Bulk pipeline (component J): biquad -> envelope -> WPM estimate -> batch decode, over a
//! whole in-memory buffer at once.

use serde::Serialize;

use crate::biquad::BiquadFilter;
use crate::decoder::{decode_events_timed, Thresholds};
use crate::envelope::{EnvelopeDetector, DEFAULT_BATCH_THRESHOLD};
use crate::error::Result;
use crate::events::TimedChar;
use crate::wpm::estimate_wpm;

/// Decoded output of a bulk run: plain text, per-character timestamps, and the estimated WPM
/// used to derive the decode thresholds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BulkDecodeResult {
    pub text: String,
    pub timed_chars: Vec<TimedChar>,
    pub estimated_wpm: f64,
}

/// Decodes a whole buffer of mono float32 PCM in one call. Stateless between calls: construct
/// one per file.
#[derive(Debug, Clone)]
pub struct BulkPipeline {
    center_hz: f64,
    q: f64,
    threshold: f32,
}

impl BulkPipeline {
    pub fn new() -> Self {
        Self {
            center_hz: 600.0,
            q: 5.0,
            threshold: DEFAULT_BATCH_THRESHOLD,
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

    /// Run the full §4.J chain: filter the whole buffer, extract duration events, estimate
    /// WPM from the on-durations, then decode.
    pub fn process(&self, samples: &[f32], sample_rate_hz: f64) -> Result<BulkDecodeResult> {
        let mut filter = BiquadFilter::bandpass(self.center_hz, sample_rate_hz, self.q)?;
        let mut filtered: Vec<f32> = samples.to_vec();
        filter.process_buffer_f32(&mut filtered);

        let mut detector = EnvelopeDetector::new(sample_rate_hz, self.threshold)?;
        let mut events = Vec::new();
        detector.process_buffer(&filtered, &mut events);
        if let Some(trailing) = detector.flush_trailing() {
            events.push(trailing);
        }

        let on_durations: Vec<f64> = events
            .iter()
            .filter(|e| e.is_on)
            .map(|e| e.duration_seconds)
            .collect();
        let estimated_wpm = estimate_wpm(&on_durations);

        let timed_chars = decode_events_timed(&events, estimated_wpm);
        let text = timed_chars.iter().map(|tc| tc.text.as_str()).collect();

        tracing::debug!(
            estimated_wpm,
            event_count = events.len(),
            "bulk pipeline decoded buffer"
        );

        Ok(BulkDecodeResult {
            text,
            timed_chars,
            estimated_wpm,
        })
    }

    /// Expose the decode thresholds a given WPM would use, handy for diagnostics/tests.
    pub fn thresholds_for(wpm: f64) -> Thresholds {
        Thresholds::from_wpm(wpm)
    }
}

impl Default for BulkPipeline {
    fn default() -> Self {
        Self::new()
    }
}
