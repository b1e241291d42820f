//! Envelope follower and edge detector: rectify -> peak-hold -> exponential decay ->
//! threshold -> debounce. Turns a (typically bandpass-filtered) audio stream into a sequence
//! of on/off [`DurationEvent`]s.

use crate::error::{Error, Result};
use crate::events::DurationEvent;

/// Release time constant, in seconds, for the exponential envelope decay.
pub const RELEASE_TIME_CONSTANT_SECONDS: f64 = 0.005;

/// Minimum event duration, in seconds — transitions shorter than this are glitches and are
/// debounced (folded back into the current run) rather than emitted as events.
pub const MIN_EVENT_DURATION_SECONDS: f64 = 0.005;

/// Default threshold for live (realtime) capture.
pub const DEFAULT_LIVE_THRESHOLD: f32 = 0.01;

/// Default threshold for bulk (file) decoding.
pub const DEFAULT_BATCH_THRESHOLD: f32 = 0.05;

/// Streaming envelope follower + edge detector.
///
/// Single-sample-at-a-time: feed it one sample via [`Self::push`]; it returns a closed
/// [`DurationEvent`] once a debounced transition is confirmed, or `None` otherwise.
#[derive(Debug, Clone)]
pub struct EnvelopeDetector {
    sample_rate_hz: f64,
    threshold: f32,
    decay: f32,

    envelope: f32,
    is_signal_on: bool,
    state_duration_frames: u64,
}

impl EnvelopeDetector {
    pub fn new(sample_rate_hz: f64, threshold: f32) -> Result<Self> {
        if !sample_rate_hz.is_finite() || sample_rate_hz <= 0.0 {
            return Err(Error::configuration(format!(
                "sample_rate_hz must be positive and finite, got {sample_rate_hz}"
            )));
        }

        let decay = (-1.0 / (sample_rate_hz * RELEASE_TIME_CONSTANT_SECONDS)).exp() as f32;

        Ok(Self {
            sample_rate_hz,
            threshold,
            decay,
            envelope: 0.0,
            is_signal_on: false,
            state_duration_frames: 0,
        })
    }

    pub fn reset(&mut self) {
        self.envelope = 0.0;
        self.is_signal_on = false;
        self.state_duration_frames = 0;
    }

    pub fn envelope(&self) -> f32 {
        self.envelope
    }

    pub fn is_signal_on(&self) -> bool {
        self.is_signal_on
    }

    /// Duration, in seconds, of the run currently in progress (not yet closed).
    pub fn current_run_duration_seconds(&self) -> f64 {
        self.state_duration_frames as f64 / self.sample_rate_hz
    }

    /// Feed one sample. Returns `Some(event)` whenever a debounced polarity transition closes
    /// out the previous run.
    pub fn push(&mut self, x: f32) -> Option<DurationEvent> {
        let a = x.abs();
        if a > self.envelope {
            self.envelope = a;
        } else {
            self.envelope *= self.decay;
        }

        let now_on = self.envelope > self.threshold;

        if now_on == self.is_signal_on {
            self.state_duration_frames += 1;
            return None;
        }

        let duration = self.state_duration_frames as f64 / self.sample_rate_hz;
        if duration > MIN_EVENT_DURATION_SECONDS {
            let event = DurationEvent::new(duration, self.is_signal_on);
            self.is_signal_on = now_on;
            self.state_duration_frames = 1;
            Some(event)
        } else {
            // Glitch: too short to trust. Ignore the transition and keep accumulating the
            // current run instead.
            self.state_duration_frames += 1;
            None
        }
    }

    /// Process a whole buffer, appending every confirmed event (plus, if `flush_trailing` is
    /// set, one final event for the trailing in-progress run) to `out`.
    pub fn process_buffer(&mut self, samples: &[f32], out: &mut Vec<DurationEvent>) {
        for &x in samples {
            if let Some(event) = self.push(x) {
                out.push(event);
            }
        }
    }

    /// Close out the trailing run as a final event, used by the bulk pipeline at end-of-buffer.
    pub fn flush_trailing(&mut self) -> Option<DurationEvent> {
        if self.state_duration_frames == 0 {
            return None;
        }
        let duration = self.state_duration_frames as f64 / self.sample_rate_hz;
        self.state_duration_frames = 0;
        Some(DurationEvent::new(duration, self.is_signal_on))
    }
}
