//! Shared data types that flow between the signal layer and the decoder/encoder layers.

use serde::Serialize;

/// A single on/off duration event: `is_on=true` is a keyed tone interval, `false` a silence.
///
/// Sequences alternate in logical intent, but every consumer in this crate tolerates
/// consecutive same-polarity events (they simply compose as one longer run).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationEvent {
    pub duration_seconds: f64,
    pub is_on: bool,
}

impl DurationEvent {
    pub fn new(duration_seconds: f64, is_on: bool) -> Self {
        Self {
            duration_seconds,
            is_on,
        }
    }

    pub fn on(duration_seconds: f64) -> Self {
        Self::new(duration_seconds, true)
    }

    pub fn off(duration_seconds: f64) -> Self {
        Self::new(duration_seconds, false)
    }
}

/// A decoded character (or word-space `' '`) together with the cumulative audio time at
/// which its terminating gap ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimedChar {
    pub text: String,
    pub end_time_seconds: f64,
}

impl TimedChar {
    pub fn new(text: impl Into<String>, end_time_seconds: f64) -> Self {
        Self {
            text: text.into(),
            end_time_seconds,
        }
    }
}
