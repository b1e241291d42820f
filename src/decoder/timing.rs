//! Shared timing thresholds derived from WPM, used by both the batch and streaming decoders.

/// `unit = 1.2 / wpm` seconds — the fundamental Paris-timing quantum.
pub fn unit_seconds(wpm: f64) -> f64 {
    1.2 / wpm
}

#[derive(Debug, Clone, Copy)]
pub struct Thresholds {
    pub unit: f64,
    /// On-durations below this are a dot; at or above, a dash.
    pub dot_limit: f64,
    /// Off-durations below this are an intra-character gap.
    pub symbol_space_limit: f64,
    /// Off-durations above this are a word boundary.
    pub word_space_limit: f64,
}

impl Thresholds {
    pub fn from_wpm(wpm: f64) -> Self {
        let unit = unit_seconds(wpm);
        Self {
            unit,
            dot_limit: 1.5 * unit,
            symbol_space_limit: 2.0 * unit,
            word_space_limit: 5.0 * unit,
        }
    }

    pub fn symbol_for(&self, duration_seconds: f64) -> char {
        if duration_seconds < self.dot_limit {
            '.'
        } else {
            '-'
        }
    }
}
