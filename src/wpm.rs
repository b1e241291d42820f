//! Adaptive WPM estimation: infer the sender's speed from a batch of on-durations.

/// Words-per-minute is clamped into this range for every estimate and every decoder.
pub const WPM_MIN: f64 = 5.0;
pub const WPM_MAX: f64 = 60.0;

/// Returned when no on-durations are available to estimate from.
pub const DEFAULT_WPM: f64 = 20.0;

/// Convert a dot-length (in seconds) into words-per-minute, clamped to `[WPM_MIN, WPM_MAX]`.
pub fn wpm_from_dot_seconds(dot_seconds: f64) -> f64 {
    (1.2 / dot_seconds).clamp(WPM_MIN, WPM_MAX)
}

/// Estimate WPM from a list of on-durations (dots and dashes intermixed).
///
/// Sorts the durations ascending and takes the 25th-percentile sample as the dot-length
/// proxy: dots outnumber dashes in typical text, so the lower quartile robustly represents
/// dot length even without knowing which durations are dots vs dashes.
pub fn estimate_wpm(on_durations_seconds: &[f64]) -> f64 {
    if on_durations_seconds.is_empty() {
        return DEFAULT_WPM;
    }

    let mut sorted: Vec<f64> = on_durations_seconds.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let idx = (sorted.len() as f64 * 0.25) as usize;
    let idx = idx.min(sorted.len() - 1);
    let dot_seconds = sorted[idx];

    wpm_from_dot_seconds(dot_seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_returns_default() {
        assert_eq!(estimate_wpm(&[]), DEFAULT_WPM);
    }

    #[test]
    fn many_equal_durations_estimate_around_20wpm() {
        // unit = 1.2/20 = 0.06s
        let durations = vec![0.06; 100];
        let wpm = estimate_wpm(&durations);
        assert!((wpm - 20.0).abs() < 0.5, "got {wpm}");
    }

    #[test]
    fn output_is_always_clamped() {
        // Absurdly short dot -> absurdly high wpm, clamped to WPM_MAX.
        assert_eq!(estimate_wpm(&[0.0001]), WPM_MAX);
        // Absurdly long dot -> absurdly low wpm, clamped to WPM_MIN.
        assert_eq!(estimate_wpm(&[10.0]), WPM_MIN);
    }

    #[test]
    fn dots_outnumbering_dashes_still_finds_dot_length() {
        // Typical text: many dots (0.06s) and fewer dashes (0.18s at 20wpm).
        let mut durations = vec![0.06; 80];
        durations.extend(vec![0.18; 20]);
        let wpm = estimate_wpm(&durations);
        assert!((wpm - 20.0).abs() < 1.0, "got {wpm}");
    }
}
