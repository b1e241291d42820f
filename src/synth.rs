//! Waveform synthesizer: renders a [`DurationEvent`] sequence as 16-bit PCM with a
//! phase-continuous ramped sine, suppressing the key clicks a hard on/off tone would produce.

use std::f64::consts::PI;

use crate::error::{Error, Result};
use crate::events::DurationEvent;

/// Default synthesis tone, matching the 600 Hz center of the bandpass filter.
pub const DEFAULT_FREQUENCY_HZ: f64 = 600.0;

/// Default synthesis sample rate.
pub const DEFAULT_SAMPLE_RATE_HZ: f64 = 44_100.0;

/// Linear attack/release applied to every keyed tone.
pub const RAMP_SECONDS: f64 = 0.005;

/// Peak amplitude of the synthesized tone, out of the full `i16` range — leaves headroom
/// below `i16::MAX` (32767).
pub const PEAK_AMPLITUDE: f64 = 32_000.0;

/// Render `events` into mono 16-bit PCM samples at `frequency_hz`/`sample_rate_hz`.
///
/// The sine phase advances continuously across consecutive "on" events (tracked via a running
/// `current_frame` counter) so adjacent dots/dashes stay phase-coherent; silences write zero
/// samples and still advance the frame counter, so the overall timeline matches the input
/// event durations exactly.
pub fn synthesize(
    events: &[DurationEvent],
    frequency_hz: f64,
    sample_rate_hz: f64,
) -> Result<Vec<i16>> {
    if !frequency_hz.is_finite() || frequency_hz <= 0.0 {
        return Err(Error::configuration(format!(
            "frequency_hz must be positive and finite, got {frequency_hz}"
        )));
    }
    if !sample_rate_hz.is_finite() || sample_rate_hz <= 0.0 {
        return Err(Error::configuration(format!(
            "sample_rate_hz must be positive and finite, got {sample_rate_hz}"
        )));
    }

    let total_frames: u64 = events
        .iter()
        .map(|e| (e.duration_seconds * sample_rate_hz).round() as u64)
        .sum();
    let total_usize = usize::try_from(total_frames)
        .map_err(|_| Error::SynthesisOverflow { frames: total_frames })?;

    let mut samples = Vec::with_capacity(total_usize);
    let mut current_frame: u64 = 0;

    for event in events {
        let n = (event.duration_seconds * sample_rate_hz).round() as u64;
        let n_usize = usize::try_from(n).map_err(|_| Error::SynthesisOverflow {
            frames: total_frames,
        })?;

        if event.is_on {
            let ramp_frames = ((RAMP_SECONDS * sample_rate_hz).round() as u64)
                .min(n / 2)
                .max(0);
            for i in 0..n_usize {
                let i_u64 = i as u64;
                let phase = 2.0 * PI * frequency_hz * (current_frame + i_u64) as f64
                    / sample_rate_hz;
                let s = phase.sin();
                let amplitude = if ramp_frames > 0 && i_u64 < ramp_frames {
                    i_u64 as f64 / ramp_frames as f64
                } else if ramp_frames > 0 && i_u64 >= n - ramp_frames {
                    (n - 1 - i_u64) as f64 / ramp_frames as f64
                } else {
                    1.0
                };
                samples.push((s * amplitude * PEAK_AMPLITUDE).round() as i16);
            }
        } else {
            samples.resize(samples.len() + n_usize, 0);
        }

        current_frame += n;
    }

    Ok(samples)
}
