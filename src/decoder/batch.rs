//! Batch Morse decoder: consumes a finite event sequence + WPM, produces decoded text
//! (optionally with per-character timestamps).

use super::timing::Thresholds;
use crate::events::{DurationEvent, TimedChar};
use crate::table;

/// Decode a finite event sequence into timed characters (and word-space markers).
///
/// This is the authoritative decode; [`decode_events`] is a projection over its output.
///
/// Consecutive same-polarity events are merged (their durations summed) before
/// classification, since the encoder and live pipeline alike may emit adjacent gaps that are
/// only meaningful in aggregate (e.g. a character's trailing inter-character gap immediately
/// followed by a space's own gap).
pub fn decode_events_timed(events: &[DurationEvent], wpm: f64) -> Vec<TimedChar> {
    let thresholds = Thresholds::from_wpm(wpm);

    let mut out = Vec::new();
    let mut current_symbol = String::new();
    let mut accumulated_time = 0.0;
    let mut last_was_space = true; // avoid a leading word-space

    for event in merge_runs(events) {
        accumulated_time += event.duration_seconds;

        if event.is_on {
            current_symbol.push(thresholds.symbol_for(event.duration_seconds));
            continue;
        }

        if event.duration_seconds > thresholds.word_space_limit {
            flush_symbol(&mut current_symbol, accumulated_time, &mut out);
            if !last_was_space {
                out.push(TimedChar::new(" ", accumulated_time));
                last_was_space = true;
            }
        } else if event.duration_seconds > thresholds.symbol_space_limit {
            if flush_symbol(&mut current_symbol, accumulated_time, &mut out) {
                last_was_space = false;
            }
        }
        // else: intra-character gap, no action.
    }

    flush_symbol(&mut current_symbol, accumulated_time, &mut out);

    out
}

/// Collapse runs of consecutive same-polarity events into single events, summing durations.
fn merge_runs(events: &[DurationEvent]) -> Vec<DurationEvent> {
    let mut merged: Vec<DurationEvent> = Vec::with_capacity(events.len());
    for event in events {
        match merged.last_mut() {
            Some(prev) if prev.is_on == event.is_on => {
                prev.duration_seconds += event.duration_seconds;
            }
            _ => merged.push(*event),
        }
    }
    merged
}

/// Flush `current_symbol` as a character if it maps to one. Returns `true` if a character was
/// emitted (used by the caller to track `last_was_space`).
fn flush_symbol(current_symbol: &mut String, accumulated_time: f64, out: &mut Vec<TimedChar>) -> bool {
    if current_symbol.is_empty() {
        return false;
    }
    let emitted = if let Some(ch) = table::char_for_code(current_symbol) {
        out.push(TimedChar::new(ch.to_string(), accumulated_time));
        true
    } else {
        false
    };
    current_symbol.clear();
    emitted
}

/// Decode a finite event sequence into plain text: a projection of [`decode_events_timed`]
/// that concatenates only the character strings.
pub fn decode_events(events: &[DurationEvent], wpm: f64) -> String {
    decode_events_timed(events, wpm)
        .into_iter()
        .map(|tc| tc.text)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::DurationEvent as E;

    fn on(d: f64) -> E {
        E::on(d)
    }
    fn off(d: f64) -> E {
        E::off(d)
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(decode_events(&[], 20.0), "");
        assert!(decode_events_timed(&[], 20.0).is_empty());
    }

    #[test]
    fn decodes_sos_at_12wpm() {
        let events = vec![
            on(0.1),
            off(0.1),
            on(0.1),
            off(0.1),
            on(0.1),
            off(0.3),
            on(0.3),
            off(0.1),
            on(0.3),
            off(0.1),
            on(0.3),
            off(0.3),
            on(0.1),
            off(0.1),
            on(0.1),
            off(0.1),
            on(0.1),
        ];
        assert_eq!(decode_events(&events, 12.0), "SOS");
    }

    #[test]
    fn decodes_hi_at_12wpm() {
        let events = vec![
            on(0.1),
            off(0.1),
            on(0.1),
            off(0.1),
            on(0.1),
            off(0.1),
            on(0.1),
            off(0.3),
            on(0.1),
            off(0.1),
            on(0.1),
        ];
        assert_eq!(decode_events(&events, 12.0), "HI");
    }

    #[test]
    fn timed_text_projection_matches_plain_text_char_by_char() {
        let events = vec![
            on(0.1),
            off(0.3),
            on(0.1),
            off(0.1),
            on(0.1),
            off(0.1),
            on(0.1),
        ];
        let timed = decode_events_timed(&events, 12.0);
        let plain = decode_events(&events, 12.0);
        let timed_concat: String = timed.iter().map(|tc| tc.text.as_str()).collect();
        assert_eq!(timed_concat, plain);
    }

    #[test]
    fn unmapped_symbol_is_dropped() {
        // Seven dots has no mapping in the table.
        let mut events = Vec::new();
        for _ in 0..7 {
            events.push(on(0.1));
            events.push(off(0.1));
        }
        events.push(off(0.5)); // force a flush via word space
        assert_eq!(decode_events(&events, 12.0), "");
    }

    #[test]
    fn trailing_symbol_without_closing_gap_still_flushes() {
        let events = vec![on(0.1)]; // lone dot, no trailing gap event at all
        assert_eq!(decode_events(&events, 12.0), "E");
    }

    #[test]
    fn word_space_only_emitted_once_between_words() {
        let mut events = vec![on(0.1), off(0.6)]; // "E "
        events.push(off(0.6)); // another long silence shouldn't add a second space
        events.push(on(0.1));
        let text = decode_events(&events, 12.0);
        assert_eq!(text, "E E");
    }

    #[test]
    fn consecutive_same_polarity_gaps_compose_into_a_word_space() {
        // Mirrors what the encoder actually emits between two single-character words: a
        // 1-unit intra-symbol gap, a 2-unit inter-character upgrade, then the space's own
        // 4-unit gap — three consecutive off-events summing to 7 units, none of which
        // individually crosses word_space_limit (5 units) on its own.
        let unit = 1.2 / 20.0;
        let events = vec![
            on(unit),
            off(unit),
            off(unit * 2.0),
            off(unit * 4.0),
            on(unit),
            off(unit),
            off(unit * 2.0),
        ];
        assert_eq!(decode_events(&events, 20.0), "E E");
    }

    #[test]
    fn round_trips_through_the_encoder_for_short_phrases() {
        use crate::encoder::encode_text;

        for phrase in ["E", "SOS", "HI", "HI THERE", "PARIS"] {
            let events = encode_text(phrase, 20.0);
            assert_eq!(decode_events(&events, 20.0), phrase);
        }
    }
}
