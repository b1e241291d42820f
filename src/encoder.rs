//! Morse encoder: text -> event sequence, respecting standard Paris timing.

use crate::events::DurationEvent;
use crate::table;

/// Encode `text` into a [`DurationEvent`] sequence at the given WPM.
///
/// Text is normalized to lowercase before lookup. Characters absent from the table (other
/// than `' '`) are silently skipped — this is [`crate::error::Error`]'s documented
/// `EncodingInputIssue` non-error case, not a failure.
///
/// Matches the gap construction literally: every symbol is followed by a 1-unit intra-symbol
/// gap, and the last symbol of a character gets an *additional* 2-unit gap appended to upgrade
/// it to 3 units. A following space character then adds its own 4-unit gap. These adjacent
/// silence events are meant to compose (see the crate-level note on [`crate::decoder`]) into a
/// single 3-unit or 7-unit gap from the decoder's point of view.
pub fn encode_text(text: &str, wpm: f64) -> Vec<DurationEvent> {
    let unit = 1.2 / wpm;
    let mut events = Vec::new();

    for ch in text.chars() {
        let lower = ch.to_ascii_lowercase();

        if lower == ' ' {
            events.push(DurationEvent::off(unit * 4.0));
            continue;
        }

        let Some(code) = table::code_for_char(lower) else {
            continue;
        };

        let last_idx = code.len() - 1;
        for (i, symbol) in code.chars().enumerate() {
            let on_duration = match symbol {
                '.' => unit,
                '-' => unit * 3.0,
                _ => continue,
            };
            events.push(DurationEvent::on(on_duration));
            events.push(DurationEvent::off(unit));
            if i == last_idx {
                // Upgrade the trailing 1-unit gap to 3 units (inter-character).
                events.push(DurationEvent::off(unit * 2.0));
            }
        }
    }

    events
}
