//! Streaming Morse decoder: an incremental, event-by-event decoder that emits characters and
//! spaces as they become certain, including timeout-driven flushing while silence continues.
//!
//! Superseding an acknowledged bug in the system this crate was modeled after, this decoder
//! tracks an explicit `word_space_pending` flag so that a trailing silence which grows past
//! the word-space threshold always yields exactly one `' '` — even across several
//! `check_timeout` calls straddling buffer boundaries, and even when the pending symbol was
//! already flushed by an earlier symbol-space crossing.

use super::timing::Thresholds;
use crate::table;

/// Incremental, event-by-event Morse decoder.
///
/// No output queue: callers receive emissions as return values from [`Self::process_event`]
/// and [`Self::check_timeout`].
#[derive(Debug, Clone)]
pub struct StreamingDecoder {
    current_symbol: String,
    thresholds: Thresholds,
    /// Set when a character has been flushed via the symbol-space path without yet emitting a
    /// word space for it. Cleared once the space is emitted, or once a new on-transition
    /// begins (the next silence run evaluates fresh).
    word_space_pending: bool,
}

impl StreamingDecoder {
    pub fn new(wpm: f64) -> Self {
        Self {
            current_symbol: String::new(),
            thresholds: Thresholds::from_wpm(wpm),
            word_space_pending: false,
        }
    }

    /// Recompute `unit_time` from a new WPM without touching `current_symbol`.
    pub fn set_wpm(&mut self, wpm: f64) {
        self.thresholds = Thresholds::from_wpm(wpm);
    }

    pub fn current_symbol(&self) -> &str {
        &self.current_symbol
    }

    /// Process a confirmed state transition `(duration, is_on)`. Returns the (possibly empty)
    /// text to append.
    pub fn process_event(&mut self, duration_seconds: f64, is_on: bool) -> String {
        if is_on {
            self.current_symbol
                .push(self.thresholds.symbol_for(duration_seconds));
            // A new tone means any pending word-space opportunity is moot: the sender kept
            // going within the same word (or started a new character). The next silence run
            // will set its own pending state from scratch.
            self.word_space_pending = false;
            return String::new();
        }

        self.handle_silence(duration_seconds)
    }

    /// Called periodically while silence continues, with the in-progress silence duration.
    /// Returns the (possibly empty) text to append.
    ///
    /// Uses the same threshold arithmetic as [`Self::process_event`]'s silence branch, since
    /// both are just different vantage points on the same silence run.
    pub fn check_timeout(&mut self, silence_duration_seconds: f64) -> String {
        self.handle_silence(silence_duration_seconds)
    }

    fn handle_silence(&mut self, duration_seconds: f64) -> String {
        if duration_seconds > self.thresholds.word_space_limit {
            if self.current_symbol.is_empty() && !self.word_space_pending {
                // Nothing pending and nothing owed: this silence has already been fully
                // accounted for by an earlier call.
                return String::new();
            }
            let mut out = self.flush_char();
            out.push(' ');
            self.word_space_pending = false;
            out
        } else if duration_seconds > self.thresholds.symbol_space_limit {
            let out = self.flush_char();
            if !out.is_empty() {
                self.word_space_pending = true;
            }
            out
        } else {
            String::new()
        }
    }

    fn flush_char(&mut self) -> String {
        if self.current_symbol.is_empty() {
            return String::new();
        }
        let out = table::char_for_code(&self.current_symbol)
            .map(|c| c.to_string())
            .unwrap_or_default();
        self.current_symbol.clear();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_events_produce_no_output() {
        let mut d = StreamingDecoder::new(12.0);
        assert_eq!(d.process_event(0.0, true), "");
    }

    #[test]
    fn decodes_hi_one_event_at_a_time() {
        let mut d = StreamingDecoder::new(12.0);
        let mut out = String::new();
        // H = ....
        for _ in 0..4 {
            out.push_str(&d.process_event(0.1, true));
            out.push_str(&d.process_event(0.1, false)); // intra gap
        }
        out.push_str(&d.process_event(0.3, false)); // symbol space -> flush H
        // I = ..
        out.push_str(&d.process_event(0.1, true));
        out.push_str(&d.process_event(0.1, false));
        out.push_str(&d.process_event(0.1, true));
        out.push_str(&d.check_timeout(0.6)); // trailing word space flush of I
        assert_eq!(out, "HI ");
    }

    #[test]
    fn check_timeout_flushes_pending_symbol_as_word_space_exactly_once() {
        let mut d = StreamingDecoder::new(12.0);
        d.process_event(0.1, true); // accumulate "." (E)
        let mut out = String::new();
        out.push_str(&d.check_timeout(0.6)); // first crossing: flush + space
        out.push_str(&d.check_timeout(0.7)); // still silent: no repeat emission
        out.push_str(&d.check_timeout(0.8));
        assert_eq!(out, "E ");
    }

    #[test]
    fn corrected_behavior_emits_word_space_even_without_pending_symbol() {
        // This is the behavior the original decoder's check_timeout famously lacked: once a
        // character has already flushed via the symbol-space path, a silence that keeps
        // growing past the word-space threshold must still eventually yield one ' '.
        let mut d = StreamingDecoder::new(12.0);
        let mut out = String::new();
        out.push_str(&d.process_event(0.1, true)); // "."
        out.push_str(&d.process_event(0.3, false)); // symbol-space flush -> "E", pending=true
        assert_eq!(out, "E");
        out.push_str(&d.check_timeout(0.6)); // silence keeps growing past word-space
        assert_eq!(out, "E ", "word space must still be emitted");
        out.push_str(&d.check_timeout(0.7));
        assert_eq!(out, "E ", "must not emit a second space");
    }

    #[test]
    fn on_transition_clears_pending_word_space() {
        let mut d = StreamingDecoder::new(12.0);
        d.process_event(0.1, true);
        d.process_event(0.3, false); // flush "E", pending=true
        d.process_event(0.1, true); // resume: clears stale pending, symbol is now "."
        // A short gap (below the symbol-space threshold) should not be affected by the old,
        // now-irrelevant pending flag.
        let out = d.check_timeout(0.1);
        assert_eq!(out, "");
    }

    #[test]
    fn set_wpm_does_not_touch_current_symbol() {
        let mut d = StreamingDecoder::new(12.0);
        d.process_event(0.1, true);
        assert_eq!(d.current_symbol(), ".");
        d.set_wpm(20.0);
        assert_eq!(d.current_symbol(), ".");
    }

    #[test]
    fn unmapped_symbol_is_dropped_on_flush() {
        let mut d = StreamingDecoder::new(12.0);
        for _ in 0..7 {
            d.process_event(0.1, true);
        }
        let out = d.process_event(0.6, false);
        assert_eq!(
            out, " ",
            "unmapped symbol contributes nothing but the space still fires"
        );
    }
}
