//! Timing-based Morse decoding: a batch variant (component E) and a streaming variant
//! (component F), sharing the same threshold arithmetic.

mod batch;
mod streaming;
mod timing;

pub use batch::{decode_events, decode_events_timed};
pub use streaming::StreamingDecoder;
pub use timing::Thresholds;
