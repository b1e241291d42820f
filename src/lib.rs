//! `cw-core` — the signal-processing and decoding core of a Morse Code (CW) companion app.
//!
//! This crate provides:
//! - A biquad bandpass filter and envelope/edge detector that turn audio into duration events
//! - A timing-based Morse decoder (batch and streaming variants) and a WPM estimator
//! - A Morse encoder and waveform synthesizer that turn text back into audio
//! - A canonical WAV container writer/reader
//!
//! It is a pure DSP + protocol core: no GUI, no audio capture, no file-picker glue. Capture and
//! playback are external collaborators that hand this crate PCM buffers and receive text or
//! audio bytes back.

pub mod biquad;
pub mod decoder;
pub mod encoder;
pub mod envelope;
pub mod error;
pub mod events;
pub mod pipeline;
pub mod synth;
pub mod table;
pub mod wav;
pub mod wpm;

// Logging configuration and control.
pub mod logging;

pub use error::{Error, Result};
