// src/bin/cw-cli.rs

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use cw_core::encoder::encode_text;
use cw_core::events::DurationEvent;
use cw_core::pipeline::BulkPipeline;
use cw_core::synth::{self, synthesize};
use cw_core::wav::{read_wav_mono, write_wav};
use cw_core::{decoder, wpm};

fn main() -> Result<()> {
    cw_core::logging::init();
    let params = Params::parse();

    match params.command {
        Command::Encode {
            text,
            wpm,
            out,
            freq,
            sample_rate,
        } => encode(&text, wpm, &out, freq, sample_rate),
        Command::Decode {
            input,
            threshold,
            json,
        } => decode(&input, threshold, json),
        Command::DecodeEvents { wpm } => decode_events_from_stdin(wpm),
    }
}

/// Map CLI flags into library calls: §4.G -> §4.H -> §4.I.
fn encode(text: &str, wpm: f64, out: &PathBuf, freq: f64, sample_rate: u32) -> Result<()> {
    let events = encode_text(text, wpm);
    let samples = synthesize(&events, freq, sample_rate as f64).context("synthesis failed")?;
    let bytes = write_wav(&samples, sample_rate, 1, 16).context("writing wav failed")?;
    std::fs::write(out, bytes).with_context(|| format!("failed to write {}", out.display()))?;
    println!("wrote {} ({} events, {} samples)", out.display(), events.len(), samples.len());
    Ok(())
}

/// Run the bulk pipeline (§4.J) over a WAV file read via `hound`.
fn decode(input: &PathBuf, threshold: Option<f32>, json: bool) -> Result<()> {
    let (samples, spec) = read_wav_mono(input).context("failed to read wav")?;
    let mut pipeline = BulkPipeline::new();
    if let Some(threshold) = threshold {
        pipeline = pipeline.with_threshold(threshold);
    }
    let result = pipeline
        .process(&samples, spec.sample_rate as f64)
        .context("decode failed")?;

    if json {
        println!("{}", serde_json::to_string(&result)?);
    } else {
        println!("{}", result.text);
        eprintln!("estimated wpm: {:.1}", result.estimated_wpm);
    }
    Ok(())
}

/// Read `duration,on|off` lines from stdin and decode them without any audio at all.
fn decode_events_from_stdin(wpm: f64) -> Result<()> {
    let stdin = io::stdin();
    let mut events = Vec::new();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (duration, polarity) = line
            .split_once(',')
            .with_context(|| format!("malformed event line: {line:?}"))?;
        let duration: f64 = duration
            .trim()
            .parse()
            .with_context(|| format!("malformed duration in line: {line:?}"))?;
        let is_on = match polarity.trim() {
            "on" => true,
            "off" => false,
            other => anyhow::bail!("expected 'on' or 'off', got {other:?}"),
        };
        events.push(DurationEvent::new(duration, is_on));
    }

    let text = decoder::decode_events(&events, wpm);
    let mut stdout = io::stdout();
    writeln!(stdout, "{text}")?;
    Ok(())
}

#[derive(Parser, Debug)]
#[command(name = "cw-cli")]
#[command(about = "Encode text to Morse audio, or decode Morse audio/events back to text")]
struct Params {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode text into a Morse WAV file.
    Encode {
        /// Text to encode.
        #[arg(long)]
        text: String,

        /// Sending speed, words per minute.
        #[arg(long, default_value_t = wpm::DEFAULT_WPM)]
        wpm: f64,

        /// Output WAV path.
        #[arg(long)]
        out: PathBuf,

        /// Tone frequency in Hz.
        #[arg(long, default_value_t = synth::DEFAULT_FREQUENCY_HZ)]
        freq: f64,

        /// Sample rate in Hz.
        #[arg(long, default_value_t = 44_100)]
        sample_rate: u32,
    },

    /// Decode a WAV file to text via the bulk pipeline, printing the estimated WPM to stderr.
    Decode {
        /// Input WAV path.
        #[arg(long = "in")]
        input: PathBuf,

        /// Envelope threshold override (defaults to the bulk pipeline's built-in default).
        #[arg(long)]
        threshold: Option<f32>,

        /// Emit the full result (text, timed characters, estimated WPM) as JSON on stdout.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Decode a raw `duration,on|off` event list read from stdin (one event per line).
    DecodeEvents {
        /// Sending speed, words per minute.
        #[arg(long, default_value_t = wpm::DEFAULT_WPM)]
        wpm: f64,
    },
}
