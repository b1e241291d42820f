//! WAV container I/O: writes canonical little-endian RIFF/WAVE bytes from synthesized PCM,
//! and reads mono float32 samples back out for the bulk pipeline and CLI.

use std::io::Cursor;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};

use crate::error::Result;

/// Write `samples` (signed 16-bit PCM) as a canonical RIFF/WAVE byte buffer.
///
/// Produces byte-identical output for equal inputs: header fields are derived deterministically
/// from `sample_rate_hz`, `channels`, and `bits_per_sample` with no padding beyond the 44-byte
/// canonical header.
pub fn write_wav(
    samples: &[i16],
    sample_rate_hz: u32,
    channels: u16,
    bits_per_sample: u16,
) -> Result<Vec<u8>> {
    let spec = WavSpec {
        channels,
        sample_rate: sample_rate_hz,
        bits_per_sample,
        sample_format: SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = WavWriter::new(&mut cursor, spec)?;
        for &sample in samples {
            writer.write_sample(sample)?;
        }
        writer.finalize()?;
    }
    Ok(cursor.into_inner())
}

/// Read a WAV file at `path` into mono float32 samples in `[-1.0, 1.0]`, plus its spec.
///
/// Only channel 0 is read for multi-channel input, matching the bulk pipeline's documented
/// downmix contract.
pub fn read_wav_mono(path: &std::path::Path) -> Result<(Vec<f32>, WavSpec)> {
    let mut reader = WavReader::open(path)?;
    let spec = reader.spec();
    let channels = spec.channels.max(1) as usize;

    let samples: Vec<f32> = match spec.sample_format {
        SampleFormat::Int => reader
            .samples::<i32>()
            .step_by(channels)
            .map(|s| s.map(|v| v as f32 / (1i64 << (spec.bits_per_sample - 1)) as f32))
            .collect::<std::result::Result<_, _>>()?,
        SampleFormat::Float => reader
            .samples::<f32>()
            .step_by(channels)
            .collect::<std::result::Result<_, _>>()?,
    };

    Ok((samples, spec))
}

/// Read a WAV file's raw 16-bit PCM samples back out unchanged (no downmix, no normalization).
///
/// Used to verify the writer/reader round-trip exactly: `read_wav_pcm16(write_wav(s, ...)) == s`.
pub fn read_wav_pcm16(path: &std::path::Path) -> Result<(Vec<i16>, WavSpec)> {
    let mut reader = WavReader::open(path)?;
    let spec = reader.spec();
    let samples: Vec<i16> = reader
        .samples::<i16>()
        .collect::<std::result::Result<_, _>>()?;
    Ok((samples, spec))
}
