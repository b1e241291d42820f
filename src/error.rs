use thiserror::Error;

/// This crate's result type.
pub type Result<T> = std::result::Result<T, Error>;

/// This crate's error type.
///
/// A closed set of variants rather than a stringly-typed error: the core never fails on
/// audio data (malformed timing just produces empty/partial decoded text), so every variant
/// here is a genuine configuration or resource problem, not a decode failure.
#[derive(Debug, Error)]
pub enum Error {
    /// A non-positive, non-finite, or otherwise invalid configuration value (sample rate,
    /// WPM, Q, or frequency) was supplied. No partial state is mutated before this is returned.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The requested synthesis buffer does not fit in addressable memory.
    #[error("synthesis would require {frames} frames, which does not fit in memory")]
    SynthesisOverflow { frames: u64 },

    /// Covers the WAV writer/reader boundary (§4.I) as well as general I/O.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

/// `hound` has its own error type rather than always wrapping `io::Error`; fold it into `Io`
/// so the WAV boundary still surfaces through the crate's one I/O variant.
impl From<hound::Error> for Error {
    fn from(err: hound::Error) -> Self {
        match err {
            hound::Error::IoError(io_err) => Error::Io(io_err),
            other => Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, other.to_string())),
        }
    }
}
