use axum::http::StatusCode;
use thiserror::Error;

/// Client-side capture failures. None of these ever reach the network.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// Capture device unavailable or permission denied.
    #[error("Mic access denied. Enable your mic to start roasting.")]
    Device(String),

    /// Duration acceptance gate failed.
    #[error("Too quick ({actual_ms}ms). Hold the mic for at least {min_ms}ms.")]
    TooShort { actual_ms: u64, min_ms: u64 },

    /// Byte-size acceptance gate failed.
    #[error("No audio captured. Speak louder!")]
    TooQuiet { actual_bytes: usize, min_bytes: usize },

    /// Clip assembly failed. Should not happen with in-memory buffers.
    #[error("Failed to encode clip: {0}")]
    Encode(String),
}

/// Server-side relay failures. Every kind collapses to a single
/// `{ "error": <message> }` response with the status from [`RelayError::status`];
/// the client displays the message verbatim and never branches on the kind.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("no audio. -10k aura.")]
    MissingAudio,

    #[error("audio is not valid base64. what did you even send?")]
    BadAudioEncoding,

    /// The shared upstream credential is absent from the process environment.
    #[error("server missing its api key. roast postponed.")]
    Configuration,

    /// Stage 1 (transcription) failed. Stage 2 is never attempted.
    #[error("couldn't transcribe that: {0}")]
    Transcription(String),

    /// Stage 2 (generation) failed.
    #[error("generation refused: {0}")]
    Generation(String),

    /// Stage 2 returned text that does not parse as the result schema.
    /// Distinct from a network failure on purpose.
    #[error("the critic returned word salad: {0}")]
    MalformedOutput(String),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingAudio | Self::BadAudioEncoding => StatusCode::BAD_REQUEST,
            Self::Configuration
            | Self::Transcription(_)
            | Self::Generation(_)
            | Self::MalformedOutput(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Roast request failure as seen by the client: one user-displayable
/// message, no programmatic kind.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct RoastRequestError {
    pub message: String,
}

impl RoastRequestError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
