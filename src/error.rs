//! Error types for media stills.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for media stills.
#[derive(Error, Debug)]
pub enum Error {
    // Preflight errors
    #[error("ffmpeg not available. Install FFmpeg: sudo apt install ffmpeg")]
    CapabilityUnavailable,

    #[error("ffprobe not found. Install FFmpeg: sudo apt install ffmpeg")]
    FfprobeNotFound,

    // Source errors
    #[error("Video source not found: {0}")]
    SourceNotFound(String),

    #[error("Failed to probe video source: {0}")]
    ProbeFailed(String),

    // Sampling errors
    #[error("Invalid sampling parameters: {0}")]
    InvalidSamplingParameters(String),

    #[error("Still extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("Unknown artwork type: {0}")]
    InvalidArtworkType(String),

    // Config errors
    #[error("Invalid config file: {0}")]
    Config(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Generic errors
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a string.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}
