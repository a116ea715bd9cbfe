//! Error types for the lyricart pipeline.

use thiserror::Error;

/// Main error type for all lyricart operations.
#[derive(Debug, Error)]
pub enum LyricArtError {
    /// The catalog returned no song for the identifier.
    #[error("Song not found: {0}")]
    SongNotFound(String),

    /// The lyrics page had no recognizable lyrics container.
    #[error("Lyrics not found: {0}")]
    LyricsNotFound(String),

    /// An upstream service answered with a non-success status.
    #[error("{service} returned {status}: {message}")]
    Upstream {
        /// Which service failed ("catalog", "openai", ...).
        service: &'static str,
        /// HTTP status code.
        status: u16,
        /// Machine-readable error code from the body, if any.
        code: Option<String>,
        /// Human-readable message from the body.
        message: String,
    },

    /// HTTP request failed.
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Request to a generation service failed before it answered.
    #[error("Generation request error: {0}")]
    GenerationRequest(reqwest::Error),

    /// The upstream answered, but not with anything usable.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// A lyrics selector failed to compile.
    #[error("Selector error: {0}")]
    Selector(String),

    /// Missing or invalid configuration.
    #[error("Config error: {0}")]
    Config(String),
}

/// Result type alias for lyricart operations.
pub type Result<T> = std::result::Result<T, LyricArtError>;
