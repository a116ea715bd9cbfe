//! Artwork generation outcomes.

use std::fmt;

use serde::Serialize;

use super::song::SongRecord;

/// Why an artwork could not be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtworkFailure {
    /// Transport-level failure (connection refused, timeout, ...).
    Network,
    /// Rate limit or billing quota hit.
    QuotaExceeded,
    /// The prompt was rejected by the provider's safety system.
    ContentPolicy,
    /// Any other non-success response from the provider.
    Api,
    /// The provider answered without a usable image.
    InvalidResponse,
}

impl ArtworkFailure {
    /// Short machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            ArtworkFailure::Network => "network",
            ArtworkFailure::QuotaExceeded => "quota_exceeded",
            ArtworkFailure::ContentPolicy => "content_policy",
            ArtworkFailure::Api => "api",
            ArtworkFailure::InvalidResponse => "invalid_response",
        }
    }
}

impl fmt::Display for ArtworkFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Result of one image generation attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ArtworkResult {
    /// The provider returned an image.
    Generated { image_url: String },
    /// Generation failed; the page is rendered without an image.
    Failed {
        reason: ArtworkFailure,
        message: String,
    },
}

impl ArtworkResult {
    /// URL of the generated image, if any.
    pub fn image_url(&self) -> Option<&str> {
        match self {
            ArtworkResult::Generated { image_url } => Some(image_url),
            ArtworkResult::Failed { .. } => None,
        }
    }

    /// Failure reason, if generation failed.
    pub fn failure(&self) -> Option<ArtworkFailure> {
        match self {
            ArtworkResult::Generated { .. } => None,
            ArtworkResult::Failed { reason, .. } => Some(*reason),
        }
    }
}

/// Everything one pipeline run produces for a song.
#[derive(Debug, Clone)]
pub struct ArtPiece {
    /// The song the artwork was made for.
    pub song: SongRecord,
    /// Generated analysis text, passed through verbatim.
    pub analysis: String,
    /// Generated image, or why there is none.
    pub artwork: ArtworkResult,
}
