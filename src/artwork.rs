//! Artwork generation from an analysis text.
//!
//! A failed image request never fails the pipeline: it is logged and
//! reported as [`ArtworkResult::Failed`] with a reason code, and the page
//! is rendered without an image.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{error, info};

use crate::config::Config;
use crate::error::{LyricArtError, Result};
use crate::models::{ArtworkFailure, ArtworkResult};

/// Body of an image generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRequest {
    pub prompt: String,
    pub model: String,
    pub n: u32,
    pub size: String,
}

/// A service that turns a prompt into an image URL.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate_image(&self, request: &ImageRequest) -> Result<String>;
}

/// Wrap the analysis in the fixed photographic style prompt.
pub fn build_prompt(analysis: &str) -> String {
    format!(
        "Create an incredibly realistic and cinematic photograph inspired by this song analysis and visual elements: {analysis}. \
Nothing too cheesy please. The photo should have a beautiful analog and grainy feel, with exceptional quality and focus. \
As if it was taken with a leica so keep it natural. \
Capture the mood and themes of the song in a single, powerful image. \
Consider using interesting lighting, compelling composition, and rich, emotive colors. \
The image should feel like a still from an award-winning music video or a cover shot for a prestigious music magazine. \
Do not include any text or recognizable faces. \
Emphasize texture, depth, and atmosphere to create a visually striking and emotionally resonant photograph."
    )
}

/// Map a generation error to a failure reason.
pub fn classify_failure(err: &LyricArtError) -> ArtworkFailure {
    match err {
        LyricArtError::RequestError(_) | LyricArtError::GenerationRequest(_) => {
            ArtworkFailure::Network
        }
        LyricArtError::Upstream { status: 429, .. } => ArtworkFailure::QuotaExceeded,
        LyricArtError::Upstream { code: Some(code), .. }
            if code == "content_policy_violation" || code.contains("safety") =>
        {
            ArtworkFailure::ContentPolicy
        }
        LyricArtError::Upstream { code: Some(code), .. } if code == "insufficient_quota" => {
            ArtworkFailure::QuotaExceeded
        }
        LyricArtError::Upstream { .. } => ArtworkFailure::Api,
        _ => ArtworkFailure::InvalidResponse,
    }
}

/// Produces one artwork per analysis.
#[derive(Clone)]
pub struct ArtworkGenerator {
    generator: Arc<dyn ImageGenerator>,
    model: String,
    size: String,
}

impl ArtworkGenerator {
    pub fn new(generator: Arc<dyn ImageGenerator>, config: &Config) -> Self {
        Self {
            generator,
            model: config.image_model.clone(),
            size: config.image_size.clone(),
        }
    }

    /// The request that would be sent for `analysis`.
    pub fn request_for(&self, analysis: &str) -> ImageRequest {
        ImageRequest {
            prompt: build_prompt(analysis),
            model: self.model.clone(),
            n: 1,
            size: self.size.clone(),
        }
    }

    /// Generate a single square image for the analysis.
    pub async fn generate(&self, analysis: &str) -> ArtworkResult {
        let request = self.request_for(analysis);

        match self.generator.generate_image(&request).await {
            Ok(image_url) => {
                info!("Artwork generated with {}", self.model);
                ArtworkResult::Generated { image_url }
            }
            Err(e) => {
                let reason = classify_failure(&e);
                error!("Error generating image ({}): {}", reason, e);
                ArtworkResult::Failed {
                    reason,
                    message: e.to_string(),
                }
            }
        }
    }
}
