//! Runtime configuration.
//!
//! A [`Config`] is built once at startup and handed to [`crate::LyricArt`],
//! which passes the relevant parts to each client.

use crate::error::{LyricArtError, Result};

/// Base URL for the Genius API.
pub const GENIUS_API_URL: &str = "https://api.genius.com";

/// Base URL for Genius lyrics pages.
pub const GENIUS_WEB_URL: &str = "https://genius.com";

/// Base URL for the OpenAI API.
pub const OPENAI_API_URL: &str = "https://api.openai.com/v1";

/// Default model for the lyrics analysis.
pub const DEFAULT_TEXT_MODEL: &str = "gpt-4o";

/// Default model for the artwork.
pub const DEFAULT_IMAGE_MODEL: &str = "dall-e-3";

/// Default artwork resolution.
pub const DEFAULT_IMAGE_SIZE: &str = "1024x1024";

/// Configuration for all upstream clients.
#[derive(Debug, Clone)]
pub struct Config {
    /// Genius API access token (sent as a bearer token).
    pub genius_token: String,
    /// OpenAI API key.
    pub openai_api_key: String,
    pub genius_api_url: String,
    pub genius_web_url: String,
    pub openai_api_url: String,
    pub text_model: String,
    pub image_model: String,
    pub image_size: String,
}

impl Config {
    /// Create a configuration with default endpoints and models.
    pub fn new<S1: Into<String>, S2: Into<String>>(genius_token: S1, openai_api_key: S2) -> Self {
        Self {
            genius_token: genius_token.into(),
            openai_api_key: openai_api_key.into(),
            genius_api_url: GENIUS_API_URL.to_string(),
            genius_web_url: GENIUS_WEB_URL.to_string(),
            openai_api_url: OPENAI_API_URL.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            image_size: DEFAULT_IMAGE_SIZE.to_string(),
        }
    }

    /// Point both Genius endpoints at another host.
    pub fn with_genius_urls<S1, S2>(mut self, api: S1, web: S2) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        self.genius_api_url = trim_base(api.into());
        self.genius_web_url = trim_base(web.into());
        self
    }

    /// Point the generation client at another OpenAI-compatible host.
    pub fn with_openai_url<S: Into<String>>(mut self, url: S) -> Self {
        self.openai_api_url = trim_base(url.into());
        self
    }

    /// Check that the secrets are present.
    pub fn validate(&self) -> Result<()> {
        if self.genius_token.trim().is_empty() {
            return Err(LyricArtError::Config(
                "Genius access token is empty".to_string(),
            ));
        }
        if self.openai_api_key.trim().is_empty() {
            return Err(LyricArtError::Config("OpenAI API key is empty".to_string()));
        }
        Ok(())
    }
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
