//! Lyrics analysis via a text-generation model.
//!
//! The model is asked for a thematic analysis plus a short list of visual
//! elements. Its answer is passed on verbatim; nothing checks that it
//! follows the requested format.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::Result;
use crate::models::SongInfo;

/// System message sent with every analysis request.
pub const SYSTEM_PROMPT: &str =
    "You are a helpful assistant that formats and analyzes song lyrics.";

/// Role of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// One message of a chat exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system<S: Into<String>>(content: S) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user<S: Into<String>>(content: S) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// A service that completes a chat exchange.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Model identifier, for logging.
    fn model(&self) -> &str;

    /// Return the generated reply to `messages`.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String>;
}

/// Build the analysis prompt for a song.
pub fn build_prompt(lyrics: &str, song: &SongInfo) -> String {
    format!(
        r#"You are an AI assistant tasked with formatting and enhancing song lyrics for image generation.
The song details are as follows:
Title: {title}
Artist: {artist}
Album: {album}
Release Date: {release_date}

Here are the raw lyrics:
{lyrics}

Please look at these lyrics, removing any unnecessary annotations or metadata or cursewords.
Then, provide a brief analysis of the song's themes, mood, and key imagery.
Finally, suggest 3-5 vivid visual elements that could be incorporated into an artistic representation of this song.

Format your response as follows:

Analysis:
[Your analysis here]

Visual Elements:
- [Element 1]
- [Element 2]
- [Element 3]
"#,
        title = song.title,
        artist = song.artist,
        album = song.album,
        release_date = song.release_date,
        lyrics = lyrics,
    )
}

/// Produces the analysis text for a song.
#[derive(Clone)]
pub struct AnalysisGenerator {
    generator: Arc<dyn TextGenerator>,
}

impl AnalysisGenerator {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Analyze the lyrics of a song.
    ///
    /// Failures of the text service are returned to the caller.
    pub async fn analyze(&self, lyrics: &str, song: &SongInfo) -> Result<String> {
        let messages = [
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(build_prompt(lyrics, song)),
        ];

        debug!(
            "Analyzing '{}' by {} ({} chars of lyrics)",
            song.title,
            song.artist,
            lyrics.len()
        );
        let analysis = self.generator.complete(&messages).await?;
        info!(
            model = %self.generator.model(),
            "Analysis ready for '{}' ({} chars)",
            song.title,
            analysis.len()
        );

        Ok(analysis)
    }
}
