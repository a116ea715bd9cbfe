//! Unified lyricart interface.
//!
//! Chains the catalog, the lyrics scraper and the two generators. Each step
//! waits for the previous one; nothing is retried or cached.

use std::sync::Arc;

use reqwest::Client;
use tracing::info;

use crate::analysis::{AnalysisGenerator, TextGenerator};
use crate::api::{GeniusApi, OpenAiClient};
use crate::artwork::{ArtworkGenerator, ImageGenerator};
use crate::config::Config;
use crate::error::Result;
use crate::lyrics::LyricsScraper;
use crate::models::{ArtPiece, SongSummary};

/// Main lyricart interface.
///
/// # Example
///
/// ```rust,no_run
/// use lyricart::{Config, LyricArt};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let art = LyricArt::new(Config::new("genius_token", "openai_key"))?;
///
///     let hits = art.search("chandelier").await?;
///     let piece = art.create(&hits[0].id.to_string()).await?;
///     println!("{}", piece.analysis);
///     println!("{:?}", piece.artwork.image_url());
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct LyricArt {
    catalog: GeniusApi,
    scraper: LyricsScraper,
    analysis: AnalysisGenerator,
    artwork: ArtworkGenerator,
}

impl LyricArt {
    /// Create an instance backed by Genius and OpenAI.
    pub fn new(config: Config) -> Result<Self> {
        let client = Client::builder().build()?;
        let openai = Arc::new(OpenAiClient::with_client(client.clone(), &config));
        Self::with_generators(config, client, openai.clone(), openai)
    }

    /// Create an instance with custom generation services.
    pub fn with_generators(
        config: Config,
        client: Client,
        text: Arc<dyn TextGenerator>,
        image: Arc<dyn ImageGenerator>,
    ) -> Result<Self> {
        Ok(Self {
            scraper: LyricsScraper::new(client.clone())?,
            catalog: GeniusApi::with_client(client, &config),
            analysis: AnalysisGenerator::new(text),
            artwork: ArtworkGenerator::new(image, &config),
        })
    }

    /// Search the catalog.
    pub async fn search(&self, query: &str) -> Result<Vec<SongSummary>> {
        self.catalog.search(query).await
    }

    /// Run the full pipeline for one song.
    ///
    /// Returns `SongNotFound` or `LyricsNotFound` when there is nothing to
    /// illustrate. A failed image still yields an `ArtPiece`.
    pub async fn create(&self, song_id: &str) -> Result<ArtPiece> {
        let song = self.catalog.lookup(song_id).await?;
        info!("Creating artwork for '{}' by {}", song.title, song.artist);

        let page_url = self.catalog.lyrics_url(&song);
        let lyrics = self.scraper.extract(&page_url).await?;

        let analysis = self.analysis.analyze(&lyrics, &song.info()).await?;
        let artwork = self.artwork.generate(&analysis).await;

        Ok(ArtPiece {
            song,
            analysis,
            artwork,
        })
    }
}
