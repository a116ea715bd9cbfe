//! Genius catalog API client.
//!
//! This module provides a client for the Genius API (api.genius.com).
//! Every request is authenticated with a bearer token.

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::Config;
use crate::converters;
use crate::error::{LyricArtError, Result};
use crate::models::{SongRecord, SongSummary};

/// Genius catalog client.
///
/// # Example
///
/// ```rust,no_run
/// use lyricart::{Config, GeniusApi};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let api = GeniusApi::new(&Config::new("genius_token", "openai_key"))?;
///     for song in api.search("chandelier").await? {
///         println!("{} by {} (ID: {})", song.title, song.artist, song.id);
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct GeniusApi {
    client: Client,
    api_url: String,
    web_url: String,
    token: String,
}

impl GeniusApi {
    /// Create a new catalog client with its own HTTP client.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, config))
    }

    /// Create a catalog client sharing an existing HTTP client.
    pub fn with_client(client: Client, config: &Config) -> Self {
        Self {
            client,
            api_url: config.genius_api_url.clone(),
            web_url: config.genius_web_url.clone(),
            token: config.genius_token.clone(),
        }
    }

    /// Make an authenticated GET request to the Genius API.
    ///
    /// Bodies that are not JSON come back as `Value::Null`; callers treat
    /// that the same as a response with the wrong shape.
    async fn get_api(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Value> {
        let url = format!("{}/{}", self.api_url, endpoint);
        debug!("GET {} with params: {:?}", url, params);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .query(params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Genius API returned {} for {}", status, endpoint);
        }

        match serde_json::from_str(&body) {
            Ok(data) => Ok(data),
            Err(e) => {
                warn!("Genius API sent a non-JSON body for {}: {}", endpoint, e);
                Ok(Value::Null)
            }
        }
    }

    /// Search for songs.
    ///
    /// Returns an empty list when the response has no `response.hits`.
    /// Transport failures are returned as errors.
    pub async fn search(&self, query: &str) -> Result<Vec<SongSummary>> {
        let response = self.get_api("search", &[("q", query)]).await?;

        match converters::parse_search_hits(&response) {
            Some(songs) => {
                debug!("Search '{}' returned {} songs", query, songs.len());
                Ok(songs)
            }
            None => {
                warn!(
                    "Search response for '{}' has no hits (meta status: {:?})",
                    query,
                    converters::meta_status(&response)
                );
                Ok(Vec::new())
            }
        }
    }

    /// Look up a song by ID.
    pub async fn lookup(&self, song_id: &str) -> Result<SongRecord> {
        let song_id = song_id.trim();
        if song_id.is_empty() || !song_id.chars().all(|c| c.is_ascii_digit()) {
            return Err(LyricArtError::SongNotFound(song_id.to_string()));
        }

        let response = self.get_api(&format!("songs/{}", song_id), &[]).await?;
        converters::parse_song(&response, song_id)
    }

    /// Absolute URL of a song's lyrics page.
    pub fn lyrics_url(&self, song: &SongRecord) -> String {
        format!("{}{}", self.web_url, song.lyrics_path)
    }
}
