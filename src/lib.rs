//! # lyricart
//!
//! Turns a song's lyrics into a short thematic analysis and a generated
//! artwork.
//!
//! ## Quick Start
//!
//! The easiest way to use this library is through the [`LyricArt`] struct:
//!
//! ```rust,no_run
//! use lyricart::{Config, LyricArt};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let art = LyricArt::new(Config::new("genius_token", "openai_key"))?;
//!
//!     // Find a song
//!     let hits = art.search("bohemian rhapsody").await?;
//!     println!("{} hits", hits.len());
//!
//!     // Lyrics -> analysis -> artwork
//!     let piece = art.create(&hits[0].id.to_string()).await?;
//!     println!("{}", piece.analysis);
//!     if let Some(url) = piece.artwork.image_url() {
//!         println!("Artwork: {}", url);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Building Blocks
//!
//! - [`GeniusApi`] - Catalog search and song lookup
//! - [`lyrics`] - Lyrics page scraping with ordered layout matchers
//! - [`analysis`] - Lyrics analysis through a [`TextGenerator`]
//! - [`artwork`] - Image generation through an [`ImageGenerator`]
//! - [`server`] - The web interface

pub mod analysis;
pub mod api;
pub mod artwork;
pub mod config;
pub mod converters;
pub mod error;
pub mod lyrics;
pub mod models;
mod pipeline;
pub mod server;

// Main interface (recommended)
pub use pipeline::LyricArt;

// Low-level APIs
pub use analysis::{AnalysisGenerator, ChatMessage, TextGenerator};
pub use api::{GeniusApi, OpenAiClient};
pub use artwork::{ArtworkGenerator, ImageGenerator, ImageRequest};
pub use config::Config;
pub use error::LyricArtError;
pub use lyrics::{LyricsExtractor, LyricsMatcher, LyricsScraper};
pub use models::{ArtPiece, ArtworkFailure, ArtworkResult, SongInfo, SongRecord, SongSummary};
