//! Data models for catalog responses and pipeline results.
//!
//! Nothing here is persisted; every value lives for one request.

pub mod artwork;
pub mod song;

// Re-exports for convenience
pub use artwork::{ArtPiece, ArtworkFailure, ArtworkResult};
pub use song::{SongInfo, SongRecord, SongSummary, UNKNOWN};
