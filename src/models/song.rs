//! Song-related models.
//!
//! This module contains the search summaries and full song records
//! returned by the catalog.

use serde::Serialize;

/// Placeholder used when the catalog omits album or release date.
pub const UNKNOWN: &str = "Unknown";

/// A single search hit.
///
/// Serializes to exactly `{title, id, artist}`.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct SongSummary {
    /// Song title.
    pub title: String,

    /// Catalog song ID.
    pub id: u64,

    /// Primary artist name.
    pub artist: String,
}

impl SongSummary {
    /// Create a new summary.
    pub fn new<S1: Into<String>, S2: Into<String>>(title: S1, id: u64, artist: S2) -> Self {
        Self {
            title: title.into(),
            id,
            artist: artist.into(),
        }
    }
}

/// A full song record from a catalog lookup.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct SongRecord {
    /// Catalog song ID.
    pub id: u64,

    /// Song title.
    pub title: String,

    /// Primary artist name.
    pub artist: String,

    /// Album name, if the catalog knows it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,

    /// Release date as reported by the catalog (usually "YYYY-MM-DD").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,

    /// Path of the lyrics page on the catalog website.
    pub lyrics_path: String,

    /// Absolute URL of the lyrics page, if the catalog sent one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Cover art URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub song_art_image_url: Option<String>,
}

impl SongRecord {
    /// Album name, or "Unknown".
    pub fn album_or_unknown(&self) -> &str {
        self.album.as_deref().unwrap_or(UNKNOWN)
    }

    /// Release date, or "Unknown".
    pub fn release_date_or_unknown(&self) -> &str {
        self.release_date.as_deref().unwrap_or(UNKNOWN)
    }

    /// Metadata handed to the analysis prompt.
    pub fn info(&self) -> SongInfo {
        SongInfo::from(self)
    }
}

/// Song metadata embedded in the analysis prompt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SongInfo {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub release_date: String,
}

impl From<&SongRecord> for SongInfo {
    fn from(record: &SongRecord) -> Self {
        Self {
            title: record.title.clone(),
            artist: record.artist.clone(),
            album: record.album_or_unknown().to_string(),
            release_date: record.release_date_or_unknown().to_string(),
        }
    }
}
