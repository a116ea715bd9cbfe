//! JSON to model converters.
//!
//! This module turns raw catalog JSON into typed models. The catalog wraps
//! every payload in a `{"meta": ..., "response": ...}` envelope; anything
//! that does not have the expected shape is treated as "no data" rather
//! than as an error.

use serde_json::Value;
use tracing::debug;

use crate::error::{LyricArtError, Result};
use crate::models::{SongRecord, SongSummary};

/// Get string from JSON, returning `None` if missing or not a string.
fn get_str(json: &Value, key: &str) -> Option<String> {
    json.get(key)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
}

/// Get a non-empty string from JSON.
fn get_non_empty_str(json: &Value, key: &str) -> Option<String> {
    get_str(json, key).filter(|s| !s.trim().is_empty())
}

/// Get numeric ID from JSON (handles both numeric and string IDs).
fn get_id(json: &Value, key: &str) -> Option<u64> {
    json.get(key).and_then(|v| {
        if let Some(n) = v.as_u64() {
            Some(n)
        } else {
            v.as_str().and_then(|s| s.parse().ok())
        }
    })
}

/// Name of the primary artist of a song object.
fn primary_artist_name(song: &Value) -> Option<String> {
    song.get("primary_artist").and_then(|a| get_str(a, "name"))
}

/// Status code from the `meta` block, if present.
pub fn meta_status(json: &Value) -> Option<u64> {
    json.get("meta")
        .and_then(|m| m.get("status"))
        .and_then(|s| s.as_u64())
}

/// Parse a single search hit.
fn parse_hit(hit: &Value) -> Option<SongSummary> {
    let result = hit.get("result")?;
    Some(SongSummary {
        title: get_str(result, "title")?,
        id: get_id(result, "id")?,
        artist: primary_artist_name(result)?,
    })
}

/// Parse a search response into summaries, preserving hit order.
///
/// Returns `None` when the `response.hits` array is absent, so callers can
/// tell "shape mismatch" apart from "zero hits" in their logs.
pub fn parse_search_hits(json: &Value) -> Option<Vec<SongSummary>> {
    let hits = json.get("response")?.get("hits")?.as_array()?;

    let songs = hits
        .iter()
        .filter_map(|hit| {
            let parsed = parse_hit(hit);
            if parsed.is_none() {
                debug!("Skipping malformed search hit: {}", hit);
            }
            parsed
        })
        .collect();

    Some(songs)
}

/// Parse a song lookup response.
///
/// An absent or empty `response.song` means the song does not exist.
/// A song without a lyrics `path` cannot be illustrated and is reported
/// as missing lyrics.
pub fn parse_song(json: &Value, song_id: &str) -> Result<SongRecord> {
    let song = json
        .get("response")
        .and_then(|r| r.get("song"))
        .filter(|s| s.as_object().is_some_and(|o| !o.is_empty()))
        .ok_or_else(|| LyricArtError::SongNotFound(song_id.to_string()))?;

    let lyrics_path = get_non_empty_str(song, "path").ok_or_else(|| {
        LyricArtError::LyricsNotFound(format!("song {} has no lyrics path", song_id))
    })?;

    Ok(SongRecord {
        id: get_id(song, "id").or_else(|| song_id.parse().ok()).unwrap_or(0),
        title: get_str(song, "title").unwrap_or_default(),
        artist: primary_artist_name(song).unwrap_or_default(),
        album: song.get("album").and_then(|a| get_non_empty_str(a, "name")),
        release_date: get_non_empty_str(song, "release_date"),
        lyrics_path,
        url: get_non_empty_str(song, "url"),
        song_art_image_url: get_non_empty_str(song, "song_art_image_url"),
    })
}
