//! HTTP handlers.

use axum::{
    extract::{Form, Query, State},
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{pages, AppState};
use crate::error::LyricArtError;
use crate::models::SongSummary;

/// Query string of `GET /search_song`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

/// Form body of `POST /generate_art`.
#[derive(Debug, Deserialize)]
pub struct GenerateForm {
    pub song_id: String,
}

/// GET /
pub async fn serve_index() -> Html<&'static str> {
    Html(pages::INDEX_HTML)
}

/// GET /search_song?query=...
///
/// Blank queries return `[]` without asking the catalog.
pub async fn search_song(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<SongSummary>>, LyricArtError> {
    let query = params.query.unwrap_or_default();
    if query.trim().is_empty() {
        debug!("Empty search query");
        return Ok(Json(Vec::new()));
    }

    let songs = state.lyricart.search(&query).await?;
    Ok(Json(songs))
}

/// POST /generate_art
pub async fn generate_art(
    State(state): State<AppState>,
    Form(form): Form<GenerateForm>,
) -> Result<Html<String>, LyricArtError> {
    let piece = state.lyricart.create(&form.song_id).await?;
    Ok(Html(pages::render_result(&piece)))
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
