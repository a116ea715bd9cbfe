//! Web interface.
//!
//! Three pages glue the pipeline together: the search form, the JSON search
//! endpoint and the artwork result page. Requests share nothing but the
//! immutable [`LyricArt`] instance.

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::error::LyricArtError;
use crate::LyricArt;

pub mod handlers;
pub mod pages;

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub lyricart: Arc<LyricArt>,
}

impl AppState {
    pub fn new(lyricart: LyricArt) -> Self {
        Self {
            lyricart: Arc::new(lyricart),
        }
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::serve_index))
        .route("/search_song", get(handlers::search_song))
        .route("/generate_art", post(handlers::generate_art))
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

impl IntoResponse for LyricArtError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            LyricArtError::SongNotFound(id) => {
                warn!("Song not found: {}", id);
                (StatusCode::NOT_FOUND, "Song not found")
            }
            LyricArtError::LyricsNotFound(url) => {
                warn!("Lyrics not found: {}", url);
                (StatusCode::NOT_FOUND, "Lyrics not found")
            }
            LyricArtError::RequestError(e) => {
                error!("Upstream request failed: {}", e);
                (StatusCode::BAD_GATEWAY, "Bad gateway")
            }
            other => {
                error!("Request failed: {}", other);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (status, body).into_response()
    }
}
