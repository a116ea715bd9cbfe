//! Integration tests for the web interface.
//!
//! The router runs against a fake Genius (API and lyrics pages) served by
//! axum on an ephemeral port, and against in-process fake generators.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    extract::{Path, Query},
    http::{header, HeaderMap, Request, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tower::util::ServiceExt; // for `oneshot` method

use lyricart::analysis::{ChatMessage, TextGenerator};
use lyricart::artwork::{ImageGenerator, ImageRequest};
use lyricart::error::Result;
use lyricart::lyrics::USER_AGENT;
use lyricart::server::{build_router, AppState};
use lyricart::{Config, LyricArt, LyricArtError};

const TOKEN: &str = "test-token";
const ANALYSIS: &str =
    "Analysis:\nA song about light & shadow.\n\nVisual Elements:\n- a chandelier";
const IMAGE_URL: &str = "https://images.example/artwork.png";

// =============================================================================
// Fake Genius
// =============================================================================

#[derive(Deserialize)]
struct SearchQuery {
    q: String,
}

async fn fake_search(headers: HeaderMap, Query(params): Query<SearchQuery>) -> Response {
    let expected = format!("Bearer {}", TOKEN);
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        == Some(expected.as_str());
    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"meta": {"status": 401, "message": "invalid token"}})),
        )
            .into_response();
    }

    match params.q.as_str() {
        "empty-shape" => Json(json!({})).into_response(),
        "not-json" => Html("<html>maintenance</html>").into_response(),
        _ => Json(json!({
            "meta": {"status": 200},
            "response": {
                "hits": [
                    {"type": "song", "result": {
                        "title": "Chandelier", "id": 378195,
                        "primary_artist": {"name": "Sia", "id": 16775},
                        "url": "https://genius.com/Sia-chandelier-lyrics"
                    }},
                    {"type": "song", "result": {
                        "title": "Elastic Heart", "id": 392731,
                        "primary_artist": {"name": "Sia", "id": 16775}
                    }}
                ]
            }
        }))
        .into_response(),
    }
}

fn song(id: u64, path: &str) -> Value {
    json!({
        "meta": {"status": 200},
        "response": {
            "song": {
                "id": id,
                "title": "Chandelier",
                "path": path,
                "release_date": "2014-03-17",
                "primary_artist": {"name": "Sia"},
                "album": {"name": "1000 Forms of Fear"}
            }
        }
    })
}

async fn fake_song(Path(id): Path<String>) -> Response {
    match id.as_str() {
        "1" => Json(song(1, "/prefix-lyrics")).into_response(),
        "2" => Json(song(2, "/no-lyrics")).into_response(),
        "3" => Json(song(3, "/old-lyrics")).into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({"meta": {"status": 404, "message": "Not found"}, "response": {}})),
        )
            .into_response(),
    }
}

async fn prefix_page(headers: HeaderMap) -> Html<&'static str> {
    // Serve the lyrics only to a browser, like the real site
    let browser = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        == Some(USER_AGENT);
    if !browser {
        return no_lyrics_page().await;
    }

    Html(
        r#"<html><body>
        <div class="Header__Container">Chandelier</div>
        <div class="Lyrics__Container-sc-3d1d18a3-1 bzaSNb">
            Party girls don't get hurt<br>Can't feel anything
        </div>
        </body></html>"#,
    )
}

async fn old_page() -> Html<&'static str> {
    Html(r#"<div class="lyrics"><p>Old layout verse</p></div>"#)
}

async fn no_lyrics_page() -> Html<&'static str> {
    Html(r#"<div class="SongPage__Section">Lyrics for this song have yet to be released.</div>"#)
}

async fn spawn_fake_genius() -> String {
    let router = Router::new()
        .route("/search", get(fake_search))
        .route("/songs/:id", get(fake_song))
        .route("/prefix-lyrics", get(prefix_page))
        .route("/old-lyrics", get(old_page))
        .route("/no-lyrics", get(no_lyrics_page));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}", addr)
}

// =============================================================================
// Fake generators
// =============================================================================

#[derive(Default)]
struct FakeText {
    prompts: Mutex<Vec<String>>,
    fail: bool,
}

#[async_trait]
impl TextGenerator for FakeText {
    fn model(&self) -> &str {
        "fake-text"
    }

    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        let prompt = messages.last().map(|m| m.content.clone()).unwrap_or_default();
        self.prompts.lock().unwrap().push(prompt);
        if self.fail {
            return Err(LyricArtError::Upstream {
                service: "openai",
                status: 503,
                code: None,
                message: "The engine is currently overloaded".to_string(),
            });
        }
        Ok(ANALYSIS.to_string())
    }
}

struct FakeImage {
    fail: bool,
}

#[async_trait]
impl ImageGenerator for FakeImage {
    async fn generate_image(&self, request: &ImageRequest) -> Result<String> {
        assert!(request.prompt.contains(ANALYSIS));
        if self.fail {
            Err(LyricArtError::Upstream {
                service: "openai",
                status: 429,
                code: Some("insufficient_quota".to_string()),
                message: "You exceeded your current quota".to_string(),
            })
        } else {
            Ok(IMAGE_URL.to_string())
        }
    }
}

// =============================================================================
// Helpers
// =============================================================================

struct TestApp {
    router: Router,
    text: Arc<FakeText>,
}

fn setup_app_with(genius_url: &str, token: &str, text: FakeText, image: FakeImage) -> TestApp {
    let config = Config::new(token, "openai-key").with_genius_urls(genius_url, genius_url);
    let text = Arc::new(text);
    let image = Arc::new(image);

    let lyricart =
        LyricArt::with_generators(config, reqwest::Client::new(), text.clone(), image).unwrap();

    TestApp {
        router: build_router(AppState::new(lyricart)),
        text,
    }
}

fn setup_app_at(genius_url: &str, token: &str, image_fails: bool) -> TestApp {
    let image = FakeImage { fail: image_fails };
    setup_app_with(genius_url, token, FakeText::default(), image)
}

async fn setup_app(image_fails: bool) -> TestApp {
    let genius_url = spawn_fake_genius().await;
    setup_app_at(&genius_url, TOKEN, image_fails)
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn generate_request(song_id: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/generate_art")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(format!("song_id={}", song_id)))
        .unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body");
    String::from_utf8(bytes.to_vec()).expect("Body should be UTF-8")
}

async fn body_json(response: Response) -> Value {
    serde_json::from_str(&body_text(response).await).expect("Should parse JSON")
}

// =============================================================================
// Pages
// =============================================================================

#[tokio::test]
async fn test_index_page() {
    let app = setup_app(false).await;
    let response = app.router.oneshot(get_request("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("search-form"));
    assert!(body.contains("/generate_art"));
}

#[tokio::test]
async fn test_health() {
    let app = setup_app(false).await;
    let response = app.router.oneshot(get_request("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn test_search_returns_hits_in_order() {
    let app = setup_app(false).await;
    let response = app
        .router
        .oneshot(get_request("/search_song?query=sia"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(
        body,
        json!([
            {"title": "Chandelier", "id": 378195, "artist": "Sia"},
            {"title": "Elastic Heart", "id": 392731, "artist": "Sia"}
        ])
    );
}

#[tokio::test]
async fn test_search_missing_hits_is_empty() {
    let app = setup_app(false).await;
    let response = app
        .router
        .oneshot(get_request("/search_song?query=empty-shape"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn test_search_non_json_is_empty() {
    let app = setup_app(false).await;
    let response = app
        .router
        .oneshot(get_request("/search_song?query=not-json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn test_search_error_body_is_empty() {
    let genius_url = spawn_fake_genius().await;
    let app = setup_app_at(&genius_url, "wrong-token", false);
    let response = app
        .router
        .oneshot(get_request("/search_song?query=sia"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn test_search_blank_query_is_empty() {
    let app = setup_app(false).await;
    let response = app
        .router
        .oneshot(get_request("/search_song?query=%20"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn test_search_unreachable_catalog_is_bad_gateway() {
    // Bind and drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let app = setup_app_at(&format!("http://{}", addr), TOKEN, false);
    let response = app
        .router
        .oneshot(get_request("/search_song?query=sia"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

// =============================================================================
// Artwork
// =============================================================================

#[tokio::test]
async fn test_generate_unknown_song() {
    let app = setup_app(false).await;
    let response = app.router.oneshot(generate_request("999")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(response).await, "Song not found");
}

#[tokio::test]
async fn test_generate_lyrics_not_found() {
    let app = setup_app(false).await;
    let response = app.router.oneshot(generate_request("2")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(response).await, "Lyrics not found");
    assert!(app.text.prompts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_generate_with_prefix_layout() {
    let app = setup_app(false).await;
    let response = app
        .router
        .clone()
        .oneshot(generate_request("1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains(&format!(r#"id="artwork" src="{}""#, IMAGE_URL)));
    assert!(body.contains("A song about light &amp; shadow."));
    assert!(body.contains("Artist: Sia"));
    assert!(body.contains("Album: 1000 Forms of Fear"));

    let prompts = app.text.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Party girls don't get hurt"));
    assert!(prompts[0].contains("Can't feel anything"));
    assert!(!prompts[0].contains("Header__Container"));
}

#[tokio::test]
async fn test_generate_with_old_layout() {
    let app = setup_app(false).await;
    let response = app.router.oneshot(generate_request("3")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let prompts = app.text.prompts.lock().unwrap();
    assert!(prompts[0].contains("Old layout verse"));
}

#[tokio::test]
async fn test_generate_image_failure_still_renders() {
    let app = setup_app(true).await;
    let response = app.router.oneshot(generate_request("1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(!body.contains(r#"id="artwork""#));
    assert!(!body.contains(IMAGE_URL));
    assert!(body.contains("A song about light &amp; shadow."));
    assert!(body.contains("Visual Elements:"));
}

#[tokio::test]
async fn test_generate_text_failure_is_internal_error() {
    let genius_url = spawn_fake_genius().await;
    let text = FakeText {
        fail: true,
        ..Default::default()
    };
    let app = setup_app_with(&genius_url, TOKEN, text, FakeImage { fail: false });
    let response = app.router.oneshot(generate_request("1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "Internal server error");
    assert_eq!(app.text.prompts.lock().unwrap().len(), 1);
}
