//! OpenAI-compatible generation client.
//!
//! Talks to `/chat/completions` for the lyrics analysis and to
//! `/images/generations` for the artwork. Works with any service that
//! implements those two endpoints.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::{ChatMessage, TextGenerator};
use crate::artwork::{ImageGenerator, ImageRequest};
use crate::config::Config;
use crate::error::{LyricArtError, Result};

/// OpenAI-compatible client.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    /// Create a client sharing an existing HTTP client.
    ///
    /// `config.text_model` is used for chat completions; image requests
    /// carry their own model.
    pub fn with_client(client: Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.openai_api_url.clone(),
            api_key: config.openai_api_key.clone(),
            model: config.text_model.clone(),
        }
    }

    /// POST `body` and decode the JSON answer.
    ///
    /// Failures never surface as `RequestError`, which is reserved for the
    /// catalog and lyrics pages.
    async fn post<T, R>(&self, endpoint: &str, body: &T) -> Result<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(LyricArtError::GenerationRequest)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(upstream_error(status.as_u16(), &body));
        }

        response.json().await.map_err(|e| {
            LyricArtError::InvalidResponse(format!("Failed to parse {} response: {}", endpoint, e))
        })
    }
}

/// Build an `Upstream` error from an OpenAI error body.
fn upstream_error(status: u16, body: &str) -> LyricArtError {
    let (code, message) = match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => (
            envelope.error.code.or(envelope.error.r#type),
            envelope.error.message,
        ),
        Err(_) => (None, body.to_string()),
    };

    LyricArtError::Upstream {
        service: "openai",
        status,
        code,
        message,
    }
}

#[async_trait]
impl TextGenerator for OpenAiClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages,
        };

        debug!(
            model = %self.model,
            message_count = messages.len(),
            "Sending completion request"
        );

        let response: ChatResponse = self.post("chat/completions", &request).await?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                LyricArtError::InvalidResponse("No choices in completion response".to_string())
            })
    }
}

#[async_trait]
impl ImageGenerator for OpenAiClient {
    async fn generate_image(&self, request: &ImageRequest) -> Result<String> {
        debug!(model = %request.model, size = %request.size, "Sending image request");

        let response: ImageResponse = self.post("images/generations", request).await?;

        let first = response
            .data
            .into_iter()
            .next()
            .ok_or_else(|| LyricArtError::InvalidResponse("No image data returned".to_string()))?;

        if let Some(revised) = first.revised_prompt {
            debug!("Revised prompt from model: {}", revised);
        }

        first
            .url
            .ok_or_else(|| LyricArtError::InvalidResponse("Image response missing url".to_string()))
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ImageResponse {
    #[serde(default)]
    data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
struct ImageData {
    url: Option<String>,
    revised_prompt: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    r#type: Option<String>,
    code: Option<String>,
}
