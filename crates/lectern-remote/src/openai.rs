//! OpenAI-compatible API client: embeddings and chat completions.

use lectern_core::config::defaults;
use lectern_core::errors::{EncodingError, LecternResult, SynthesisError};
use lectern_core::traits::{ICompletionProvider, IDenseEmbedder};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default public API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Fixed system message for completion calls.
const SYSTEM_MESSAGE: &str = "You are a helpful assistant.";

/// Client for an OpenAI-compatible HTTP API.
///
/// One instance serves both the embedding and the completion capability;
/// construct once and share behind `Arc`.
pub struct OpenAiClient {
    http: Client,
    base_url: String,
    api_key: String,
    embedding_model: String,
    embedding_dimensions: usize,
    completion_model: String,
}

impl OpenAiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            embedding_model: defaults::DEFAULT_EMBEDDING_MODEL.to_string(),
            embedding_dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            completion_model: defaults::DEFAULT_COMPLETION_MODEL.to_string(),
        }
    }

    /// Point the client at a different endpoint (proxies, tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_embedding_model(mut self, model: impl Into<String>, dimensions: usize) -> Self {
        self.embedding_model = model.into();
        self.embedding_dimensions = dimensions;
        self
    }

    pub fn with_completion_model(mut self, model: impl Into<String>) -> Self {
        self.completion_model = model.into();
        self
    }
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    input: [&'a str; 1],
    model: &'a str,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingDatum>,
}

#[derive(Deserialize)]
struct EmbeddingDatum {
    embedding: Vec<f32>,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl IDenseEmbedder for OpenAiClient {
    fn embed(&self, text: &str) -> LecternResult<Vec<f32>> {
        let unavailable = |reason: String| EncodingError::EmbeddingUnavailable { reason };

        let response = self
            .http
            .post(format!("{}/embeddings", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&EmbeddingRequest {
                input: [text],
                model: &self.embedding_model,
            })
            .send()
            .map_err(|e| unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(unavailable(format!("HTTP {}", response.status())).into());
        }

        let body: EmbeddingResponse = response.json().map_err(|e| unavailable(e.to_string()))?;
        let embedding = body
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| unavailable("response carried no embedding".to_string()))?;

        debug!(
            dims = embedding.len(),
            model = %self.embedding_model,
            "embedding fetched"
        );
        Ok(embedding)
    }

    fn dimensions(&self) -> usize {
        self.embedding_dimensions
    }

    fn model(&self) -> &str {
        &self.embedding_model
    }
}

impl ICompletionProvider for OpenAiClient {
    fn complete(&self, prompt: &str, temperature: f32) -> LecternResult<String> {
        let unavailable = |reason: String| SynthesisError::CompletionUnavailable { reason };

        let request = ChatRequest {
            model: &self.completion_model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_MESSAGE,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature,
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .map_err(|e| unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(unavailable(format!("HTTP {}", response.status())).into());
        }

        let body: ChatResponse = response.json().map_err(|e| unavailable(e.to_string()))?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        debug!(
            chars = content.len(),
            model = %self.completion_model,
            "completion fetched"
        );
        Ok(content)
    }

    fn model(&self) -> &str {
        &self.completion_model
    }
}
