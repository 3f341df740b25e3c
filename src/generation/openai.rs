//! OpenAI-compatible chat-completions backend
//!
//! Works with any endpoint that speaks the `/chat/completions` dialect
//! (OpenAI, OpenRouter, Azure v1, local gateways). The HTTP client is async;
//! `generate` bridges it into the synchronous render cycle on the current
//! tokio runtime.

use super::{ApiError, GenerationRequest, TextGenerator};
use crate::config::GenerationConfig;
use crate::util::truncate_utf8_safe;
use serde::Deserialize;
use std::time::Duration;

/// Remote generator using the chat-completions API
pub struct OpenAiGenerator {
    client: reqwest::Client,
    base_url: String,
    model: String,
    timeout_secs: u64,
    runtime: tokio::runtime::Handle,
}

impl OpenAiGenerator {
    /// Create a generator from config
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built or no tokio runtime
    /// is active on the calling thread.
    pub fn new(config: &GenerationConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::Network(format!("Failed to create HTTP client: {}", e)))?;

        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|e| ApiError::Network(format!("No async runtime available: {}", e)))?;

        tracing::info!(
            "Initialized chat-completions generator: {} (model: {}, timeout: {}s)",
            config.api_url,
            config.model,
            config.timeout_secs
        );

        Ok(Self {
            client,
            base_url: config.api_url.clone(),
            model: config.model.clone(),
            timeout_secs: config.timeout_secs,
            runtime,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    /// JSON body for a request
    fn request_body(&self, request: &GenerationRequest) -> serde_json::Value {
        let mut body = serde_json::json!({
            "model": self.model,
            "messages": request.messages,
            "temperature": request.temperature,
        });
        if let Some(max_tokens) = request.max_tokens {
            body["max_tokens"] = serde_json::json!(max_tokens);
        }
        body
    }

    async fn send(&self, request: &GenerationRequest, credential: &str) -> Result<String, ApiError> {
        let response = self
            .client
            .post(self.endpoint())
            .header("Authorization", format!("Bearer {}", credential))
            .header("Content-Type", "application/json")
            .json(&self.request_body(request))
            .send()
            .await
            .map_err(|e| classify(e, self.timeout_secs))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| classify(e, self.timeout_secs))?;

        parse_completion(status, &body)
    }
}

impl TextGenerator for OpenAiGenerator {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn generate(&self, request: &GenerationRequest, credential: &str) -> Result<String, ApiError> {
        if credential.is_empty() {
            return Err(ApiError::NotConfigured);
        }

        tracing::debug!(
            "Sending chat completion ({} messages, temperature {})",
            request.messages.len(),
            request.temperature
        );

        let result = tokio::task::block_in_place(|| {
            self.runtime.block_on(self.send(request, credential))
        });

        match &result {
            Ok(text) => tracing::info!("Generation complete ({} chars)", text.len()),
            Err(e) => tracing::warn!("Generation failed: {}", e),
        }
        result
    }
}

/// Map a transport error to an `ApiError`
fn classify(error: reqwest::Error, timeout_secs: u64) -> ApiError {
    if error.is_timeout() {
        ApiError::Timeout(timeout_secs)
    } else {
        ApiError::Network(error.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Longest raw error body carried into an inline message
const MAX_ERROR_BODY: usize = 300;

/// Turn a status code and body into generated text or an error
fn parse_completion(status: u16, body: &str) -> Result<String, ApiError> {
    match status {
        200..=299 => {}
        401 | 403 => return Err(ApiError::Unauthorized),
        429 => return Err(ApiError::RateLimited),
        _ => {
            // Prefer the provider's own message when the body is the usual envelope
            let message = serde_json::from_str::<ErrorEnvelope>(body)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| truncate_utf8_safe(body.trim(), MAX_ERROR_BODY).to_string());
            return Err(ApiError::Http {
                status,
                body: message,
            });
        }
    }

    let parsed: CompletionResponse =
        serde_json::from_str(body).map_err(|e| ApiError::Malformed(e.to_string()))?;

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .filter(|text| !text.is_empty())
        .ok_or(ApiError::EmptyResponse)
}
