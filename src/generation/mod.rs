//! Text generation abstraction
//!
//! Panels that produce prose (scripts, repurposed posts) go through the
//! [`TextGenerator`] trait. The dashboard never depends on a concrete backend:
//!
//! ```text
//! TextGenerator trait
//! ├── OpenAiGenerator (chat-completions over HTTP, explicit timeout)
//! └── DemoGenerator   (offline outlines, selected with --demo)
//! ```
//!
//! Every failure is an [`ApiError`]. Callers render it inline; a failed
//! generation never ends the session.

pub mod demo;
pub mod openai;

pub use demo::DemoGenerator;
pub use openai::OpenAiGenerator;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role tag on a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single role-tagged message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// What a panel asks the generator for
///
/// The model identifier and endpoint belong to the generator (configuration);
/// the panel only decides the conversation and sampling knobs.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Ordered messages; the system message (if any) comes first
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    /// Cap on generated tokens; `None` leaves it to the provider
    pub max_tokens: Option<u32>,
}

impl GenerationRequest {
    /// System role context followed by a single user prompt
    pub fn new(role_context: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::system(role_context), ChatMessage::user(prompt)],
            temperature: 0.7,
            max_tokens: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// The user prompt (last user message)
    pub fn prompt(&self) -> &str {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
            .unwrap_or("")
    }

    /// The system role context, if present
    pub fn role_context(&self) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.role == Role::System)
            .map(|m| m.content.as_str())
    }
}

/// Errors from the text-generation backend
///
/// All variants are recoverable: panels turn them into inline messages.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// No credential in the session
    #[error("no API key configured")]
    NotConfigured,

    /// Request exceeded the configured timeout
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// Connection-level failure (DNS, TLS, refused)
    #[error("network error: {0}")]
    Network(String),

    /// Credential rejected (401/403)
    #[error("authentication failed (check your API key)")]
    Unauthorized,

    /// Quota or rate limit hit (429)
    #[error("rate limited by provider")]
    RateLimited,

    /// Any other non-success HTTP status
    #[error("provider returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// Response body could not be decoded
    #[error("malformed response: {0}")]
    Malformed(String),

    /// Response decoded but contained no text
    #[error("provider returned no text")]
    EmptyResponse,
}

/// Backend that turns a request into text
///
/// Calls block until the backend answers, fails, or times out.
pub trait TextGenerator: Send + Sync {
    /// Short backend name for logs and the status bar
    fn name(&self) -> &'static str;

    /// Model identifier sent with each request
    fn model(&self) -> &str;

    /// Generate text for `request`, authenticating with `credential`
    fn generate(&self, request: &GenerationRequest, credential: &str)
        -> Result<String, ApiError>;
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_orders_system_before_user() {
        let req = GenerationRequest::new("You are helpful.", "Say hi");
        assert_eq!(req.messages.len(), 2);
        assert_eq!(req.messages[0].role, Role::System);
        assert_eq!(req.role_context(), Some("You are helpful."));
        assert_eq!(req.prompt(), "Say hi");
        assert_eq!(req.max_tokens, None);
    }

    #[test]
    fn builder_sets_sampling_knobs() {
        let req = GenerationRequest::new("ctx", "p")
            .with_temperature(0.2)
            .with_max_tokens(1000);
        assert_eq!(req.temperature, 0.2);
        assert_eq!(req.max_tokens, Some(1000));
    }

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&ChatMessage::user("x")).unwrap();
        assert_eq!(json, r#"{"role":"user","content":"x"}"#);
    }

    #[test]
    fn api_error_messages_are_readable() {
        assert_eq!(ApiError::Timeout(60).to_string(), "request timed out after 60s");
        assert_eq!(
            ApiError::Http {
                status: 500,
                body: "boom".into()
            }
            .to_string(),
            "provider returned HTTP 500: boom"
        );
    }
}
