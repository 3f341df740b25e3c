//! Text-generation backend configuration

use serde::Deserialize;

/// Settings for the chat-completions backend
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    /// Base URL; `/chat/completions` is appended
    pub api_url: String,
    /// Model identifier sent with every request
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Output cap for script generation
    pub max_tokens: u32,
    /// Request timeout; a timeout is reported inline like any other API failure
    pub timeout_secs: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            temperature: 0.7,
            max_tokens: 1000,
            timeout_secs: 60,
        }
    }
}

/// Generation settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileGeneration {
    pub api_url: Option<String>,
    pub model: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub timeout_secs: Option<u64>,
}

impl GenerationConfig {
    /// Create from file config; env overrides win for URL and model
    pub fn from_file(
        file: Option<FileGeneration>,
        api_url_override: Option<String>,
        model_override: Option<String>,
    ) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            api_url: api_url_override
                .or(file.api_url)
                .unwrap_or(defaults.api_url),
            model: model_override.or(file.model).unwrap_or(defaults.model),
            temperature: file
                .temperature
                .map(|t| t.clamp(0.0, 2.0))
                .unwrap_or(defaults.temperature),
            max_tokens: file.max_tokens.unwrap_or(defaults.max_tokens),
            // Zero would disable the timeout entirely
            timeout_secs: file
                .timeout_secs
                .filter(|s| *s > 0)
                .unwrap_or(defaults.timeout_secs),
        }
    }
}
