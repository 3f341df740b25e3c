//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Render the config as a commented TOML file
    pub fn to_toml(&self) -> String {
        let seed_line = match self.mock_seed {
            Some(seed) => format!("mock_seed = {}", seed),
            None => "# mock_seed = 42".to_string(),
        };

        format!(
            r#"# creator-suite configuration

# Theme: Studio Dark, Studio Light, Terminal
theme = "{theme}"

# Seed for placeholder analytics/trend data (omit for fresh data each session)
{seed_line}

# Text-generation backend (any OpenAI-compatible chat-completions endpoint)
# The API key is NOT stored here: enter it in the Settings panel.
[generation]
api_url = "{api_url}"
model = "{model}"
temperature = {temperature:?}
max_tokens = {max_tokens}
timeout_secs = {timeout}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# File logging (in addition to the TUI log strip)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            theme = self.theme,
            seed_line = seed_line,
            api_url = self.generation.api_url,
            model = self.generation.model,
            temperature = self.generation.temperature,
            max_tokens = self.generation.max_tokens,
            timeout = self.generation.timeout_secs,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display(),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }
}
