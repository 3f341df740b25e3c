//! Configuration tests
//!
//! Round-trips guard the template format: whatever `to_toml()` writes must be
//! readable by `FileConfig`, and every persisted field must survive the trip.

use super::*;
use std::collections::HashMap;

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

fn no_env() -> impl Fn(&str) -> Option<String> {
    env_from(&[])
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed = Config::parse_file_config(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );
}

#[test]
fn test_config_roundtrip_preserves_values() {
    let mut config = Config::default();
    config.theme = "Terminal".to_string();
    config.mock_seed = Some(7);
    config.generation.model = "gpt-4o-mini".to_string();
    config.generation.temperature = 1.0;
    config.generation.timeout_secs = 15;
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Hourly;

    let file = Config::parse_file_config(&config.to_toml()).expect("template parses");
    let resolved = Config::resolve(file, no_env());

    assert_eq!(resolved.theme, "Terminal");
    assert_eq!(resolved.mock_seed, Some(7));
    assert_eq!(resolved.generation, config.generation);
    assert!(resolved.logging.file_enabled);
    assert_eq!(resolved.logging.file_rotation, LogRotation::Hourly);
}

#[test]
fn test_template_never_contains_a_credential_key() {
    let toml_str = Config::default().to_toml();
    assert!(!toml_str.contains("api_key ="));
    assert!(!toml_str.contains("api_credential"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_env_overrides_file() {
    let file = Config::parse_file_config(
        r#"
theme = "Studio Light"
[generation]
model = "from-file"
api_url = "https://file.example/v1"
"#,
    )
    .unwrap();

    let config = Config::resolve(
        file,
        env_from(&[
            ("CREATOR_SUITE_THEME", "Terminal"),
            ("CREATOR_SUITE_MODEL", "from-env"),
        ]),
    );

    assert_eq!(config.theme, "Terminal");
    assert_eq!(config.generation.model, "from-env");
    // Not overridden: file value survives
    assert_eq!(config.generation.api_url, "https://file.example/v1");
}

#[test]
fn test_missing_sections_use_defaults() {
    let config = Config::resolve(FileConfig::default(), no_env());
    assert_eq!(config.theme, DEFAULT_THEME);
    assert!(!config.demo_mode);
    assert_eq!(config.mock_seed, None);
    assert_eq!(config.generation, GenerationConfig::default());
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_demo_flag_parsing() {
    for (value, expected) in [("1", true), ("true", true), ("TRUE", true), ("0", false)] {
        let config = Config::resolve(
            FileConfig::default(),
            env_from(&[("CREATOR_SUITE_DEMO", value)]),
        );
        assert_eq!(config.demo_mode, expected, "CREATOR_SUITE_DEMO={}", value);
    }
}

#[test]
fn test_invalid_seed_env_falls_back_to_file() {
    let file = Config::parse_file_config("mock_seed = 3").unwrap();
    let config = Config::resolve(file, env_from(&[("CREATOR_SUITE_SEED", "abc")]));
    assert_eq!(config.mock_seed, Some(3));
}

#[test]
fn test_zero_timeout_is_rejected() {
    let file = Config::parse_file_config("[generation]\ntimeout_secs = 0").unwrap();
    let config = Config::resolve(file, no_env());
    assert_eq!(config.generation.timeout_secs, 60);
}

#[test]
fn test_unknown_rotation_defaults_to_daily() {
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
    assert_eq!(LogRotation::parse("NEVER"), LogRotation::Never);
}

#[test]
fn test_malformed_file_is_an_error() {
    assert!(Config::parse_file_config("theme = [unclosed").is_err());
}
