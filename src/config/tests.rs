//! Configuration tests
//!
//! The serialized template must parse back into the file layer, and the
//! env > file > defaults precedence must hold for every overridable key.

use super::*;
use std::collections::HashMap;

fn no_env(_: &str) -> Option<String> {
    None
}

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

/// The template written on first run must be valid TOML for FileConfig.
#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let rebuilt = Config::from_sources(parsed.unwrap(), no_env).unwrap();
    assert_eq!(rebuilt.bind_addr, config.bind_addr);
    assert_eq!(rebuilt.theme, config.theme);
    assert_eq!(rebuilt.content_path, None);
    assert_eq!(rebuilt.features, config.features);
    assert_eq!(rebuilt.submission, config.submission);
    assert_eq!(rebuilt.logging, config.logging);
}

#[test]
fn test_config_roundtrip_customised() {
    let mut config = Config::default();
    config.theme = ThemeMode::Dark;
    config.content_path = Some(PathBuf::from("/srv/campus/school.toml"));
    config.features.api = false;
    config.submission.simulate_failure = true;
    config.logging.file_rotation = LogRotation::Hourly;

    let file: FileConfig = toml::from_str(&config.to_toml()).unwrap();
    let rebuilt = Config::from_sources(file, no_env).unwrap();

    assert_eq!(rebuilt.theme, ThemeMode::Dark);
    assert_eq!(
        rebuilt.content_path,
        Some(PathBuf::from("/srv/campus/school.toml"))
    );
    assert!(!rebuilt.features.api);
    assert!(rebuilt.submission.simulate_failure);
    assert_eq!(rebuilt.logging.file_rotation, LogRotation::Hourly);
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_defaults_without_file_or_env() {
    let config = Config::from_sources(FileConfig::default(), no_env).unwrap();
    assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
    assert!(config.enable_tui);
    assert_eq!(config.theme, ThemeMode::Light);
    assert_eq!(config.submission.delay_ms, 1200);
}

#[test]
fn test_env_overrides_file() {
    let file: FileConfig = toml::from_str(
        r#"
bind_addr = "0.0.0.0:3000"
theme = "light"

[submission]
delay_ms = 10
"#,
    )
    .unwrap();

    let env = env_from(&[
        ("CAMPUS_BIND", "127.0.0.1:9999"),
        ("CAMPUS_THEME", "dark"),
        ("CAMPUS_NO_TUI", "1"),
        ("CAMPUS_SUBMIT_DELAY_MS", "0"),
    ]);
    let config = Config::from_sources(file, env).unwrap();

    assert_eq!(config.bind_addr.port(), 9999);
    assert_eq!(config.theme, ThemeMode::Dark);
    assert!(!config.enable_tui);
    assert_eq!(config.submission.delay_ms, 0);
}

#[test]
fn test_file_overrides_defaults() {
    let file: FileConfig = toml::from_str(
        r#"
theme = "dark"

[features]
logs_panel = false

[logging]
level = "debug"
file_rotation = "never"
"#,
    )
    .unwrap();

    let config = Config::from_sources(file, no_env).unwrap();
    assert_eq!(config.theme, ThemeMode::Dark);
    assert!(!config.features.logs_panel);
    assert!(config.features.api);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.file_rotation, LogRotation::Never);
}

#[test]
fn test_invalid_bind_address_is_an_error() {
    let env = env_from(&[("CAMPUS_BIND", "not-an-address")]);
    assert!(Config::from_sources(FileConfig::default(), env).is_err());
}

#[test]
fn test_unknown_theme_falls_back_to_light() {
    let env = env_from(&[("CAMPUS_THEME", "solarized")]);
    let config = Config::from_sources(FileConfig::default(), env).unwrap();
    assert_eq!(config.theme, ThemeMode::Light);
}

#[test]
fn test_blank_content_path_means_embedded() {
    let env = env_from(&[("CAMPUS_CONTENT", "  ")]);
    let config = Config::from_sources(FileConfig::default(), env).unwrap();
    assert_eq!(config.content_path, None);
}

#[test]
fn test_log_rotation_parsing() {
    assert_eq!(LogRotation::parse("HOURLY"), LogRotation::Hourly);
    assert_eq!(LogRotation::parse("never"), LogRotation::Never);
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
}

#[test]
fn test_log_level_is_normalised_or_defaulted() {
    let file: FileConfig = toml::from_str("[logging]\nlevel = \"DEBUG\"").unwrap();
    let config = Config::from_sources(file, no_env).unwrap();
    assert_eq!(config.logging.level, "debug");

    let file: FileConfig = toml::from_str("[logging]\nlevel = \"chatty\"").unwrap();
    let config = Config::from_sources(file, no_env).unwrap();
    assert_eq!(config.logging.level, "info");
}
