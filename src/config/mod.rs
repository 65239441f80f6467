//! Configuration for the campus front ends
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/campus/config.toml)
//! 3. Built-in defaults (lowest priority)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::theme::ThemeMode;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod features;
mod observability;
mod serialization;
mod submission;

#[cfg(test)]
mod tests;

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports
// ─────────────────────────────────────────────────────────────────────────────

pub use features::{Features, FileFeatures};
pub use observability::{FileLogging, LogRotation, LoggingConfig};
pub use submission::{FileSubmission, SubmissionConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_BIND: &str = "127.0.0.1:8080";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP front end binds to
    pub bind_addr: SocketAddr,

    /// Whether to run the TUI (disable for headless/server-only mode)
    pub enable_tui: bool,

    /// Initial theme mode
    pub theme: ThemeMode,

    /// Content document override; None uses the embedded content
    pub content_path: Option<PathBuf>,

    /// Feature flags for optional modules
    pub features: Features,

    /// Simulated form submission behaviour
    pub submission: SubmissionConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            enable_tui: true,
            theme: ThemeMode::Light,
            content_path: None,
            features: Features::default(),
            submission: SubmissionConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// What the config file may set. Everything is optional.
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub bind_addr: Option<String>,
    pub theme: Option<String>,
    pub content_path: Option<String>,

    /// Optional [features] section
    pub features: Option<FileFeatures>,

    /// Optional [submission] section
    pub submission: Option<FileSubmission>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/campus/config.toml
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("campus").join("config.toml"))
    }

    /// Write the commented default template on first run
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return;
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists.
    ///
    /// A file that exists but cannot be read or parsed is an error: a broken
    /// config should fail fast, not silently fall back to defaults.
    fn load_file_config() -> Result<FileConfig> {
        let Some(path) = Self::config_path() else {
            return Ok(FileConfig::default());
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents)
                .with_context(|| format!("Failed to parse {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => Err(e).with_context(|| format!("Cannot read {}", path.display())),
        }
    }

    /// Effective configuration for this process (env > file > defaults)
    pub fn from_env() -> Result<Self> {
        let file = Self::load_file_config()?;
        Self::from_sources(file, |key| std::env::var(key).ok())
    }

    /// Merge a parsed file with an environment lookup
    pub(crate) fn from_sources(
        file: FileConfig,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        // Bind address: env > file > default
        let bind = env("CAMPUS_BIND")
            .or(file.bind_addr)
            .unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr = bind
            .parse()
            .with_context(|| format!("Invalid bind address '{}'", bind))?;

        // TUI toggle: env only (runtime flag)
        let enable_tui = env("CAMPUS_NO_TUI")
            .map(|v| v != "1" && v.to_lowercase() != "true")
            .unwrap_or(true);

        // Theme: env > file > default; unknown names fall back to light
        let theme = env("CAMPUS_THEME")
            .or(file.theme)
            .map(|name| {
                ThemeMode::parse(&name).unwrap_or_else(|| {
                    eprintln!("Unknown theme '{}', using light", name);
                    ThemeMode::Light
                })
            })
            .unwrap_or_default();

        // Content override: env > file > embedded
        let content_path = env("CAMPUS_CONTENT")
            .or(file.content_path)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let features = Features::from_file(file.features);
        let logging = LoggingConfig::from_file(file.logging);

        let mut submission = SubmissionConfig::from_file(file.submission);
        if let Some(delay) = env("CAMPUS_SUBMIT_DELAY_MS").and_then(|v| v.parse().ok()) {
            submission.delay_ms = delay;
        }

        Ok(Self {
            bind_addr,
            enable_tui,
            theme,
            content_path,
            features,
            submission,
            logging,
        })
    }
}
