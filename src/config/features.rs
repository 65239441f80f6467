//! Feature flags configuration
//!
//! Feature flags for optional modules (opt-out: default enabled).

use serde::Deserialize;

/// Feature flags for optional modules (opt-out: default enabled)
#[derive(Debug, Clone, PartialEq)]
pub struct Features {
    /// HTTP JSON front end
    pub api: bool,

    /// System logs panel at the bottom of the TUI
    pub logs_panel: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            api: true,
            logs_panel: true,
        }
    }
}

/// Feature flags as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileFeatures {
    pub api: Option<bool>,
    pub logs_panel: Option<bool>,
}

impl Features {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileFeatures>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            api: file.api.unwrap_or(defaults.api),
            logs_panel: file.logs_panel.unwrap_or(defaults.logs_panel),
        }
    }
}
