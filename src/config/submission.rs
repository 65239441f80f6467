//! Form submission settings
//!
//! The site has no backend; submissions run a simulated effect whose delay
//! and outcome are configured here.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionConfig {
    /// Simulated network latency in milliseconds
    pub delay_ms: u64,
    /// Make every simulated effect fail (demos of the error path)
    pub simulate_failure: bool,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            delay_ms: 1200,
            simulate_failure: false,
        }
    }
}

/// Submission settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileSubmission {
    pub delay_ms: Option<u64>,
    pub simulate_failure: Option<bool>,
}

impl SubmissionConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileSubmission>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            delay_ms: file.delay_ms.unwrap_or(defaults.delay_ms),
            simulate_failure: file.simulate_failure.unwrap_or(defaults.simulate_failure),
        }
    }
}
