//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Render the config as a commented TOML document
    pub fn to_toml(&self) -> String {
        let content_path = match &self.content_path {
            Some(path) => format!("content_path = {:?}", path.display().to_string()),
            None => "# content_path = \"/path/to/school.toml\"".to_string(),
        };

        format!(
            r#"# campus configuration

# Theme mode: light or dark (press 't' in the TUI to toggle)
theme = "{theme}"

# HTTP front end bind address
bind_addr = "{bind}"

# Site content override (defaults to the content built into the binary)
{content_path}

# Feature flags
[features]
api = {api}
logs_panel = {logs_panel}

# Form submissions (simulated; there is no backend)
[submission]
delay_ms = {delay_ms}
simulate_failure = {simulate_failure}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# File logging (in addition to TUI buffer or stdout)
file_enabled = {log_file_enabled}
file_dir = {log_file_dir:?}
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            theme = self.theme,
            bind = self.bind_addr,
            content_path = content_path,
            api = self.features.api,
            logs_panel = self.features.logs_panel,
            delay_ms = self.submission.delay_ms,
            simulate_failure = self.submission.simulate_failure,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display().to_string(),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }
}
