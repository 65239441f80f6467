// Startup module - displays banner and front end status
//
// Printed before the TUI takes over the screen (or in headless mode), and
// mirrored into the log panel so the boot sequence stays visible in the TUI.

use crate::config::{Config, VERSION};
use crate::content::SchoolContent;

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const MAGENTA: &str = "\x1b[35m";
}

/// Module loading result for display
pub struct ModuleStatus {
    pub name: &'static str,
    pub enabled: bool,
    pub description: &'static str,
}

/// Print the startup banner and module status
pub fn print_startup(config: &Config, content: &SchoolContent) {
    use colors::*;

    println!();
    println!("  {BOLD}{CYAN}Campus{RESET} {DIM}v{VERSION}{RESET}");
    println!("  {DIM}{}{RESET}", content.school.name);
    println!();

    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("  {DIM}Config:{RESET} {GREEN}✓{RESET} {}", path.display());
        } else {
            println!("  {DIM}Config:{RESET} {DIM}(using defaults){RESET}");
        }
    }
    match &config.content_path {
        Some(path) => println!("  {DIM}Content:{RESET} {GREEN}✓{RESET} {}", path.display()),
        None => println!("  {DIM}Content:{RESET} {DIM}(embedded){RESET}"),
    }
    println!();

    println!("  {DIM}Loading modules...{RESET}");
    for module in &module_status(config) {
        print_module_status(module);
    }
    println!();

    if config.features.api {
        println!(
            "  {MAGENTA}▸{RESET} Site API on {BOLD}http://{}{RESET}",
            config.bind_addr
        );
    }
    if config.submission.simulate_failure {
        println!("  {YELLOW}▸{RESET} {YELLOW}Form submissions will fail{RESET} {DIM}(simulated){RESET}");
    }
    println!();
}

/// Status of each front end and optional module
fn module_status(config: &Config) -> Vec<ModuleStatus> {
    vec![
        ModuleStatus {
            name: "catalogs",
            enabled: true,
            description: "Taxonomy explorer",
        },
        ModuleStatus {
            name: "forms",
            enabled: true,
            description: "Newsletter and contact",
        },
        ModuleStatus {
            name: "tui",
            enabled: config.enable_tui,
            description: "Terminal interface",
        },
        ModuleStatus {
            name: "api",
            enabled: config.features.api,
            description: "JSON site API",
        },
        ModuleStatus {
            name: "logs",
            enabled: config.features.logs_panel && config.enable_tui,
            description: "Logs panel",
        },
        ModuleStatus {
            name: "file-log",
            enabled: config.logging.file_enabled,
            description: "Rolling JSON log files",
        },
    ]
}

fn print_module_status(module: &ModuleStatus) {
    use colors::*;

    let (icon, style) = if module.enabled {
        (format!("{GREEN}✓{RESET}"), "")
    } else {
        (format!("{DIM}○{RESET}"), DIM)
    };

    println!(
        "    {icon} {style}{:<12}{RESET} {DIM}{}{RESET}",
        module.name, module.description
    );
}

/// Print startup messages to the TUI log panel
pub fn log_startup(config: &Config, content: &SchoolContent) {
    tracing::info!("Campus v{} - {}", VERSION, content.school.name);

    for module in &module_status(config) {
        let icon = if module.enabled { "✓" } else { "○" };
        tracing::info!("  {} {} - {}", icon, module.name, module.description);
    }

    tracing::info!(
        pages = content.pages.len(),
        catalogs = content.catalogs.len(),
        "Content loaded"
    );

    if config.features.api {
        tracing::info!("▸ Site API on http://{}", config.bind_addr);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_status_follows_config() {
        let mut config = Config::default();
        config.enable_tui = false;
        config.features.api = false;

        let modules = module_status(&config);
        let enabled = |name: &str| {
            modules
                .iter()
                .find(|m| m.name == name)
                .map(|m| m.enabled)
                .unwrap()
        };

        assert!(enabled("catalogs"));
        assert!(!enabled("tui"));
        assert!(!enabled("api"));
        // logs panel only makes sense inside the TUI
        assert!(!enabled("logs"));
    }
}
