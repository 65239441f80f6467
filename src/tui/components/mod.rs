// Components module - reusable UI building blocks
//
// Shell components are rendered on every screen:
// - Title bar: school name, theme mode, screen tabs
// - Status bar: key hints and form submission status
// - Logs panel: recent tracing output
//
// Each component is a focused, single-responsibility module.

pub mod formatters;
pub mod logs_panel;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

pub use toast::{Tone, Toast};

use crate::tui::app::App;
use ratatui::{layout::Rect, Frame};

/// Render the title bar (convenience wrapper)
pub fn render_title(f: &mut Frame, area: Rect, app: &App) {
    title_bar::render(f, area, app);
}

/// Render the status bar (convenience wrapper)
pub fn render_status(f: &mut Frame, area: Rect, app: &App) {
    status_bar::render(f, area, app);
}

/// Render the logs panel (convenience wrapper)
pub fn render_logs_panel(f: &mut Frame, area: Rect, app: &App) {
    logs_panel::render(f, area, app);
}

pub use formatters::truncate_to_width;
