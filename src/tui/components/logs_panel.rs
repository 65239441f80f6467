//! Logs panel component
//!
//! Shows the tail of the in-memory log buffer. Writing logs to stdout would
//! corrupt the alternate screen, so this panel is where they surface in
//! TUI mode.

use crate::logging::{LogEntry, LogLevel};
use crate::theme::{self, ThemeTokens};
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the most recent entries that fit in `area`
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let tokens = theme::resolve(app.theme_mode);
    let height = area.height.saturating_sub(2) as usize;
    let entries = app.log_buffer.tail(height);

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| ListItem::new(format_log_entry(entry)).style(level_style(entry.level, &tokens)))
        .collect();

    let list = List::new(items).style(tokens.base()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(tokens.border))
            .title(" System Logs (L to hide) "),
    );

    f.render_widget(list, area);
}

/// Format a log entry for display
fn format_log_entry(entry: &LogEntry) -> String {
    format!(
        "[{}] {:5} {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        entry.message
    )
}

/// Color by severity
fn level_style(level: LogLevel, tokens: &ThemeTokens) -> Style {
    match level {
        LogLevel::Error => Style::default()
            .fg(tokens.danger)
            .add_modifier(Modifier::BOLD),
        LogLevel::Warn => Style::default().fg(tokens.danger),
        LogLevel::Info => Style::default().fg(tokens.text_primary),
        LogLevel::Debug | LogLevel::Trace => tokens.muted(),
    }
}
