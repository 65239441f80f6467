// Title bar component
//
// Renders the school name and theme mode on the first line and the screen
// tabs on the second. Uses the inverse surface, like the site header.

use crate::theme;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
    Frame,
};

/// Render the title bar at the top of the screen
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let tokens = theme::resolve(app.theme_mode);
    let bar = tokens.inverse();
    let bp = Breakpoint::from_width(area.width);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let school = &app.content.school;
    let mode = match app.theme_mode {
        theme::ThemeMode::Light => "☀ light",
        theme::ThemeMode::Dark => "☾ dark",
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", school.name),
        bar.add_modifier(Modifier::BOLD),
    )];
    if bp.at_least(Breakpoint::Normal) && !school.tagline.is_empty() {
        spans.push(Span::styled(format!("· {} ", school.tagline), bar));
    }
    let heading = Paragraph::new(Line::from(spans)).style(bar);
    let mode_tag = Paragraph::new(Line::from(format!("{}  ? help ", mode)).right_aligned())
        .style(bar);

    f.render_widget(heading, rows[0]);
    f.render_widget(mode_tag, rows[0]);

    let titles: Vec<Line> = app
        .screens
        .iter()
        .map(|s| Line::from(app.screen_title(*s).to_string()))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.screen)
        .style(bar)
        .highlight_style(tokens.selected())
        .divider("│");

    f.render_widget(tabs, rows[1]);
}
