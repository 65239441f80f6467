// Text page screen - about, admissions, legal

use crate::theme;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App, index: usize) {
    let tokens = theme::resolve(app.theme_mode);
    let page = &app.content.pages[index];

    let mut lines = Vec::with_capacity(page.paragraphs.len() * 2);
    for paragraph in &page.paragraphs {
        lines.push(Line::raw(paragraph.clone()));
        lines.push(Line::raw(""));
    }

    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", page.title),
            Style::default()
                .fg(tokens.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("· {} ", page.section), tokens.muted()),
    ]);

    let body = Paragraph::new(lines)
        .style(tokens.base())
        .wrap(Wrap { trim: true })
        .scroll((app.page_scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(tokens.border))
                .title(title),
        );

    f.render_widget(body, area);
}
