// Home screen - school facts and an index of sections

use crate::theme;
use crate::tui::app::{App, Screen};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let tokens = theme::resolve(app.theme_mode);
    let school = &app.content.school;

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let label = Style::default()
        .fg(tokens.text_muted)
        .add_modifier(Modifier::BOLD);
    let fact = |name: &'static str, value: &str| {
        Line::from(vec![
            Span::styled(format!("{:<9}", name), label),
            Span::raw(value.to_string()),
        ])
    };

    let mut lines = vec![
        Line::from(Span::styled(
            school.name.clone(),
            Style::default()
                .fg(tokens.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(school.tagline.clone(), tokens.muted())),
        Line::raw(""),
        fact("Address", &school.address),
        fact("Phone", &school.phone),
        fact("Email", &school.email),
        fact("Hours", &school.hours),
    ];

    // Lead paragraph of the about page, when there is one
    if let Some(intro) = app
        .content
        .page("about")
        .and_then(|p| p.paragraphs.first())
    {
        lines.push(Line::raw(""));
        lines.push(Line::raw(intro.clone()));
    }

    let facts = Paragraph::new(lines)
        .style(tokens.base())
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(tokens.border))
                .title(" Welcome "),
        );
    f.render_widget(facts, columns[0]);

    let index: Vec<Line> = app
        .screens
        .iter()
        .enumerate()
        .skip(1)
        .map(|(i, screen)| {
            let kind = match screen {
                Screen::Catalog(_) => "catalog",
                Screen::Page(_) => "page",
                Screen::Contact => "form",
                Screen::Home => "",
            };
            Line::from(vec![
                Span::styled(format!("{:>2}  ", i), tokens.muted()),
                Span::raw(app.screen_title(*screen).to_string()),
                Span::styled(format!("  {}", kind), tokens.muted()),
            ])
        })
        .collect();

    let sections = Paragraph::new(index).style(tokens.base()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(tokens.border))
            .title(" Sections (Tab to browse) "),
    );
    f.render_widget(sections, columns[1]);
}
