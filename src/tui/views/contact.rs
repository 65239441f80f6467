// Contact screen - admissions enquiry form
//
// The submit hint turns into a spinner while the attempt is in flight and
// further submits are ignored. The settled message stays visible under the
// form until the next attempt.

use crate::catalog::SubmissionState;
use crate::theme::{self, ThemeTokens};
use crate::tui::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let tokens = theme::resolve(app.theme_mode);
    let draft = &app.contact_draft;

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let mut lines = Vec::new();
    for (i, field) in draft.fields().iter().enumerate() {
        let focused = app.contact_editing && draft.focused() == i;
        let marker = if field.required { "*" } else { " " };
        let label_style = if focused {
            Style::default()
                .fg(tokens.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            tokens.muted()
        };
        let cursor = if focused { "▏" } else { "" };

        lines.push(Line::from(Span::styled(
            format!("{}{}", field.label, marker),
            label_style,
        )));
        lines.push(Line::from(vec![
            Span::styled("  ", tokens.base()),
            Span::raw(field.value.clone()),
            Span::styled(cursor, Style::default().fg(tokens.accent)),
        ]));
        lines.push(Line::raw(""));
    }

    let state = app.contact.state();
    lines.push(submit_line(&state, app, &tokens));
    if let Some(line) = message_line(&state, &tokens) {
        lines.push(Line::raw(""));
        lines.push(line);
    }

    let title = if app.contact_editing {
        " Contact admissions [editing] "
    } else {
        " Contact admissions (Enter to edit) "
    };
    let form = Paragraph::new(lines)
        .style(tokens.base())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(tokens.panel_border(app.contact_editing)))
                .title(title),
        );
    f.render_widget(form, columns[0]);

    let school = &app.content.school;
    let details = Paragraph::new(vec![
        Line::from(Span::styled("Visit us", tokens.muted())),
        Line::raw(school.address.clone()),
        Line::raw(""),
        Line::from(Span::styled("Call", tokens.muted())),
        Line::raw(school.phone.clone()),
        Line::raw(""),
        Line::from(Span::styled("Write", tokens.muted())),
        Line::raw(school.email.clone()),
        Line::raw(""),
        Line::from(Span::styled("Office hours", tokens.muted())),
        Line::raw(school.hours.clone()),
    ])
    .style(tokens.base())
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(tokens.border))
            .title(" Admissions office "),
    );
    f.render_widget(details, columns[1]);
}

/// "Send" hint, or a spinner while submitting
pub(super) fn submit_line(state: &SubmissionState, app: &App, tokens: &ThemeTokens) -> Line<'static> {
    if *state == SubmissionState::Submitting {
        Line::from(Span::styled(
            format!("{} Sending...", app.spinner_char()),
            Style::default().fg(tokens.text_muted),
        ))
    } else {
        Line::from(Span::styled(
            "[ Send: Ctrl+S ]",
            Style::default()
                .fg(tokens.accent)
                .add_modifier(Modifier::BOLD),
        ))
    }
}

/// Settled message colored by outcome
pub(super) fn message_line(state: &SubmissionState, tokens: &ThemeTokens) -> Option<Line<'static>> {
    let color = match state {
        SubmissionState::Succeeded { .. } => tokens.success,
        SubmissionState::Failed { .. } => tokens.danger,
        _ => return None,
    };
    state
        .message()
        .map(|m| Line::from(Span::styled(m.to_string(), Style::default().fg(color))))
}
