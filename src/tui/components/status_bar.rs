// Status bar component
//
// Renders context-sensitive key hints on the left and the state of both
// form submissions on the right.

use crate::catalog::SubmissionState;
use crate::theme::{self, ThemeTokens};
use crate::tui::app::{App, Screen};
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar
///
/// Adapts to terminal width: narrow terminals drop the contact line.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let tokens = theme::resolve(app.theme_mode);
    let bp = Breakpoint::from_width(area.width);

    let hints = if app.inspector.is_open() {
        "Esc close · ↑↓ scroll · click outside to close"
    } else if app.contact_editing {
        "Tab next field · Enter on message or Ctrl+S send · Esc stop editing"
    } else {
        match app.current_screen() {
            Screen::Catalog(_) => "←→ category · ↑↓ item · Enter details · Tab screen · t theme",
            Screen::Contact => "Enter edit form · Tab screen · n newsletter · t theme · q quit",
            Screen::Page(_) => "↑↓ scroll · Tab screen · n newsletter · t theme · q quit",
            Screen::Home => "Tab screen · n newsletter · t theme · L logs · q quit",
        }
    };

    let mut spans = vec![Span::styled(format!(" {} ", hints), tokens.muted())];

    for (name, state) in [
        ("newsletter", app.newsletter.state()),
        ("contact", app.contact.state()),
    ] {
        if state != SubmissionState::Idle {
            spans.push(Span::styled(" │ ", tokens.muted()));
            spans.push(submission_span(name, &state, app, &tokens));
        }
    }

    if bp.at_least(Breakpoint::Wide) {
        let school = &app.content.school;
        spans.push(Span::styled(
            format!(" │ {} · {} · up {}", school.phone, school.hours, app.uptime()),
            tokens.muted(),
        ));
    }

    let status = Paragraph::new(Line::from(spans))
        .style(tokens.base())
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(tokens.border)),
        );

    f.render_widget(status, area);
}

fn submission_span(
    name: &str,
    state: &SubmissionState,
    app: &App,
    tokens: &ThemeTokens,
) -> Span<'static> {
    match state {
        SubmissionState::Submitting => Span::styled(
            format!("{} {} sending", app.spinner_char(), name),
            Style::default().fg(tokens.accent),
        ),
        SubmissionState::Succeeded { .. } => {
            Span::styled(format!("✓ {}", name), Style::default().fg(tokens.success))
        }
        SubmissionState::Failed { .. } => {
            Span::styled(format!("✗ {}", name), Style::default().fg(tokens.danger))
        }
        SubmissionState::Idle | SubmissionState::Validating => {
            Span::styled(name.to_string(), tokens.muted())
        }
    }
}
