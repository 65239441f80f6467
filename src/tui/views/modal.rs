// Overlay rendering
//
// Overlays are drawn on top of the main content:
// - Detail: the inspected catalog entry (records its rect for click tests)
// - Help: keyboard shortcuts
// - Newsletter: sign-up box

use super::contact::{message_line, submit_line};
use crate::content::Entry;
use crate::theme::{self, ThemeTokens};
use crate::tui::app::App;
use crate::tui::modal::Modal;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render a modal dialog as a centered overlay
pub fn render(f: &mut Frame, modal: Modal, app: &App) {
    match modal {
        Modal::Help => render_help(f, app),
        Modal::Newsletter => render_newsletter(f, app),
    }
}

/// Calculate centered rect for modal dialog
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn overlay_block<'a>(title: &'a str, hint: &'a str, tokens: &ThemeTokens) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(tokens.accent))
        .title(title)
        .title_bottom(Line::from(hint).centered())
}

/// Render the inspected entry and remember where it went
pub fn render_detail(f: &mut Frame, app: &mut App) {
    let Some(entry) = app.inspector.open_item() else {
        return;
    };
    let tokens = theme::resolve(app.theme_mode);

    let screen = f.area();
    let width = (screen.width * 3 / 4).clamp(30, 90);
    let height = (screen.height * 3 / 4).max(10);
    let area = centered_rect(width, height, screen);

    let paragraph = Paragraph::new(detail_text(entry, &tokens))
        .style(tokens.base())
        .wrap(Wrap { trim: true })
        .scroll((app.detail_scroll, 0))
        .block(overlay_block(
            " Details ",
            " Esc or click outside to close ",
            &tokens,
        ));

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);

    app.detail_area = Some(area);
}

fn detail_text(entry: &Entry, tokens: &ThemeTokens) -> Text<'static> {
    let heading = Style::default()
        .fg(tokens.accent)
        .add_modifier(Modifier::BOLD);
    let label = Style::default()
        .fg(tokens.text_muted)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(Span::styled(entry.title.clone(), heading)),
        Line::from(Span::styled(entry.summary.clone(), tokens.muted())),
        Line::raw(""),
    ];

    for paragraph in entry.body.split("\n\n").filter(|p| !p.trim().is_empty()) {
        lines.push(Line::raw(paragraph.trim().to_string()));
        lines.push(Line::raw(""));
    }

    if !entry.highlights.is_empty() {
        lines.push(Line::from(Span::styled("Highlights", label)));
        for highlight in &entry.highlights {
            lines.push(Line::from(format!("  • {}", highlight)));
        }
        lines.push(Line::raw(""));
    }

    for fact in &entry.facts {
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", fact.label), label),
            Span::raw(fact.value.clone()),
        ]));
    }

    Text::from(lines)
}

/// Render the help modal overlay
fn render_help(f: &mut Frame, app: &App) {
    let tokens = theme::resolve(app.theme_mode);
    let key_style = Style::default().fg(tokens.accent);
    let header_style = Style::default()
        .fg(tokens.text_primary)
        .add_modifier(Modifier::BOLD);

    // Helper to create a keybind line: "    key         description"
    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::raw(desc.to_string()),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Screens", header_style)),
        kb("Tab", "Next screen"),
        kb("Shift+Tab", "Previous screen"),
        Line::raw(""),
        Line::from(Span::styled("  Catalogs", header_style)),
        kb("←/→, h/l", "Previous / next category"),
        kb("1-9", "Jump to category"),
        kb("↑/↓, j/k", "Move through items"),
        kb("Enter", "Open details"),
        kb("Esc, click", "Close details"),
        Line::raw(""),
        Line::from(Span::styled("  Forms", header_style)),
        kb("n", "Newsletter sign-up"),
        kb("Enter", "Edit contact form"),
        kb("Ctrl+S", "Send"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("t", "Toggle light / dark"),
        kb("L", "Show / hide logs"),
        kb("?", "Toggle this help"),
        kb("q", "Quit"),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  Theme: ", tokens.muted()),
            Span::styled(app.theme_mode.as_str(), key_style),
        ]),
    ]);

    let area = centered_rect(46, 29, f.area());
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(tokens.base())
        .block(overlay_block(" Help ", " Press ? or Esc to close ", &tokens));
    f.render_widget(paragraph, area);
}

/// Render the newsletter sign-up box
fn render_newsletter(f: &mut Frame, app: &App) {
    let tokens = theme::resolve(app.theme_mode);
    let state = app.newsletter.state();
    let email = &app.newsletter_draft.fields()[0].value;

    let mut lines = vec![
        Line::from(Span::styled(
            "News and events from school, once a month.",
            tokens.muted(),
        )),
        Line::raw(""),
        Line::from(vec![
            Span::styled("Email  ", tokens.muted()),
            Span::raw(email.clone()),
            Span::styled("▏", Style::default().fg(tokens.accent)),
        ]),
        Line::raw(""),
        submit_line(&state, app, &tokens),
    ];
    if let Some(line) = message_line(&state, &tokens) {
        lines.push(Line::raw(""));
        lines.push(line);
    }

    let area = centered_rect(56, 11, f.area());
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(lines)
        .style(tokens.base())
        .wrap(Wrap { trim: true })
        .block(overlay_block(
            " Newsletter ",
            " Enter subscribe · Esc close ",
            &tokens,
        ));
    f.render_widget(paragraph, area);
}
