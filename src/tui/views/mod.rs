// Views module - screen-level rendering logic
//
// Each screen is a full-width experience between the title and status bars:
// - Home: school facts and section index
// - Catalog: category tabs, item list, optional preview
// - Page: a plain text page
// - Contact: admissions contact form
//
// This module lays out the shell and dispatches on the current screen.
// Every color comes from `theme::resolve(app.theme_mode)`, read per frame.

mod catalog;
mod contact;
mod home;
mod modal;
mod page;

use super::app::{App, Screen};
use crate::theme;
use crate::tui::components;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::widgets::Block;
use ratatui::Frame;

/// Height of the logs panel when shown
const LOGS_HEIGHT: u16 = 8;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let tokens = theme::resolve(app.theme_mode);

    // Theme surface behind everything
    f.render_widget(Block::default().style(tokens.base()), f.area());

    let mut constraints = vec![Constraint::Length(2), Constraint::Min(6)];
    if app.show_logs {
        constraints.push(Constraint::Length(LOGS_HEIGHT));
    }
    constraints.push(Constraint::Length(2));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    components::render_title(f, chunks[0], app);

    let content = chunks[1];
    match app.current_screen() {
        Screen::Home => home::render(f, content, app),
        Screen::Catalog(i) => catalog::render(f, content, app, i),
        Screen::Page(i) => page::render(f, content, app, i),
        Screen::Contact => contact::render(f, content, app),
    }

    if app.show_logs {
        components::render_logs_panel(f, chunks[2], app);
    }
    components::render_status(f, chunks[chunks.len() - 1], app);

    // Overlays: detail, then modal, then toast on top of everything
    if app.inspector.is_open() {
        modal::render_detail(f, app);
    }
    if let Some(open) = app.modal {
        modal::render(f, open, app);
    }
    if let Some(ref toast) = app.toast {
        let area = f.area();
        toast.render(f, area, &tokens);
    }

    app.clear_expired_toast();
}
