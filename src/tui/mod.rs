// TUI module - Terminal User Interface
//
// This module manages the terminal front end using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard and mouse input, timer ticks)
// - Layered input dispatch onto App
// - Rendering via views::draw

pub mod app;
pub mod components;
pub mod form;
pub mod layout;
pub mod modal;
pub mod views;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use app::{App, Screen};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use form::FormAction;
use modal::ModalAction;
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::config::Config;
use crate::content::SchoolContent;
use crate::logging::LogBuffer;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done, even if the loop failed.
pub async fn run_tui(
    config: Config,
    content: Arc<SchoolContent>,
    log_buffer: LogBuffer,
) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(content, &config, log_buffer);

    let result = run_event_loop(&mut terminal, &mut app).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on terminal input and a redraw timer with tokio::select!. The
/// timer also drives the submission spinner and picks up finished
/// submissions, whose effects run on separate tasks.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(150));

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.tick();
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Modal → Detail → Contact editing → Global → Screen
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    // Ctrl+C always quits, even mid-typing
    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        app.should_quit = true;
        return;
    }

    // Layer 1: Modal captures all input when active
    if handle_modal_input(app, key_event) {
        return;
    }

    // Layer 2: Detail overlay
    if handle_detail_input(app, key_event) {
        return;
    }

    // Layer 3: Contact form while editing
    if app.contact_editing {
        match app.contact_draft.handle_key(key_event) {
            FormAction::None => {}
            FormAction::Submit => app.submit_contact(),
            FormAction::Cancel => app.contact_editing = false,
        }
        return;
    }

    // Layer 4: Global keys
    if handle_global_keys(app, key_event) {
        return;
    }

    // Layer 5: Screen-specific keys
    match app.current_screen() {
        Screen::Catalog(_) => handle_catalog_keys(app, key_event),
        Screen::Page(_) => match key_event.code {
            KeyCode::Up | KeyCode::Char('k') => app.page_scroll = app.page_scroll.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                app.page_scroll = app.page_scroll.saturating_add(1)
            }
            KeyCode::Home => app.page_scroll = 0,
            _ => {}
        },
        Screen::Contact => {
            if matches!(key_event.code, KeyCode::Enter | KeyCode::Char('i')) {
                app.start_contact_editing();
            }
        }
        Screen::Home => {
            // Digits jump straight to a section
            if let KeyCode::Char(c @ '1'..='9') = key_event.code {
                app.set_screen(c as usize - '0' as usize);
            }
        }
    }
}

/// Handle modal input - returns true if modal absorbed the input
fn handle_modal_input(app: &mut App, key_event: KeyEvent) -> bool {
    let Some(modal) = app.modal else {
        return false;
    };

    match modal.handle_input(key_event, &mut app.newsletter_draft) {
        ModalAction::None => {}
        ModalAction::Close => app.modal = None,
        ModalAction::Submit => app.submit_newsletter(),
    }

    true
}

/// Handle detail overlay input - returns true if the overlay is open
fn handle_detail_input(app: &mut App, key_event: KeyEvent) -> bool {
    if !app.inspector.is_open() {
        return false;
    }

    match key_event.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace | KeyCode::Char('q') => {
            app.close_detail()
        }
        KeyCode::Up | KeyCode::Char('k') => app.scroll_detail_up(),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_detail_down(),
        KeyCode::Home => app.detail_scroll = 0,
        KeyCode::Char('t') => app.toggle_theme(),
        _ => {}
    }

    true
}

/// Handle global keys - returns true if handled
fn handle_global_keys(app: &mut App, key_event: KeyEvent) -> bool {
    match key_event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        KeyCode::Char('?') => app.modal = Some(modal::Modal::Help),
        KeyCode::Char('t') | KeyCode::Char('T') => app.toggle_theme(),
        KeyCode::Char('n') | KeyCode::Char('N') => app.open_newsletter(),
        KeyCode::Char('L') => app.toggle_logs(),
        KeyCode::Tab => app.next_screen(),
        KeyCode::BackTab => app.prev_screen(),
        KeyCode::Esc if app.screen != 0 => app.set_screen(0),
        _ => return false,
    }
    true
}

fn handle_catalog_keys(app: &mut App, key_event: KeyEvent) {
    match key_event.code {
        KeyCode::Left | KeyCode::Char('h') => app.prev_category(),
        KeyCode::Right | KeyCode::Char('l') => app.next_category(),
        KeyCode::Up | KeyCode::Char('k') => app.cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => app.cursor_down(),
        KeyCode::Enter => app.inspect_highlighted(),
        KeyCode::Char(c @ '1'..='9') => app.select_category_at(c as usize - '1' as usize),
        _ => {}
    }
}

/// Handle mouse input
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    match mouse_event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            app.click(mouse_event.column, mouse_event.row);
        }
        MouseEventKind::ScrollUp => {
            if app.inspector.is_open() {
                app.scroll_detail_up();
            } else {
                match app.current_screen() {
                    Screen::Catalog(_) => app.cursor_up(),
                    Screen::Page(_) => app.page_scroll = app.page_scroll.saturating_sub(1),
                    _ => {}
                }
            }
        }
        MouseEventKind::ScrollDown => {
            if app.inspector.is_open() {
                app.scroll_detail_down();
            } else {
                match app.current_screen() {
                    Screen::Catalog(_) => app.cursor_down(),
                    Screen::Page(_) => app.page_scroll = app.page_scroll.saturating_add(1),
                    _ => {}
                }
            }
        }
        _ => {}
    }
}
