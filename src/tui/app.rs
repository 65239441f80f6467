// TUI application state
//
// Owns one TaxonomySelector per catalog page, the shared DetailInspector,
// both form submissions and the theme mode. Key and mouse handlers in
// tui/mod.rs translate input into calls on this struct; rendering reads
// from it each frame.

use std::sync::Arc;
use std::time::Instant;

use ratatui::layout::{Position, Rect};

use super::components::{Tone, Toast};
use super::form::FormDraft;
use super::modal::Modal;
use crate::catalog::{ClickTarget, DetailInspector, SubmissionState, TaxonomySelector};
use crate::config::Config;
use crate::content::{Catalog, Entry, SchoolContent};
use crate::forms::{self, ContactSubmission, NewsletterSubmission};
use crate::logging::LogBuffer;
use crate::theme::ThemeMode;

/// Spinner frames for in-flight submissions
const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

/// Top-level screens, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    /// Index into `SchoolContent::catalogs`
    Catalog(usize),
    /// Index into `SchoolContent::pages`
    Page(usize),
    Contact,
}

/// Explorer state for one catalog page
#[derive(Debug, Clone)]
pub struct CatalogView {
    pub selector: TaxonomySelector<Entry>,
    /// Highlighted row in the selected category's item list
    pub cursor: usize,
}

impl CatalogView {
    fn new(catalog: &Catalog) -> Self {
        Self {
            selector: catalog.selector(),
            cursor: 0,
        }
    }

    /// Item under the cursor, if the category has any
    pub fn highlighted(&self) -> Option<&Entry> {
        self.selector.current_items().get(self.cursor)
    }
}

/// Main application state for the TUI
pub struct App {
    pub content: Arc<SchoolContent>,

    /// Tabs shown in the title bar
    pub screens: Vec<Screen>,
    /// Index into `screens`
    pub screen: usize,

    /// One per catalog, parallel to `content.catalogs`
    pub catalogs: Vec<CatalogView>,

    /// Entry detail overlay
    pub inspector: DetailInspector<Entry>,
    pub detail_scroll: u16,
    /// Where the detail overlay was last drawn, for click hit-testing
    pub detail_area: Option<Rect>,

    /// Scroll offset on text pages
    pub page_scroll: u16,

    /// Help or newsletter overlay
    pub modal: Option<Modal>,

    pub newsletter: NewsletterSubmission,
    pub newsletter_draft: FormDraft,
    pub contact: ContactSubmission,
    pub contact_draft: FormDraft,
    /// Keys go to the contact form instead of navigation
    pub contact_editing: bool,

    pub theme_mode: ThemeMode,

    pub toast: Option<Toast>,

    pub log_buffer: LogBuffer,
    pub show_logs: bool,

    pub should_quit: bool,

    pub start_time: Instant,
    animation_frame: usize,
}

impl App {
    pub fn new(content: Arc<SchoolContent>, config: &Config, log_buffer: LogBuffer) -> Self {
        let mut screens = vec![Screen::Home];
        screens.extend((0..content.catalogs.len()).map(Screen::Catalog));
        screens.extend((0..content.pages.len()).map(Screen::Page));
        screens.push(Screen::Contact);

        let catalogs = content.catalogs.iter().map(CatalogView::new).collect();

        Self {
            screens,
            screen: 0,
            catalogs,
            inspector: DetailInspector::new(),
            detail_scroll: 0,
            detail_area: None,
            page_scroll: 0,
            modal: None,
            newsletter: forms::newsletter(&config.submission),
            newsletter_draft: FormDraft::newsletter(),
            contact: forms::contact(&config.submission),
            contact_draft: FormDraft::contact(),
            contact_editing: false,
            theme_mode: config.theme,
            toast: None,
            log_buffer,
            show_logs: config.features.logs_panel,
            should_quit: false,
            start_time: Instant::now(),
            animation_frame: 0,
            content,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Screens
    // ─────────────────────────────────────────────────────────────────────

    pub fn current_screen(&self) -> Screen {
        self.screens[self.screen]
    }

    /// Display name of a screen, used for tabs
    pub fn screen_title(&self, screen: Screen) -> &str {
        match screen {
            Screen::Home => "Home",
            Screen::Catalog(i) => &self.content.catalogs[i].title,
            Screen::Page(i) => &self.content.pages[i].title,
            Screen::Contact => "Contact",
        }
    }

    pub fn set_screen(&mut self, index: usize) {
        if index >= self.screens.len() || index == self.screen {
            return;
        }
        self.screen = index;
        self.page_scroll = 0;
        self.contact_editing = false;
        self.close_detail();
    }

    pub fn next_screen(&mut self) {
        self.set_screen((self.screen + 1) % self.screens.len());
    }

    pub fn prev_screen(&mut self) {
        self.set_screen((self.screen + self.screens.len() - 1) % self.screens.len());
    }

    /// Jump to the catalog with this id, if there is one
    pub fn open_catalog(&mut self, id: &str) {
        let target = self
            .content
            .catalogs
            .iter()
            .position(|c| c.id == id)
            .and_then(|i| self.screens.iter().position(|s| *s == Screen::Catalog(i)));
        if let Some(index) = target {
            self.set_screen(index);
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Catalog explorer
    // ─────────────────────────────────────────────────────────────────────

    /// Explorer state for the current screen, if it is a catalog
    pub fn active_catalog(&self) -> Option<(&Catalog, &CatalogView)> {
        match self.current_screen() {
            Screen::Catalog(i) => Some((&self.content.catalogs[i], &self.catalogs[i])),
            _ => None,
        }
    }

    fn active_view_mut(&mut self) -> Option<&mut CatalogView> {
        match self.current_screen() {
            Screen::Catalog(i) => self.catalogs.get_mut(i),
            _ => None,
        }
    }

    pub fn next_category(&mut self) {
        if let Some(view) = self.active_view_mut() {
            view.selector.select_next();
            view.cursor = 0;
        }
    }

    pub fn prev_category(&mut self) {
        if let Some(view) = self.active_view_mut() {
            view.selector.select_prev();
            view.cursor = 0;
        }
    }

    /// Select a category by id; unknown ids leave everything as it was
    pub fn select_category(&mut self, id: &str) {
        if let Some(view) = self.active_view_mut() {
            let before = view.selector.selected_index();
            view.selector.select(id);
            if view.selector.selected_index() != before {
                view.cursor = 0;
            }
        }
    }

    /// Select the n-th category (0-based), as typed with the digit keys
    pub fn select_category_at(&mut self, n: usize) {
        let id = self
            .active_catalog()
            .and_then(|(_, view)| view.selector.categories().get(n))
            .map(|c| c.id.clone());
        if let Some(id) = id {
            self.select_category(&id);
        }
    }

    pub fn cursor_up(&mut self) {
        if let Some(view) = self.active_view_mut() {
            view.cursor = view.cursor.saturating_sub(1);
        }
    }

    pub fn cursor_down(&mut self) {
        if let Some(view) = self.active_view_mut() {
            let last = view.selector.current_items().len().saturating_sub(1);
            view.cursor = (view.cursor + 1).min(last);
        }
    }

    /// Open the detail overlay on the highlighted item
    pub fn inspect_highlighted(&mut self) {
        let item = self
            .active_catalog()
            .and_then(|(_, view)| view.highlighted())
            .cloned();
        if let Some(item) = item {
            self.detail_scroll = 0;
            self.inspector.open(item);
        }
    }

    pub fn close_detail(&mut self) {
        self.inspector.close();
        self.detail_area = None;
    }

    /// Mouse click at a terminal cell.
    ///
    /// With the detail overlay open, a click outside it closes it and a
    /// click inside does nothing.
    pub fn click(&mut self, column: u16, row: u16) {
        if !self.inspector.is_open() {
            return;
        }
        let inside = self
            .detail_area
            .is_some_and(|area| area.contains(Position::new(column, row)));
        let target = if inside {
            ClickTarget::Content
        } else {
            ClickTarget::Backdrop
        };
        if self.inspector.handle_click(target) {
            self.detail_area = None;
        }
    }

    pub fn scroll_detail_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
    }

    pub fn scroll_detail_down(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_add(1);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Forms
    // ─────────────────────────────────────────────────────────────────────

    /// Show the newsletter box with no leftover message
    pub fn open_newsletter(&mut self) {
        self.poll_submissions();
        self.newsletter.reset();
        self.modal = Some(Modal::Newsletter);
    }

    /// Start a newsletter attempt; the effect runs on the tokio runtime
    pub fn submit_newsletter(&mut self) {
        let attempt = self.newsletter.submit(self.newsletter_draft.newsletter_input());
        self.newsletter_draft.pending = true;
        tokio::spawn(attempt);
    }

    /// Focus the contact form, clearing the last attempt's message
    pub fn start_contact_editing(&mut self) {
        self.poll_submissions();
        self.contact.reset();
        self.contact_editing = true;
    }

    /// Start a contact attempt; the effect runs on the tokio runtime
    pub fn submit_contact(&mut self) {
        let attempt = self.contact.submit(self.contact_draft.contact_input());
        self.contact_draft.pending = true;
        tokio::spawn(attempt);
    }

    /// Pick up settled submissions: clear drafts on success, toast the message
    pub fn poll_submissions(&mut self) {
        let newsletter = settle(&self.newsletter.state(), &mut self.newsletter_draft);
        if let Some((message, tone)) = newsletter {
            self.show_toast(message, tone);
        }
        if let Some((message, tone)) = settle(&self.contact.state(), &mut self.contact_draft) {
            if tone == Tone::Success {
                self.contact_editing = false;
            }
            self.show_toast(message, tone);
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Chrome
    // ─────────────────────────────────────────────────────────────────────

    pub fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggle();
        tracing::debug!(mode = %self.theme_mode, "theme toggled");
        self.show_toast(format!("{} mode", self.theme_mode), Tone::Info);
    }

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
    }

    pub fn show_toast(&mut self, message: impl Into<String>, tone: Tone) {
        self.toast = Some(Toast::new(message, tone));
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    /// Timer tick: advance the spinner and pick up finished submissions
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
        self.poll_submissions();
    }

    pub fn spinner_char(&self) -> char {
        SPINNER[self.animation_frame % SPINNER.len()]
    }

    pub fn uptime(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs();
        format!("{:02}:{:02}", seconds / 60, seconds % 60)
    }
}

/// Acknowledge a settled attempt once; returns the message to announce
fn settle(state: &SubmissionState, draft: &mut FormDraft) -> Option<(String, Tone)> {
    if !draft.pending || !state.is_settled() {
        return None;
    }
    draft.pending = false;
    let tone = if matches!(state, SubmissionState::Succeeded { .. }) {
        draft.clear();
        Tone::Success
    } else {
        Tone::Failure
    };
    state.message().map(|m| (m.to_string(), tone))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FailureCause;
    use crate::config::SubmissionConfig;

    fn app() -> App {
        let mut config = Config::default();
        config.submission = SubmissionConfig {
            delay_ms: 0,
            simulate_failure: false,
        };
        let content = Arc::new(SchoolContent::embedded().unwrap());
        App::new(content, &config, LogBuffer::new())
    }

    fn subjects(app: &mut App) {
        app.open_catalog("subjects");
        assert!(matches!(app.current_screen(), Screen::Catalog(_)));
    }

    #[test]
    fn test_screens_cover_catalogs_pages_and_contact() {
        let app = app();
        assert_eq!(app.screens[0], Screen::Home);
        assert_eq!(*app.screens.last().unwrap(), Screen::Contact);
        assert_eq!(
            app.screens.len(),
            2 + app.content.catalogs.len() + app.content.pages.len()
        );
    }

    #[test]
    fn test_screen_cycling_wraps() {
        let mut app = app();
        app.prev_screen();
        assert_eq!(app.current_screen(), Screen::Contact);
        app.next_screen();
        assert_eq!(app.current_screen(), Screen::Home);
    }

    #[test]
    fn test_category_change_resets_cursor() {
        let mut app = app();
        subjects(&mut app);
        app.cursor_down();
        assert_eq!(app.active_catalog().unwrap().1.cursor, 1);

        app.next_category();
        let (_, view) = app.active_catalog().unwrap();
        assert_eq!(view.selector.current_category().id, "sciences");
        assert_eq!(view.cursor, 0);
    }

    #[test]
    fn test_unknown_category_keeps_cursor_and_selection() {
        let mut app = app();
        subjects(&mut app);
        app.cursor_down();
        app.select_category("astrology");

        let (_, view) = app.active_catalog().unwrap();
        assert_eq!(view.selector.current_category().id, "core");
        assert_eq!(view.cursor, 1);
    }

    #[test]
    fn test_digit_selection_and_cursor_clamp() {
        let mut app = app();
        subjects(&mut app);
        app.select_category_at(1);
        for _ in 0..10 {
            app.cursor_down();
        }
        let (_, view) = app.active_catalog().unwrap();
        assert_eq!(view.selector.current_category().id, "sciences");
        assert_eq!(view.highlighted().unwrap().id, "physics");

        // Out of range index is ignored
        app.select_category_at(42);
        assert_eq!(
            app.active_catalog().unwrap().1.selector.current_category().id,
            "sciences"
        );
    }

    #[test]
    fn test_inspect_and_click_containment() {
        let mut app = app();
        subjects(&mut app);
        app.inspect_highlighted();
        assert_eq!(app.inspector.open_item().unwrap().id, "mathematics");

        app.detail_area = Some(Rect::new(10, 5, 40, 10));
        app.click(20, 8);
        assert!(app.inspector.is_open());

        app.click(0, 0);
        assert!(!app.inspector.is_open());
        assert_eq!(app.detail_area, None);
    }

    #[test]
    fn test_leaving_a_screen_closes_detail() {
        let mut app = app();
        subjects(&mut app);
        app.inspect_highlighted();
        app.next_screen();
        assert!(!app.inspector.is_open());
    }

    #[test]
    fn test_inspect_outside_catalog_is_noop() {
        let mut app = app();
        app.inspect_highlighted();
        assert!(!app.inspector.is_open());
    }

    #[test]
    fn test_theme_toggle_round_trips() {
        let mut app = app();
        let start = app.theme_mode;
        app.toggle_theme();
        assert_ne!(app.theme_mode, start);
        app.toggle_theme();
        assert_eq!(app.theme_mode, start);
    }

    #[tokio::test]
    async fn test_invalid_newsletter_settles_without_clearing() {
        let mut app = app();
        for c in "not-an-email".chars() {
            app.newsletter_draft.insert(c);
        }
        app.submit_newsletter();
        app.poll_submissions();

        assert!(matches!(
            app.newsletter.state(),
            SubmissionState::Failed {
                cause: FailureCause::Validation,
                ..
            }
        ));
        assert_eq!(app.newsletter_draft.newsletter_input().email, "not-an-email");
        assert_eq!(
            app.toast.as_ref().map(|t| t.message.as_str()),
            Some(forms::INVALID_EMAIL)
        );
        assert_eq!(app.toast.as_ref().map(|t| t.tone), Some(Tone::Failure));
    }

    #[tokio::test]
    async fn test_successful_contact_clears_draft() {
        let mut app = app();
        app.contact_editing = true;
        for (i, text) in ["Ana", "ana@example.com", "", "Tour please"].iter().enumerate() {
            while app.contact_draft.focused() != i {
                app.contact_draft.focus_next();
            }
            for c in text.chars() {
                app.contact_draft.insert(c);
            }
        }

        app.submit_contact();
        assert!(app.contact.is_submitting());

        // Let the spawned effect finish
        while app.contact.is_submitting() {
            tokio::task::yield_now().await;
        }
        app.poll_submissions();

        assert!(app.contact_draft.fields().iter().all(|f| f.value.is_empty()));
        assert!(!app.contact_editing);
        assert_eq!(
            app.toast.as_ref().map(|t| t.message.as_str()),
            Some(forms::MESSAGE_SENT)
        );
    }

    #[tokio::test]
    async fn test_reopened_forms_start_without_a_message() {
        let mut app = app();
        for c in "ana@example.com".chars() {
            app.newsletter_draft.insert(c);
        }
        app.open_newsletter();
        app.submit_newsletter();
        while app.newsletter.is_submitting() {
            tokio::task::yield_now().await;
        }
        app.poll_submissions();
        assert!(app.newsletter.state().is_settled());

        app.modal = None;
        app.open_newsletter();
        assert_eq!(app.newsletter.state(), SubmissionState::Idle);
        assert_eq!(app.newsletter.state().message(), None);

        app.submit_contact();
        app.poll_submissions();
        assert!(app.contact.state().is_settled());

        app.start_contact_editing();
        assert_eq!(app.contact.state(), SubmissionState::Idle);
    }
}
