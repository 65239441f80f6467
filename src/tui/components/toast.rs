//! Transient notice in the bottom-right corner
//!
//! Used to announce settled form submissions. Drawn last, over any overlay,
//! and dropped by the render loop once its time is up.

use crate::theme::ThemeTokens;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

const TTL: Duration = Duration::from_secs(3);

/// Which token colors the border
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Failure,
}

pub struct Toast {
    pub message: String,
    pub tone: Tone,
    shown_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, tone: Tone) -> Self {
        Self {
            message: message.into(),
            tone,
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= TTL
    }

    fn color(&self, tokens: &ThemeTokens) -> Color {
        match self.tone {
            Tone::Info => tokens.accent,
            Tone::Success => tokens.success,
            Tone::Failure => tokens.danger,
        }
    }

    /// Draw inside `area`, two cells in from its bottom-right corner
    pub fn render(&self, f: &mut Frame, area: Rect, tokens: &ThemeTokens) {
        let width = (self.message.width() as u16 + 4).min(area.width.saturating_sub(4));
        let height = 3;
        let corner = Rect::new(
            area.right().saturating_sub(width + 2),
            area.bottom().saturating_sub(height + 2),
            width,
            height,
        );

        let notice = Paragraph::new(Line::from(self.message.as_str()).centered()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(self.color(tokens)))
                .style(tokens.base()),
        );

        f.render_widget(Clear, corner);
        f.render_widget(notice, corner);
    }
}
