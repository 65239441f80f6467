// Theme binding for every rendered surface
//
// One binary mode flag, one pure resolver. Nothing outside this module
// names a concrete color: views ask `resolve(mode)` for tokens on every
// frame, so flipping the mode re-themes the whole screen at once.

mod palette;

use ratatui::style::{Color, Modifier, Style};
use serde::Serialize;
use std::fmt;

/// Light or dark presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];

    /// The other mode
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Parse a mode name from config, env or a query string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic color tokens for one mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeTokens {
    pub mode: ThemeMode,

    // ─── Surfaces ────────────────────────────────────────────
    pub surface: Color,
    pub inverse_surface: Color,

    // ─── Text ────────────────────────────────────────────────
    pub text_primary: Color,
    pub text_muted: Color,

    // ─── Chrome ──────────────────────────────────────────────
    pub border: Color,
    pub accent: Color,
    /// Text drawn on an `accent` background
    pub on_accent: Color,

    // ─── Status ──────────────────────────────────────────────
    pub success: Color,
    pub danger: Color,
}

/// Resolve the token set for `mode`. Pure and total.
pub fn resolve(mode: ThemeMode) -> ThemeTokens {
    match mode {
        ThemeMode::Light => palette::LIGHT,
        ThemeMode::Dark => palette::DARK,
    }
}

impl ThemeTokens {
    /// Base style for a panel body
    pub fn base(&self) -> Style {
        Style::default().fg(self.text_primary).bg(self.surface)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for the selected row or tab
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.on_accent)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Header/footer bars use the inverse surface
    pub fn inverse(&self) -> Style {
        Style::default().fg(self.surface).bg(self.inverse_surface)
    }

    /// Border color for a panel based on focus state
    pub fn panel_border(&self, focused: bool) -> Color {
        if focused {
            self.accent
        } else {
            self.border
        }
    }

    /// Hex strings for web clients
    pub fn to_css(&self) -> CssTokens {
        CssTokens {
            mode: self.mode.as_str(),
            surface: palette::hex(self.surface),
            inverse_surface: palette::hex(self.inverse_surface),
            text_primary: palette::hex(self.text_primary),
            text_muted: palette::hex(self.text_muted),
            border: palette::hex(self.border),
            accent: palette::hex(self.accent),
            on_accent: palette::hex(self.on_accent),
            success: palette::hex(self.success),
            danger: palette::hex(self.danger),
        }
    }

    /// All color slots in declaration order
    pub fn colors(&self) -> [Color; 9] {
        [
            self.surface,
            self.inverse_surface,
            self.text_primary,
            self.text_muted,
            self.border,
            self.accent,
            self.on_accent,
            self.success,
            self.danger,
        ]
    }
}

/// Serialized token set (`#rrggbb` strings)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CssTokens {
    pub mode: &'static str,
    pub surface: String,
    pub inverse_surface: String,
    pub text_primary: String,
    pub text_muted: String,
    pub border: String,
    pub accent: String,
    pub on_accent: String,
    pub success: String,
    pub danger: String,
}

#[cfg(test)]
mod tests {
    use super::palette::luminance;
    use super::*;

    #[test]
    fn test_resolve_is_stable() {
        for mode in ThemeMode::ALL {
            assert_eq!(resolve(mode), resolve(mode));
            assert_eq!(resolve(mode).mode, mode);
        }
    }

    #[test]
    fn test_light_and_dark_differ_in_every_slot() {
        let light = resolve(ThemeMode::Light).colors();
        let dark = resolve(ThemeMode::Dark).colors();
        for (l, d) in light.iter().zip(dark.iter()) {
            assert_ne!(l, d);
        }
    }

    #[test]
    fn test_every_slot_is_a_concrete_color() {
        for mode in ThemeMode::ALL {
            for color in resolve(mode).colors() {
                assert!(matches!(color, Color::Rgb(..)), "{mode}: {color:?}");
            }
        }
    }

    #[test]
    fn test_surfaces_match_mode() {
        let light = resolve(ThemeMode::Light);
        let dark = resolve(ThemeMode::Dark);
        assert!(luminance(light.surface) > 0.5);
        assert!(luminance(dark.surface) < 0.5);
        assert!(luminance(light.text_primary) < luminance(light.surface));
        assert!(luminance(dark.text_primary) > luminance(dark.surface));
    }

    #[test]
    fn test_on_accent_contrasts_with_accent() {
        for mode in ThemeMode::ALL {
            let tokens = resolve(mode);
            let gap = (luminance(tokens.on_accent) - luminance(tokens.accent)).abs();
            assert!(gap > 0.4, "{mode}: {gap}");
            assert_eq!(tokens.selected().fg, Some(tokens.on_accent));
        }
    }

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(ThemeMode::Light.toggle(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Light.toggle().toggle(), ThemeMode::Light);
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!(ThemeMode::parse("Dark"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::parse(" light "), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::parse("sepia"), None);
    }

    #[test]
    fn test_css_tokens() {
        let css = resolve(ThemeMode::Light).to_css();
        assert_eq!(css.mode, "light");
        assert_eq!(css.surface, "#ffffff");
        assert_eq!(css.on_accent, "#ffffff");
        assert_eq!(resolve(ThemeMode::Dark).to_css().on_accent, "#0f172a");
        assert!(css.border.starts_with('#') && css.border.len() == 7);
    }
}
