// Concrete palettes behind the two theme modes

use super::{ThemeMode, ThemeTokens};
use ratatui::style::Color;

pub(super) const LIGHT: ThemeTokens = ThemeTokens {
    mode: ThemeMode::Light,
    surface: Color::Rgb(0xff, 0xff, 0xff),
    inverse_surface: Color::Rgb(0x1e, 0x29, 0x3b),
    text_primary: Color::Rgb(0x11, 0x18, 0x27),
    text_muted: Color::Rgb(0x4b, 0x55, 0x63),
    border: Color::Rgb(0xcb, 0xd5, 0xe1),
    accent: Color::Rgb(0x1d, 0x4e, 0xd8), // school blue
    on_accent: Color::Rgb(0xff, 0xff, 0xff),
    success: Color::Rgb(0x15, 0x80, 0x3d),
    danger: Color::Rgb(0xb9, 0x1c, 0x1c),
};

pub(super) const DARK: ThemeTokens = ThemeTokens {
    mode: ThemeMode::Dark,
    surface: Color::Rgb(0x0f, 0x17, 0x2a),
    inverse_surface: Color::Rgb(0xf8, 0xfa, 0xfc),
    text_primary: Color::Rgb(0xf1, 0xf5, 0xf9),
    text_muted: Color::Rgb(0x94, 0xa3, 0xb8),
    border: Color::Rgb(0x33, 0x41, 0x55),
    accent: Color::Rgb(0x60, 0xa5, 0xfa),
    on_accent: Color::Rgb(0x0f, 0x17, 0x2a),
    success: Color::Rgb(0x4a, 0xde, 0x80),
    danger: Color::Rgb(0xf8, 0x71, 0x71),
};

/// Relative luminance of a color (0.0 = black, 1.0 = white)
/// Uses the standard formula: 0.2126*R + 0.7152*G + 0.0722*B
#[cfg(test)]
pub(super) fn luminance(color: Color) -> f32 {
    match color {
        Color::Rgb(r, g, b) => {
            let r = r as f32 / 255.0;
            let g = g as f32 / 255.0;
            let b = b as f32 / 255.0;
            0.2126 * r + 0.7152 * g + 0.0722 * b
        }
        // Approximate luminance for ANSI colors
        Color::Black => 0.0,
        Color::White | Color::Gray => 0.75,
        Color::DarkGray => 0.25,
        _ => 0.5,
    }
}

/// `#rrggbb` for RGB colors; named ANSI colors fall back to their nearest hex
pub(super) fn hex(color: Color) -> String {
    match color {
        Color::Rgb(r, g, b) => format!("#{:02x}{:02x}{:02x}", r, g, b),
        Color::Black => "#000000".to_string(),
        Color::White => "#ffffff".to_string(),
        _ => "#808080".to_string(),
    }
}
