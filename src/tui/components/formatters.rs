// Text helpers shared across components

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `text` to at most `max` terminal columns, ending with "…" when cut
pub fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        // Leave one column for the ellipsis
        if used + w > max - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_untouched() {
        assert_eq!(truncate_to_width("Biology", 10), "Biology");
    }

    #[test]
    fn test_long_text_gets_ellipsis() {
        let cut = truncate_to_width("International Baccalaureate", 10);
        assert_eq!(cut, "Internati…");
        assert_eq!(cut.width(), 10);
    }

    #[test]
    fn test_wide_chars_counted_by_columns() {
        // Each CJK char is two columns
        let cut = truncate_to_width("数学物理化学", 5);
        assert_eq!(cut, "数学…");
        assert!(cut.width() <= 5);
    }

    #[test]
    fn test_zero_width_budget() {
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
