//! Shared utility functions

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Fit a single line into at most `max_cols` terminal columns.
///
/// Returns the line unchanged when it already fits. Otherwise cuts at a
/// character boundary and appends `…`, keeping the result within
/// `max_cols` display columns even for wide (CJK, emoji) characters.
pub fn fit_width(line: &str, max_cols: usize) -> String {
    if UnicodeWidthStr::width(line) <= max_cols {
        return line.to_string();
    }
    if max_cols == 0 {
        return String::new();
    }

    let budget = max_cols - 1; // reserve one column for the marker
    let mut used = 0;
    let mut out = String::new();
    for ch in line.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fits_untouched() {
        assert_eq!(fit_width("hello", 10), "hello");
        assert_eq!(fit_width("hello", 5), "hello");
    }

    #[test]
    fn truncates_with_marker() {
        assert_eq!(fit_width("hello world", 6), "hello…");
    }

    #[test]
    fn wide_characters_count_double() {
        // Each CJK character is two columns wide
        assert_eq!(fit_width("日本語テスト", 5), "日本…");
    }

    #[test]
    fn zero_width_budget() {
        assert_eq!(fit_width("hello", 0), "");
    }
}
