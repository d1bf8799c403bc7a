// Preview derivation for card content
//
// A preview is what a collapsed card shows before the user expands it:
// the first few lines of the template, or a character-bounded slice when
// the template is one long line. The full text is never modified.

/// Maximum number of lines shown in a preview
pub const PREVIEW_MAX_LINES: usize = 6;

/// Character cap for content with fewer lines than the line limit
pub const PREVIEW_MAX_CHARS: usize = 400;

/// Marker appended when the preview omits part of the content
pub const ELLIPSIS: &str = "…";

/// Derive the collapsed preview for a template.
///
/// Content with at least [`PREVIEW_MAX_LINES`] lines previews as those
/// lines; shorter content previews as its first [`PREVIEW_MAX_CHARS`]
/// characters. The ellipsis marker is appended only when the full text is
/// longer than the preview.
pub fn derive(full: &str) -> String {
    let lines: Vec<&str> = full.lines().collect();

    let mut preview = if lines.len() >= PREVIEW_MAX_LINES {
        lines[..PREVIEW_MAX_LINES].join("\n")
    } else {
        match full.char_indices().nth(PREVIEW_MAX_CHARS) {
            Some((byte_offset, _)) => full[..byte_offset].to_string(),
            None => full.to_string(),
        }
    };

    if preview.len() < full.len() {
        preview.push_str(ELLIPSIS);
    }
    preview
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_content_is_unchanged() {
        let text = "one\ntwo\nthree";
        assert_eq!(derive(text), text);
    }

    #[test]
    fn six_or_more_lines_keep_first_six() {
        let text = "l1\nl2\nl3\nl4\nl5\nl6\nl7\nl8";
        assert_eq!(derive(text), format!("l1\nl2\nl3\nl4\nl5\nl6{ELLIPSIS}"));
    }

    #[test]
    fn exactly_six_lines_without_trailing_content_has_no_ellipsis() {
        let text = "l1\nl2\nl3\nl4\nl5\nl6";
        assert_eq!(derive(text), text);
    }

    #[test]
    fn single_long_line_is_capped_at_character_limit() {
        let text = "x".repeat(500);
        let preview = derive(&text);
        assert_eq!(preview, format!("{}{ELLIPSIS}", "x".repeat(400)));
    }

    #[test]
    fn character_cap_counts_characters_not_bytes() {
        // 450 three-byte characters; the cap must not split one
        let text = "日".repeat(450);
        let preview = derive(&text);
        assert_eq!(preview, format!("{}{ELLIPSIS}", "日".repeat(400)));
    }

    #[test]
    fn short_single_line_is_unchanged() {
        assert_eq!(derive("just a line"), "just a line");
    }

    #[test]
    fn empty_content_previews_empty() {
        assert_eq!(derive(""), "");
    }
}
