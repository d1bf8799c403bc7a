// Card panel component
//
// Renders one card: title and description, the toggle control, the
// preview (collapsed) or the revealed full-text region (expanded), and
// the status line. The card's height depends on its state, so the deck
// renderer asks `height()` before placing it.

use crate::card::{Card, NoticeKind};
use crate::theme::Theme;
use crate::util;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Viewport cap for the revealed full-text region
const TEXT_VIEWPORT: usize = 12;

/// Fixed rows around the content: two borders, description, toggle, status
const CHROME_ROWS: u16 = 5;

/// Per-card render context
pub struct CardContext<'a> {
    pub theme: &'a Theme,
    /// Card is the current selection
    pub selected: bool,
    /// The revealed text region has keyboard focus
    pub text_focused: bool,
    /// Another card is expanded: collapsed cards drop their preview
    /// to give the expanded one room
    pub compact: bool,
}

/// Rows this card occupies in the deck at its current state
pub fn height(card: &Card, compact: bool) -> u16 {
    CHROME_ROWS + content_rows(card, compact) as u16
}

fn content_rows(card: &Card, compact: bool) -> usize {
    if card.is_expanded() {
        let lines = card.full_text().map(|t| t.lines().count()).unwrap_or(0);
        lines.clamp(1, TEXT_VIEWPORT)
    } else if compact {
        0
    } else {
        card.preview().lines().count()
    }
}

pub fn render(f: &mut Frame, area: Rect, card: &mut Card, ctx: &CardContext) {
    let theme = ctx.theme;

    let border_color = if ctx.selected {
        theme.highlight
    } else {
        theme.border
    };
    let mut title_style = Style::default().fg(theme.title);
    if ctx.selected {
        title_style = title_style.add_modifier(Modifier::BOLD);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(
            format!(" {} ", card.descriptor.title),
            title_style,
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }
    let width = inner.width as usize;

    let mut lines: Vec<Line> = Vec::new();

    // Description
    lines.push(Line::styled(
        util::fit_width(&card.descriptor.description, width),
        Style::default().fg(theme.muted),
    ));

    // Toggle control
    lines.push(toggle_line(card, ctx));

    // Preview or revealed text
    if card.is_expanded() {
        lines.extend(text_region_lines(card, width));
    } else if !ctx.compact {
        let preview_style = if card.failure().is_some() {
            Style::default().fg(theme.error)
        } else {
            Style::default().fg(theme.foreground)
        };
        for preview_line in card.preview().lines() {
            lines.push(Line::styled(
                util::fit_width(preview_line, width),
                preview_style,
            ));
        }
    }

    // Status line
    lines.push(status_line(card, theme));

    f.render_widget(Paragraph::new(lines), inner);
}

fn toggle_line<'a>(card: &Card, ctx: &CardContext) -> Line<'a> {
    let theme = ctx.theme;
    let marker = if card.is_expanded() { "▾" } else { "▸" };

    let mut control_style = Style::default().fg(theme.highlight);
    if ctx.selected {
        control_style = control_style.add_modifier(Modifier::BOLD);
    }

    let mut spans = vec![Span::styled(
        format!("{marker} [{}]", card.toggle_label()),
        control_style,
    )];
    if ctx.text_focused {
        spans.push(Span::styled(
            "  text focused",
            Style::default().fg(theme.muted),
        ));
    }
    Line::from(spans)
}

/// The revealed full-text region: a scrolled window over the template.
/// An expanded card without content (a failed load) shows an empty region.
fn text_region_lines<'a>(card: &mut Card, width: usize) -> Vec<Line<'a>> {
    let text = card.full_text().map(str::to_owned).unwrap_or_default();
    let all: Vec<&str> = text.lines().collect();
    let viewport = all.len().clamp(1, TEXT_VIEWPORT);

    card.text_scroll.update_dimensions(all.len(), viewport);
    let offset = card.text_scroll.offset();

    all.iter()
        .skip(offset)
        .take(viewport)
        .map(|line| Line::raw(util::fit_width(line, width)))
        .collect()
}

fn status_line<'a>(card: &Card, theme: &Theme) -> Line<'a> {
    // A transient notice takes precedence over the load status
    if let Some(notice) = card.notice() {
        let color = match notice.kind {
            NoticeKind::Success => theme.success,
            NoticeKind::Error => theme.error,
        };
        return Line::styled(notice.text.clone(), Style::default().fg(color));
    }

    if card.is_pending() {
        return Line::styled("⏳ loading…", Style::default().fg(theme.muted));
    }
    if card.failure().is_some() {
        return Line::styled("✗ load failed", Style::default().fg(theme.error));
    }

    let total = card.full_text().map(|t| t.lines().count()).unwrap_or(0);
    let status = if card.is_expanded() && card.text_scroll.needs_scrollbar() {
        let from = card.text_scroll.offset() + 1;
        let to = (card.text_scroll.offset() + TEXT_VIEWPORT).min(total);
        format!("lines {from}-{to} of {total}")
    } else {
        format!("{total} lines")
    };
    Line::styled(status, Style::default().fg(theme.muted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ResourceDescriptor;

    fn card_with(text: &str) -> Card {
        let mut card = Card::new(ResourceDescriptor {
            identifier: "prompts/x.txt".to_string(),
            title: "X".to_string(),
            description: "desc".to_string(),
        });
        card.apply_load(Ok(text.to_string()));
        card
    }

    #[test]
    fn collapsed_height_follows_preview() {
        let card = card_with("a\nb\nc");
        assert_eq!(height(&card, false), CHROME_ROWS + 3);
    }

    #[test]
    fn compact_mode_hides_the_preview() {
        let card = card_with("a\nb\nc");
        assert_eq!(height(&card, true), CHROME_ROWS);
    }

    #[test]
    fn expanded_height_is_capped_by_viewport() {
        let long = (0..50).map(|i| format!("line {i}")).collect::<Vec<_>>();
        let mut card = card_with(&long.join("\n"));
        card.toggle();
        assert_eq!(height(&card, false), CHROME_ROWS + TEXT_VIEWPORT as u16);
    }

    #[test]
    fn expanded_card_without_content_keeps_an_empty_region() {
        let mut card = Card::new(ResourceDescriptor {
            identifier: "prompts/x.txt".to_string(),
            title: "X".to_string(),
            description: String::new(),
        });
        card.apply_load(Err("HTTP 404".to_string()));
        card.toggle();
        assert_eq!(height(&card, false), CHROME_ROWS + 1);
    }
}
