// UI rendering logic
//
// One render function per frame: title bar, the card deck, status bar.
// The deck is a vertical stack of variable-height cards; scrolling moves
// by whole cards and the selection is always kept in view.

use super::app::{App, Focus};
use super::components::{card_panel, status_bar, title_bar};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title bar
            Constraint::Min(5),    // Card deck - takes remaining space
            Constraint::Length(2), // Status bar
        ])
        .split(f.area());

    title_bar::render(f, chunks[0], app);
    render_deck(f, chunks[1], app);
    status_bar::render(f, chunks[2], app);
}

/// Render the card column, first-visible-card scrolling.
///
/// When any card is expanded, collapsed cards render without their
/// preview so the revealed text gets the room.
fn render_deck(f: &mut Frame, area: Rect, app: &mut App) {
    if app.cards.is_empty() || area.height == 0 {
        return;
    }

    let compact_deck = app.any_expanded();
    let heights: Vec<u16> = app
        .cards
        .iter()
        .map(|card| card_panel::height(card, compact_deck && !card.is_expanded()))
        .collect();

    // Keep the selected card inside the viewport
    if app.selected < app.deck_offset {
        app.deck_offset = app.selected;
    }
    while app.deck_offset < app.selected {
        let used: u32 = heights[app.deck_offset..=app.selected]
            .iter()
            .map(|h| *h as u32)
            .sum();
        if used <= area.height as u32 {
            break;
        }
        app.deck_offset += 1;
    }

    // Lay cards out top to bottom; the last one may render clipped
    let theme = app.theme.clone();
    let selected = app.selected;
    let focus = app.focus;

    let mut y = area.y;
    for idx in app.deck_offset..app.cards.len() {
        let remaining = area.bottom().saturating_sub(y);
        if remaining < 3 {
            break;
        }

        let card = &mut app.cards[idx];
        let ctx = card_panel::CardContext {
            theme: &theme,
            selected: idx == selected,
            text_focused: idx == selected && focus == Focus::CardText,
            compact: compact_deck && !card.is_expanded(),
        };

        let h = heights[idx].min(remaining);
        card_panel::render(f, Rect::new(area.x, y, area.width, h), card, &ctx);
        y += h;
    }
}
