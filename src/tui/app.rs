// TUI application state
//
// Holds the deck of cards plus selection and focus. All interaction
// logic lives here on plain state, so every behavior is testable without
// a terminal; rendering reads this state each frame and never feeds
// anything back.

use super::clipboard;
use super::input::InputHandler;
use crate::card::{Card, NoticeKind};
use crate::catalog::ResourceDescriptor;
use crate::events::LoadResult;
use crate::logging::LogBuffer;
use crate::theme::Theme;
use anyhow::Result;
use crossterm::event::KeyCode;

/// Which region receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The card deck: Up/Down move the selection
    #[default]
    Deck,
    /// The selected card's revealed full-text region: Up/Down scroll it
    CardText,
}

/// Main application state for the TUI
pub struct App {
    /// One card per catalog entry, in catalog order
    pub cards: Vec<Card>,

    /// Index of the currently selected card
    pub selected: usize,

    /// Region receiving navigation input
    pub focus: Focus,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Resolved color theme
    pub theme: Theme,

    /// Captured log entries (surfaced in the status bar)
    pub log_buffer: LogBuffer,

    /// Where the templates are fetched from (title bar display)
    pub base_url: String,

    /// First card visible in the deck viewport; adjusted during render
    pub deck_offset: usize,

    /// Input handler for per-key press/repeat behavior
    input: InputHandler,

    loaded: usize,
    failed: usize,
}

impl App {
    /// Build the app with one card skeleton per catalog entry.
    /// Skeletons exist (and render) before any content arrives.
    pub fn new(
        catalog: Vec<ResourceDescriptor>,
        theme: Theme,
        log_buffer: LogBuffer,
        base_url: String,
    ) -> Self {
        Self {
            cards: catalog.into_iter().map(Card::new).collect(),
            selected: 0,
            focus: Focus::default(),
            should_quit: false,
            theme,
            log_buffer,
            base_url,
            deck_offset: 0,
            input: InputHandler::default(),
            loaded: 0,
            failed: 0,
        }
    }

    // ─── Loading ─────────────────────────────────────────────

    /// Fill in one card with its fetch outcome.
    /// A failure touches only its own card; later results are unaffected.
    pub fn apply_load(&mut self, result: LoadResult) {
        let Some(card) = self.cards.get_mut(result.index) else {
            tracing::warn!("Load result for unknown card index {}", result.index);
            return;
        };

        // Counters only move on the first (counted) transition
        if card.is_pending() {
            match &result.outcome {
                Ok(_) => self.loaded += 1,
                Err(_) => self.failed += 1,
            }
        }
        card.apply_load(result.outcome);
    }

    /// (completed, failed, total) for the status bar
    pub fn progress(&self) -> (usize, usize, usize) {
        (self.loaded + self.failed, self.failed, self.cards.len())
    }

    // ─── Selection & focus ───────────────────────────────────

    pub fn selected_card(&self) -> Option<&Card> {
        self.cards.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.cards.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Whether any card is currently expanded (layout only)
    pub fn any_expanded(&self) -> bool {
        self.cards.iter().any(Card::is_expanded)
    }

    // ─── Interactions ────────────────────────────────────────

    /// Activate the selected card's toggle control.
    /// Expanding moves focus into the revealed text; collapsing returns it.
    pub fn toggle_selected(&mut self) {
        let Some(card) = self.cards.get_mut(self.selected) else {
            return;
        };
        card.toggle();
        self.focus = if card.is_expanded() {
            Focus::CardText
        } else {
            Focus::Deck
        };
    }

    /// Move focus between the deck and the selected card's text region.
    /// Only an expanded card has a text region to focus.
    pub fn cycle_focus(&mut self) {
        match self.focus {
            Focus::CardText => self.focus = Focus::Deck,
            Focus::Deck => {
                if self.selected_card().is_some_and(Card::is_expanded) {
                    self.focus = Focus::CardText;
                }
            }
        }
    }

    /// Dismissal key: collapse the card whose text region has focus and
    /// hand focus back to its toggle control. Other expanded cards stay
    /// as they are. Returns false when no text region was focused.
    pub fn dismiss_focused(&mut self) -> bool {
        if self.focus != Focus::CardText {
            return false;
        }
        if let Some(card) = self.cards.get_mut(self.selected) {
            if card.is_expanded() {
                card.toggle();
            }
        }
        self.focus = Focus::Deck;
        true
    }

    /// Copy the selected card's full text to the system clipboard
    pub fn copy_selected(&mut self) {
        self.copy_selected_with(clipboard::copy_to_clipboard);
    }

    /// Copy with an injectable clipboard write (the seam the tests use).
    /// The outcome lands on the card's status line and nowhere else.
    pub fn copy_selected_with(&mut self, write: impl FnOnce(&str) -> Result<()>) {
        let Some(card) = self.cards.get_mut(self.selected) else {
            return;
        };

        let Some(text) = card.full_text().map(str::to_owned) else {
            card.set_notice(NoticeKind::Error, "Nothing to copy");
            return;
        };

        match write(&text) {
            Ok(()) => card.set_notice(NoticeKind::Success, "✓ Copied to clipboard"),
            Err(e) => {
                tracing::warn!("Clipboard write failed: {e:#}");
                card.set_notice(NoticeKind::Error, "✗ Copy failed");
            }
        }
    }

    /// Route a navigation key to the focused region
    pub fn navigate(&mut self, key: KeyCode) {
        match self.focus {
            Focus::Deck => match key {
                KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
                KeyCode::Down | KeyCode::Char('j') => self.select_next(),
                KeyCode::Home => self.selected = 0,
                KeyCode::End => self.selected = self.cards.len().saturating_sub(1),
                _ => {}
            },
            Focus::CardText => {
                let Some(card) = self.cards.get_mut(self.selected) else {
                    return;
                };
                let scroll = &mut card.text_scroll;
                match key {
                    KeyCode::Up | KeyCode::Char('k') => scroll.scroll_up(),
                    KeyCode::Down | KeyCode::Char('j') => scroll.scroll_down(),
                    KeyCode::PageUp => scroll.page_up(),
                    KeyCode::PageDown => scroll.page_down(),
                    KeyCode::Home => scroll.scroll_to_top(),
                    KeyCode::End => scroll.scroll_to_bottom(),
                    _ => {}
                }
            }
        }
    }

    // ─── Housekeeping ────────────────────────────────────────

    /// Periodic tick: expire transient status-line notices
    pub fn tick(&mut self) {
        for card in &mut self.cards {
            card.tick();
        }
    }

    /// Handle a key press - returns true if the action should trigger
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.input.handle_key_press(key)
    }

    /// Handle a key release
    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.input.handle_key_release(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::NoticeKind;
    use std::cell::RefCell;

    fn catalog(n: usize) -> Vec<ResourceDescriptor> {
        (0..n)
            .map(|i| ResourceDescriptor {
                identifier: format!("prompts/{i}.txt"),
                title: format!("Template {i}"),
                description: String::new(),
            })
            .collect()
    }

    fn app(n: usize) -> App {
        App::new(
            catalog(n),
            Theme::default(),
            LogBuffer::new(),
            "http://127.0.0.1:8000".to_string(),
        )
    }

    fn loaded_app(n: usize) -> App {
        let mut app = app(n);
        for index in 0..n {
            app.apply_load(LoadResult {
                index,
                outcome: Ok(format!("content of card {index}")),
            });
        }
        app
    }

    #[test]
    fn one_card_per_descriptor_in_order() {
        let app = app(3);
        assert_eq!(app.cards.len(), 3);
        for (i, card) in app.cards.iter().enumerate() {
            assert_eq!(card.descriptor.identifier, format!("prompts/{i}.txt"));
            assert!(card.is_pending());
            assert!(!card.is_expanded());
        }
    }

    #[test]
    fn one_failure_does_not_affect_other_cards() {
        let mut app = app(3);
        app.apply_load(LoadResult {
            index: 0,
            outcome: Err("HTTP 500 fetching prompts/0.txt".to_string()),
        });
        app.apply_load(LoadResult {
            index: 1,
            outcome: Ok("fine".to_string()),
        });

        assert!(app.cards[0].full_text().is_none());
        assert!(app.cards[0].preview().contains("HTTP 500"));
        assert_eq!(app.cards[1].full_text(), Some("fine"));
        assert!(app.cards[2].is_pending());

        let (done, failed, total) = app.progress();
        assert_eq!((done, failed, total), (2, 1, 3));
    }

    #[test]
    fn load_result_for_unknown_index_is_dropped() {
        let mut app = app(1);
        app.apply_load(LoadResult {
            index: 7,
            outcome: Ok("stray".to_string()),
        });
        assert!(app.cards[0].is_pending());
        assert_eq!(app.progress(), (0, 0, 1));
    }

    #[test]
    fn duplicate_load_does_not_double_count() {
        let mut app = app(1);
        for _ in 0..2 {
            app.apply_load(LoadResult {
                index: 0,
                outcome: Ok("text".to_string()),
            });
        }
        assert_eq!(app.progress(), (1, 0, 1));
    }

    #[test]
    fn toggle_moves_focus_into_text_and_back() {
        let mut app = loaded_app(2);
        assert_eq!(app.focus, Focus::Deck);

        app.toggle_selected();
        assert!(app.cards[0].is_expanded());
        assert_eq!(app.focus, Focus::CardText);

        app.toggle_selected();
        assert!(!app.cards[0].is_expanded());
        assert_eq!(app.focus, Focus::Deck);
    }

    #[test]
    fn dismissal_collapses_only_the_focused_card() {
        let mut app = loaded_app(3);

        // Expand card 0, leave it open, then expand card 2
        app.toggle_selected();
        app.cycle_focus(); // back to deck, card 0 stays expanded
        app.selected = 2;
        app.toggle_selected();
        assert!(app.cards[0].is_expanded());
        assert!(app.cards[2].is_expanded());
        assert_eq!(app.focus, Focus::CardText);

        assert!(app.dismiss_focused());
        assert!(!app.cards[2].is_expanded());
        assert!(app.cards[0].is_expanded(), "other expanded card untouched");
        assert_eq!(app.focus, Focus::Deck);

        // Esc with no text region focused is not consumed
        assert!(!app.dismiss_focused());
    }

    #[test]
    fn any_expanded_tracks_card_states() {
        let mut app = loaded_app(2);
        assert!(!app.any_expanded());
        app.toggle_selected();
        assert!(app.any_expanded());
        app.toggle_selected();
        assert!(!app.any_expanded());
    }

    #[test]
    fn cycle_focus_needs_an_expanded_card() {
        let mut app = loaded_app(1);
        app.cycle_focus();
        assert_eq!(app.focus, Focus::Deck);

        app.toggle_selected();
        app.cycle_focus();
        assert_eq!(app.focus, Focus::Deck);
        app.cycle_focus();
        assert_eq!(app.focus, Focus::CardText);
    }

    #[test]
    fn copy_passes_the_full_text_verbatim() {
        let mut app = app(1);
        app.apply_load(LoadResult {
            index: 0,
            outcome: Ok("ABC".to_string()),
        });

        let copied = RefCell::new(None);
        app.copy_selected_with(|text| {
            *copied.borrow_mut() = Some(text.to_string());
            Ok(())
        });

        assert_eq!(copied.into_inner().as_deref(), Some("ABC"));
        let notice = app.cards[0].notice().expect("success notice expected");
        assert_eq!(notice.kind, NoticeKind::Success);
    }

    #[test]
    fn copy_failure_stays_on_the_status_line() {
        let mut app = loaded_app(1);
        app.copy_selected_with(|_| anyhow::bail!("no display server"));

        let notice = app.cards[0].notice().expect("failure notice expected");
        assert_eq!(notice.kind, NoticeKind::Error);
    }

    #[test]
    fn copy_without_content_never_calls_the_clipboard() {
        let mut app = app(1); // still pending
        let called = RefCell::new(false);
        app.copy_selected_with(|_| {
            *called.borrow_mut() = true;
            Ok(())
        });
        assert!(!*called.borrow());
        assert_eq!(
            app.cards[0].notice().map(|n| n.kind),
            Some(NoticeKind::Error)
        );
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut app = app(2);
        app.select_prev();
        assert_eq!(app.selected, 0);
        app.select_next();
        app.select_next();
        app.select_next();
        assert_eq!(app.selected, 1);
    }
}
