// Per-card state
//
// One Card exists per catalog entry for the whole session. Its content
// transitions from Pending to Loaded or Failed exactly once; after that
// only the expanded flag and the transient status-line notice change.
// Keeping this state in plain records (instead of reading it back out of
// the rendered surface) keeps the toggle logic testable without a
// terminal.

use crate::catalog::ResourceDescriptor;
use crate::preview;
use crate::tui::scroll::ScrollState;
use std::time::{Duration, Instant};

/// How long a transient status-line notice stays visible
pub const NOTICE_TTL: Duration = Duration::from_millis(2200);

/// Load state of a card's content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardContent {
    /// Skeleton rendered, fetch not yet completed
    Pending,
    /// Full template text, stored verbatim
    Loaded(String),
    /// Failure detail from the fetch
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient message shown on the card's status line
#[derive(Debug)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    expires_at: Instant,
}

impl Notice {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// One expandable card, owning its content, preview and scroll position
pub struct Card {
    pub descriptor: ResourceDescriptor,
    expanded: bool,
    content: CardContent,
    preview: String,
    notice: Option<Notice>,
    /// Scroll position of the revealed full-text region
    pub text_scroll: ScrollState,
}

impl Card {
    /// Create the card skeleton, before any content has loaded
    pub fn new(descriptor: ResourceDescriptor) -> Self {
        Self {
            descriptor,
            expanded: false,
            content: CardContent::Pending,
            preview: String::new(),
            notice: None,
            text_scroll: ScrollState::new(),
        }
    }

    /// Fill in the card with the outcome of its fetch.
    ///
    /// Content is written at most once; a second result for the same card
    /// is dropped. On failure the preview carries the error detail and the
    /// full-text region stays empty.
    pub fn apply_load(&mut self, outcome: Result<String, String>) {
        if self.content != CardContent::Pending {
            tracing::warn!(
                "Ignoring duplicate load result for {:?}",
                self.descriptor.identifier
            );
            return;
        }

        match outcome {
            Ok(text) => {
                self.preview = preview::derive(&text);
                self.content = CardContent::Loaded(text);
            }
            Err(detail) => {
                self.preview = format!("Failed to load template: {detail}");
                self.content = CardContent::Failed(detail);
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        self.content == CardContent::Pending
    }

    /// Failure detail, if the fetch failed
    pub fn failure(&self) -> Option<&str> {
        match &self.content {
            CardContent::Failed(detail) => Some(detail),
            _ => None,
        }
    }

    /// The verbatim template text; None until loaded (and on failure,
    /// where the full-text region stays empty)
    pub fn full_text(&self) -> Option<&str> {
        match &self.content {
            CardContent::Loaded(text) => Some(text),
            _ => None,
        }
    }

    pub fn preview(&self) -> &str {
        &self.preview
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Flip between collapsed and expanded. Revealed text always starts
    /// at the top.
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
        if self.expanded {
            self.text_scroll.scroll_to_top();
        }
    }

    /// Label of the toggle control for the current state
    pub fn toggle_label(&self) -> &'static str {
        if self.expanded {
            "Collapse"
        } else {
            "View"
        }
    }

    /// Show a transient notice on the status line, replacing any current one
    pub fn set_notice(&mut self, kind: NoticeKind, text: impl Into<String>) {
        self.set_notice_with_ttl(kind, text, NOTICE_TTL);
    }

    fn set_notice_with_ttl(&mut self, kind: NoticeKind, text: impl Into<String>, ttl: Duration) {
        self.notice = Some(Notice {
            text: text.into(),
            kind,
            expires_at: Instant::now() + ttl,
        });
    }

    /// Current notice, if one is active
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Drop the notice once its display window has passed.
    /// Called from the app's periodic tick.
    pub fn tick(&mut self) {
        if self.notice.as_ref().is_some_and(Notice::is_expired) {
            self.notice = None;
        }
    }
}
