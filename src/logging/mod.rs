// Logging module - in-memory log capture for TUI display
//
// While the TUI owns the alternate screen, nothing may write to stdout.
// This layer captures tracing events into a bounded in-memory buffer
// instead; the status bar surfaces the most recent problem from it.

use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

/// Entries kept before the oldest is dropped
const CAPACITY: usize = 500;

/// Log level for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn from_tracing(level: &Level) -> Self {
        match *level {
            Level::ERROR => LogLevel::Error,
            Level::WARN => LogLevel::Warn,
            Level::INFO => LogLevel::Info,
            Level::DEBUG => LogLevel::Debug,
            Level::TRACE => LogLevel::Trace,
        }
    }
}

/// A single captured log event
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
}

/// Bounded ring buffer of captured log entries, shared between the
/// tracing layer and the TUI
#[derive(Clone, Default)]
pub struct LogBuffer {
    entries: Arc<Mutex<VecDeque<LogEntry>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, entry: LogEntry) {
        let mut entries = self.entries.lock().unwrap();
        if entries.len() >= CAPACITY {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    /// Most recent warn-or-worse entry no older than `max_age_secs`.
    /// The status bar uses this to surface problems without a log panel.
    pub fn latest_problem(&self, max_age_secs: i64) -> Option<LogEntry> {
        let entries = self.entries.lock().unwrap();
        let now = Utc::now();
        entries
            .iter()
            .rev()
            .find(|e| {
                e.level >= LogLevel::Warn
                    && (now - e.timestamp).num_seconds() <= max_age_secs
            })
            .cloned()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

/// Tracing layer that diverts log events into a [`LogBuffer`]
pub struct TuiLogLayer {
    buffer: LogBuffer,
}

impl TuiLogLayer {
    pub fn new(buffer: LogBuffer) -> Self {
        Self { buffer }
    }
}

impl<S> Layer<S> for TuiLogLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut message = String::new();
        event.record(&mut MessageVisitor(&mut message));

        self.buffer.push(LogEntry {
            timestamp: Utc::now(),
            level: LogLevel::from_tracing(event.metadata().level()),
            message,
        });
    }
}

/// Extracts the `message` field from a tracing event
struct MessageVisitor<'a>(&'a mut String);

impl tracing::field::Visit for MessageVisitor<'_> {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            *self.0 = format!("{value:?}");
            // Strip the surrounding quotes Debug adds to plain strings
            if self.0.starts_with('"') && self.0.ends_with('"') && self.0.len() >= 2 {
                *self.0 = self.0[1..self.0.len() - 1].to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(level: LogLevel, message: &str) -> LogEntry {
        LogEntry {
            timestamp: Utc::now(),
            level,
            message: message.to_string(),
        }
    }

    #[test]
    fn buffer_is_bounded() {
        let buffer = LogBuffer::new();
        for i in 0..CAPACITY + 10 {
            buffer.push(entry(LogLevel::Info, &format!("entry {i}")));
        }
        assert_eq!(buffer.len(), CAPACITY);
    }

    #[test]
    fn latest_problem_skips_info_entries() {
        let buffer = LogBuffer::new();
        buffer.push(entry(LogLevel::Warn, "something odd"));
        buffer.push(entry(LogLevel::Info, "all fine"));

        let problem = buffer.latest_problem(60).expect("warn entry expected");
        assert_eq!(problem.message, "something odd");
    }

    #[test]
    fn latest_problem_none_when_clean() {
        let buffer = LogBuffer::new();
        buffer.push(entry(LogLevel::Info, "all fine"));
        assert!(buffer.latest_problem(60).is_none());
    }
}
