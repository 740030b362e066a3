//! Pattern-driven event formatter

use super::format_item::FormatItem;
use super::log_event::LogEvent;
use super::log_level::LogLevel;
use super::logger::Logger;
use super::pattern;

/// Renders a [`LogEvent`] into one output line by running a compiled pattern.
///
/// A formatter owns exactly one compiled [`FormatItem`] sequence. It is
/// shared (`Arc<LogFormatter>`) between a [`Logger`] and any appender that
/// inherited the logger's default at attach time. Formatting performs no I/O;
/// writing the rendered string is the appender's job.
#[derive(Debug)]
pub struct LogFormatter {
    pattern: String,
    items: Vec<FormatItem>,
    error: bool,
}

impl LogFormatter {
    /// Compile `pattern` immediately.
    ///
    /// Compilation is fail-soft: a malformed pattern still yields a usable
    /// formatter whose output carries a visible error token, with
    /// [`LogFormatter::has_error`] set.
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let (items, error) = pattern::compile(&pattern);
        Self {
            pattern,
            items,
            error,
        }
    }

    /// Render `event` by concatenating each compiled item's output in
    /// sequence order.
    pub fn format(&self, logger: &Logger, level: LogLevel, event: &LogEvent) -> String {
        let mut out = String::new();
        for item in &self.items {
            item.render(&mut out, logger, level, event);
        }
        out
    }

    /// The source pattern this formatter was compiled from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// True when compilation hit malformed input (unterminated `{`).
    pub fn has_error(&self) -> bool {
        self.error
    }
}
