//! Compiled renderers, one per pattern directive

use super::log_event::LogEvent;
use super::log_level::LogLevel;
use super::logger::Logger;
use std::fmt::Write;

/// Date sub-format applied when `%d` carries no `{...}` argument.
pub const DEFAULT_DATE_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

/// What `%n` expands to.
#[cfg(windows)]
pub const LINE_TERMINATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_TERMINATOR: &str = "\n";

/// A compiled renderer for one directive or literal span of a pattern.
///
/// Every variant is a pure projection of `(logger, level, event)` into the
/// output buffer; no variant performs I/O or observes another variant's
/// output. Concatenating the renderings in sequence order reproduces the
/// pattern's intended line exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatItem {
    /// `%m` — the event's message text.
    Message,
    /// `%p` — the severity name.
    Level,
    /// `%r` — milliseconds elapsed since process start.
    Elapsed,
    /// `%c` — the owning logger's name.
    LoggerName,
    /// `%t` — thread id.
    ThreadId,
    /// `%F` — fiber/task id.
    FiberId,
    /// `%d` or `%d{...}` — event timestamp, strftime-formatted.
    DateTime(String),
    /// `%f` — source filename.
    FileName,
    /// `%l` — source line number.
    Line,
    /// `%T` — a tab character.
    Tab,
    /// `%n` — the platform line terminator.
    NewLine,
    /// Verbatim text between directives.
    Literal(String),
}

impl FormatItem {
    /// Fixed directive table: single-letter code to renderer.
    ///
    /// The mapping is immutable process-wide; adding a directive means adding
    /// an arm here and a variant above. Returns `None` for unrecognized
    /// names, which the compiler turns into a diagnostic literal.
    pub fn from_directive(name: &str, sub_format: &str) -> Option<Self> {
        let item = match name {
            "m" => FormatItem::Message,
            "p" => FormatItem::Level,
            "r" => FormatItem::Elapsed,
            "c" => FormatItem::LoggerName,
            "t" => FormatItem::ThreadId,
            "F" => FormatItem::FiberId,
            "f" => FormatItem::FileName,
            "l" => FormatItem::Line,
            "T" => FormatItem::Tab,
            "n" => FormatItem::NewLine,
            "d" => {
                if sub_format.is_empty() {
                    FormatItem::DateTime(DEFAULT_DATE_FORMAT.to_string())
                } else {
                    FormatItem::DateTime(sub_format.to_string())
                }
            }
            _ => return None,
        };
        Some(item)
    }

    /// Append this item's rendering of the event to `out`.
    pub fn render(&self, out: &mut String, logger: &Logger, level: LogLevel, event: &LogEvent) {
        match self {
            FormatItem::Message => out.push_str(event.message()),
            FormatItem::Level => out.push_str(level.to_str()),
            FormatItem::Elapsed => {
                let _ = write!(out, "{}", event.elapsed_ms());
            }
            FormatItem::LoggerName => out.push_str(logger.name()),
            FormatItem::ThreadId => {
                let _ = write!(out, "{}", event.thread_id());
            }
            FormatItem::FiberId => {
                let _ = write!(out, "{}", event.fiber_id());
            }
            // A bad strftime string yields a fmt error mid-write; absorb it
            // rather than let a formatting directive take the process down.
            FormatItem::DateTime(sub_format) => {
                let _ = write!(out, "{}", event.timestamp().format(sub_format));
            }
            FormatItem::FileName => out.push_str(event.file()),
            FormatItem::Line => {
                let _ = write!(out, "{}", event.line());
            }
            FormatItem::Tab => out.push('\t'),
            FormatItem::NewLine => out.push_str(LINE_TERMINATOR),
            FormatItem::Literal(text) => out.push_str(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample_event() -> LogEvent {
        LogEvent::new(
            "src/main.rs",
            42,
            7,
            3,
            1500,
            Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap(),
            "hello".to_string(),
        )
    }

    fn render(item: FormatItem) -> String {
        let logger = Logger::new("root");
        let mut out = String::new();
        item.render(&mut out, &logger, LogLevel::Info, &sample_event());
        out
    }

    #[test]
    fn test_field_projections() {
        assert_eq!(render(FormatItem::Message), "hello");
        assert_eq!(render(FormatItem::Level), "INFO");
        assert_eq!(render(FormatItem::Elapsed), "1500");
        assert_eq!(render(FormatItem::LoggerName), "root");
        assert_eq!(render(FormatItem::ThreadId), "7");
        assert_eq!(render(FormatItem::FiberId), "3");
        assert_eq!(render(FormatItem::FileName), "src/main.rs");
        assert_eq!(render(FormatItem::Line), "42");
        assert_eq!(render(FormatItem::Tab), "\t");
        assert_eq!(render(FormatItem::NewLine), LINE_TERMINATOR);
        assert_eq!(render(FormatItem::Literal(" | ".to_string())), " | ");
    }

    #[test]
    fn test_date_default_sub_format() {
        let item = FormatItem::from_directive("d", "").unwrap();
        assert_eq!(item, FormatItem::DateTime(DEFAULT_DATE_FORMAT.to_string()));
        assert_eq!(render(item), "2025:01:08 10:30:45");
    }

    #[test]
    fn test_date_custom_sub_format() {
        let item = FormatItem::from_directive("d", "%Y").unwrap();
        assert_eq!(render(item), "2025");
    }

    #[test]
    fn test_unknown_directive_has_no_constructor() {
        assert!(FormatItem::from_directive("q", "").is_none());
        assert!(FormatItem::from_directive("message", "").is_none());
    }
}
