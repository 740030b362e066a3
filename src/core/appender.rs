//! Appender trait for log output destinations

use super::formatter::LogFormatter;
use super::log_event::LogEvent;
use super::log_level::LogLevel;
use super::logger::Logger;
use std::sync::Arc;

/// A severity-gated sink for formatted log lines.
///
/// Each appender carries its own threshold and a shared formatter slot. The
/// slot starts empty; [`Logger::add_appender`] fills it with the logger's
/// current default formatter at attach time (a snapshot, not a live binding —
/// replacing the logger's default afterwards does not reach already-attached
/// appenders). New destinations are added by implementing this trait, not by
/// touching the dispatcher.
pub trait Appender: Send + Sync {
    /// Write `event` to the destination, unless `level` is below this
    /// appender's threshold. Implementations format via their formatter and
    /// absorb write failures; delivery is best effort.
    fn log(&self, logger: &Logger, level: LogLevel, event: &LogEvent);

    /// Minimum severity this appender accepts.
    fn level(&self) -> LogLevel;

    /// The formatter currently assigned, if any.
    fn formatter(&self) -> Option<Arc<LogFormatter>>;

    /// Assign a formatter, replacing any previous one.
    fn set_formatter(&self, formatter: Arc<LogFormatter>);

    /// Short destination name for diagnostics.
    fn name(&self) -> &str;
}
