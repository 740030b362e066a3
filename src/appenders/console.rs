//! Console appender implementation

use crate::core::{Appender, LogEvent, LogFormatter, LogLevel, Logger};
use colored::Colorize;
use parking_lot::RwLock;
use std::io::Write;
use std::sync::Arc;

/// Writes formatted events to standard output.
///
/// Console writes never fail from the caller's point of view: a closed or
/// broken stdout is absorbed silently. Lines can be colorized by severity.
pub struct ConsoleAppender {
    level: LogLevel,
    formatter: RwLock<Option<Arc<LogFormatter>>>,
    use_colors: bool,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            level: LogLevel::Unknown,
            formatter: RwLock::new(None),
            use_colors: true,
        }
    }

    /// Set the severity threshold for this appender
    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Enable or disable per-severity colorization
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn log(&self, logger: &Logger, level: LogLevel, event: &LogEvent) {
        if level < self.level {
            return;
        }
        let formatter = self.formatter.read();
        let Some(formatter) = formatter.as_ref() else {
            return;
        };
        let line = formatter.format(logger, level, event);
        let line = if self.use_colors {
            line.color(level.color_code()).to_string()
        } else {
            line
        };
        // Write failures to the console are not surfaced.
        let _ = std::io::stdout().lock().write_all(line.as_bytes());
    }

    fn level(&self) -> LogLevel {
        self.level
    }

    fn formatter(&self) -> Option<Arc<LogFormatter>> {
        self.formatter.read().clone()
    }

    fn set_formatter(&self, formatter: Arc<LogFormatter>) {
        *self.formatter.write() = Some(formatter);
    }

    fn name(&self) -> &str {
        "console"
    }
}
