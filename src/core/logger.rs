//! Main logger implementation

use super::appender::Appender;
use super::formatter::LogFormatter;
use super::log_event::LogEvent;
use super::log_level::LogLevel;
use std::sync::Arc;

/// Pattern compiled for a fresh logger until a formatter is assigned.
pub const DEFAULT_PATTERN: &str = "%d [%p] [%c] %f:%l %m%n";

/// The severity-gated fan-out point.
///
/// A logger owns a name, a threshold, a default formatter, and an ordered
/// collection of appenders. [`Logger::log`] is synchronous and call-stack
/// bound: filtering, formatting, and sink writes all complete on the caller's
/// thread before it returns. The logger keeps no queue and no locks of its
/// own; callers needing concurrent use serialize externally.
pub struct Logger {
    name: String,
    level: LogLevel,
    formatter: Arc<LogFormatter>,
    appenders: Vec<Arc<dyn Appender>>,
}

impl Logger {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: LogLevel::Debug,
            formatter: Arc::new(LogFormatter::new(DEFAULT_PATTERN)),
            appenders: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn set_level(&mut self, level: LogLevel) {
        self.level = level;
    }

    /// The default formatter handed to appenders attached without one.
    pub fn formatter(&self) -> Arc<LogFormatter> {
        Arc::clone(&self.formatter)
    }

    /// Replace the default formatter. Appenders already attached keep the
    /// formatter they were assigned at attach time.
    pub fn set_formatter(&mut self, formatter: Arc<LogFormatter>) {
        self.formatter = formatter;
    }

    /// Attach an appender at the end of the dispatch order.
    ///
    /// If the appender has no formatter yet, it receives this logger's
    /// current default. Attaching the same appender twice is permitted (it
    /// will then be written to twice per event).
    pub fn add_appender(&mut self, appender: Arc<dyn Appender>) {
        if appender.formatter().is_none() {
            appender.set_formatter(Arc::clone(&self.formatter));
        }
        self.appenders.push(appender);
    }

    /// Detach an appender by identity. Removing one that is not attached is a
    /// no-op.
    pub fn del_appender(&mut self, appender: &Arc<dyn Appender>) {
        self.appenders.retain(|a| !Arc::ptr_eq(a, appender));
    }

    /// Dispatch `event` to every attached appender, in insertion order.
    ///
    /// The event is dropped entirely when `level` is below this logger's
    /// threshold; each appender then re-checks its own threshold, so an
    /// appender may be stricter than its logger but never more permissive in
    /// effect.
    pub fn log(&self, level: LogLevel, event: &Arc<LogEvent>) {
        if level < self.level {
            return;
        }
        for appender in &self.appenders {
            appender.log(self, level, event);
        }
    }

    pub fn debug(&self, event: &Arc<LogEvent>) {
        self.log(LogLevel::Debug, event);
    }

    pub fn info(&self, event: &Arc<LogEvent>) {
        self.log(LogLevel::Info, event);
    }

    pub fn warn(&self, event: &Arc<LogEvent>) {
        self.log(LogLevel::Warn, event);
    }

    pub fn error(&self, event: &Arc<LogEvent>) {
        self.log(LogLevel::Error, event);
    }

    pub fn fatal(&self, event: &Arc<LogEvent>) {
        self.log(LogLevel::Fatal, event);
    }

    /// Create a builder for Logger
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(name)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new("root")
    }
}

/// Builder for constructing a [`Logger`] with a fluent API
///
/// # Example
/// ```
/// use pattern_logger::prelude::*;
///
/// let logger = Logger::builder("app")
///     .level(LogLevel::Info)
///     .pattern("%d [%p] %m%n")
///     .build();
/// ```
pub struct LoggerBuilder {
    name: String,
    level: LogLevel,
    pattern: Option<String>,
    appenders: Vec<Arc<dyn Appender>>,
}

impl LoggerBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: LogLevel::Debug,
            pattern: None,
            appenders: Vec::new(),
        }
    }

    /// Set the severity threshold
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set the default formatter pattern
    #[must_use = "builder methods return a new value"]
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Add an appender
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appenders.push(Arc::new(appender));
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let mut logger = Logger::new(self.name);
        logger.set_level(self.level);
        if let Some(pattern) = self.pattern {
            logger.set_formatter(Arc::new(LogFormatter::new(pattern)));
        }
        for appender in self.appenders {
            logger.add_appender(appender);
        }
        logger
    }
}
