//! Core logging types and traits

pub mod appender;
pub mod error;
pub mod format_item;
pub mod formatter;
pub mod log_event;
pub mod log_level;
pub mod logger;
pub mod pattern;

pub use appender::Appender;
pub use error::{LoggerError, Result};
pub use format_item::{FormatItem, DEFAULT_DATE_FORMAT, LINE_TERMINATOR};
pub use formatter::LogFormatter;
pub use log_event::{current_thread_id, elapsed_millis, LogEvent};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder, DEFAULT_PATTERN};
pub use pattern::{PatternToken, TokenKind, PATTERN_ERROR};
