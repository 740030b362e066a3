//! # Pattern Logger
//!
//! A lightweight synchronous logging core: events flow from a named
//! [`Logger`] through severity gates to an ordered set of appenders, each
//! rendering through a compiled printf-like pattern.
//!
//! ## Features
//!
//! - **Pattern formatting**: `"%d [%p] %f:%l %m%n"` compiles to an ordered
//!   renderer sequence; malformed patterns degrade to visible error tokens
//!   instead of failing
//! - **Double gating**: logger and appender each hold their own severity
//!   threshold
//! - **Multiple appenders**: console, file, and custom sinks via the
//!   [`Appender`] trait
//! - **Synchronous**: every `log` call completes its writes before returning
//!
//! ## Example
//!
//! ```
//! use pattern_logger::prelude::*;
//! use pattern_logger::info;
//! use std::sync::Arc;
//!
//! let mut logger = Logger::new("root");
//! logger.set_formatter(Arc::new(LogFormatter::new("%d [%p] [%c] %m%n")));
//! logger.add_appender(Arc::new(ConsoleAppender::new()));
//!
//! info!(logger, "listening on port {}", 8080);
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    #[cfg(feature = "console")]
    pub use crate::appenders::ConsoleAppender;
    #[cfg(feature = "file")]
    pub use crate::appenders::FileAppender;
    pub use crate::core::{
        Appender, FormatItem, LogEvent, LogFormatter, LogLevel, Logger, LoggerBuilder,
        LoggerError, PatternToken, Result, TokenKind,
    };
}

#[cfg(feature = "console")]
pub use appenders::ConsoleAppender;
#[cfg(feature = "file")]
pub use appenders::FileAppender;
pub use crate::core::{
    current_thread_id, elapsed_millis, Appender, FormatItem, LogEvent, LogFormatter, LogLevel,
    Logger, LoggerBuilder, LoggerError, PatternToken, Result, TokenKind, DEFAULT_DATE_FORMAT,
    DEFAULT_PATTERN, LINE_TERMINATOR, PATTERN_ERROR,
};
