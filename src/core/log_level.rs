//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed presentation names, indexed by the numeric level value.
const LEVEL_NAMES: [&str; 6] = ["UNKNOWN", "DEBUG", "INFO", "WARN", "ERROR", "FATAL"];

/// Severity of a log event.
///
/// Ordering is numeric and total: `Unknown < Debug < Info < Warn < Error <
/// Fatal`. Severity gates (on [`Logger`](crate::Logger) and on appenders)
/// compare with this order exclusively; the string names are presentation
/// only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum LogLevel {
    #[default]
    Unknown = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Fatal = 5,
}

impl LogLevel {
    pub fn to_str(&self) -> &'static str {
        LEVEL_NAMES[*self as usize]
    }

    /// Convert a raw numeric value to a level.
    ///
    /// Any value outside the declared range maps to [`LogLevel::Unknown`],
    /// matching the presentation contract that out-of-range values render as
    /// `"UNKNOWN"`.
    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => LogLevel::Debug,
            2 => LogLevel::Info,
            3 => LogLevel::Warn,
            4 => LogLevel::Error,
            5 => LogLevel::Fatal,
            _ => LogLevel::Unknown,
        }
    }

    /// Presentation name for a raw numeric value; `"UNKNOWN"` when out of range.
    pub fn name_of(value: u8) -> &'static str {
        LEVEL_NAMES.get(value as usize).copied().unwrap_or("UNKNOWN")
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Unknown => BrightBlack,
            LogLevel::Debug => Blue,
            LogLevel::Info => Green,
            LogLevel::Warn => Yellow,
            LogLevel::Error => Red,
            LogLevel::Fatal => BrightRed,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "UNKNOWN" => Ok(LogLevel::Unknown),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "FATAL" => Ok(LogLevel::Fatal),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_numeric() {
        assert!(LogLevel::Unknown < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Fatal);
    }

    #[test]
    fn test_names_match_table() {
        assert_eq!(LogLevel::Unknown.to_str(), "UNKNOWN");
        assert_eq!(LogLevel::Debug.to_str(), "DEBUG");
        assert_eq!(LogLevel::Info.to_str(), "INFO");
        assert_eq!(LogLevel::Warn.to_str(), "WARN");
        assert_eq!(LogLevel::Error.to_str(), "ERROR");
        assert_eq!(LogLevel::Fatal.to_str(), "FATAL");
    }

    #[test]
    fn test_out_of_range_renders_unknown() {
        assert_eq!(LogLevel::name_of(6), "UNKNOWN");
        assert_eq!(LogLevel::name_of(255), "UNKNOWN");
        assert_eq!(LogLevel::from_u8(6), LogLevel::Unknown);
        assert_eq!(LogLevel::from_u8(0), LogLevel::Unknown);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("debug".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("WARNING".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert!("verbose".parse::<LogLevel>().is_err());
    }
}
