//! File appender implementation

use crate::core::{Appender, LogEvent, LogFormatter, LogLevel, Logger, LoggerError, Result};
use parking_lot::{Mutex, RwLock};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Writes formatted events to a file bound at construction.
///
/// The appender owns the file handle exclusively. [`FileAppender::reopen`]
/// is the one externally triggered state transition on that handle: it closes
/// any existing stream and opens the file fresh, which lets a caller recover
/// after an external log rotation swapped the file out from underneath it.
/// Write failures on an already-open stream are absorbed silently; delivery
/// is degraded, never fatal.
#[derive(Debug)]
pub struct FileAppender {
    path: PathBuf,
    level: LogLevel,
    formatter: RwLock<Option<Arc<LogFormatter>>>,
    stream: Mutex<Option<File>>,
}

impl FileAppender {
    /// Open `path` for appending, creating it if absent.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = Self::open(&path)
            .map_err(|e| LoggerError::file_appender(path.display().to_string(), e.to_string()))?;
        Ok(Self {
            path,
            level: LogLevel::Unknown,
            formatter: RwLock::new(None),
            stream: Mutex::new(Some(file)),
        })
    }

    /// Set the severity threshold for this appender
    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Close any existing stream and reopen the file fresh.
    ///
    /// Returns true when the resulting stream is usable. Callers may poll
    /// this periodically after external rotation; the appender itself never
    /// retries.
    pub fn reopen(&self) -> bool {
        let mut stream = self.stream.lock();
        // Old handle closes before the new open.
        stream.take();
        match Self::open(&self.path) {
            Ok(file) => {
                *stream = Some(file);
                true
            }
            Err(_) => false,
        }
    }

    fn open(path: &Path) -> std::io::Result<File> {
        OpenOptions::new().create(true).append(true).open(path)
    }
}

impl Appender for FileAppender {
    fn log(&self, logger: &Logger, level: LogLevel, event: &LogEvent) {
        if level < self.level {
            return;
        }
        let formatter = self.formatter.read();
        let Some(formatter) = formatter.as_ref() else {
            return;
        };
        let line = formatter.format(logger, level, event);
        if let Some(stream) = self.stream.lock().as_mut() {
            // A failed write is absorbed; reopen() is the recovery path.
            let _ = stream.write_all(line.as_bytes());
        }
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
        "file"
    }
}
