//! Log event structure

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cell::Cell;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;

// Process-wide origin for the elapsed-milliseconds field, pinned on first use.
static PROCESS_START: OnceLock<Instant> = OnceLock::new();

// Small monotonically assigned per-thread ids, cached so repeated captures on
// the same thread are allocation free.
static NEXT_THREAD_ID: AtomicU64 = AtomicU64::new(1);

thread_local! {
    static THREAD_ID_CACHE: Cell<u64> = const { Cell::new(0) };
}

/// Milliseconds since the process-wide origin was first observed.
pub fn elapsed_millis() -> u64 {
    PROCESS_START.get_or_init(Instant::now).elapsed().as_millis() as u64
}

/// Cached numeric id for the calling thread.
pub fn current_thread_id() -> u64 {
    THREAD_ID_CACHE.with(|cache| {
        if cache.get() == 0 {
            cache.set(NEXT_THREAD_ID.fetch_add(1, Ordering::Relaxed));
        }
        cache.get()
    })
}

/// An immutable snapshot of one log call's context.
///
/// Constructed once at the call site (or by the logging macros), then passed
/// by shared ownership (`Arc<LogEvent>`) through the [`Logger`](crate::Logger)
/// to every accepted appender. There are no setters; the event is read-only
/// for its entire lifetime.
#[derive(Debug, Clone, Serialize)]
pub struct LogEvent {
    file: &'static str,
    line: u32,
    thread_id: u64,
    fiber_id: u64,
    elapsed_ms: u64,
    timestamp: DateTime<Utc>,
    message: String,
}

impl LogEvent {
    /// Create an event from fully caller-supplied context.
    ///
    /// Thread and fiber ids are opaque integers supplied by the environment;
    /// this constructor does not acquire them itself.
    pub fn new(
        file: &'static str,
        line: u32,
        thread_id: u64,
        fiber_id: u64,
        elapsed_ms: u64,
        timestamp: DateTime<Utc>,
        message: String,
    ) -> Self {
        Self {
            file,
            line,
            thread_id,
            fiber_id,
            elapsed_ms,
            timestamp,
            message,
        }
    }

    /// Create an event capturing the current timestamp, elapsed time, and the
    /// calling thread's cached id. Fiber id is left at zero; callers with a
    /// fiber/task runtime use [`LogEvent::new`] and supply their own.
    pub fn capture(file: &'static str, line: u32, message: String) -> Self {
        Self::new(
            file,
            line,
            current_thread_id(),
            0,
            elapsed_millis(),
            Utc::now(),
            message,
        )
    }

    /// Source filename; borrowed from a caller-owned constant, never copied.
    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn thread_id(&self) -> u64 {
        self.thread_id
    }

    /// Fiber/task id; zero when the environment has no fiber concept.
    pub fn fiber_id(&self) -> u64 {
        self.fiber_id
    }

    /// Milliseconds elapsed since process start.
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_event_is_a_plain_snapshot() {
        let ts = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
        let event = LogEvent::new("src/main.rs", 42, 7, 3, 1500, ts, "hello".to_string());

        assert_eq!(event.file(), "src/main.rs");
        assert_eq!(event.line(), 42);
        assert_eq!(event.thread_id(), 7);
        assert_eq!(event.fiber_id(), 3);
        assert_eq!(event.elapsed_ms(), 1500);
        assert_eq!(event.timestamp(), ts);
        assert_eq!(event.message(), "hello");
    }

    #[test]
    fn test_capture_fills_ambient_context() {
        let event = LogEvent::capture(file!(), line!(), "captured".to_string());

        assert!(event.file().ends_with("log_event.rs"));
        assert!(event.thread_id() > 0);
        assert_eq!(event.fiber_id(), 0);
        assert_eq!(event.message(), "captured");
    }

    #[test]
    fn test_thread_id_is_stable_per_thread() {
        let first = current_thread_id();
        let second = current_thread_id();
        assert_eq!(first, second);

        let other = std::thread::spawn(current_thread_id).join().unwrap();
        assert_ne!(first, other);
    }
}
