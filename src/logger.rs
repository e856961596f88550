//! Diagnostic Logger Module
//!
//! The cache reports rejected admissions through a pluggable logger
//! capability. The cache only ever writes to it, one message per rejection.

use std::sync::{Arc, Mutex};

use tracing::info;

// == Logger Trait ==
/// Capability for recording a diagnostic message.
pub trait Logger: Send + Sync {
    /// Records one informational message.
    fn record(&self, message: &str);
}

// == Tracing Logger ==
/// Default logger, forwarding messages to the `tracing` infrastructure.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn record(&self, message: &str) {
        info!("{}", message);
    }
}

// == Memory Logger ==
/// Logger that buffers messages in memory.
///
/// Clones share the same buffer, so a test can hand one clone to the cache
/// and assert on the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryLogger {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MemoryLogger {
    /// Creates an empty MemoryLogger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all recorded messages.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Logger for MemoryLogger {
    fn record(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_logger_records() {
        let logger = MemoryLogger::new();
        logger.record("first");
        logger.record("second");

        assert_eq!(logger.messages(), vec!["first", "second"]);
    }

    #[test]
    fn test_memory_logger_clones_share_buffer() {
        let logger = MemoryLogger::new();
        let sink: Box<dyn Logger> = Box::new(logger.clone());

        sink.record("shared");

        assert_eq!(logger.messages(), vec!["shared"]);
    }

    #[test]
    fn test_tracing_logger_records_without_subscriber() {
        // No subscriber installed; recording must still be a no-op, not a panic.
        TracingLogger.record("dropped on the floor");
    }
}
