//! User-visible status text
//!
//! Every message goes to exactly one sink and is duplicated as a log line.

use std::sync::{Arc, Mutex, PoisonError};
use tracing::{error, info, warn};

pub trait StatusSink: Send + Sync {
    fn show(&self, message: &str);
}

/// Prints status lines to stdout
pub struct ConsoleSink;

impl StatusSink for ConsoleSink {
    fn show(&self, message: &str) {
        println!("{}", message);
    }
}

/// Keeps every message, newest last
#[derive(Default)]
pub struct MemorySink {
    messages: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last(&self) -> Option<String> {
        self.messages().pop()
    }
}

impl StatusSink for MemorySink {
    fn show(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}

#[derive(Clone)]
pub struct StatusReporter {
    sink: Arc<dyn StatusSink>,
}

impl StatusReporter {
    pub fn new(sink: Arc<dyn StatusSink>) -> Self {
        Self { sink }
    }

    pub fn console() -> Self {
        Self::new(Arc::new(ConsoleSink))
    }

    pub fn info(&self, message: &str) {
        info!(status = message);
        self.sink.show(message);
    }

    pub fn warn(&self, message: &str) {
        warn!(status = message);
        self.sink.show(message);
    }

    pub fn error(&self, message: &str) {
        error!(status = message);
        self.sink.show(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reporter_writes_to_sink() {
        let sink = Arc::new(MemorySink::new());
        let reporter = StatusReporter::new(sink.clone());

        reporter.info("Starting");
        reporter.warn("Warning: careful");
        reporter.error("Error: boom");

        assert_eq!(
            sink.messages(),
            vec!["Starting", "Warning: careful", "Error: boom"]
        );
        assert_eq!(sink.last().as_deref(), Some("Error: boom"));
    }

    #[test]
    fn test_empty_sink() {
        let sink = MemorySink::new();
        assert!(sink.messages().is_empty());
        assert_eq!(sink.last(), None);
    }
}
