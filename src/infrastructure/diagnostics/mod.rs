use chrono::Local;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use tracing::{error, info, warn};

const MAX_LOG_ENTRIES: usize = 100;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LogEntry {
    pub time: String,
    pub level: String,
    pub source: String,
    pub message: String,
}

/// Sink for failure detail and session milestones. The session keeps no
/// error text itself; whatever a backend or transport reports ends up here.
pub trait DiagnosticsSink: Send + Sync {
    fn record(&self, level: &str, source: &str, message: &str);
}

/// Forwards everything to `tracing`.
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn record(&self, level: &str, source: &str, message: &str) {
        match level {
            "ERROR" => error!(source, "{}", message),
            "WARN" => warn!(source, "{}", message),
            _ => info!(source, "{}", message),
        }
    }
}

/// Bounded in-memory log, for tests and for an embedding UI that wants to
/// show recent activity.
#[derive(Default)]
pub struct LogBuffer {
    entries: Mutex<Vec<LogEntry>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().unwrap().clone()
    }
}

impl DiagnosticsSink for LogBuffer {
    fn record(&self, level: &str, source: &str, message: &str) {
        let entry = LogEntry {
            time: Local::now().format("%H:%M:%S").to_string(),
            level: level.to_string(),
            source: source.to_string(),
            message: message.to_string(),
        };
        let mut entries = self.entries.lock().unwrap();
        entries.push(entry);
        if entries.len() > MAX_LOG_ENTRIES {
            entries.remove(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_buffer_records() {
        let buffer = LogBuffer::new();
        buffer.record("ERROR", "Session", "model unavailable");
        let entries = buffer.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, "ERROR");
        assert_eq!(entries[0].source, "Session");
        assert_eq!(entries[0].message, "model unavailable");
    }

    #[test]
    fn test_log_buffer_caps_entries() {
        let buffer = LogBuffer::new();
        for i in 0..150 {
            buffer.record("INFO", "Session", &format!("entry {}", i));
        }
        let entries = buffer.entries();
        assert_eq!(entries.len(), MAX_LOG_ENTRIES);
        assert_eq!(entries[0].message, "entry 50");
        assert_eq!(entries.last().unwrap().message, "entry 149");
    }
}
