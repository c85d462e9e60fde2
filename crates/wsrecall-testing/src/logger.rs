//! Logger that remembers every call, for asserting on diagnostics.

use std::sync::Mutex;
use wsrecall_providers::Logger;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogRecord {
    Exception {
        source: String,
        message: String,
        error: String,
    },
    Info {
        source: String,
        message: String,
    },
}

#[derive(Debug, Default)]
pub struct RecordingLogger {
    records: Mutex<Vec<LogRecord>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn exceptions(&self) -> Vec<LogRecord> {
        self.records()
            .into_iter()
            .filter(|r| matches!(r, LogRecord::Exception { .. }))
            .collect()
    }

    pub fn infos(&self) -> Vec<LogRecord> {
        self.records()
            .into_iter()
            .filter(|r| matches!(r, LogRecord::Info { .. }))
            .collect()
    }

    fn push(&self, record: LogRecord) {
        if let Ok(mut records) = self.records.lock() {
            records.push(record);
        }
    }
}

impl Logger for RecordingLogger {
    fn log_exception(&self, source: &str, message: &str, error: &dyn std::error::Error) {
        self.push(LogRecord::Exception {
            source: source.to_string(),
            message: message.to_string(),
            error: error.to_string(),
        });
    }

    fn log_info(&self, source: &str, message: &str) {
        self.push(LogRecord::Info {
            source: source.to_string(),
            message: message.to_string(),
        });
    }
}
