//! In-memory test doubles for the appender contract.
//!
//! Enabled with the `testing` cargo feature. Useful for asserting on exactly
//! which records a processor handed off, without standing up a real logging
//! backend.

use std::sync::{Arc, Mutex};

use crate::appender::LogAppender;
use crate::record::LogRecord;

/// A [`LogAppender`] that stores appended records in memory.
///
/// Clones share the same backing storage, so a test can keep one handle and
/// hand another to the processor.
#[derive(Clone, Debug)]
pub struct InMemoryAppender {
    name: String,
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl InMemoryAppender {
    /// Creates an appender registered under `name`.
    pub fn new(name: impl Into<String>) -> Self {
        InMemoryAppender {
            name: name.into(),
            records: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Snapshot of every record appended so far, in append order.
    pub fn get_appended_records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    /// Clears the stored records.
    pub fn reset(&self) {
        if let Ok(mut records) = self.records.lock() {
            records.clear();
        }
    }
}

impl LogAppender for InMemoryAppender {
    fn name(&self) -> &str {
        &self.name
    }

    fn append(&self, record: LogRecord) {
        if let Ok(mut records) = self.records.lock() {
            records.push(record);
        }
    }
}
