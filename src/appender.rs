//! The appender contract this bridge dispatches into.

use std::fmt;
use std::sync::{Arc, RwLock};

use crate::record::LogRecord;

/// A named destination in the logging backend that receives finished records.
///
/// Implementations must be safe to call concurrently; the tracing SDK ends
/// spans on arbitrary application threads. Delivery semantics are entirely
/// the backend's: buffering, blocking, and failure handling all happen behind
/// [`append`](LogAppender::append), and this bridge adds no retry or
/// suppression of its own.
pub trait LogAppender: fmt::Debug + Send + Sync {
    /// Appender identity, matched case-insensitively during registry lookup.
    fn name(&self) -> &str;

    /// Hands one finished record to the backend.
    fn append(&self, record: LogRecord);

    /// Flushes buffered records, if the backend buffers. Defaults to a no-op.
    fn flush(&self) {}
}

/// Runtime view of the appenders attached to the logging backend.
///
/// [`AppenderSpanProcessor`](crate::AppenderSpanProcessor) scans this once at
/// construction; appenders added or removed afterwards are not observed.
pub trait AppenderRegistry: Send + Sync {
    /// Snapshot of every appender currently registered, across all loggers.
    fn appenders(&self) -> Vec<Arc<dyn LogAppender>>;
}

impl AppenderRegistry for Vec<Arc<dyn LogAppender>> {
    fn appenders(&self) -> Vec<Arc<dyn LogAppender>> {
        self.clone()
    }
}

/// Vec-backed [`AppenderRegistry`] for hosts whose logging backend has no
/// native registry to walk.
#[derive(Debug, Default)]
pub struct SimpleAppenderRegistry {
    appenders: RwLock<Vec<Arc<dyn LogAppender>>>,
}

impl SimpleAppenderRegistry {
    /// Attaches an appender to the registry.
    pub fn register(&self, appender: Arc<dyn LogAppender>) {
        if let Ok(mut appenders) = self.appenders.write() {
            appenders.push(appender);
        }
    }
}

impl AppenderRegistry for SimpleAppenderRegistry {
    fn appenders(&self) -> Vec<Arc<dyn LogAppender>> {
        self.appenders
            .read()
            .map(|appenders| appenders.clone())
            .unwrap_or_default()
    }
}
