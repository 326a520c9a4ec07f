//! The records handed to appenders.

use std::borrow::Cow;
use std::fmt;
use std::time::SystemTime;

use crate::level::LogLevel;

/// A structured record produced from one span event.
///
/// Records are immutable after creation and are moved into the appender
/// exactly once.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct LogRecord {
    /// Synthetic logger identity every forwarded event lands under, so
    /// operators can filter or route bridged records as a unit.
    pub logger_name: String,
    /// Resolved severity.
    pub level: LogLevel,
    /// The span event's name.
    pub message: Cow<'static, str>,
    /// The span event's timestamp, carried through unchanged. Backends
    /// truncate to their own resolution when they format it.
    pub timestamp: SystemTime,
    /// Identifies this bridge as the component that emitted the record.
    pub emitter: &'static str,
    /// Structured exception details recovered from an `exception` event.
    pub exception: Option<ExceptionInfo>,
}

/// Exception details recovered from the OpenTelemetry exception-event
/// attributes (`exception.type`, `exception.message`, `exception.stacktrace`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct ExceptionInfo {
    /// Fully-qualified type of the exception, if recorded.
    pub exception_type: Option<String>,
    /// Human-readable exception message, if recorded.
    pub exception_message: Option<String>,
    /// Stack trace in the producing runtime's natural representation.
    pub stacktrace: Option<String>,
}

impl fmt::Display for ExceptionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.exception_type, &self.exception_message) {
            (Some(ty), Some(msg)) => write!(f, "{ty}: {msg}")?,
            (Some(ty), None) => f.write_str(ty)?,
            (None, Some(msg)) => f.write_str(msg)?,
            (None, None) => f.write_str("unknown exception")?,
        }
        if let Some(stack) = &self.stacktrace {
            write!(f, "\n{stack}")?;
        }
        Ok(())
    }
}
