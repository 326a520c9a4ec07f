//! Severity levels attached to produced log records.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Ordered severity category attached to a [`LogRecord`](crate::LogRecord).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LogLevel {
    /// Finest-grained events.
    Trace,
    /// Diagnostic events.
    Debug,
    /// Routine events.
    #[default]
    Info,
    /// Potentially harmful situations.
    Warn,
    /// Failures.
    Error,
}

impl LogLevel {
    /// Uppercase name of the level, as backends conventionally render it.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The token could not be parsed as a [`LogLevel`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized log level `{0}`")]
pub struct ParseLevelError(String);

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    /// Parses a severity name, ignoring case and surrounding whitespace.
    ///
    /// `WARNING` is accepted as a synonym for `WARN`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "TRACE" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            _ => Err(ParseLevelError(s.trim().to_owned())),
        }
    }
}
