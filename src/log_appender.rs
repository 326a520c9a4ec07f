//! Appender that forwards records into the `log` facade.

use crate::appender::LogAppender;
use crate::level::LogLevel;
use crate::record::LogRecord;

/// A [`LogAppender`] that hands records to whatever logger the `log` facade
/// has installed.
///
/// The facade keeps no appender registry of its own, so the name supplied at
/// construction only serves this crate's registry lookup. The facade stamps
/// records at append time; the span event's own timestamp is not carried
/// through this backend.
#[derive(Clone, Debug)]
pub struct LogFacadeAppender {
    name: String,
}

impl LogFacadeAppender {
    /// Creates an appender registered under `name`.
    pub fn new(name: impl Into<String>) -> Self {
        LogFacadeAppender { name: name.into() }
    }
}

impl LogAppender for LogFacadeAppender {
    fn name(&self) -> &str {
        &self.name
    }

    fn append(&self, record: LogRecord) {
        let level = to_log_level(record.level);
        match &record.exception {
            Some(exception) => log::logger().log(
                &log::Record::builder()
                    .level(level)
                    .target(&record.logger_name)
                    .args(format_args!("{}: {}", record.message, exception))
                    .build(),
            ),
            None => log::logger().log(
                &log::Record::builder()
                    .level(level)
                    .target(&record.logger_name)
                    .args(format_args!("{}", record.message))
                    .build(),
            ),
        }
    }

    fn flush(&self) {
        log::logger().flush();
    }
}

fn to_log_level(level: LogLevel) -> log::Level {
    match level {
        LogLevel::Trace => log::Level::Trace,
        LogLevel::Debug => log::Level::Debug,
        LogLevel::Info => log::Level::Info,
        LogLevel::Warn => log::Level::Warn,
        LogLevel::Error => log::Level::Error,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::SystemTime;

    use super::*;
    use crate::record::ExceptionInfo;

    #[derive(Debug)]
    struct CaptureLogger {
        lines: Mutex<Vec<(log::Level, String, String)>>,
    }

    impl log::Log for CaptureLogger {
        fn enabled(&self, _metadata: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            if let Ok(mut lines) = self.lines.lock() {
                lines.push((
                    record.level(),
                    record.target().to_owned(),
                    record.args().to_string(),
                ));
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: CaptureLogger = CaptureLogger {
        lines: Mutex::new(Vec::new()),
    };

    fn record(message: &'static str, exception: Option<ExceptionInfo>) -> LogRecord {
        LogRecord {
            logger_name: "bridge.test".to_owned(),
            level: LogLevel::Warn,
            message: message.into(),
            timestamp: SystemTime::now(),
            emitter: "opentelemetry-span-log-bridge",
            exception,
        }
    }

    #[test]
    fn maps_every_level_onto_the_facade() {
        assert_eq!(to_log_level(LogLevel::Trace), log::Level::Trace);
        assert_eq!(to_log_level(LogLevel::Debug), log::Level::Debug);
        assert_eq!(to_log_level(LogLevel::Info), log::Level::Info);
        assert_eq!(to_log_level(LogLevel::Warn), log::Level::Warn);
        assert_eq!(to_log_level(LogLevel::Error), log::Level::Error);
    }

    #[test]
    fn forwards_message_target_and_exception_to_the_facade() {
        // The process-wide facade logger can only be installed once; this is
        // the single test that does so.
        log::set_logger(&CAPTURE).expect("no other logger installed");
        log::set_max_level(log::LevelFilter::Trace);

        let appender = LogFacadeAppender::new("FACADE");
        appender.append(record("plain", None));
        appender.append(record(
            "exception",
            Some(ExceptionInfo {
                exception_type: Some("std::io::Error".to_owned()),
                exception_message: Some("disk full".to_owned()),
                stacktrace: None,
            }),
        ));

        let lines = CAPTURE.lines.lock().expect("capture lines");
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            (log::Level::Warn, "bridge.test".to_owned(), "plain".to_owned())
        );
        assert_eq!(
            lines[1],
            (
                log::Level::Warn,
                "bridge.test".to_owned(),
                "exception: std::io::Error: disk full".to_owned()
            )
        );
    }
}
