//! Conversion from finished span events to log records.

use opentelemetry::trace::{Event, Status};
use opentelemetry_sdk::trace::SpanData;
use opentelemetry_semantic_conventions::attribute::{
    EXCEPTION_MESSAGE, EXCEPTION_STACKTRACE, EXCEPTION_TYPE,
};

use crate::error::BridgeError;
use crate::level::LogLevel;
use crate::record::{ExceptionInfo, LogRecord};

/// Stamped on every record as the emitting component.
const EMITTER_NAME: &str = "opentelemetry-span-log-bridge";

/// Event attribute consulted for a per-event severity override.
const LEVEL_ATTRIBUTE_KEY: &str = "level";

/// Events recorded under this name carry exception attributes per the
/// OpenTelemetry semantic conventions.
const EXCEPTION_EVENT_NAME: &str = "exception";

/// Converts span events to [`LogRecord`]s.
///
/// Holds only immutable configuration, so conversion is deterministic and
/// safe to drive from any number of threads.
#[derive(Clone, Debug)]
pub struct SpanEventConverter {
    logger_name: String,
    default_level: LogLevel,
}

impl SpanEventConverter {
    /// Starts building a converter.
    pub fn builder() -> SpanEventConverterBuilder {
        SpanEventConverterBuilder::default()
    }

    /// Converts a single span event.
    ///
    /// Cannot fail for any well-formed event. The severity is resolved in
    /// order: an `error` span status wins outright, then a parseable `level`
    /// attribute on the event, then the configured default.
    pub fn convert_event(&self, event: &Event, span_status: &Status) -> LogRecord {
        LogRecord {
            logger_name: self.logger_name.clone(),
            level: self.resolve_level(event, span_status),
            message: event.name.clone(),
            timestamp: event.timestamp,
            emitter: EMITTER_NAME,
            exception: extract_exception(event),
        }
    }

    /// Converts every event on a finished span, in recorded order, sharing
    /// the span's status.
    ///
    /// Returns [`BridgeError::InvalidArgument`] when the span carries no
    /// events; callers are expected to pre-filter those spans.
    pub fn convert_events(&self, span: &SpanData) -> Result<Vec<LogRecord>, BridgeError> {
        if span.events.is_empty() {
            return Err(BridgeError::InvalidArgument("at least one event required"));
        }

        Ok(span
            .events
            .iter()
            .map(|event| self.convert_event(event, &span.status))
            .collect())
    }

    fn resolve_level(&self, event: &Event, span_status: &Status) -> LogLevel {
        if matches!(span_status, Status::Error { .. }) {
            return LogLevel::Error;
        }

        event
            .attributes
            .iter()
            .find(|kv| kv.key.as_str().eq_ignore_ascii_case(LEVEL_ATTRIBUTE_KEY))
            .and_then(|kv| kv.value.as_str().parse::<LogLevel>().ok())
            .unwrap_or(self.default_level)
    }
}

fn extract_exception(event: &Event) -> Option<ExceptionInfo> {
    if event.name != EXCEPTION_EVENT_NAME {
        return None;
    }

    let mut info = ExceptionInfo::default();
    for kv in &event.attributes {
        match kv.key.as_str() {
            EXCEPTION_TYPE => info.exception_type = Some(kv.value.as_str().into_owned()),
            EXCEPTION_MESSAGE => info.exception_message = Some(kv.value.as_str().into_owned()),
            EXCEPTION_STACKTRACE => info.stacktrace = Some(kv.value.as_str().into_owned()),
            _ => {}
        }
    }

    if info == ExceptionInfo::default() {
        None
    } else {
        Some(info)
    }
}

/// Builder for [`SpanEventConverter`].
#[derive(Debug, Default)]
pub struct SpanEventConverterBuilder {
    logger_name: Option<String>,
    default_level: Option<LogLevel>,
}

impl SpanEventConverterBuilder {
    /// Logger identity every produced record lands under. Required.
    pub fn with_logger_name(mut self, logger_name: impl Into<String>) -> Self {
        self.logger_name = Some(logger_name.into());
        self
    }

    /// Severity used when neither the span status nor a `level` attribute
    /// decides one. Defaults to [`LogLevel::Info`].
    pub fn with_default_level(mut self, default_level: LogLevel) -> Self {
        self.default_level = Some(default_level);
        self
    }

    /// Builds the converter, failing fast on a blank logger name.
    pub fn build(self) -> Result<SpanEventConverter, BridgeError> {
        let logger_name = self.logger_name.unwrap_or_default();
        if logger_name.trim().is_empty() {
            return Err(BridgeError::InvalidArgument(
                "logger_name is required and must not be blank",
            ));
        }

        Ok(SpanEventConverter {
            logger_name,
            default_level: self.default_level.unwrap_or_default(),
        })
    }
}
