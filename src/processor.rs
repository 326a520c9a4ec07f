//! Span-lifecycle hook that bridges completed spans to a log appender.

use std::sync::Arc;
use std::time::Duration;

use opentelemetry::{otel_debug, Context};
use opentelemetry_sdk::error::OTelSdkResult;
use opentelemetry_sdk::trace::{Span, SpanData, SpanProcessor};

use crate::appender::{AppenderRegistry, LogAppender};
use crate::converter::SpanEventConverter;
use crate::error::BridgeError;

/// A [`SpanProcessor`] that forwards every event on a completed span to one
/// named log appender.
///
/// The appender reference is resolved once, at construction, and lives for
/// the processor's lifetime. If the appender is later detached from the
/// backend, subsequent dispatches still go to the stale reference; what that
/// does is backend-defined. Span starts are of no interest here, so
/// [`on_start`](SpanProcessor::on_start) is an empty body.
///
/// Records are appended synchronously, in event order, on the thread ending
/// the span. A slow appender slows span finalization proportionally; there
/// is no queue, timeout, or retry at this layer.
#[derive(Debug)]
pub struct AppenderSpanProcessor {
    converter: SpanEventConverter,
    appender: Arc<dyn LogAppender>,
}

impl AppenderSpanProcessor {
    /// Creates a processor around an already-resolved appender.
    ///
    /// Prefer this over [`from_registry`](Self::from_registry) when the
    /// composition root already holds the appender; it keeps discovery out
    /// of the bridge entirely.
    pub fn new(converter: SpanEventConverter, appender: Arc<dyn LogAppender>) -> Self {
        AppenderSpanProcessor {
            converter,
            appender,
        }
    }

    /// Resolves `target_appender_name` against `registry` and creates a
    /// processor around the match.
    ///
    /// The registry is scanned exactly once; names are compared
    /// case-insensitively. Fails with [`BridgeError::InvalidArgument`] on a
    /// blank name, before any lookup, and [`BridgeError::AppenderNotFound`]
    /// when nothing matches. Both are fatal misconfigurations meant to
    /// surface at startup rather than silently drop events later.
    pub fn from_registry(
        converter: SpanEventConverter,
        registry: &dyn AppenderRegistry,
        target_appender_name: &str,
    ) -> Result<Self, BridgeError> {
        if target_appender_name.trim().is_empty() {
            return Err(BridgeError::InvalidArgument(
                "target_appender_name is required and must not be blank",
            ));
        }

        let appender = registry
            .appenders()
            .into_iter()
            .find(|appender| appender.name().eq_ignore_ascii_case(target_appender_name))
            .ok_or_else(|| BridgeError::AppenderNotFound {
                name: target_appender_name.to_owned(),
            })?;

        otel_debug!(
            name: "AppenderSpanProcessor.AppenderResolved",
            appender_name = appender.name().to_string()
        );

        Ok(AppenderSpanProcessor::new(converter, appender))
    }
}

impl SpanProcessor for AppenderSpanProcessor {
    fn on_start(&self, _span: &mut Span, _cx: &Context) {
        // Ignored
    }

    fn on_end(&self, span: SpanData) {
        if span.events.is_empty() {
            // Nothing to log
            return;
        }

        match self.converter.convert_events(&span) {
            Ok(records) => {
                for record in records {
                    self.appender.append(record);
                }
            }
            Err(err) => {
                // Unreachable while the emptiness check above holds.
                otel_debug!(
                    name: "AppenderSpanProcessor.OnEnd.Error",
                    reason = format!("{err}")
                );
            }
        }
    }

    fn force_flush(&self) -> OTelSdkResult {
        self.appender.flush();
        Ok(())
    }

    fn shutdown_with_timeout(&self, _timeout: Duration) -> OTelSdkResult {
        self.appender.flush();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use opentelemetry::trace::{Span as _, Status, Tracer as _, TracerProvider as _};
    use opentelemetry::KeyValue;
    use opentelemetry_sdk::trace::{InMemorySpanExporter, SdkTracerProvider};

    use super::*;
    use crate::level::LogLevel;
    use crate::testing::InMemoryAppender;

    fn converter() -> SpanEventConverter {
        SpanEventConverter::builder()
            .with_logger_name("bridge.test")
            .build()
            .expect("valid converter config")
    }

    fn finished_span(
        configure: impl FnOnce(&mut opentelemetry_sdk::trace::Span),
    ) -> SpanData {
        let exporter = InMemorySpanExporter::default();
        let provider = SdkTracerProvider::builder()
            .with_simple_exporter(exporter.clone())
            .build();
        let tracer = provider.tracer("processor-tests");

        let mut span = tracer.start("test-span");
        configure(&mut span);
        span.end();

        exporter
            .get_finished_spans()
            .expect("finished spans")
            .pop()
            .expect("exactly one finished span")
    }

    #[test]
    fn on_end_skips_spans_without_events() {
        let appender = InMemoryAppender::new("AUDIT");
        let processor = AppenderSpanProcessor::new(converter(), Arc::new(appender.clone()));

        processor.on_end(finished_span(|_span| {}));

        assert!(appender.get_appended_records().is_empty());
    }

    #[test]
    fn on_end_appends_records_in_event_order() {
        let appender = InMemoryAppender::new("AUDIT");
        let processor = AppenderSpanProcessor::new(converter(), Arc::new(appender.clone()));

        processor.on_end(finished_span(|span| {
            span.add_event("first", vec![]);
            span.add_event("second", vec![]);
            span.add_event("third", vec![]);
        }));

        let messages: Vec<_> = appender
            .get_appended_records()
            .iter()
            .map(|r| r.message.to_string())
            .collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
    }

    #[test]
    fn on_end_honors_span_status_and_level_attributes() {
        let appender = InMemoryAppender::new("AUDIT");
        let processor = AppenderSpanProcessor::new(converter(), Arc::new(appender.clone()));

        processor.on_end(finished_span(|span| {
            span.add_event("warned", vec![KeyValue::new("level", "  WaRn ")]);
        }));
        processor.on_end(finished_span(|span| {
            span.add_event("failed", vec![KeyValue::new("level", "debug")]);
            span.set_status(Status::error("span failed"));
        }));

        let records = appender.get_appended_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].level, LogLevel::Warn);
        assert_eq!(records[1].level, LogLevel::Error);
    }

    #[test]
    fn from_registry_rejects_blank_target_name() {
        let registry: Vec<Arc<dyn LogAppender>> = vec![Arc::new(InMemoryAppender::new("AUDIT"))];
        let result = AppenderSpanProcessor::from_registry(converter(), &registry, "  ");
        assert!(matches!(result, Err(BridgeError::InvalidArgument(_))));
    }

    #[test]
    fn from_registry_fails_when_no_appender_matches() {
        let registry: Vec<Arc<dyn LogAppender>> = vec![Arc::new(InMemoryAppender::new("AUDIT"))];
        let result = AppenderSpanProcessor::from_registry(converter(), &registry, "missing");
        match result {
            Err(BridgeError::AppenderNotFound { name }) => assert_eq!(name, "missing"),
            other => panic!("expected AppenderNotFound, got {other:?}"),
        }
    }

    #[test]
    fn from_registry_matches_names_case_insensitively() {
        let appender = InMemoryAppender::new("MyAppender");
        let registry: Vec<Arc<dyn LogAppender>> = vec![Arc::new(appender.clone())];
        let processor = AppenderSpanProcessor::from_registry(converter(), &registry, "myappender")
            .expect("resolved appender");

        processor.on_end(finished_span(|span| {
            span.add_event("routed", vec![]);
        }));

        assert_eq!(appender.get_appended_records().len(), 1);
    }

    #[test]
    fn flush_and_shutdown_succeed() {
        let processor =
            AppenderSpanProcessor::new(converter(), Arc::new(InMemoryAppender::new("AUDIT")));
        assert!(processor.force_flush().is_ok());
        assert!(processor.shutdown().is_ok());
    }
}
