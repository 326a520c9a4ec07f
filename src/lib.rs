//! Forwards completed span events into a structured-logging backend.
//!
//! The OpenTelemetry tracing SDK records events on spans (`exception`,
//! custom annotations); plenty of deployments still want those events in
//! their conventional logs as well. This crate bridges the two: an
//! [`AppenderSpanProcessor`] hooks span completion, a [`SpanEventConverter`]
//! turns each recorded event into a [`LogRecord`], and every record is handed
//! to one named [`LogAppender`] resolved once at startup.
//!
//! The bridge performs no batching, retry, or backpressure of its own; the
//! appender owns delivery. Records for a single span arrive in the span's
//! recorded event order, synchronously on the thread that ended the span.
//!
//! Severity is resolved per event: a span that ended in error forces
//! `ERROR`, otherwise a `level` attribute on the event is honored
//! (case-insensitive, `WARNING` accepted), otherwise the converter's
//! configured default applies. Events named `exception` additionally have
//! their semantic-convention exception attributes lifted into structured
//! [`ExceptionInfo`].
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use opentelemetry::trace::{Span, Tracer, TracerProvider as _};
//! use opentelemetry_sdk::trace::SdkTracerProvider;
//! use opentelemetry_span_log_bridge::{
//!     AppenderSpanProcessor, LogAppender, LogRecord, SimpleAppenderRegistry,
//!     SpanEventConverter,
//! };
//!
//! #[derive(Debug)]
//! struct StderrAppender;
//!
//! impl LogAppender for StderrAppender {
//!     fn name(&self) -> &str {
//!         "STDERR"
//!     }
//!
//!     fn append(&self, record: LogRecord) {
//!         eprintln!("{} [{}] {}", record.logger_name, record.level, record.message);
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = SimpleAppenderRegistry::default();
//! registry.register(Arc::new(StderrAppender));
//!
//! let converter = SpanEventConverter::builder()
//!     .with_logger_name("otel.span.events")
//!     .build()?;
//! let processor = AppenderSpanProcessor::from_registry(converter, &registry, "stderr")?;
//!
//! let provider = SdkTracerProvider::builder()
//!     .with_span_processor(processor)
//!     .build();
//!
//! let tracer = provider.tracer("example");
//! let mut span = tracer.start("checkout");
//! span.add_event("cart-emptied", vec![]);
//! span.end();
//! # Ok(())
//! # }
//! ```
//!
//! # Feature flags
//!
//! - `log`: `LogFacadeAppender`, forwarding records into the global `log`
//!   facade.
//! - `testing`: `testing::InMemoryAppender`, for asserting on dispatched
//!   records.
//! - `internal-logs` (default): self-diagnostics through OpenTelemetry's
//!   internal logging macros.
#![warn(
    future_incompatible,
    missing_debug_implementations,
    missing_docs,
    nonstandard_style,
    rust_2018_idioms,
    unreachable_pub,
    unused
)]
#![allow(clippy::needless_doctest_main)]

mod appender;
mod converter;
mod error;
mod level;
mod processor;
mod record;

#[cfg(feature = "log")]
mod log_appender;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use appender::{AppenderRegistry, LogAppender, SimpleAppenderRegistry};
pub use converter::{SpanEventConverter, SpanEventConverterBuilder};
pub use error::BridgeError;
pub use level::{LogLevel, ParseLevelError};
#[cfg(feature = "log")]
pub use log_appender::LogFacadeAppender;
pub use processor::AppenderSpanProcessor;
pub use record::{ExceptionInfo, LogRecord};
