use thiserror::Error;

/// Errors raised while wiring or feeding the bridge.
///
/// Every failure is synchronous and local to the call that triggered it;
/// there is no deferred error channel.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum BridgeError {
    /// A required argument was missing, blank, or otherwise unusable.
    ///
    /// Indicates a programming error in the host application, not a runtime
    /// condition worth retrying.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// No appender with the requested name is registered with the logging
    /// backend.
    ///
    /// Raised once, at construction time. A forwarder wired to a nonexistent
    /// appender is a misconfiguration that should surface at startup rather
    /// than silently drop every forwarded event later.
    #[error("no appender named `{name}` is registered with the logging backend")]
    AppenderNotFound {
        /// The requested appender name.
        name: String,
    },
}
