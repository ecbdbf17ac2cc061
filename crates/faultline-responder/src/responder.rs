use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use faultline_core::{ErrorCategory, ErrorEvent, ResponseDescriptor};

use crate::log::{ErrorLog, LogRecord, Severity, TracingLog};

/// Translates error events into client responses and internal log entries
///
/// Stateless apart from the injected log sink, so a single instance can be
/// cloned into every request handler.
#[derive(Clone)]
pub struct ErrorResponder {
    log: Arc<dyn ErrorLog>,
}

impl ErrorResponder {
    /// Create a responder writing to the given sink
    pub fn new(log: impl ErrorLog + 'static) -> Self {
        Self { log: Arc::new(log) }
    }

    /// Create a responder sharing an existing sink
    pub fn from_shared(log: Arc<dyn ErrorLog>) -> Self {
        Self { log }
    }

    /// Translate an event into the response sent to the client
    ///
    /// Emits exactly one log record at the severity for the event's
    /// category before returning. The response depends on the category
    /// alone; the originating error only ever reaches the log.
    #[must_use]
    #[allow(clippy::needless_pass_by_value)]
    pub fn respond(&self, event: ErrorEvent) -> ResponseDescriptor {
        let category = event.category();
        let (severity, message) = log_rule(category);

        let record = LogRecord {
            severity,
            category,
            message,
            error_type: event.error_type(),
            error: event.error(),
            backtrace: event.backtrace(),
            context: event.context(),
        };

        // A failing sink must not keep the client from getting a response
        let _ = panic::catch_unwind(AssertUnwindSafe(|| self.log.record(&record)));

        ResponseDescriptor::for_category(category)
    }
}

impl Default for ErrorResponder {
    fn default() -> Self {
        Self::new(TracingLog)
    }
}

impl std::fmt::Debug for ErrorResponder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorResponder").finish_non_exhaustive()
    }
}

const fn log_rule(category: ErrorCategory) -> (Severity, &'static str) {
    match category {
        ErrorCategory::AccessDenied => (Severity::Security, "access denied"),
        ErrorCategory::RouteNotFound => (Severity::Info, "resource not found"),
        ErrorCategory::ValidationFailure => (Severity::Info, "bad request"),
        // Unhandled, and anything added later
        _ => (Severity::Error, "unhandled error"),
    }
}
