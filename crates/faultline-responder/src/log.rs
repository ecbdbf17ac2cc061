use std::backtrace::Backtrace;
use std::sync::{Arc, Mutex, PoisonError};

use faultline_core::{ErrorCategory, RequestContext};
use strum::{Display, IntoStaticStr};

/// Target used for security events so they can be filtered separately
pub const SECURITY_TARGET: &str = "faultline::security";

/// How loudly a failure is reported internally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Severity {
    /// Authentication or authorization failure
    Security,
    /// Expected client mistakes
    Info,
    /// Unclassified failures, logged with full diagnostic detail
    Error,
}

/// Borrowed view of a failure handed to an [`ErrorLog`]
#[derive(Debug)]
pub struct LogRecord<'a> {
    pub severity: Severity,
    pub category: ErrorCategory,
    /// Fixed summary line for the category
    pub message: &'static str,
    /// Rust type name of the originating error, when known
    pub error_type: Option<&'static str>,
    pub error: &'a anyhow::Error,
    /// Stack captured with the event, present for unhandled errors
    pub backtrace: Option<&'a Backtrace>,
    pub context: Option<&'a RequestContext>,
}

/// Sink for the single log emission made per responded error
///
/// Implementations provide their own thread safety.
pub trait ErrorLog: Send + Sync {
    fn record(&self, record: &LogRecord<'_>);
}

/// Default sink that forwards records to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLog;

impl ErrorLog for TracingLog {
    fn record(&self, record: &LogRecord<'_>) {
        let method = record.context.map(|ctx| ctx.method().as_str());
        let path = record.context.map(|ctx| ctx.uri().path());
        let category: &'static str = record.category.into();

        match record.severity {
            Severity::Security => {
                tracing::warn!(
                    target: SECURITY_TARGET,
                    category,
                    method,
                    path,
                    error = %record.error,
                    "{}",
                    record.message
                );
            }
            Severity::Info => {
                tracing::info!(category, method, path, error = %record.error, "{}", record.message);
            }
            Severity::Error => {
                tracing::error!(
                    category,
                    method,
                    path,
                    error_type = record.error_type,
                    error = ?record.error,
                    backtrace = record.backtrace.map(tracing::field::display),
                    "{}",
                    record.message
                );
            }
        }
    }
}

/// Owned copy of a [`LogRecord`] kept by [`MemoryLog`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub severity: Severity,
    pub category: ErrorCategory,
    pub message: String,
    pub error_type: Option<String>,
    /// Full debug rendering of the originating error
    pub detail: String,
    /// Rendered stack frames, when the event captured them
    pub backtrace: Option<String>,
    /// Request path, when the event carried a request context
    pub path: Option<String>,
}

/// Sink that keeps records in memory
///
/// Clones share the same buffer, so a test can hand one clone to the
/// responder and inspect the other.
#[derive(Debug, Default, Clone)]
pub struct MemoryLog {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Remove and return everything recorded so far
    pub fn take(&self) -> Vec<LogEntry> {
        std::mem::take(&mut *self.entries.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ErrorLog for MemoryLog {
    fn record(&self, record: &LogRecord<'_>) {
        let entry = LogEntry {
            severity: record.severity,
            category: record.category,
            message: record.message.to_owned(),
            error_type: record.error_type.map(str::to_owned),
            detail: format!("{:?}", record.error),
            backtrace: record.backtrace.map(ToString::to_string),
            path: record.context.map(|ctx| ctx.uri().path().to_owned()),
        };

        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);
    }
}
