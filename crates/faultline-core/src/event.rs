use std::backtrace::Backtrace;

use crate::{Categorize, ErrorCategory, RequestContext};

/// A failure detected during request handling, tagged with its category
///
/// Consumed exactly once by the responder. The originating error is kept
/// for the internal log only.
///
/// Unhandled events always capture a backtrace where they are created,
/// regardless of `RUST_BACKTRACE`.
#[derive(Debug)]
pub struct ErrorEvent {
    category: ErrorCategory,
    error: anyhow::Error,
    error_type: Option<&'static str>,
    backtrace: Option<Backtrace>,
    context: Option<RequestContext>,
}

impl ErrorEvent {
    /// Create an event from a concrete error, recording its type name
    pub fn new<E>(category: ErrorCategory, error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            category,
            error: anyhow::Error::new(error),
            error_type: Some(std::any::type_name::<E>()),
            backtrace: capture_for(category),
            context: None,
        }
    }

    /// Create an event from an already type-erased error
    ///
    /// No type name is recorded; use [`ErrorEvent::with_error_type`] when the
    /// caller knows which concrete error is inside.
    pub fn from_anyhow(category: ErrorCategory, error: anyhow::Error) -> Self {
        Self {
            category,
            error,
            error_type: None,
            backtrace: capture_for(category),
            context: None,
        }
    }

    /// Credentials missing or rejected
    pub fn access_denied(reason: impl Into<String>) -> Self {
        Self::from(crate::AccessDenied::new(reason))
    }

    /// No route matched `method path`
    pub fn route_not_found(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self::from(crate::RouteNotFound::new(method, path))
    }

    /// Invalid input from the client
    pub fn validation<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::new(ErrorCategory::ValidationFailure, error)
    }

    /// Catch-all for failures nobody classified
    pub fn unhandled<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::new(ErrorCategory::Unhandled, error)
    }

    /// Attach the originating request
    #[must_use]
    pub fn with_context(mut self, context: RequestContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Record the concrete error type found inside a type-erased error
    #[must_use]
    pub fn with_error_type(mut self, error_type: &'static str) -> Self {
        self.error_type = Some(error_type);
        self
    }

    pub const fn category(&self) -> ErrorCategory {
        self.category
    }

    /// Originating error (never sent to clients)
    pub const fn error(&self) -> &anyhow::Error {
        &self.error
    }

    /// Rust type name of the originating error, when known
    pub const fn error_type(&self) -> Option<&'static str> {
        self.error_type
    }

    /// Stack captured when the event was created (unhandled events only)
    pub const fn backtrace(&self) -> Option<&Backtrace> {
        self.backtrace.as_ref()
    }

    pub const fn context(&self) -> Option<&RequestContext> {
        self.context.as_ref()
    }
}

fn capture_for(category: ErrorCategory) -> Option<Backtrace> {
    category.is_unhandled().then(Backtrace::force_capture)
}

impl<E> From<E> for ErrorEvent
where
    E: Categorize + std::error::Error + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::new(error.category(), error)
    }
}
