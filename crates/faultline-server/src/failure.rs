use std::sync::{Arc, Mutex, PoisonError};

use axum::extract::rejection::{FormRejection, JsonRejection, PathRejection, QueryRejection};
use axum::response::{IntoResponse, Response};
use faultline_core::{
    AccessDenied, ConstraintViolation, ErrorCategory, ErrorEvent, MissingParameter, ResponseDescriptor, RouteNotFound,
};

use crate::classify::identify;

/// Handler error that defers to the error responder
///
/// Return `Result<T, Failure>` from handlers. Framework rejections and the
/// classified errors from `faultline-core` convert with `?`; an
/// `anyhow::Error` is classified by walking its cause chain.
#[derive(Debug)]
pub struct Failure(ErrorEvent);

impl Failure {
    /// Wrap a concrete error under an explicit category
    pub fn new<E>(category: ErrorCategory, error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self(ErrorEvent::new(category, error))
    }

    pub const fn event(&self) -> &ErrorEvent {
        &self.0
    }

    pub fn into_event(self) -> ErrorEvent {
        self.0
    }
}

impl From<ErrorEvent> for Failure {
    fn from(event: ErrorEvent) -> Self {
        Self(event)
    }
}

/// Classifies by the known types in the chain
///
/// The type name of the known error that decided the category is recorded.
/// Errors of any other type carry no type name.
impl From<anyhow::Error> for Failure {
    fn from(error: anyhow::Error) -> Self {
        let (category, error_type) = identify(&error);
        let event = ErrorEvent::from_anyhow(category, error);

        Self(match error_type {
            Some(name) => event.with_error_type(name),
            None => event,
        })
    }
}

macro_rules! categorized {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Failure {
                fn from(error: $ty) -> Self {
                    Self(ErrorEvent::from(error))
                }
            }
        )*
    };
}

categorized!(AccessDenied, RouteNotFound, MissingParameter, ConstraintViolation);

macro_rules! rejection {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Failure {
                fn from(rejection: $ty) -> Self {
                    Self(ErrorEvent::validation(rejection))
                }
            }
        )*
    };
}

rejection!(JsonRejection, QueryRejection, PathRejection, FormRejection);

impl IntoResponse for Failure {
    /// Placeholder response carrying the event for the responder middleware
    ///
    /// Already has the right status and body for the category, so a route
    /// mounted without the middleware still answers correctly (but unlogged).
    fn into_response(self) -> Response {
        let mut response = descriptor_response(ResponseDescriptor::for_category(self.0.category()));
        response.extensions_mut().insert(PendingError::new(self.0));
        response
    }
}

/// Build the wire response for a descriptor
pub fn descriptor_response(descriptor: ResponseDescriptor) -> Response {
    descriptor.into_parts().into_response()
}

/// Error event travelling from a handler to the responder middleware
///
/// Response extensions must be `Clone`, so the event sits behind a shared
/// slot and is taken out exactly once.
#[derive(Clone)]
pub(crate) struct PendingError(Arc<Mutex<Option<ErrorEvent>>>);

impl PendingError {
    fn new(event: ErrorEvent) -> Self {
        Self(Arc::new(Mutex::new(Some(event))))
    }

    pub(crate) fn take(&self) -> Option<ErrorEvent> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).take()
    }
}
