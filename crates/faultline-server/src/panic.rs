use std::any::Any;

use axum::response::{IntoResponse, Response};
use faultline_core::ErrorEvent;

use crate::Failure;

/// A request handler panicked
#[derive(Debug, thiserror::Error)]
#[error("handler panicked: {message}")]
pub struct Panicked {
    pub message: String,
}

impl Panicked {
    /// Extract the panic message from a `catch_unwind` payload
    pub fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_owned())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_owned());

        Self { message }
    }
}

/// Turn a caught panic into an unhandled failure
///
/// The panic layer sits inside the responder middleware, so the failure is
/// logged there together with the request context.
#[allow(clippy::needless_pass_by_value)]
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    Failure::from(ErrorEvent::unhandled(Panicked::from_payload(payload.as_ref()))).into_response()
}
