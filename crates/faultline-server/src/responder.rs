use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use faultline_core::{ErrorCategory, ErrorEvent, RequestContext};
use faultline_responder::ErrorResponder;
use http::StatusCode;

use crate::failure::{PendingError, descriptor_response};

/// Most of an unmarked error body kept for the log
const BODY_LOG_LIMIT: usize = 64 * 1024;

/// Error response that reached the responder without a [`Failure`](crate::Failure)
///
/// Typically one of axum's own extractor rejections. The original body is
/// kept for the log only.
#[derive(Debug, thiserror::Error)]
#[error("{status} response without a failure: {body}")]
pub struct UnmarkedResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Middleware that hands every failed response to the responder
///
/// A response carrying a pending [`Failure`](crate::Failure) is answered
/// from its event. Error responses built some other way are classified by
/// status, so plain `Json<T>` or `Query<T>` rejections get the fixed bodies
/// too. Anything else passes through untouched.
pub async fn error_responder_middleware(responder: ErrorResponder, request: Request, next: Next) -> Response {
    let context = request.extensions().get::<RequestContext>().cloned();

    let mut response = next.run(request).await;

    let pending = response
        .extensions_mut()
        .remove::<PendingError>()
        .and_then(|pending| pending.take());

    let event = match pending {
        Some(event) => event,
        None => match unmarked_category(response.status()) {
            Some(category) => unmarked_event(category, response).await,
            None => return response,
        },
    };

    let event = match context {
        Some(context) => event.with_context(context),
        None => event,
    };

    descriptor_response(responder.respond(event))
}

fn unmarked_category(status: StatusCode) -> Option<ErrorCategory> {
    match status {
        StatusCode::UNAUTHORIZED => Some(ErrorCategory::AccessDenied),
        StatusCode::NOT_FOUND => Some(ErrorCategory::RouteNotFound),
        StatusCode::BAD_REQUEST
        | StatusCode::PAYLOAD_TOO_LARGE
        | StatusCode::UNSUPPORTED_MEDIA_TYPE
        | StatusCode::UNPROCESSABLE_ENTITY => Some(ErrorCategory::ValidationFailure),
        status if status.is_server_error() => Some(ErrorCategory::Unhandled),
        _ => None,
    }
}

async fn unmarked_event(category: ErrorCategory, response: Response) -> ErrorEvent {
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), BODY_LOG_LIMIT)
        .await
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .unwrap_or_default();

    ErrorEvent::new(category, UnmarkedResponse { status, body })
}
