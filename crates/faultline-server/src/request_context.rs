use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use faultline_core::RequestContext;

/// Middleware that snapshots the incoming request into a `RequestContext`
///
/// The error responder middleware attaches it to any error event raised
/// further down the stack.
pub async fn request_context_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let context = RequestContext::new(parts.clone());

    let mut request = Request::from_parts(parts, body);
    request.extensions_mut().insert(context);

    next.run(request).await
}
