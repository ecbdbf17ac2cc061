use std::sync::Arc;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use faultline_config::SecuredAreaConfig;
use faultline_core::AccessDenied;
use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;

use crate::Failure;

/// Require a bearer token on the configured path prefixes
///
/// A missing or mismatched token is raised as an access-denied failure and
/// answered by the error responder.
pub async fn secured_area_middleware(area: Arc<SecuredAreaConfig>, request: Request, next: Next) -> Response {
    if !area.covers(request.uri().path()) {
        return next.run(request).await;
    }

    let token = request
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    match token {
        Some(token) if token_matches(token, &area.token) => next.run(request).await,
        Some(_) => Failure::from(AccessDenied::new("bearer token mismatch")).into_response(),
        None => Failure::from(AccessDenied::new("missing bearer token")).into_response(),
    }
}

/// Compare without short-circuiting on the first differing byte
fn token_matches(presented: &str, expected: &SecretString) -> bool {
    presented.as_bytes().ct_eq(expected.expose_secret().as_bytes()).into()
}
