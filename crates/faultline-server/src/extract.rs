use axum::extract::{FromRequest, FromRequestParts, Request};
use http::request::Parts;

use crate::Failure;

/// Extractor wrapper that turns the inner extractor's rejection into a
/// [`Failure`]
///
/// `Checked<Json<T>>`, `Checked<Query<T>>` and `Checked<Path<T>>` reject
/// through the error responder instead of axum's default plain-text
/// responses.
#[derive(Debug, Clone, Copy, Default)]
pub struct Checked<E>(pub E);

impl<E, S> FromRequest<S> for Checked<E>
where
    E: FromRequest<S>,
    Failure: From<E::Rejection>,
    S: Send + Sync,
{
    type Rejection = Failure;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        E::from_request(request, state).await.map(Self).map_err(Failure::from)
    }
}

impl<E, S> FromRequestParts<S> for Checked<E>
where
    E: FromRequestParts<S>,
    Failure: From<E::Rejection>,
    S: Send + Sync,
{
    type Rejection = Failure;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        E::from_request_parts(parts, state).await.map(Self).map_err(Failure::from)
    }
}
