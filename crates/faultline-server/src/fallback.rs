use http::{Method, Uri};

use crate::Failure;

/// Fallback for requests no route matched
pub async fn route_not_found(method: Method, uri: Uri) -> Failure {
    Failure::from(faultline_core::RouteNotFound::new(method.as_str(), uri.path()))
}
