/// Description of the request that produced an error
///
/// Carried alongside an [`ErrorEvent`](crate::ErrorEvent) for log
/// enrichment. The responder never inspects it when choosing a response.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// HTTP request parts (method, URI, headers, extensions)
    pub parts: http::request::Parts,
}

impl RequestContext {
    /// Wrap the parts of an incoming request
    #[must_use]
    pub const fn new(parts: http::request::Parts) -> Self {
        Self { parts }
    }

    /// Create a minimal context for errors raised outside an HTTP request
    #[must_use]
    pub fn empty() -> Self {
        let (parts, ()) = http::Request::new(()).into_parts();
        Self { parts }
    }

    /// Request method
    #[must_use]
    pub const fn method(&self) -> &http::Method {
        &self.parts.method
    }

    /// Request URI
    #[must_use]
    pub const fn uri(&self) -> &http::Uri {
        &self.parts.uri
    }

    /// Access request headers
    #[must_use]
    pub const fn headers(&self) -> &http::HeaderMap {
        &self.parts.headers
    }
}
