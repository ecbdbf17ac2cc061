use http::{HeaderMap, StatusCode};

use crate::ErrorCategory;

/// Status, body and headers returned to a client for a failed request
///
/// Immutable once built. Transport crates turn it into their own response
/// type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseDescriptor {
    status: StatusCode,
    body: &'static str,
    headers: HeaderMap,
}

impl ResponseDescriptor {
    /// Fixed response for a category
    ///
    /// The body depends on the category alone, so no detail of the
    /// underlying failure can reach the client.
    #[must_use]
    pub fn for_category(category: ErrorCategory) -> Self {
        let (status, body) = match category {
            ErrorCategory::AccessDenied => (StatusCode::UNAUTHORIZED, "Invalid credentials. Access is denied."),
            ErrorCategory::RouteNotFound => (StatusCode::NOT_FOUND, "Resource Not Found."),
            ErrorCategory::ValidationFailure => (StatusCode::BAD_REQUEST, "Invalid data or fields sent. Bad request."),
            ErrorCategory::Unhandled => (StatusCode::INTERNAL_SERVER_ERROR, "A general exception has occurred."),
        };

        Self {
            status,
            body,
            headers: HeaderMap::new(),
        }
    }

    /// HTTP status code
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Client-facing body text
    #[must_use]
    pub const fn body(&self) -> &'static str {
        self.body
    }

    /// Extra response headers (empty unless a transport adds some)
    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Split into owned parts for building a wire response
    #[must_use]
    pub fn into_parts(self) -> (StatusCode, HeaderMap, &'static str) {
        (self.status, self.headers, self.body)
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn table_matches_categories() {
        let cases = [
            (ErrorCategory::AccessDenied, 401, "Invalid credentials. Access is denied."),
            (ErrorCategory::RouteNotFound, 404, "Resource Not Found."),
            (ErrorCategory::ValidationFailure, 400, "Invalid data or fields sent. Bad request."),
            (ErrorCategory::Unhandled, 500, "A general exception has occurred."),
        ];

        for (category, status, body) in cases {
            let descriptor = ResponseDescriptor::for_category(category);
            assert_eq!(descriptor.status().as_u16(), status, "{category}");
            assert_eq!(descriptor.body(), body, "{category}");
            assert!(descriptor.headers().is_empty());
        }
    }

    #[test]
    fn every_category_has_a_distinct_status() {
        let mut statuses: Vec<_> = ErrorCategory::iter()
            .map(|c| ResponseDescriptor::for_category(c).status().as_u16())
            .collect();
        statuses.sort();
        statuses.dedup();
        assert_eq!(statuses.len(), ErrorCategory::iter().count());
    }
}
