use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Closed classification of request-time failures
///
/// Used purely to select the response and the log severity. The category
/// never carries details of the failure itself.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorCategory {
    /// Caller lacks valid credentials for the requested resource
    AccessDenied,
    /// No route matched the request
    RouteNotFound,
    /// Malformed body, missing parameter, type mismatch, constraint
    /// violation or unreadable payload
    ValidationFailure,
    /// Anything not classified above
    #[default]
    Unhandled,
}

impl ErrorCategory {
    /// Resolve a textual tag into a category
    ///
    /// Accepts both `snake_case` and `PascalCase` spellings. Unknown tags
    /// resolve to [`ErrorCategory::Unhandled`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim();

        tag.parse()
            .or_else(|_| to_snake_case(tag).parse())
            .unwrap_or(Self::Unhandled)
    }

    /// Whether this is the catch-all category
    #[must_use]
    pub const fn is_unhandled(self) -> bool {
        matches!(self, Self::Unhandled)
    }
}

/// Domain errors that know which category they belong to
///
/// Implemented by error types raised inside handlers so the transport
/// layer can classify them without inspecting their contents.
pub trait Categorize {
    /// Category used to select the client response
    fn category(&self) -> ErrorCategory;
}

fn to_snake_case(tag: &str) -> String {
    let mut out = String::with_capacity(tag.len() + 4);

    for (i, c) in tag.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }

    out
}
