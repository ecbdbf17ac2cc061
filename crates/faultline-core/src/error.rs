use thiserror::Error;

use crate::{Categorize, ErrorCategory};

/// Credentials were missing or rejected for a protected resource
#[derive(Debug, Error)]
#[error("access denied: {reason}")]
pub struct AccessDenied {
    /// Why access was refused (log only)
    pub reason: String,
}

impl AccessDenied {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

impl Categorize for AccessDenied {
    fn category(&self) -> ErrorCategory {
        ErrorCategory::AccessDenied
    }
}

/// No handler is registered for the requested method and path
#[derive(Debug, Error)]
#[error("no route for {method} {path}")]
pub struct RouteNotFound {
    pub method: String,
    pub path: String,
}

impl RouteNotFound {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
        }
    }
}

impl Categorize for RouteNotFound {
    fn category(&self) -> ErrorCategory {
        ErrorCategory::RouteNotFound
    }
}

/// A required request parameter was absent
#[derive(Debug, Error)]
#[error("missing required parameter `{name}`")]
pub struct MissingParameter {
    pub name: String,
}

impl MissingParameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Categorize for MissingParameter {
    fn category(&self) -> ErrorCategory {
        ErrorCategory::ValidationFailure
    }
}

/// A field was well-formed but broke a declared constraint
#[derive(Debug, Error)]
#[error("constraint violated on `{field}`: {reason}")]
pub struct ConstraintViolation {
    pub field: String,
    pub reason: String,
}

impl ConstraintViolation {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl Categorize for ConstraintViolation {
    fn category(&self) -> ErrorCategory {
        ErrorCategory::ValidationFailure
    }
}
