use std::any::type_name;
use std::error::Error as StdError;

use axum::extract::rejection::{FormRejection, JsonRejection, PathRejection, QueryRejection};
use faultline_core::{AccessDenied, ConstraintViolation, ErrorCategory, MissingParameter, RouteNotFound};

/// Classify a type-erased error by the known types it carries
///
/// Every layer is inspected: context values, the error itself and its
/// `source()` chain. Any specific category beats `Unhandled`; when several
/// known types are present, access denied outranks route not found, which
/// outranks validation failure.
pub fn classify(error: &anyhow::Error) -> ErrorCategory {
    identify(error).0
}

/// Category plus the type name of the known error that decided it
///
/// Errors of unknown types carry no name; `dyn Error` does not expose one.
pub(crate) fn identify(error: &anyhow::Error) -> (ErrorCategory, Option<&'static str>) {
    if let Some(name) = found::<AccessDenied>(error) {
        return (ErrorCategory::AccessDenied, Some(name));
    }

    if let Some(name) = found::<RouteNotFound>(error) {
        return (ErrorCategory::RouteNotFound, Some(name));
    }

    let validation = found::<MissingParameter>(error)
        .or_else(|| found::<ConstraintViolation>(error))
        .or_else(|| found::<JsonRejection>(error))
        .or_else(|| found::<QueryRejection>(error))
        .or_else(|| found::<PathRejection>(error))
        .or_else(|| found::<FormRejection>(error));

    match validation {
        Some(name) => (ErrorCategory::ValidationFailure, Some(name)),
        None => (ErrorCategory::Unhandled, None),
    }
}

// `downcast_ref` sees `anyhow` context values, which `chain()` only exposes type-erased
fn found<T>(error: &anyhow::Error) -> Option<&'static str>
where
    T: StdError + Send + Sync + 'static,
{
    let carried = error.downcast_ref::<T>().is_some() || error.chain().any(|cause| cause.is::<T>());
    carried.then(type_name::<T>)
}
