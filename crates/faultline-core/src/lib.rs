//! Shared types for the faultline error responder
//!
//! Holds the error taxonomy, the event handed to the responder, and the
//! response descriptor it produces. Nothing in here depends on axum, so
//! transport crates decide how a descriptor becomes a wire response.

mod category;
mod context;
mod descriptor;
mod error;
mod event;

pub use category::{Categorize, ErrorCategory};
pub use context::RequestContext;
pub use descriptor::ResponseDescriptor;
pub use error::{AccessDenied, ConstraintViolation, MissingParameter, RouteNotFound};
pub use event::ErrorEvent;
