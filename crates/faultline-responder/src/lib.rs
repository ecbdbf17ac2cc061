//! Error responder
//!
//! Turns an [`ErrorEvent`](faultline_core::ErrorEvent) into the fixed
//! client response for its category and records the failure through an
//! injected [`ErrorLog`].

pub mod log;
mod responder;

pub use log::{ErrorLog, LogEntry, LogRecord, MemoryLog, SECURITY_TARGET, Severity, TracingLog};
pub use responder::ErrorResponder;
