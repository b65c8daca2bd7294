//! Observability for TurboCommerce workloads.
//!
//! This crate provides:
//! - `RequestId` - Unique request identifier for log correlation
//! - `StructuredLogger` - Structured logging with request context

mod logging;
mod request_id;

pub use logging::*;
pub use request_id::RequestId;
