//! HTTP middleware for request processing.
//!
//! Provides cross-origin headers, panic recovery and observability.

pub mod cors;
pub mod panic;
pub mod tracing;
