//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    /// RFC 3339 UTC timestamp with millisecond precision.
    pub timestamp: String,
}
