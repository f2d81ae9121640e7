//! Handler for unmatched routes.

use crate::error::AppError;

/// Answers every unknown path, and known paths hit with the wrong method.
pub async fn not_found_handler() -> AppError {
    AppError::not_found("Not Found")
}
