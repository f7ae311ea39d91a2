//! Fallback handler for unsupported method/route combinations.

use crate::error::AppError;

/// Rejects any method/route combination the router doesn't recognize.
///
/// Produces `405 Method Not Allowed` with the generic JSON error envelope.
pub async fn method_not_allowed_handler() -> AppError {
    AppError::method_not_allowed("Method Not Allowed")
}
