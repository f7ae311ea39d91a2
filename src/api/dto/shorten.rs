//! DTOs for the shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
///
/// `long_url` is deliberately not validated as a URL: the service stores
/// whatever the caller submits, checking presence only.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(length(min = 1, message = "long_url must not be empty"))]
    pub long_url: Option<String>,
}

/// Response carrying the full short URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
}
