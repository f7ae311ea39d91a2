//! Handler for the URL shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderValue, header},
    response::IntoResponse,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "long_url": "https://example.com" }
/// ```
///
/// # Response
///
/// Status 200 (kept for compatibility with existing clients; not 201) with a
/// permissive cross-origin header, so browser extensions can call the
/// endpoint directly:
///
/// ```json
/// { "short_url": "https://thexeon.tech/AbC123" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not JSON or `long_url` is
/// missing/empty. Returns 500 on store errors, with no detail leaked.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::validation("Invalid JSON body", json!({ "reason": rejection.body_text() }))
    })?;

    payload.validate()?;

    let Some(long_url) = payload.long_url else {
        return Err(AppError::validation(
            "Missing long_url in request body",
            json!({ "field": "long_url" }),
        ));
    };

    let mapping = state.shortener.shorten(long_url).await?;
    let short_url = state.shortener.short_url(&mapping.short_code);

    Ok((
        [(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        )],
        Json(ShortenResponse { short_url }),
    ))
}
