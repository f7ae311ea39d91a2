//! Handler for short code resolution.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use tracing::error;

use crate::error::AppError;
use crate::infrastructure::template::TemplateStore;
use crate::state::{AppState, RedirectPolicy};

/// Placeholder token substituted with the resolved URL in the template.
const LONG_URL_TOKEN: &str = "{{LONG_URL}}";

/// Resolves a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{*code}`
///
/// The wildcard captures the full remaining path, so a multi-segment path is
/// treated as one (never-matching) code rather than falling through the
/// router.
///
/// # Response
///
/// Depends on the redirect policy selected at startup:
///
/// - [`RedirectPolicy::Http`]: `302 Found` with a `Location` header; errors
///   are JSON.
/// - [`RedirectPolicy::Page`]: 200 HTML page rendered from the fetched
///   template with its URL token substituted; errors are HTML. A template
///   fetch failure is a 500, never a silent fallback to a direct redirect.
///
/// # Errors
///
/// Returns 404 if the short code doesn't exist, 500 on store or template
/// failures.
pub async fn resolve_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Response {
    match &state.redirect_policy {
        RedirectPolicy::Http => match state.shortener.resolve(&code).await {
            Ok(mapping) => {
                (StatusCode::FOUND, [(header::LOCATION, mapping.long_url)]).into_response()
            }
            Err(err) => err.into_response(),
        },
        RedirectPolicy::Page(templates) => {
            resolve_to_page(&state, templates.as_ref(), &code).await
        }
    }
}

/// Renders the client-side redirect page for a resolved code.
async fn resolve_to_page(state: &AppState, templates: &dyn TemplateStore, code: &str) -> Response {
    let mapping = match state.shortener.resolve(code).await {
        Ok(mapping) => mapping,
        Err(err) => return page_error(&err),
    };

    match templates.fetch().await {
        Ok(template) => {
            Html(template.replace(LONG_URL_TOKEN, &mapping.long_url)).into_response()
        }
        Err(e) => {
            error!(error = %e, "failed to load redirect template");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html("<h1>Error</h1><p>Could not load redirect template.</p>"),
            )
                .into_response()
        }
    }
}

/// HTML error bodies for the templated-page policy.
fn page_error(err: &AppError) -> Response {
    match err {
        AppError::NotFound { .. } => (
            StatusCode::NOT_FOUND,
            Html("<h1>Not Found</h1><p>The short code you requested was not found.</p>"),
        )
            .into_response(),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html("<h1>Error</h1><p>An internal error occurred during redirect.</p>"),
        )
            .into_response(),
    }
}
