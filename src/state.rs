//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::ShortenerService;
use crate::infrastructure::template::TemplateStore;

/// Redirect policy selected once at startup.
///
/// The two deployment variants are a single configurable strategy, not
/// duplicated handler paths.
#[derive(Clone)]
pub enum RedirectPolicy {
    /// Respond with `302 Found` and a `Location` header.
    Http,
    /// Respond with a 200 HTML page performing a client-side redirect,
    /// rendered from the fetched template.
    Page(Arc<dyn TemplateStore>),
}

#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService>,
    pub redirect_policy: RedirectPolicy,
}
