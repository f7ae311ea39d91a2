//! Handler for the root landing page.

use askama::Template;
use askama_web::WebTemplate;

/// Static informational page served at the root path.
#[derive(Template, WebTemplate)]
#[template(path = "landing.html")]
pub struct LandingPage;

/// Serves the landing page.
///
/// # Endpoint
///
/// `GET /`
///
/// A request with an empty short code is not an error; it returns this page
/// with status 200.
pub async fn landing_handler() -> LandingPage {
    LandingPage
}
