//! Template store trait and error types.

use async_trait::async_trait;
use std::fmt;

/// Errors that can occur while fetching a template.
#[derive(Debug)]
pub enum TemplateError {
    NotFound(String),
    ReadError(String),
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NotFound(name) => write!(f, "Template not found: {}", name),
            Self::ReadError(e) => write!(f, "Template read error: {}", e),
        }
    }
}

impl std::error::Error for TemplateError {}

/// Result type for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Trait for fetching the redirect-page template.
///
/// The template is deployment-supplied content containing the literal token
/// `{{LONG_URL}}`, substituted per request by the resolve handler. Fetch
/// failures surface to the caller; there is no silent fallback to a direct
/// redirect.
#[async_trait]
pub trait TemplateStore: Send + Sync {
    /// Retrieves the raw template text.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] if the template is missing or unreadable.
    async fn fetch(&self) -> TemplateResult<String>;
}
