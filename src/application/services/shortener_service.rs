//! Short code allocation and resolution service.

use std::sync::Arc;

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::repositories::{InsertOutcome, MappingRepository};
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use serde_json::json;

/// Maximum number of insert attempts before giving up.
const MAX_ATTEMPTS: usize = 8;

/// Attempts at the configured code length before widening.
const WIDEN_AFTER: usize = 5;

/// Extra characters appended to the code length once widened.
const WIDEN_BY: usize = 2;

/// Service for allocating short codes and resolving them back to URLs.
///
/// Uniqueness is enforced by the repository's conditional insert: a conflict
/// is the only collision signal, so two concurrent callers that generate the
/// same candidate both end up with distinct, live codes.
pub struct ShortenerService {
    repository: Arc<dyn MappingRepository>,
    base_url: String,
    code_length: usize,
}

impl ShortenerService {
    /// Creates a new shortener service.
    ///
    /// `base_url` is the public origin short URLs are formed under;
    /// `code_length` is the starting length of generated codes.
    pub fn new(repository: Arc<dyn MappingRepository>, base_url: String, code_length: usize) -> Self {
        Self {
            repository,
            base_url,
            code_length,
        }
    }

    /// Creates a mapping for `long_url` under a freshly allocated short code.
    ///
    /// # Code Allocation
    ///
    /// Generates a random candidate and issues one atomic insert per attempt,
    /// up to [`MAX_ATTEMPTS`] times. After [`WIDEN_AFTER`] conflicts the
    /// candidate length grows by [`WIDEN_BY`] characters, so the loop cannot
    /// spin indefinitely in a crowded code space.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `long_url` is empty.
    /// Returns [`AppError::Dependency`] on database errors or if all
    /// attempts collide.
    pub async fn shorten(&self, long_url: String) -> Result<Mapping, AppError> {
        if long_url.trim().is_empty() {
            return Err(AppError::validation(
                "Missing long_url in request body",
                json!({ "field": "long_url" }),
            ));
        }

        for attempt in 0..MAX_ATTEMPTS {
            let length = if attempt < WIDEN_AFTER {
                self.code_length
            } else {
                self.code_length + WIDEN_BY
            };

            let candidate = generate_code(length);

            match self
                .repository
                .insert_if_absent(NewMapping {
                    short_code: candidate,
                    long_url: long_url.clone(),
                })
                .await?
            {
                InsertOutcome::Inserted(mapping) => return Ok(mapping),
                InsertOutcome::CodeTaken => {
                    tracing::debug!(attempt, length, "short code collision, retrying");
                }
            }
        }

        tracing::warn!(
            attempts = MAX_ATTEMPTS,
            code_length = self.code_length,
            "exhausted short code allocation attempts"
        );
        Err(AppError::dependency("Internal server error"))
    }

    /// Resolves a short code to its stored mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping exists for `code`.
    /// Returns [`AppError::Dependency`] on database errors.
    pub async fn resolve(&self, code: &str) -> Result<Mapping, AppError> {
        self.repository.find_by_code(code).await?.ok_or_else(|| {
            AppError::not_found("Short code not found", json!({ "code": code }))
        })
    }

    /// Constructs the full short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }
}
