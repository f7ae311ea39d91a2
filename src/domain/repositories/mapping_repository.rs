//! Repository trait for short URL mapping data access.

use crate::domain::entities::{Mapping, NewMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Outcome of a conditional insert.
///
/// A taken code is the sole collision signal; there is no separate
/// existence check before the write.
#[derive(Debug)]
pub enum InsertOutcome {
    /// The mapping was written; carries the persisted row.
    Inserted(Mapping),
    /// Another mapping already owns the short code. Nothing was written.
    CodeTaken,
}

/// Repository interface for the short code → long URL map.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Atomically inserts a mapping if its short code is free.
    ///
    /// Existing rows are never overwritten: a concurrent writer that loses
    /// the race observes [`InsertOutcome::CodeTaken`] and must retry with a
    /// different code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Dependency`] on database errors.
    async fn insert_if_absent(&self, new_mapping: NewMapping) -> Result<InsertOutcome, AppError>;

    /// Finds a mapping by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Mapping))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Dependency`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Mapping>, AppError>;
}
