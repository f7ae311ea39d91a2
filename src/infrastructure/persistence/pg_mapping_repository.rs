//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::repositories::{InsertOutcome, MappingRepository};
use crate::error::{AppError, map_sqlx_error};

/// PostgreSQL repository for mapping storage and retrieval.
///
/// Uniqueness is enforced by the primary key on `short_code`:
/// `ON CONFLICT DO NOTHING` turns a lost insert race into a
/// [`InsertOutcome::CodeTaken`] instead of an overwrite.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn insert_if_absent(&self, new_mapping: NewMapping) -> Result<InsertOutcome, AppError> {
        let row = sqlx::query_as::<_, Mapping>(
            r#"
            INSERT INTO mappings (short_code, long_url)
            VALUES ($1, $2)
            ON CONFLICT (short_code) DO NOTHING
            RETURNING short_code, long_url, created_at
            "#,
        )
        .bind(&new_mapping.short_code)
        .bind(&new_mapping.long_url)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| map_sqlx_error("mappings insert", e))?;

        Ok(match row {
            Some(mapping) => InsertOutcome::Inserted(mapping),
            None => InsertOutcome::CodeTaken,
        })
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Mapping>, AppError> {
        sqlx::query_as::<_, Mapping>(
            r#"
            SELECT short_code, long_url, created_at
            FROM mappings
            WHERE short_code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| map_sqlx_error("mappings lookup", e))
    }
}
