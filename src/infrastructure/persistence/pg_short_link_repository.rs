//! PostgreSQL implementation of the short link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::{InsertOutcome, ShortLinkRepository};
use crate::error::AppError;
use crate::utils::db_error::{is_unique_violation_on_code, map_sqlx_error};

/// Row shape shared by all queries.
#[derive(sqlx::FromRow)]
struct ShortLinkRow {
    code: String,
    original_url: String,
    short_url: String,
    created_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl From<ShortLinkRow> for ShortLink {
    fn from(row: ShortLinkRow) -> Self {
        ShortLink::new(
            row.code,
            row.original_url,
            row.short_url,
            row.created_at,
            row.deleted_at,
        )
    }
}

/// PostgreSQL repository for short link storage and retrieval.
///
/// All three operations map onto a single statement each, so an abandoned
/// request never leaves a partial multi-step mutation behind.
pub struct PgShortLinkRepository {
    pool: Arc<PgPool>,
}

impl PgShortLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShortLinkRepository for PgShortLinkRepository {
    async fn insert(&self, new_link: NewShortLink) -> Result<InsertOutcome, AppError> {
        let result = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            INSERT INTO short_links (code, original_url, short_url)
            VALUES ($1, $2, $3)
            RETURNING code, original_url, short_url, created_at, deleted_at
            "#,
        )
        .bind(&new_link.code)
        .bind(&new_link.original_url)
        .bind(&new_link.short_url)
        .fetch_one(self.pool.as_ref())
        .await;

        match result {
            Ok(row) => Ok(InsertOutcome::Created(row.into())),
            Err(e) if is_unique_violation_on_code(&e) => Ok(InsertOutcome::CodeTaken),
            Err(e) => Err(map_sqlx_error(e)),
        }
    }

    async fn find_live_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        let row = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            SELECT code, original_url, short_url, created_at, deleted_at
            FROM short_links
            WHERE code = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(ShortLink::from))
    }

    async fn soft_delete_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        // Conditional update: the `deleted_at IS NULL` guard makes the
        // transition single-winner under concurrent deletes.
        let row = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            UPDATE short_links
            SET deleted_at = NOW()
            WHERE code = $1 AND deleted_at IS NULL
            RETURNING code, original_url, short_url, created_at, deleted_at
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(ShortLink::from))
    }
}
