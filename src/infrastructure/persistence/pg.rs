//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repository::UrlRepository;
use crate::domain::url_record::{NewUrl, UrlRecord, UrlUpdate};
use crate::error::AppError;

/// PostgreSQL repository for URL records.
///
/// Each operation is a single statement, so single-record atomicity comes
/// from the database; `RETURNING` hands back the affected row wherever the
/// contract returns a record. A pooled connection is acquired per statement
/// and released on every exit path.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn create(&self, new_url: NewUrl) -> Result<UrlRecord, AppError> {
        let record = sqlx::query_as::<_, UrlRecord>(
            r#"
            INSERT INTO urls (short_id, original_url)
            VALUES ($1, $2)
            RETURNING id, short_id, original_url
            "#,
        )
        .bind(&new_url.short_id)
        .bind(&new_url.original_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<UrlRecord>, AppError> {
        let record = sqlx::query_as::<_, UrlRecord>(
            "SELECT id, short_id, original_url FROM urls WHERE short_id = $1",
        )
        .bind(short_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError> {
        let records = sqlx::query_as::<_, UrlRecord>(
            "SELECT id, short_id, original_url FROM urls ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(records)
    }

    async fn update(
        &self,
        short_id: &str,
        update: UrlUpdate,
    ) -> Result<Option<UrlRecord>, AppError> {
        let record = sqlx::query_as::<_, UrlRecord>(
            r#"
            UPDATE urls
            SET original_url = $2, short_id = $3
            WHERE short_id = $1
            RETURNING id, short_id, original_url
            "#,
        )
        .bind(short_id)
        .bind(&update.original_url)
        .bind(&update.short_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn delete(&self, short_id: &str) -> Result<Option<UrlRecord>, AppError> {
        let record = sqlx::query_as::<_, UrlRecord>(
            r#"
            DELETE FROM urls
            WHERE short_id = $1
            RETURNING id, short_id, original_url
            "#,
        )
        .bind(short_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
