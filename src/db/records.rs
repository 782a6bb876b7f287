use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tokio::sync::OnceCell;
use tracing::debug;

use crate::db::connection::{ensure_schema, health_check};
use crate::db::errors::{DatabaseError, Result};

/// A content identifier recorded after a successful pin
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct StoredRecord {
    pub id: i64,
    #[sqlx(rename = "ipfs_hash")]
    pub identifier: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Persistence for [`StoredRecord`]s. Identifier uniqueness is enforced by the
/// backing store, not by callers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn insert(&self, identifier: &str) -> Result<StoredRecord>;

    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<StoredRecord>>;

    async fn ping(&self) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct PgRecordStore {
    pool: PgPool,
    schema: OnceCell<()>,
}

impl PgRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            schema: OnceCell::new(),
        }
    }

    /// Create the `text_data` table once. A failed attempt is retried on the
    /// next call.
    pub async fn prepare(&self) -> Result<()> {
        self.schema
            .get_or_try_init(|| ensure_schema(&self.pool))
            .await?;
        Ok(())
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    #[tracing::instrument(skip(self))]
    async fn insert(&self, identifier: &str) -> Result<StoredRecord> {
        self.prepare().await?;

        let record = sqlx::query_as::<_, StoredRecord>(
            r#"
            INSERT INTO text_data (ipfs_hash)
            VALUES ($1)
            RETURNING id, ipfs_hash, created_at, updated_at
            "#,
        )
        .bind(identifier)
        .fetch_one(&self.pool)
        .await
        .map_err(DatabaseError::QueryError)
        .map_err(|e| {
            if e.is_integrity_error() {
                DatabaseError::IntegrityError(format!("identifier {} already recorded", identifier))
            } else {
                e
            }
        })?;

        debug!(record_id = record.id, "Inserted text_data row");
        Ok(record)
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<StoredRecord>> {
        self.prepare().await?;

        let record = sqlx::query_as::<_, StoredRecord>(
            r#"
            SELECT id, ipfs_hash, created_at, updated_at
            FROM text_data
            WHERE ipfs_hash = $1
            "#,
        )
        .bind(identifier)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn ping(&self) -> Result<()> {
        health_check(&self.pool).await
    }
}
