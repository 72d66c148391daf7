//! # State Repository
//!
//! String values by string key, with the time of the last write.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::StoreResult;

/// Repository for the `app_state` table.
#[derive(Debug, Clone)]
pub struct StateRepository {
    pool: SqlitePool,
}

impl StateRepository {
    /// Creates a new StateRepository.
    pub fn new(pool: SqlitePool) -> Self {
        StateRepository { pool }
    }

    /// Returns the value stored under `key`, if any.
    pub async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let value = sqlx::query_scalar::<_, String>("SELECT value FROM app_state WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(value)
    }

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// ## Returns
    /// The time recorded for this write.
    pub async fn set(&self, key: &str, value: &str) -> StoreResult<DateTime<Utc>> {
        let now = Utc::now();

        debug!(key = %key, bytes = value.len(), "Writing state");

        sqlx::query(
            r#"
            INSERT INTO app_state (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(now)
    }

    /// Removes `key`.
    ///
    /// ## Returns
    /// `true` if a value was removed.
    pub async fn remove(&self, key: &str) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM app_state WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await?;

        debug!(key = %key, removed = result.rows_affected(), "Removed state");

        Ok(result.rows_affected() > 0)
    }

    /// Returns when `key` was last written.
    pub async fn updated_at(&self, key: &str) -> StoreResult<Option<DateTime<Utc>>> {
        let updated_at = sqlx::query_scalar::<_, DateTime<Utc>>(
            "SELECT updated_at FROM app_state WHERE key = ?1",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated_at)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
