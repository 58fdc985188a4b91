use async_trait::async_trait;
use chrono::Utc;
use memoark_core::model::ProgressMap;
use sqlx::Row;

use crate::repository::{PROGRESS_SLOT_KEY, ProgressRepository, StorageError};

use super::SqliteRepository;

#[async_trait]
impl ProgressRepository for SqliteRepository {
    async fn load(&self) -> Result<Option<ProgressMap>, StorageError> {
        let row = sqlx::query("SELECT value FROM kv_slots WHERE key = ?1")
            .bind(PROGRESS_SLOT_KEY)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let raw: String = row
            .try_get("value")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|err| StorageError::Serialization(err.to_string()))
    }

    async fn replace(&self, map: &ProgressMap) -> Result<(), StorageError> {
        let serialized = serde_json::to_string(map)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        sqlx::query(
            r"
            INSERT INTO kv_slots (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            ",
        )
        .bind(PROGRESS_SLOT_KEY)
        .bind(serialized)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }
}
