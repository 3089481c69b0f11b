use quiz_core::model::{ProgressRecord, TopicId};

use super::SqliteRepository;
use super::catalog_repo::write_err;
use super::mapping::{map_progress_row, topic_id_to_i64};
use crate::repository::{ProgressRepository, StorageError};

#[async_trait::async_trait]
impl ProgressRepository for SqliteRepository {
    async fn upsert_progress(&self, record: &ProgressRecord) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO progress (topic_id, score, completed, timestamp)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(topic_id) DO UPDATE SET
                score = excluded.score,
                completed = excluded.completed,
                timestamp = excluded.timestamp
            ",
        )
        .bind(topic_id_to_i64(record.topic_id())?)
        .bind(record.score())
        .bind(i64::from(record.completed()))
        .bind(record.timestamp())
        .execute(&self.pool)
        .await
        .map_err(write_err)?;

        Ok(())
    }

    async fn get_progress(
        &self,
        topic_id: TopicId,
    ) -> Result<Option<ProgressRecord>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT topic_id, score, completed, timestamp
            FROM progress WHERE topic_id = ?1
            ",
        )
        .bind(topic_id_to_i64(topic_id)?)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        row.as_ref().map(map_progress_row).transpose()
    }

    async fn list_progress(&self) -> Result<Vec<ProgressRecord>, StorageError> {
        let rows = sqlx::query(
            r"
            SELECT topic_id, score, completed, timestamp
            FROM progress
            ORDER BY topic_id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            records.push(map_progress_row(&row)?);
        }
        Ok(records)
    }
}
