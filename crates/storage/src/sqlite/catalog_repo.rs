use quiz_core::Catalog;
use quiz_core::model::{Question, Topic, join_competency_tags};

use super::SqliteRepository;
use super::mapping::{
    encode_options, map_question_row, map_topic_row, question_id_to_i64, topic_id_to_i64,
};
use crate::repository::{CatalogRepository, StorageError};

/// Unique-key clashes become `Conflict`; everything else is a connection error.
pub(super) fn write_err(e: sqlx::Error) -> StorageError {
    match e.as_database_error() {
        Some(db) if db.is_unique_violation() => StorageError::Conflict,
        Some(db) if db.is_foreign_key_violation() => StorageError::NotFound,
        _ => StorageError::Connection(e.to_string()),
    }
}

#[async_trait::async_trait]
impl CatalogRepository for SqliteRepository {
    async fn list_topics(&self) -> Result<Vec<Topic>, StorageError> {
        let rows = sqlx::query(
            r"
            SELECT id, week, day, title, description, competency_tags, content
            FROM topics
            ORDER BY week ASC, day ASC, id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        let mut topics = Vec::with_capacity(rows.len());
        for row in rows {
            topics.push(map_topic_row(&row)?);
        }
        Ok(topics)
    }

    async fn list_questions(&self) -> Result<Vec<Question>, StorageError> {
        let rows = sqlx::query(
            r"
            SELECT id, topic_id, prompt, options, correct_answer, kind
            FROM questions
            ORDER BY topic_id ASC, id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        let mut questions = Vec::with_capacity(rows.len());
        for row in rows {
            questions.push(map_question_row(&row)?);
        }
        Ok(questions)
    }

    async fn topic_count(&self) -> Result<u64, StorageError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM topics")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        u64::try_from(count).map_err(|_| StorageError::Serialization("negative count".into()))
    }

    async fn seed_catalog(&self, catalog: &Catalog) -> Result<(), StorageError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        for topic in catalog.list_topics() {
            sqlx::query(
                r"
                INSERT INTO topics (id, week, day, title, description, competency_tags, content)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                ",
            )
            .bind(topic_id_to_i64(topic.id())?)
            .bind(i64::from(topic.week()))
            .bind(i64::from(topic.day()))
            .bind(topic.title())
            .bind(topic.description())
            .bind(join_competency_tags(topic.competency_tags()))
            .bind(topic.content())
            .execute(&mut *tx)
            .await
            .map_err(write_err)?;
        }

        for question in catalog.all_questions() {
            sqlx::query(
                r"
                INSERT INTO questions (id, topic_id, prompt, options, correct_answer, kind)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                ",
            )
            .bind(question_id_to_i64(question.id())?)
            .bind(topic_id_to_i64(question.topic_id())?)
            .bind(question.prompt())
            .bind(encode_options(question.options())?)
            .bind(question.correct_answer())
            .bind(question.kind().as_str())
            .execute(&mut *tx)
            .await
            .map_err(write_err)?;
        }

        tx.commit()
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        tracing::info!(
            topics = catalog.topic_count(),
            "seeded catalog"
        );
        Ok(())
    }
}
