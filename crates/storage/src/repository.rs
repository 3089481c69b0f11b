use async_trait::async_trait;
use quiz_core::Catalog;
use quiz_core::model::{ProgressRecord, Question, Topic, TopicId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("conflict")]
    Conflict,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Read access to the course catalog, plus the one-time seed.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// All topics, ordered by week, day, then id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if topics cannot be read.
    async fn list_topics(&self) -> Result<Vec<Topic>, StorageError>;

    /// All questions, grouped by topic in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if questions cannot be read.
    async fn list_questions(&self) -> Result<Vec<Question>, StorageError>;

    /// Number of stored topics.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the count query fails.
    async fn topic_count(&self) -> Result<u64, StorageError>;

    /// Write every topic and question of `catalog`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Conflict` if the store already holds a topic or
    /// question with the same id, or other storage errors.
    async fn seed_catalog(&self, catalog: &Catalog) -> Result<(), StorageError>;
}

/// Latest attempt per topic.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Insert or replace the record for `record.topic_id()`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be stored.
    async fn upsert_progress(&self, record: &ProgressRecord) -> Result<(), StorageError>;

    /// Fetch the record for one topic.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on read failure; a missing record is `Ok(None)`.
    async fn get_progress(&self, topic_id: TopicId)
    -> Result<Option<ProgressRecord>, StorageError>;

    /// Every stored record, ordered by topic id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if records cannot be read.
    async fn list_progress(&self) -> Result<Vec<ProgressRecord>, StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    topics: Arc<Mutex<Vec<Topic>>>,
    questions: Arc<Mutex<Vec<Question>>>,
    progress: Arc<Mutex<HashMap<TopicId, ProgressRecord>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogRepository for InMemoryRepository {
    async fn list_topics(&self) -> Result<Vec<Topic>, StorageError> {
        let guard = self
            .topics
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let mut topics = guard.clone();
        topics.sort_by_key(Topic::schedule_key);
        Ok(topics)
    }

    async fn list_questions(&self) -> Result<Vec<Question>, StorageError> {
        let guard = self
            .questions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn topic_count(&self) -> Result<u64, StorageError> {
        let guard = self
            .topics
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.len() as u64)
    }

    async fn seed_catalog(&self, catalog: &Catalog) -> Result<(), StorageError> {
        let mut topics = self
            .topics
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let mut questions = self
            .questions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        let clash = catalog
            .list_topics()
            .iter()
            .any(|t| topics.iter().any(|existing| existing.id() == t.id()));
        if clash {
            return Err(StorageError::Conflict);
        }

        topics.extend(catalog.list_topics().iter().cloned());
        questions.extend(catalog.all_questions().cloned());
        Ok(())
    }
}

#[async_trait]
impl ProgressRepository for InMemoryRepository {
    async fn upsert_progress(&self, record: &ProgressRecord) -> Result<(), StorageError> {
        let mut guard = self
            .progress
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(record.topic_id(), record.clone());
        Ok(())
    }

    async fn get_progress(
        &self,
        topic_id: TopicId,
    ) -> Result<Option<ProgressRecord>, StorageError> {
        let guard = self
            .progress
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(&topic_id).cloned())
    }

    async fn list_progress(&self) -> Result<Vec<ProgressRecord>, StorageError> {
        let guard = self
            .progress
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let mut records: Vec<_> = guard.values().cloned().collect();
        records.sort_by_key(ProgressRecord::topic_id);
        Ok(records)
    }
}

/// Aggregates catalog and progress repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub catalog: Arc<dyn CatalogRepository>,
    pub progress: Arc<dyn ProgressRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let catalog: Arc<dyn CatalogRepository> = Arc::new(repo.clone());
        let progress: Arc<dyn ProgressRepository> = Arc::new(repo);
        Self { catalog, progress }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::time::fixed_now;

    fn record(topic: u64, score: f64) -> ProgressRecord {
        ProgressRecord::new(TopicId::new(topic), score, true, fixed_now()).unwrap()
    }

    #[tokio::test]
    async fn seeds_and_lists_catalog() {
        let repo = InMemoryRepository::new();
        let catalog = Catalog::seeded().unwrap();

        assert_eq!(repo.topic_count().await.unwrap(), 0);
        repo.seed_catalog(&catalog).await.unwrap();

        let topics = repo.list_topics().await.unwrap();
        assert_eq!(topics.len(), 6);
        assert_eq!(topics[0].title(), "Pump Types and Fundamentals");
        assert_eq!(repo.list_questions().await.unwrap().len(), 30);
        assert_eq!(repo.topic_count().await.unwrap(), 6);
    }

    #[tokio::test]
    async fn seeding_twice_conflicts() {
        let repo = InMemoryRepository::new();
        let catalog = Catalog::seeded().unwrap();
        repo.seed_catalog(&catalog).await.unwrap();

        let err = repo.seed_catalog(&catalog).await.unwrap_err();
        assert!(matches!(err, StorageError::Conflict));
        assert_eq!(repo.list_questions().await.unwrap().len(), 30);
    }

    #[tokio::test]
    async fn upsert_replaces_previous_record() {
        let repo = InMemoryRepository::new();
        repo.upsert_progress(&record(2, 40.0)).await.unwrap();
        repo.upsert_progress(&record(2, 80.0)).await.unwrap();

        let all = repo.list_progress().await.unwrap();
        assert_eq!(all.len(), 1);
        let stored = repo.get_progress(TopicId::new(2)).await.unwrap().unwrap();
        assert!((stored.score() - 80.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn missing_progress_is_none() {
        let repo = InMemoryRepository::new();
        assert!(repo.get_progress(TopicId::new(1)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_progress_is_ordered_by_topic() {
        let repo = InMemoryRepository::new();
        for id in [5, 1, 3] {
            repo.upsert_progress(&record(id, 60.0)).await.unwrap();
        }
        let ids: Vec<u64> = repo
            .list_progress()
            .await
            .unwrap()
            .iter()
            .map(|r| r.topic_id().value())
            .collect();
        assert_eq!(ids, vec![1, 3, 5]);
    }
}
