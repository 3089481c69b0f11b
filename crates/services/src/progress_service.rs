use std::sync::Arc;

use quiz_core::model::{ProgressRecord, TopicId};
use quiz_core::summary::{self, ProgressOverview, ProgressRow};
use quiz_core::Catalog;
use storage::repository::ProgressRepository;

use crate::Clock;
use crate::error::ProgressServiceError;

/// Reads and writes the latest attempt per topic.
#[derive(Clone)]
pub struct ProgressService {
    clock: Clock,
    catalog: Arc<Catalog>,
    progress: Arc<dyn ProgressRepository>,
}

impl ProgressService {
    #[must_use]
    pub fn new(clock: Clock, catalog: Arc<Catalog>, progress: Arc<dyn ProgressRepository>) -> Self {
        Self {
            clock,
            catalog,
            progress,
        }
    }

    /// Store `score` as the latest attempt for `topic_id`, replacing any earlier one.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Catalog` for a topic outside the catalog,
    /// `ProgressServiceError::Progress` for a score outside `0..=100`, or
    /// `ProgressServiceError::Storage` if the write fails.
    pub async fn record(
        &self,
        topic_id: TopicId,
        score: f64,
        completed: bool,
    ) -> Result<ProgressRecord, ProgressServiceError> {
        self.catalog.topic(topic_id)?;
        let record = ProgressRecord::new(topic_id, score, completed, self.clock.now())?;
        self.progress.upsert_progress(&record).await?;
        tracing::debug!(topic = %topic_id, score, completed, "progress recorded");
        Ok(record)
    }

    /// Latest attempt for one topic, if any.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if the read fails.
    pub async fn latest(
        &self,
        topic_id: TopicId,
    ) -> Result<Option<ProgressRecord>, ProgressServiceError> {
        Ok(self.progress.get_progress(topic_id).await?)
    }

    /// One row per catalog topic in schedule order.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if records cannot be read.
    pub async fn summary(&self) -> Result<Vec<ProgressRow>, ProgressServiceError> {
        let records = self.progress.list_progress().await?;
        Ok(summary::join(&self.catalog, &records))
    }

    /// Completion and average score across the catalog.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if records cannot be read.
    pub async fn overview(&self) -> Result<ProgressOverview, ProgressServiceError> {
        let rows = self.summary().await?;
        Ok(ProgressOverview::from_rows(&rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::CatalogError;
    use quiz_core::time::fixed_now;
    use storage::repository::InMemoryRepository;

    fn service() -> ProgressService {
        ProgressService::new(
            Clock::fixed(fixed_now()),
            Arc::new(Catalog::seeded().unwrap()),
            Arc::new(InMemoryRepository::new()),
        )
    }

    #[tokio::test]
    async fn unknown_topic_is_rejected_before_writing() {
        let svc = service();
        let err = svc.record(TopicId::new(9), 50.0, true).await.unwrap_err();

        assert!(matches!(
            err,
            ProgressServiceError::Catalog(CatalogError::NotFound(_))
        ));
        assert!(svc.summary().await.unwrap().iter().all(|r| !r.completed));
    }

    #[tokio::test]
    async fn out_of_range_score_is_rejected() {
        let svc = service();
        let err = svc.record(TopicId::new(1), 120.0, true).await.unwrap_err();
        assert!(matches!(err, ProgressServiceError::Progress(_)));
    }

    #[tokio::test]
    async fn overview_reflects_recorded_scores() {
        let svc = service();
        svc.record(TopicId::new(1), 100.0, true).await.unwrap();
        svc.record(TopicId::new(2), 60.0, true).await.unwrap();

        let overview = svc.overview().await.unwrap();
        assert_eq!(overview.completed_topics, 2);
        assert_eq!(overview.average_score, Some(80.0));
        assert_eq!(
            svc.latest(TopicId::new(2)).await.unwrap().map(|r| r.score()),
            Some(60.0)
        );
    }
}
