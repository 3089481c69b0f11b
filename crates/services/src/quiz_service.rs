use std::sync::Arc;

use quiz_core::model::{ProgressRecord, TopicId};
use quiz_core::{Catalog, QuizError, QuizResult, QuizSession};
use storage::repository::ProgressRepository;

use crate::Clock;
use crate::error::QuizServiceError;

/// Runs quiz attempts against the catalog and records the outcome.
#[derive(Clone)]
pub struct QuizService {
    clock: Clock,
    catalog: Arc<Catalog>,
    progress: Arc<dyn ProgressRepository>,
}

impl QuizService {
    #[must_use]
    pub fn new(clock: Clock, catalog: Arc<Catalog>, progress: Arc<dyn ProgressRepository>) -> Self {
        Self {
            clock,
            catalog,
            progress,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Open a fresh attempt at `topic_id`.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` if the topic is unknown or has no questions.
    pub fn start(&self, topic_id: TopicId) -> Result<QuizSession, QuizServiceError> {
        let mut session = QuizSession::new();
        self.restart(&mut session, topic_id)?;
        Ok(session)
    }

    /// Point an existing session at `topic_id`, discarding any prior answers.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` if the topic is unknown or has no questions.
    pub fn restart(
        &self,
        session: &mut QuizSession,
        topic_id: TopicId,
    ) -> Result<(), QuizServiceError> {
        session.select_topic(&self.catalog, topic_id)?;
        tracing::debug!(topic = %topic_id, "quiz attempt started");
        Ok(())
    }

    /// Grade the attempt, store it as the topic's latest result, then close it.
    ///
    /// The session only moves to submitted once the record is stored; a
    /// storage failure leaves it in progress so the user can retry.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` if nothing is answered or no attempt is in
    /// progress, or `QuizServiceError::Storage` if the record cannot be written.
    pub async fn submit(&self, session: &mut QuizSession) -> Result<QuizResult, QuizServiceError> {
        let result = session.grade()?;
        let topic_id = session.topic_id().ok_or(QuizError::InvalidState {
            actual: session.phase(),
        })?;

        let record = ProgressRecord::new(topic_id, result.score_percent, true, self.clock.now())?;
        self.progress.upsert_progress(&record).await?;
        session.complete(result.clone())?;

        tracing::info!(
            topic = %topic_id,
            correct = result.correct_count,
            total = result.total,
            grade = %result.letter_grade,
            "quiz attempt submitted"
        );
        Ok(result)
    }
}
