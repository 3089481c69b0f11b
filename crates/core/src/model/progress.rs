use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::TopicId;

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("score must be within 0..=100, got {0}")]
    ScoreOutOfRange(f64),
}

/// Latest attempt for one topic. A newer attempt replaces the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressRecord {
    topic_id: TopicId,
    score: f64,
    completed: bool,
    timestamp: DateTime<Utc>,
}

impl ProgressRecord {
    /// # Errors
    ///
    /// Returns `ProgressError::ScoreOutOfRange` if `score` is not a finite value in `0..=100`.
    pub fn new(
        topic_id: TopicId,
        score: f64,
        completed: bool,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, ProgressError> {
        if !score.is_finite() || !(0.0..=100.0).contains(&score) {
            return Err(ProgressError::ScoreOutOfRange(score));
        }
        Ok(Self {
            topic_id,
            score,
            completed,
            timestamp,
        })
    }

    #[must_use]
    pub fn topic_id(&self) -> TopicId {
        self.topic_id
    }

    #[must_use]
    pub fn score(&self) -> f64 {
        self.score
    }

    #[must_use]
    pub fn completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn record_accepts_bounds() {
        assert!(ProgressRecord::new(TopicId::new(1), 0.0, false, fixed_now()).is_ok());
        assert!(ProgressRecord::new(TopicId::new(1), 100.0, true, fixed_now()).is_ok());
    }

    #[test]
    fn record_rejects_out_of_range_scores() {
        let err = ProgressRecord::new(TopicId::new(1), 100.5, true, fixed_now()).unwrap_err();
        assert_eq!(err, ProgressError::ScoreOutOfRange(100.5));
        assert!(ProgressRecord::new(TopicId::new(1), f64::NAN, true, fixed_now()).is_err());
    }
}
