//! Progress summary: the catalog left-joined with the latest attempt per topic.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use crate::catalog::Catalog;
use crate::model::{ProgressRecord, Topic, TopicId};
use crate::scoring::format_percent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProgressStatus {
    Completed,
    NotStarted,
}

impl ProgressStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ProgressStatus::Completed => "Completed",
            ProgressStatus::NotStarted => "Not Started",
        }
    }
}

impl fmt::Display for ProgressStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One catalog topic with its latest attempt, or defaults when never attempted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressRow {
    pub topic: Topic,
    pub score: f64,
    pub completed: bool,
    pub timestamp: Option<DateTime<Utc>>,
}

impl ProgressRow {
    #[must_use]
    pub fn topic_id(&self) -> TopicId {
        self.topic.id()
    }

    #[must_use]
    pub fn status(&self) -> ProgressStatus {
        if self.completed {
            ProgressStatus::Completed
        } else {
            ProgressStatus::NotStarted
        }
    }

    /// `"80.0%"`, or `"N/A"` when the score is zero.
    #[must_use]
    pub fn score_display(&self) -> String {
        if self.score > 0.0 {
            format_percent(self.score)
        } else {
            "N/A".to_owned()
        }
    }
}

/// Builds one row per catalog topic, in schedule order.
///
/// Records for topics missing from the catalog are dropped.
#[must_use]
pub fn join(catalog: &Catalog, records: &[ProgressRecord]) -> Vec<ProgressRow> {
    let by_topic: HashMap<TopicId, &ProgressRecord> =
        records.iter().map(|r| (r.topic_id(), r)).collect();

    catalog
        .list_topics()
        .iter()
        .map(|topic| match by_topic.get(&topic.id()) {
            Some(record) => ProgressRow {
                topic: topic.clone(),
                score: record.score(),
                completed: record.completed(),
                timestamp: Some(record.timestamp()),
            },
            None => ProgressRow {
                topic: topic.clone(),
                score: 0.0,
                completed: false,
                timestamp: None,
            },
        })
        .collect()
}

/// Headline numbers over a set of rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressOverview {
    pub total_topics: usize,
    pub completed_topics: usize,
    /// Topics whose score is above zero.
    pub attempted_topics: usize,
    pub completion_rate: f64,
    /// Mean over `attempted_topics`; `None` when nothing has scored yet.
    pub average_score: Option<f64>,
}

impl ProgressOverview {
    /// Aggregates rows.
    ///
    /// A recorded score of exactly 0 is treated like "never attempted" and is
    /// left out of the average, matching how scores have always been summarised.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_rows(rows: &[ProgressRow]) -> Self {
        let total_topics = rows.len();
        let completed_topics = rows.iter().filter(|r| r.completed).count();

        let scored: Vec<f64> = rows
            .iter()
            .map(|r| r.score)
            .filter(|s| *s > 0.0)
            .collect();
        let attempted_topics = scored.len();

        let completion_rate = if total_topics > 0 {
            completed_topics as f64 / total_topics as f64 * 100.0
        } else {
            0.0
        };
        let average_score = if attempted_topics > 0 {
            Some(scored.iter().sum::<f64>() / attempted_topics as f64)
        } else {
            None
        };

        Self {
            total_topics,
            completed_topics,
            attempted_topics,
            completion_rate,
            average_score,
        }
    }

    /// e.g. `Overall Progress: 2/6 topics completed (33.3%) | Average Score: 75.0%`.
    #[must_use]
    pub fn headline(&self) -> String {
        let mut line = format!(
            "Overall Progress: {}/{} topics completed ({})",
            self.completed_topics,
            self.total_topics,
            format_percent(self.completion_rate)
        );
        if let Some(avg) = self.average_score {
            line.push_str(" | Average Score: ");
            line.push_str(&format_percent(avg));
        }
        line
    }
}
