use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::TopicId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TopicError {
    #[error("topic title cannot be empty")]
    EmptyTitle,
}

//
// ─── TOPIC ─────────────────────────────────────────────────────────────────────
//

/// A unit of course content with its own question set.
///
/// `week` and `day` are ordering keys only; two topics may share them.
/// `content` is carried for display and never inspected by the quiz logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    id: TopicId,
    week: u32,
    day: u32,
    title: String,
    description: String,
    competency_tags: Vec<String>,
    content: String,
}

impl Topic {
    /// Creates a validated topic. The title is trimmed.
    ///
    /// # Errors
    ///
    /// Returns `TopicError::EmptyTitle` if the title is blank.
    pub fn new(
        id: TopicId,
        week: u32,
        day: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        competency_tags: Vec<String>,
        content: impl Into<String>,
    ) -> Result<Self, TopicError> {
        let title = title.into().trim().to_owned();
        if title.is_empty() {
            return Err(TopicError::EmptyTitle);
        }

        let competency_tags = competency_tags
            .into_iter()
            .map(|tag| tag.trim().to_owned())
            .filter(|tag| !tag.is_empty())
            .collect();

        Ok(Self {
            id,
            week,
            day,
            title,
            description: description.into(),
            competency_tags,
            content: content.into(),
        })
    }

    #[must_use]
    pub fn id(&self) -> TopicId {
        self.id
    }

    #[must_use]
    pub fn week(&self) -> u32 {
        self.week
    }

    #[must_use]
    pub fn day(&self) -> u32 {
        self.day
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn competency_tags(&self) -> &[String] {
        &self.competency_tags
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Key used to order topics for listing: week, then day, then id.
    #[must_use]
    pub fn schedule_key(&self) -> (u32, u32, TopicId) {
        (self.week, self.day, self.id)
    }
}

/// Splits a comma-separated tag string such as `"PC1.1, PC2.3"`.
#[must_use]
pub fn parse_competency_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Joins tags back into the comma-separated persisted form.
#[must_use]
pub fn join_competency_tags(tags: &[String]) -> String {
    tags.join(", ")
}
