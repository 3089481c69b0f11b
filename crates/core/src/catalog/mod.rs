//! Read-only topic and question catalog.

mod seed;

use std::collections::{HashMap, HashSet};
use thiserror::Error;

use crate::model::{Question, QuestionError, QuestionId, Topic, TopicError, TopicId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("topic not found: {0}")]
    NotFound(TopicId),

    #[error("duplicate topic id: {0}")]
    DuplicateTopic(TopicId),

    #[error("duplicate topic title: {0}")]
    DuplicateTitle(String),

    #[error("duplicate question id: {0}")]
    DuplicateQuestion(QuestionId),

    #[error("question {question} references unknown topic {topic}")]
    OrphanQuestion { question: QuestionId, topic: TopicId },

    #[error(transparent)]
    InvalidTopic(#[from] TopicError),

    #[error(transparent)]
    InvalidQuestion(#[from] QuestionError),
}

/// Immutable set of topics and their questions.
///
/// Topics are kept in schedule order (week, day, id). Questions keep the order
/// they were supplied in, which is the order a quiz presents them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    topics: Vec<Topic>,
    questions: HashMap<TopicId, Vec<Question>>,
}

impl Catalog {
    /// Builds a catalog, checking identity and reference rules.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` on duplicate ids or titles, or on a question that
    /// points at a topic not in `topics`.
    pub fn new(mut topics: Vec<Topic>, questions: Vec<Question>) -> Result<Self, CatalogError> {
        let mut ids = HashSet::with_capacity(topics.len());
        let mut titles = HashSet::with_capacity(topics.len());
        for topic in &topics {
            if !ids.insert(topic.id()) {
                return Err(CatalogError::DuplicateTopic(topic.id()));
            }
            if !titles.insert(topic.title()) {
                return Err(CatalogError::DuplicateTitle(topic.title().to_owned()));
            }
        }

        let mut question_ids = HashSet::with_capacity(questions.len());
        let mut by_topic: HashMap<TopicId, Vec<Question>> = HashMap::new();
        for question in questions {
            if !question_ids.insert(question.id()) {
                return Err(CatalogError::DuplicateQuestion(question.id()));
            }
            if !ids.contains(&question.topic_id()) {
                return Err(CatalogError::OrphanQuestion {
                    question: question.id(),
                    topic: question.topic_id(),
                });
            }
            by_topic.entry(question.topic_id()).or_default().push(question);
        }

        topics.sort_by_key(Topic::schedule_key);

        Ok(Self {
            topics,
            questions: by_topic,
        })
    }

    /// The built-in course: six topics with five questions each.
    ///
    /// # Errors
    ///
    /// Only fails if the literal seed data violates a model rule.
    pub fn seeded() -> Result<Self, CatalogError> {
        let (topics, questions) = seed::build()?;
        Self::new(topics, questions)
    }

    /// All topics ordered by week, then day.
    #[must_use]
    pub fn list_topics(&self) -> &[Topic] {
        &self.topics
    }

    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if no topic has this id.
    pub fn topic(&self, id: TopicId) -> Result<&Topic, CatalogError> {
        self.topics
            .iter()
            .find(|t| t.id() == id)
            .ok_or(CatalogError::NotFound(id))
    }

    #[must_use]
    pub fn topic_by_title(&self, title: &str) -> Option<&Topic> {
        let title = title.trim();
        self.topics.iter().find(|t| t.title() == title)
    }

    /// Questions for a topic in presentation order. A known topic may have none.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if the topic does not exist.
    pub fn questions(&self, id: TopicId) -> Result<&[Question], CatalogError> {
        self.topic(id)?;
        Ok(self.questions.get(&id).map_or(&[][..], Vec::as_slice))
    }

    /// Up to `limit` question prompts, in presentation order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if the topic does not exist.
    pub fn sample_prompts(&self, id: TopicId, limit: usize) -> Result<Vec<&str>, CatalogError> {
        Ok(self
            .questions(id)?
            .iter()
            .take(limit)
            .map(Question::prompt)
            .collect())
    }

    /// Every question across all topics, grouped by topic in schedule order.
    pub fn all_questions(&self) -> impl Iterator<Item = &Question> {
        self.topics
            .iter()
            .filter_map(|t| self.questions.get(&t.id()))
            .flatten()
    }

    #[must_use]
    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionKind;

    fn topic(id: u64, week: u32, day: u32, title: &str) -> Topic {
        Topic::new(TopicId::new(id), week, day, title, "", Vec::new(), "").unwrap()
    }

    fn question(id: u64, topic_id: u64) -> Question {
        Question::new(
            QuestionId::new(id),
            TopicId::new(topic_id),
            format!("Q{id}"),
            vec!["A".into(), "B".into()],
            "A",
            QuestionKind::SingleChoice,
        )
        .unwrap()
    }

    #[test]
    fn seeded_catalog_has_six_topics_of_five_questions() {
        let catalog = Catalog::seeded().unwrap();
        assert_eq!(catalog.topic_count(), 6);
        for topic in catalog.list_topics() {
            assert_eq!(catalog.questions(topic.id()).unwrap().len(), 5);
        }
        assert_eq!(catalog.all_questions().count(), 30);
    }

    #[test]
    fn topics_are_listed_by_week_then_day() {
        let catalog = Catalog::new(
            vec![topic(1, 2, 1, "B"), topic(2, 1, 3, "A2"), topic(3, 1, 1, "A1")],
            Vec::new(),
        )
        .unwrap();

        let ids: Vec<u64> = catalog
            .list_topics()
            .iter()
            .map(|t| t.id().value())
            .collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn unknown_topic_is_not_found() {
        let catalog = Catalog::seeded().unwrap();
        let err = catalog.topic(TopicId::new(99)).unwrap_err();
        assert_eq!(err, CatalogError::NotFound(TopicId::new(99)));
        assert!(catalog.questions(TopicId::new(99)).is_err());
    }

    #[test]
    fn known_topic_without_questions_yields_empty_slice() {
        let catalog = Catalog::new(vec![topic(1, 1, 1, "Empty")], Vec::new()).unwrap();
        assert!(catalog.questions(TopicId::new(1)).unwrap().is_empty());
    }

    #[test]
    fn rejects_duplicate_titles_and_orphans() {
        let err = Catalog::new(vec![topic(1, 1, 1, "Same"), topic(2, 1, 2, "Same")], Vec::new())
            .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateTitle("Same".into()));

        let err = Catalog::new(vec![topic(1, 1, 1, "T")], vec![question(7, 2)]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::OrphanQuestion {
                question: QuestionId::new(7),
                topic: TopicId::new(2),
            }
        );
    }

    #[test]
    fn questions_keep_supplied_order() {
        let catalog = Catalog::new(
            vec![topic(1, 1, 1, "T")],
            vec![question(3, 1), question(1, 1), question(2, 1)],
        )
        .unwrap();
        let ids: Vec<u64> = catalog
            .questions(TopicId::new(1))
            .unwrap()
            .iter()
            .map(|q| q.id().value())
            .collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn sample_prompts_respects_limit() {
        let catalog = Catalog::seeded().unwrap();
        let id = catalog.list_topics()[0].id();
        assert_eq!(catalog.sample_prompts(id, 8).unwrap().len(), 5);
        assert_eq!(
            catalog.sample_prompts(id, 2).unwrap(),
            vec![
                "Which pump type uses an impeller to move fluid?",
                "What is the main function of a pump?",
            ]
        );
    }

    #[test]
    fn lookup_by_title_trims_input() {
        let catalog = Catalog::seeded().unwrap();
        let topic = catalog.topic_by_title(" Measurement Devices ").unwrap();
        assert_eq!(topic.id(), TopicId::new(3));
    }
}
