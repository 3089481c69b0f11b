use std::sync::Arc;

use quiz_core::model::TopicId;
use quiz_core::{Catalog, KeywordResponder};

use crate::error::AssistantError;

/// How many prompts the sample-questions panel shows.
pub const SAMPLE_QUESTION_LIMIT: usize = 8;

/// One assistant exchange, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantReply {
    pub question: String,
    /// Topic the user had selected, echoed back only.
    pub topic_hint: Option<String>,
    pub matched_topic: Option<&'static str>,
    pub passage: &'static str,
}

impl AssistantReply {
    /// e.g. `You asked about Safety Procedures: how do I start up?`.
    #[must_use]
    pub fn echo(&self) -> String {
        match &self.topic_hint {
            Some(hint) => format!("You asked about {hint}: {}", self.question),
            None => format!("You asked: {}", self.question),
        }
    }
}

/// Answers free-text questions from the built-in knowledge base.
#[derive(Clone)]
pub struct AssistantService {
    catalog: Arc<Catalog>,
    responder: KeywordResponder,
}

impl AssistantService {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            responder: KeywordResponder::default(),
        }
    }

    /// Match `question` against the knowledge base.
    ///
    /// # Errors
    ///
    /// Returns `AssistantError::EmptyQuestion` if `question` is blank.
    pub fn ask(
        &self,
        question: &str,
        topic_hint: Option<&str>,
    ) -> Result<AssistantReply, AssistantError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(AssistantError::EmptyQuestion);
        }

        let response = self.responder.respond(question, topic_hint);
        tracing::debug!(
            matched = response.matched_topic.unwrap_or("<fallback>"),
            "assistant answered"
        );

        Ok(AssistantReply {
            question: question.to_owned(),
            topic_hint: topic_hint.map(str::to_owned),
            matched_topic: response.matched_topic,
            passage: response.passage,
        })
    }

    /// The first few prompts of a topic, as conversation starters.
    ///
    /// # Errors
    ///
    /// Returns `AssistantError::Catalog` if the topic is unknown.
    pub fn sample_questions(&self, topic_id: TopicId) -> Result<Vec<&str>, AssistantError> {
        Ok(self.catalog.sample_prompts(topic_id, SAMPLE_QUESTION_LIMIT)?)
    }

    /// Sample prompts for the topic a hint names, when the hint is a catalog title.
    #[must_use]
    pub fn samples_for_hint(&self, topic_hint: &str) -> Option<Vec<&str>> {
        let topic = self.catalog.topic_by_title(topic_hint)?;
        self.catalog
            .sample_prompts(topic.id(), SAMPLE_QUESTION_LIMIT)
            .ok()
    }
}
