use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

use crate::model::ids::{QuestionId, TopicId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("a question needs at least 2 options, got {0}")]
    TooFewOptions(usize),

    #[error("duplicate option: {0}")]
    DuplicateOption(String),

    #[error("correct answer is not one of the options: {0}")]
    CorrectAnswerNotAnOption(String),

    #[error("unknown question kind: {0}")]
    UnknownKind(String),
}

//
// ─── KIND ──────────────────────────────────────────────────────────────────────
//

/// Answer format of a question. Only single-choice exists today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    #[default]
    SingleChoice,
}

impl QuestionKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionKind::SingleChoice => "single_choice",
        }
    }

    /// Parses the persisted kind.
    ///
    /// Older stores wrote `multiple_choice` for the same one-correct-answer format.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::UnknownKind` for anything else.
    pub fn parse(raw: &str) -> Result<Self, QuestionError> {
        match raw {
            "single_choice" | "multiple_choice" => Ok(QuestionKind::SingleChoice),
            other => Err(QuestionError::UnknownKind(other.to_owned())),
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A multiple-choice question with exactly one correct option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    topic_id: TopicId,
    prompt: String,
    options: Vec<String>,
    correct_answer: String,
    kind: QuestionKind,
}

impl Question {
    /// Creates a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt is blank, there are fewer than two
    /// options, an option repeats, or the correct answer is not an option.
    pub fn new(
        id: QuestionId,
        topic_id: TopicId,
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
        kind: QuestionKind,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if options.len() < 2 {
            return Err(QuestionError::TooFewOptions(options.len()));
        }

        let mut seen = HashSet::with_capacity(options.len());
        for option in &options {
            if !seen.insert(option.as_str()) {
                return Err(QuestionError::DuplicateOption(option.clone()));
            }
        }

        let correct_answer = correct_answer.into();
        if !seen.contains(correct_answer.as_str()) {
            return Err(QuestionError::CorrectAnswerNotAnOption(correct_answer));
        }

        Ok(Self {
            id,
            topic_id,
            prompt,
            options,
            correct_answer,
            kind,
        })
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn topic_id(&self) -> TopicId {
        self.topic_id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    /// Exact, case-sensitive comparison against the correct answer.
    #[must_use]
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn question_new_happy_path() {
        let q = Question::new(
            QuestionId::new(1),
            TopicId::new(1),
            "What does a Venturi tube measure?",
            options(&["Pressure", "Flow rate"]),
            "Flow rate",
            QuestionKind::SingleChoice,
        )
        .unwrap();

        assert!(q.is_correct("Flow rate"));
        assert!(!q.is_correct("flow rate"));
        assert_eq!(q.options().len(), 2);
    }

    #[test]
    fn question_requires_two_options() {
        let err = Question::new(
            QuestionId::new(1),
            TopicId::new(1),
            "Q",
            options(&["Only"]),
            "Only",
            QuestionKind::SingleChoice,
        )
        .unwrap_err();
        assert_eq!(err, QuestionError::TooFewOptions(1));
    }

    #[test]
    fn question_rejects_duplicate_options() {
        let err = Question::new(
            QuestionId::new(1),
            TopicId::new(1),
            "Q",
            options(&["A", "B", "A"]),
            "A",
            QuestionKind::SingleChoice,
        )
        .unwrap_err();
        assert_eq!(err, QuestionError::DuplicateOption("A".into()));
    }

    #[test]
    fn question_rejects_foreign_correct_answer() {
        let err = Question::new(
            QuestionId::new(1),
            TopicId::new(1),
            "Q",
            options(&["A", "B"]),
            "C",
            QuestionKind::SingleChoice,
        )
        .unwrap_err();
        assert_eq!(err, QuestionError::CorrectAnswerNotAnOption("C".into()));
    }

    #[test]
    fn kind_accepts_legacy_label() {
        assert_eq!(
            QuestionKind::parse("multiple_choice").unwrap(),
            QuestionKind::SingleChoice
        );
        assert!(QuestionKind::parse("essay").is_err());
    }
}
