//! Per-topic quiz attempt: navigation, answer capture and submission.

use std::collections::BTreeMap;
use thiserror::Error;

use crate::catalog::{Catalog, CatalogError};
use crate::model::{Question, TopicId};
use crate::scoring::{self, QuizResult, ScoreError};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Which phase an operation needed versus what the session was in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Empty,
    InProgress,
    Submitted,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("unknown topic: {0}")]
    UnknownTopic(TopicId),

    #[error("no questions available for topic {0}")]
    NoQuestions(TopicId),

    #[error("please answer at least one question")]
    NothingAnswered,

    #[error("operation requires an attempt in progress (session is {actual:?})")]
    InvalidState { actual: Phase },

    #[error(transparent)]
    Score(#[from] ScoreError),
}

impl QuizError {
    /// True for both ways a topic can be unusable: missing, or without questions.
    #[must_use]
    pub fn is_unknown_topic(&self) -> bool {
        matches!(self, QuizError::UnknownTopic(_) | QuizError::NoQuestions(_))
    }
}

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
struct Attempt {
    topic_id: TopicId,
    questions: Vec<Question>,
    index: usize,
    answers: BTreeMap<usize, String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
enum State {
    #[default]
    Empty,
    InProgress(Attempt),
    Submitted {
        topic_id: TopicId,
        result: QuizResult,
    },
}

/// "Question `index + 1` of `total`".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub index: usize,
    pub total: usize,
}

impl Position {
    #[must_use]
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.total
    }
}

/// Quiz state machine: `Empty` → `InProgress` → `Submitted`.
///
/// `select_topic` is the only way out of `Submitted`. The session owns a copy of
/// the topic's questions so grading never needs the catalog again.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuizSession {
    state: State,
}

impl QuizSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fresh attempt at the first question, discarding any prior state.
    ///
    /// On failure the session is left `Empty`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::UnknownTopic` if the catalog has no such topic and
    /// `QuizError::NoQuestions` if it has no questions.
    pub fn select_topic(&mut self, catalog: &Catalog, topic_id: TopicId) -> Result<(), QuizError> {
        self.state = State::Empty;

        let questions = catalog.questions(topic_id).map_err(|err| match err {
            CatalogError::NotFound(id) => QuizError::UnknownTopic(id),
            _ => QuizError::UnknownTopic(topic_id),
        })?;
        if questions.is_empty() {
            return Err(QuizError::NoQuestions(topic_id));
        }

        self.state = State::InProgress(Attempt {
            topic_id,
            questions: questions.to_vec(),
            index: 0,
            answers: BTreeMap::new(),
        });
        Ok(())
    }

    /// Stores `option` for the current question, replacing any earlier choice.
    ///
    /// The option is not checked against the question's choices; a value that
    /// is not an option simply never grades as correct.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidState` unless an attempt is in progress.
    pub fn record_answer(&mut self, option: impl Into<String>) -> Result<(), QuizError> {
        let attempt = self.attempt_mut()?;
        attempt.answers.insert(attempt.index, option.into());
        Ok(())
    }

    /// Moves back one question; stays put on the first.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidState` unless an attempt is in progress.
    pub fn go_to_previous(&mut self) -> Result<Position, QuizError> {
        let attempt = self.attempt_mut()?;
        attempt.index = attempt.index.saturating_sub(1);
        Ok(attempt.position())
    }

    /// Moves forward one question; stays put on the last.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidState` unless an attempt is in progress.
    pub fn go_to_next(&mut self) -> Result<Position, QuizError> {
        let attempt = self.attempt_mut()?;
        if attempt.index + 1 < attempt.questions.len() {
            attempt.index += 1;
        }
        Ok(attempt.position())
    }

    /// Grades the attempt without leaving `InProgress`.
    ///
    /// Callers that persist the result use this, then `complete`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidState` unless an attempt is in progress, and
    /// `QuizError::NothingAnswered` if no answer was recorded.
    pub fn grade(&self) -> Result<QuizResult, QuizError> {
        let attempt = self.attempt()?;
        if attempt.answers.is_empty() {
            return Err(QuizError::NothingAnswered);
        }
        Ok(scoring::grade(&attempt.questions, &attempt.answers)?)
    }

    /// Moves an in-progress attempt to `Submitted` with an already computed result.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidState` unless an attempt is in progress.
    pub fn complete(&mut self, result: QuizResult) -> Result<(), QuizError> {
        let topic_id = self.attempt()?.topic_id;
        self.state = State::Submitted { topic_id, result };
        Ok(())
    }

    /// Grades and submits in one step.
    ///
    /// # Errors
    ///
    /// See `grade`.
    pub fn submit(&mut self) -> Result<QuizResult, QuizError> {
        let result = self.grade()?;
        self.complete(result.clone())?;
        Ok(result)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.state {
            State::Empty => Phase::Empty,
            State::InProgress(_) => Phase::InProgress,
            State::Submitted { .. } => Phase::Submitted,
        }
    }

    #[must_use]
    pub fn topic_id(&self) -> Option<TopicId> {
        match &self.state {
            State::Empty => None,
            State::InProgress(attempt) => Some(attempt.topic_id),
            State::Submitted { topic_id, .. } => Some(*topic_id),
        }
    }

    #[must_use]
    pub fn position(&self) -> Option<Position> {
        self.attempt().ok().map(Attempt::position)
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        let attempt = self.attempt().ok()?;
        attempt.questions.get(attempt.index)
    }

    /// The answer recorded for the current question, if any.
    #[must_use]
    pub fn current_answer(&self) -> Option<&str> {
        let attempt = self.attempt().ok()?;
        attempt.answers.get(&attempt.index).map(String::as_str)
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.attempt().map_or(0, |a| a.answers.len())
    }

    #[must_use]
    pub fn result(&self) -> Option<&QuizResult> {
        match &self.state {
            State::Submitted { result, .. } => Some(result),
            _ => None,
        }
    }

    fn attempt(&self) -> Result<&Attempt, QuizError> {
        match &self.state {
            State::InProgress(attempt) => Ok(attempt),
            _ => Err(QuizError::InvalidState {
                actual: self.phase(),
            }),
        }
    }

    fn attempt_mut(&mut self) -> Result<&mut Attempt, QuizError> {
        let actual = self.phase();
        match &mut self.state {
            State::InProgress(attempt) => Ok(attempt),
            _ => Err(QuizError::InvalidState { actual }),
        }
    }
}

impl Attempt {
    fn position(&self) -> Position {
        Position {
            index: self.index,
            total: self.questions.len(),
        }
    }
}
