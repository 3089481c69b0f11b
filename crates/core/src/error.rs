use thiserror::Error;

use crate::catalog::CatalogError;
use crate::model::{ProgressError, QuestionError, TopicError};
use crate::quiz::QuizError;
use crate::scoring::ScoreError;

/// Umbrella error for callers that drive the core without caring which
/// component rejected the request.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Topic(#[from] TopicError),
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Progress(#[from] ProgressError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Score(#[from] ScoreError),
}
