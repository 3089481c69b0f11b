#![forbid(unsafe_code)]

pub mod assistant;
pub mod catalog;
pub mod error;
pub mod model;
pub mod quiz;
pub mod scoring;
pub mod summary;
pub mod time;

pub use assistant::{KeywordResponder, KnowledgeEntry, Response};
pub use catalog::{Catalog, CatalogError};
pub use error::Error;
pub use quiz::{Phase, Position, QuizError, QuizSession};
pub use scoring::{
    AnswerReview, GradeTone, LetterGrade, QuizResult, ScoreError, format_percent, grade,
};
pub use summary::{ProgressOverview, ProgressRow, ProgressStatus};
pub use time::Clock;
