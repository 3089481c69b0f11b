mod ids;
mod progress;
mod question;
mod topic;

pub use ids::{ParseIdError, QuestionId, TopicId};
pub use progress::{ProgressError, ProgressRecord};
pub use question::{Question, QuestionError, QuestionKind};
pub use topic::{Topic, TopicError, join_competency_tags, parse_competency_tags};
