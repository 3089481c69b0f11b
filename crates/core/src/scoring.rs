use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use crate::model::Question;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScoreError {
    #[error("cannot score a quiz with no questions")]
    DivisionUndefined,
}

//
// ─── LETTER GRADE ──────────────────────────────────────────────────────────────
//

/// Letter grade derived from the percentage score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    F,
}

/// How a UI should colour a grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeTone {
    Positive,
    Caution,
    Negative,
}

impl LetterGrade {
    /// Thresholds are inclusive lower bounds, checked highest first.
    #[must_use]
    pub fn from_percent(score: f64) -> Self {
        if score >= 90.0 {
            LetterGrade::A
        } else if score >= 80.0 {
            LetterGrade::B
        } else if score >= 70.0 {
            LetterGrade::C
        } else if score >= 60.0 {
            LetterGrade::D
        } else {
            LetterGrade::F
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LetterGrade::A => "A",
            LetterGrade::B => "B",
            LetterGrade::C => "C",
            LetterGrade::D => "D",
            LetterGrade::F => "F",
        }
    }

    #[must_use]
    pub fn remark(self) -> &'static str {
        match self {
            LetterGrade::A => "Excellent!",
            LetterGrade::B => "Very Good!",
            LetterGrade::C => "Good!",
            LetterGrade::D => "Pass",
            LetterGrade::F => "Needs Improvement",
        }
    }

    #[must_use]
    pub fn tone(self) -> GradeTone {
        match self {
            LetterGrade::A | LetterGrade::B => GradeTone::Positive,
            LetterGrade::C | LetterGrade::D => GradeTone::Caution,
            LetterGrade::F => GradeTone::Negative,
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ─── RESULT ────────────────────────────────────────────────────────────────────
//

/// One graded question, kept so a front-end can show the correct answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerReview {
    pub prompt: String,
    pub correct_answer: String,
    /// `None` when the question was skipped.
    pub chosen: Option<String>,
}

impl AnswerReview {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.chosen.as_deref() == Some(self.correct_answer.as_str())
    }
}

/// Outcome of grading one attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResult {
    pub correct_count: usize,
    pub total: usize,
    pub score_percent: f64,
    pub letter_grade: LetterGrade,
    /// Per-question breakdown, in question order.
    pub review: Vec<AnswerReview>,
}

impl QuizResult {
    /// e.g. `Score: 50.0% (1/2 correct)`.
    #[must_use]
    pub fn headline(&self) -> String {
        format!(
            "Score: {} ({}/{} correct)",
            format_percent(self.score_percent),
            self.correct_count,
            self.total
        )
    }
}

/// Renders a percentage with one decimal place, e.g. `66.7%`.
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Grades answers against the questions of a topic.
///
/// `answers` maps question position to the chosen option. Positions without an
/// answer count as wrong, and `total` is always `questions.len()`.
///
/// # Errors
///
/// Returns `ScoreError::DivisionUndefined` if `questions` is empty.
#[allow(clippy::cast_precision_loss)]
pub fn grade(
    questions: &[Question],
    answers: &BTreeMap<usize, String>,
) -> Result<QuizResult, ScoreError> {
    let total = questions.len();
    if total == 0 {
        return Err(ScoreError::DivisionUndefined);
    }

    let review: Vec<AnswerReview> = questions
        .iter()
        .enumerate()
        .map(|(i, q)| AnswerReview {
            prompt: q.prompt().to_owned(),
            correct_answer: q.correct_answer().to_owned(),
            chosen: answers.get(&i).cloned(),
        })
        .collect();
    let correct_count = questions
        .iter()
        .enumerate()
        .filter(|(i, q)| answers.get(i).is_some_and(|a| q.is_correct(a)))
        .count();

    let score_percent = 100.0 * correct_count as f64 / total as f64;

    Ok(QuizResult {
        correct_count,
        total,
        score_percent,
        letter_grade: LetterGrade::from_percent(score_percent),
        review,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{QuestionId, QuestionKind, TopicId};

    fn question(id: u64, correct: &str) -> Question {
        Question::new(
            QuestionId::new(id),
            TopicId::new(1),
            format!("Q{id}"),
            vec!["A".into(), "B".into(), "X".into()],
            correct,
            QuestionKind::SingleChoice,
        )
        .unwrap()
    }

    fn answers(pairs: &[(usize, &str)]) -> BTreeMap<usize, String> {
        pairs.iter().map(|(i, a)| (*i, (*a).to_string())).collect()
    }

    #[test]
    fn half_right_is_an_f() {
        let questions = vec![question(1, "A"), question(2, "B")];
        let result = grade(&questions, &answers(&[(0, "A"), (1, "X")])).unwrap();

        assert_eq!(result.correct_count, 1);
        assert_eq!(result.total, 2);
        assert!((result.score_percent - 50.0).abs() < f64::EPSILON);
        assert_eq!(result.letter_grade, LetterGrade::F);
        assert_eq!(result.headline(), "Score: 50.0% (1/2 correct)");
    }

    #[test]
    fn total_counts_unanswered_questions() {
        let questions: Vec<_> = (1..=5).map(|i| question(i, "A")).collect();
        let result = grade(&questions, &answers(&[(0, "A")])).unwrap();
        assert_eq!(result.total, 5);
        assert_eq!(result.correct_count, 1);
        assert!((result.score_percent - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn review_lists_every_question_in_order() {
        let questions = vec![question(1, "A"), question(2, "B"), question(3, "X")];
        let result = grade(&questions, &answers(&[(0, "A"), (2, "B")])).unwrap();

        assert_eq!(result.review.len(), 3);
        assert_eq!(result.review[0].prompt, "Q1");
        assert!(result.review[0].is_correct());
        assert_eq!(result.review[1].chosen, None);
        assert!(!result.review[1].is_correct());
        assert_eq!(result.review[2].chosen.as_deref(), Some("B"));
        assert_eq!(result.review[2].correct_answer, "X");
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let questions = vec![question(1, "A")];
        let result = grade(&questions, &answers(&[(0, "a")])).unwrap();
        assert_eq!(result.correct_count, 0);
    }

    #[test]
    fn answers_beyond_question_count_are_ignored() {
        let questions = vec![question(1, "A")];
        let result = grade(&questions, &answers(&[(0, "A"), (5, "A")])).unwrap();
        assert_eq!(result.correct_count, 1);
        assert_eq!(result.letter_grade, LetterGrade::A);
    }

    #[test]
    fn empty_topic_cannot_be_graded() {
        let err = grade(&[], &BTreeMap::new()).unwrap_err();
        assert_eq!(err, ScoreError::DivisionUndefined);
    }

    #[test]
    fn grade_thresholds_are_inclusive() {
        assert_eq!(LetterGrade::from_percent(100.0), LetterGrade::A);
        assert_eq!(LetterGrade::from_percent(90.0), LetterGrade::A);
        assert_eq!(LetterGrade::from_percent(89.9), LetterGrade::B);
        assert_eq!(LetterGrade::from_percent(80.0), LetterGrade::B);
        assert_eq!(LetterGrade::from_percent(70.0), LetterGrade::C);
        assert_eq!(LetterGrade::from_percent(60.0), LetterGrade::D);
        assert_eq!(LetterGrade::from_percent(59.9), LetterGrade::F);
        assert_eq!(LetterGrade::from_percent(0.0), LetterGrade::F);
    }

    #[test]
    fn remarks_and_tones() {
        assert_eq!(LetterGrade::B.remark(), "Very Good!");
        assert_eq!(LetterGrade::D.tone(), GradeTone::Caution);
        assert_eq!(LetterGrade::F.tone(), GradeTone::Negative);
    }

    #[test]
    fn percent_formats_to_one_decimal() {
        assert_eq!(format_percent(200.0 / 3.0), "66.7%");
        assert_eq!(format_percent(0.0), "0.0%");
    }
}
