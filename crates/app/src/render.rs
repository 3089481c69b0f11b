use std::io::{self, Write};

use quiz_core::summary::{ProgressOverview, ProgressRow};
use quiz_core::{Catalog, GradeTone, QuizResult};
use services::AssistantReply;

pub fn topics(out: &mut impl Write, catalog: &Catalog) -> io::Result<()> {
    writeln!(out, "{:<4} {:<10} {:<34} Competencies", "ID", "Schedule", "Topic")?;
    for topic in catalog.list_topics() {
        writeln!(
            out,
            "{:<4} {:<10} {:<34} {}",
            topic.id().value(),
            format!("W{} D{}", topic.week(), topic.day()),
            topic.title(),
            topic.competency_tags().join(", ")
        )?;
        writeln!(out, "     {}", topic.description())?;
    }
    Ok(())
}

pub fn samples(out: &mut impl Write, prompts: &[&str]) -> io::Result<()> {
    writeln!(out, "Sample questions:")?;
    for prompt in prompts {
        writeln!(out, "  - {prompt}")?;
    }
    Ok(())
}

pub fn reply(out: &mut impl Write, reply: &AssistantReply) -> io::Result<()> {
    writeln!(out, "{}", reply.echo())?;
    writeln!(out)?;
    writeln!(out, "AI Assistant: {}", reply.passage)
}

pub fn progress(out: &mut impl Write, rows: &[ProgressRow]) -> io::Result<()> {
    writeln!(
        out,
        "{:<34} {:<7} {:<12} Last attempt",
        "Topic", "Score", "Status"
    )?;
    for row in rows {
        let when = row
            .timestamp
            .map_or_else(|| "-".to_owned(), |t| t.format("%Y-%m-%d %H:%M").to_string());
        writeln!(
            out,
            "{:<34} {:<7} {:<12} {}",
            row.topic.title(),
            row.score_display(),
            row.status().as_str(),
            when
        )?;
    }
    writeln!(out)?;
    writeln!(out, "{}", ProgressOverview::from_rows(rows).headline())
}

pub fn result(out: &mut impl Write, topic_title: &str, result: &QuizResult) -> io::Result<()> {
    let marker = match result.letter_grade.tone() {
        GradeTone::Positive => "+",
        GradeTone::Caution => "~",
        GradeTone::Negative => "!",
    };
    writeln!(out, "Quiz Completed! Topic: {topic_title}")?;
    writeln!(out, "{}", result.headline())?;
    writeln!(
        out,
        "[{marker}] Grade: {} - {}",
        result.letter_grade,
        result.letter_grade.remark()
    )?;

    writeln!(out)?;
    writeln!(out, "Review:")?;
    for (i, item) in result.review.iter().enumerate() {
        writeln!(out, "Q{}: {}", i + 1, item.prompt)?;
        writeln!(out, "    Correct answer: {}", item.correct_answer)?;
        let chosen = item.chosen.as_deref().unwrap_or("Not answered");
        let verdict = if item.is_correct() { "ok" } else { "x" };
        writeln!(out, "    Your answer: {chosen} [{verdict}]")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::summary::join;
    use quiz_core::{AnswerReview, LetterGrade};

    fn text(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn progress_table_shows_na_and_overview() {
        let catalog = Catalog::seeded().unwrap();
        let rows = join(&catalog, &[]);
        let out = text(|buf| progress(buf, &rows));

        assert!(out.contains("Pump Types and Fundamentals"));
        assert!(out.contains("N/A"));
        assert!(out.contains("Not Started"));
        assert!(out.ends_with("Overall Progress: 0/6 topics completed (0.0%)\n"));
    }

    #[test]
    fn result_shows_grade_remark() {
        let res = QuizResult {
            correct_count: 4,
            total: 5,
            score_percent: 80.0,
            letter_grade: LetterGrade::B,
            review: vec![
                AnswerReview {
                    prompt: "What does a Venturi tube measure?".into(),
                    correct_answer: "Flow rate".into(),
                    chosen: Some("Flow rate".into()),
                },
                AnswerReview {
                    prompt: "A Bourdon tube is typically used in:".into(),
                    correct_answer: "Pressure gauges".into(),
                    chosen: None,
                },
            ],
        };
        let out = text(|buf| result(buf, "Measurement Devices", &res));
        assert!(out.contains("Score: 80.0% (4/5 correct)"));
        assert!(out.contains("Grade: B - Very Good!"));
        assert!(out.contains("Q1: What does a Venturi tube measure?"));
        assert!(out.contains("    Your answer: Flow rate [ok]"));
        assert!(out.contains("    Correct answer: Pressure gauges\n    Your answer: Not answered [x]"));
    }
}
