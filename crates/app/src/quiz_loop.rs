use std::error::Error;
use std::io::Write;

use quiz_core::model::TopicId;
use quiz_core::{QuizError, QuizSession};
use services::{QuizService, QuizServiceError};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Next,
    Previous,
    Choose(usize),
    Submit,
    Quit,
    Help,
}

fn parse_action(line: &str) -> Action {
    match line.trim().to_lowercase().as_str() {
        "n" | "next" => Action::Next,
        "p" | "prev" | "previous" => Action::Previous,
        "s" | "submit" => Action::Submit,
        "q" | "quit" => Action::Quit,
        other => other
            .parse::<usize>()
            .ok()
            .filter(|n| *n > 0)
            .map_or(Action::Help, Action::Choose),
    }
}

fn show(out: &mut impl Write, session: &QuizSession) -> std::io::Result<()> {
    let (Some(position), Some(question)) = (session.position(), session.current_question())
    else {
        return Ok(());
    };
    let chosen = session.current_answer();

    writeln!(out)?;
    writeln!(
        out,
        "Question {} of {} ({} answered)",
        position.index + 1,
        position.total,
        session.answered_count()
    )?;
    writeln!(out, "{}", question.prompt())?;
    for (i, option) in question.options().iter().enumerate() {
        let mark = if chosen == Some(option.as_str()) { "*" } else { " " };
        writeln!(out, "  [{mark}] {}. {option}", i + 1)?;
    }
    Ok(())
}

/// Drives one attempt from line commands until it is submitted or abandoned.
pub async fn run<R, W>(
    quiz: &QuizService,
    topic_id: TopicId,
    input: R,
    mut out: W,
) -> Result<(), Box<dyn Error>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut session = quiz.start(topic_id)?;
    let topic = quiz.catalog().topic(topic_id)?;
    let title = topic.title().to_owned();

    writeln!(out, "{title}")?;
    writeln!(out, "Topic Description: {}", topic.description())?;
    writeln!(out, "Commands: n (next), p (previous), 1-4 (choose), s (submit), q (quit)")?;
    show(&mut out, &session)?;

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };

        match parse_action(&line) {
            Action::Next => {
                session.go_to_next()?;
                show(&mut out, &session)?;
            }
            Action::Previous => {
                session.go_to_previous()?;
                show(&mut out, &session)?;
            }
            Action::Choose(n) => {
                let option = session
                    .current_question()
                    .and_then(|q| q.options().get(n - 1))
                    .cloned();
                match option {
                    Some(option) => {
                        session.record_answer(option)?;
                        show(&mut out, &session)?;
                    }
                    None => writeln!(out, "No option {n} for this question.")?,
                }
            }
            Action::Submit => match quiz.submit(&mut session).await {
                Ok(result) => {
                    writeln!(out)?;
                    render::result(&mut out, &title, &result)?;
                    return Ok(());
                }
                Err(QuizServiceError::Quiz(QuizError::NothingAnswered)) => {
                    writeln!(out, "Please answer at least one question!")?;
                }
                Err(err) => return Err(err.into()),
            },
            Action::Quit => break,
            Action::Help => writeln!(
                out,
                "Commands: n (next), p (previous), 1-4 (choose), s (submit), q (quit)"
            )?,
        }
    }

    writeln!(out, "Quiz abandoned; nothing was recorded.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::time::fixed_now;
    use services::{AppServices, Clock};

    async fn drive(script: &str) -> (AppServices, String) {
        let app = AppServices::in_memory(Clock::fixed(fixed_now()))
            .await
            .unwrap();
        let mut out = Vec::new();
        run(&app.quiz(), TopicId::new(3), script.as_bytes(), &mut out)
            .await
            .unwrap();
        (app, String::from_utf8(out).unwrap())
    }

    #[test]
    fn actions_parse() {
        assert_eq!(parse_action("N"), Action::Next);
        assert_eq!(parse_action(" 3 "), Action::Choose(3));
        assert_eq!(parse_action("0"), Action::Help);
        assert_eq!(parse_action("submit"), Action::Submit);
    }

    #[tokio::test]
    async fn scripted_attempt_is_recorded() {
        let (app, out) = drive("3\nn\n2\np\ns\n").await;

        assert!(out.contains("Question 2 of 5"));
        assert!(out.contains("[*] 3. Flow rate"));
        assert!(out.contains("Score: 40.0% (2/5 correct)"));
        assert!(out.contains("Grade: F - Needs Improvement"));

        let latest = app.progress().latest(TopicId::new(3)).await.unwrap();
        assert_eq!(latest.map(|r| r.score()), Some(40.0));
    }

    #[tokio::test]
    async fn submitted_attempt_reviews_each_question() {
        let (_app, out) = drive("3\nn\n1\ns\n").await;

        assert!(out.contains("Topic Description: "));
        assert!(out.contains("Review:"));
        assert!(out.contains("Q1: What does a Venturi tube measure?"));
        assert!(out.contains("Your answer: Flow rate [ok]"));
        assert!(out.contains(
            "Q2: Which device converts pressure into an electrical signal?\n    \
             Correct answer: Pressure Transducer\n    Your answer: Pressure Gauge [x]"
        ));
        assert!(out.contains("Q5: A Bourdon tube is typically used in:"));
        assert!(out.contains("Your answer: Not answered [x]"));
    }

    #[tokio::test]
    async fn empty_submit_warns_and_quit_records_nothing() {
        let (app, out) = drive("s\n9\nq\n").await;

        assert!(out.contains("Please answer at least one question!"));
        assert!(out.contains("No option 9 for this question."));
        assert!(out.contains("Quiz abandoned"));
        assert!(app.progress().latest(TopicId::new(3)).await.unwrap().is_none());
    }
}
