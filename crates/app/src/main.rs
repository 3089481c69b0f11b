use std::fmt;
use std::io::Write;

use quiz_core::model::TopicId;
use services::{AppServices, Clock};
use tracing_subscriber::EnvFilter;

mod render;
mod quiz_loop;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnknownCommand(String),
    InvalidDbUrl { raw: String },
    MissingTopicId { command: &'static str },
    InvalidTopicId { raw: String },
    MissingQuestion,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::MissingTopicId { command } => write!(f, "{command} requires a topic id"),
            ArgsError::InvalidTopicId { raw } => write!(f, "invalid topic id: {raw}"),
            ArgsError::MissingQuestion => write!(f, "ask requires a question"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Topics,
    Quiz(TopicId),
    Ask {
        topic: Option<String>,
        question: String,
    },
    Progress,
    Samples(TopicId),
}

#[derive(Debug)]
struct Args {
    db_url: String,
    command: Command,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--db <sqlite_url>] <command>");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  topics                          List course topics (default)");
    eprintln!("  quiz <topic-id>                 Take the quiz for a topic");
    eprintln!("  ask [--topic <title>] <text>    Ask the learning assistant");
    eprintln!("  progress                        Show latest score per topic");
    eprintln!("  samples <topic-id>              Show sample questions for a topic");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite:dev.sqlite3");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_DB_URL, RUST_LOG");
}

fn parse_topic_id(
    positional: &mut impl Iterator<Item = String>,
    command: &'static str,
) -> Result<TopicId, ArgsError> {
    let raw = positional
        .next()
        .ok_or(ArgsError::MissingTopicId { command })?;
    raw.parse()
        .map_err(|_| ArgsError::InvalidTopicId { raw: raw.clone() })
}

impl Args {
    fn parse(argv: impl IntoIterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("QUIZ_DB_URL")
            .ok()
            .map_or_else(|| normalize_sqlite_url("sqlite:dev.sqlite3".into()), normalize_sqlite_url);
        let mut topic_hint: Option<String> = None;
        let mut positional: Vec<String> = Vec::new();

        let mut args = argv.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(&mut args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--topic" => {
                    topic_hint = Some(require_value(&mut args, "--topic")?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                flag if flag.starts_with("--") => return Err(ArgsError::UnknownArg(arg)),
                _ => positional.push(arg),
            }
        }

        let mut positional = positional.into_iter();
        let command = match positional.next().as_deref() {
            None | Some("topics") => Command::Topics,
            Some("quiz") => Command::Quiz(parse_topic_id(&mut positional, "quiz")?),
            Some("samples") => Command::Samples(parse_topic_id(&mut positional, "samples")?),
            Some("progress") => Command::Progress,
            Some("ask") => {
                let question = positional.by_ref().collect::<Vec<_>>().join(" ");
                if question.trim().is_empty() {
                    return Err(ArgsError::MissingQuestion);
                }
                Command::Ask {
                    topic: topic_hint.take(),
                    question,
                }
            }
            Some(other) => return Err(ArgsError::UnknownCommand(other.to_owned())),
        };

        if let Some(extra) = positional.next() {
            return Err(ArgsError::UnknownArg(extra));
        }
        if topic_hint.is_some() {
            return Err(ArgsError::UnknownArg("--topic".into()));
        }

        Ok(Self { db_url, command })
    }
}

/// Shared-cache name used for `sqlite::memory:` so every pooled connection sees one database.
const SHARED_MEMORY_URL: &str = "sqlite:file:quiz_memdb?mode=memory&cache=shared";

fn is_memory_url(db_url: &str) -> bool {
    db_url == "sqlite::memory:" || db_url.contains("mode=memory")
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" {
        return SHARED_MEMORY_URL.to_owned();
    }
    if is_memory_url(&raw) || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if is_memory_url(db_url) {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse(std::env::args().skip(1)).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // Open, migrate and seed at startup so services only ever see a loaded catalog.
    prepare_sqlite_file(&args.db_url)?;
    let app = AppServices::new_sqlite(&args.db_url, Clock::system()).await?;
    tracing::debug!(db = %args.db_url, "services ready");

    let mut out = std::io::stdout().lock();
    match args.command {
        Command::Topics => render::topics(&mut out, &app.catalog())?,
        Command::Samples(topic_id) => {
            let assistant = app.assistant();
            let prompts = assistant.sample_questions(topic_id)?;
            render::samples(&mut out, &prompts)?;
        }
        Command::Ask { topic, question } => {
            let assistant = app.assistant();
            let reply = assistant.ask(&question, topic.as_deref())?;
            render::reply(&mut out, &reply)?;
            let samples = topic.as_deref().and_then(|t| assistant.samples_for_hint(t));
            if let Some(prompts) = samples {
                writeln!(out)?;
                render::samples(&mut out, &prompts)?;
            }
        }
        Command::Progress => {
            let rows = app.progress().summary().await?;
            render::progress(&mut out, &rows)?;
        }
        Command::Quiz(topic_id) => {
            drop(out);
            let input = tokio::io::BufReader::new(tokio::io::stdin());
            quiz_loop::run(&app.quiz(), topic_id, input, std::io::stdout()).await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
