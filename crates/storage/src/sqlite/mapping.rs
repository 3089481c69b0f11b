use quiz_core::model::{
    ProgressRecord, Question, QuestionId, QuestionKind, Topic, TopicId, parse_competency_tags,
};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::repository::StorageError;

pub(crate) fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

fn i64_to_u64(field: &'static str, v: i64) -> Result<u64, StorageError> {
    u64::try_from(v).map_err(|_| StorageError::Serialization(format!("{field} sign overflow")))
}

fn i64_to_u32(field: &'static str, v: i64) -> Result<u32, StorageError> {
    u32::try_from(v).map_err(|_| StorageError::Serialization(format!("invalid {field}: {v}")))
}

pub(crate) fn topic_id_from_i64(v: i64) -> Result<TopicId, StorageError> {
    Ok(TopicId::new(i64_to_u64("topic_id", v)?))
}

pub(crate) fn question_id_from_i64(v: i64) -> Result<QuestionId, StorageError> {
    Ok(QuestionId::new(i64_to_u64("question_id", v)?))
}

pub(crate) fn topic_id_to_i64(id: TopicId) -> Result<i64, StorageError> {
    i64::try_from(id.value()).map_err(|_| StorageError::Serialization("topic_id overflow".into()))
}

pub(crate) fn question_id_to_i64(id: QuestionId) -> Result<i64, StorageError> {
    i64::try_from(id.value())
        .map_err(|_| StorageError::Serialization("question_id overflow".into()))
}

/// Options are stored as a JSON array of strings.
pub(crate) fn encode_options(options: &[String]) -> Result<String, StorageError> {
    serde_json::to_string(options).map_err(ser)
}

pub(crate) fn decode_options(raw: &str) -> Result<Vec<String>, StorageError> {
    serde_json::from_str(raw).map_err(ser)
}

pub(crate) fn map_topic_row(row: &SqliteRow) -> Result<Topic, StorageError> {
    Topic::new(
        topic_id_from_i64(row.try_get::<i64, _>("id").map_err(ser)?)?,
        i64_to_u32("week", row.try_get::<i64, _>("week").map_err(ser)?)?,
        i64_to_u32("day", row.try_get::<i64, _>("day").map_err(ser)?)?,
        row.try_get::<String, _>("title").map_err(ser)?,
        row.try_get::<String, _>("description").map_err(ser)?,
        parse_competency_tags(&row.try_get::<String, _>("competency_tags").map_err(ser)?),
        row.try_get::<String, _>("content").map_err(ser)?,
    )
    .map_err(ser)
}

pub(crate) fn map_question_row(row: &SqliteRow) -> Result<Question, StorageError> {
    let options = decode_options(&row.try_get::<String, _>("options").map_err(ser)?)?;
    let kind = QuestionKind::parse(&row.try_get::<String, _>("kind").map_err(ser)?).map_err(ser)?;

    Question::new(
        question_id_from_i64(row.try_get::<i64, _>("id").map_err(ser)?)?,
        topic_id_from_i64(row.try_get::<i64, _>("topic_id").map_err(ser)?)?,
        row.try_get::<String, _>("prompt").map_err(ser)?,
        options,
        row.try_get::<String, _>("correct_answer").map_err(ser)?,
        kind,
    )
    .map_err(ser)
}

pub(crate) fn map_progress_row(row: &SqliteRow) -> Result<ProgressRecord, StorageError> {
    ProgressRecord::new(
        topic_id_from_i64(row.try_get::<i64, _>("topic_id").map_err(ser)?)?,
        row.try_get::<f64, _>("score").map_err(ser)?,
        row.try_get::<i64, _>("completed").map_err(ser)? != 0,
        row.try_get("timestamp").map_err(ser)?,
    )
    .map_err(ser)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_survive_json_encoding() {
        let options = vec!["P1/P2".to_owned(), "Bernoulli's principle".to_owned()];
        let raw = encode_options(&options).unwrap();
        assert_eq!(raw, r#"["P1/P2","Bernoulli's principle"]"#);
        assert_eq!(decode_options(&raw).unwrap(), options);
    }

    #[test]
    fn malformed_options_are_serialization_errors() {
        let err = decode_options("not json").unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
    }

    #[test]
    fn negative_ids_are_rejected() {
        assert!(topic_id_from_i64(-1).is_err());
        assert_eq!(topic_id_from_i64(4).unwrap(), TopicId::new(4));
    }
}
