use std::sync::Arc;

use chrono::Duration;
use quiz_core::Catalog;
use quiz_core::model::{ProgressRecord, TopicId};
use quiz_core::time::fixed_now;
use storage::repository::{CatalogRepository, ProgressRepository, Storage, StorageError};
use storage::sqlite::SqliteRepository;

async fn seeded_repo(name: &str) -> SqliteRepository {
    let url = format!("sqlite:file:{name}?mode=memory&cache=shared");
    let repo = SqliteRepository::connect(&url).await.expect("connect");
    repo.migrate().await.expect("migrate");
    repo.seed_catalog(&Catalog::seeded().unwrap())
        .await
        .expect("seed");
    repo
}

#[tokio::test]
async fn sqlite_catalog_round_trips_seed_data() {
    let repo = seeded_repo("memdb_catalog").await;
    let seeded = Catalog::seeded().unwrap();

    let topics = repo.list_topics().await.unwrap();
    let questions = repo.list_questions().await.unwrap();
    let restored = Catalog::new(topics, questions).unwrap();

    assert_eq!(restored, seeded);
    assert_eq!(repo.topic_count().await.unwrap(), 6);

    let perf = restored.topic(TopicId::new(6)).unwrap();
    assert_eq!(perf.competency_tags().len(), 5);
    let first = &restored.questions(TopicId::new(6)).unwrap()[0];
    assert_eq!(first.correct_answer(), "(Output Power / Input Power) × 100%");
}

#[tokio::test]
async fn sqlite_reseeding_is_a_conflict() {
    let repo = seeded_repo("memdb_reseed").await;
    let err = repo
        .seed_catalog(&Catalog::seeded().unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::Conflict));
    assert_eq!(repo.list_questions().await.unwrap().len(), 30);
}

#[tokio::test]
async fn sqlite_upsert_keeps_one_row_per_topic() {
    let repo = seeded_repo("memdb_upsert").await;
    let topic = TopicId::new(4);

    let first = ProgressRecord::new(topic, 40.0, true, fixed_now()).unwrap();
    let later = fixed_now() + Duration::minutes(5);
    let second = ProgressRecord::new(topic, 100.0, true, later).unwrap();

    repo.upsert_progress(&first).await.unwrap();
    repo.upsert_progress(&second).await.unwrap();

    let all = repo.list_progress().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], second);
    assert_eq!(repo.get_progress(topic).await.unwrap(), Some(second));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn sqlite_concurrent_upserts_leave_one_record() {
    let repo = Arc::new(seeded_repo("memdb_concurrent").await);
    let topic = TopicId::new(2);

    let handles: Vec<_> = (0..40u32)
        .map(|i| {
            let repo = Arc::clone(&repo);
            tokio::spawn(async move {
                let at = fixed_now() + Duration::nanoseconds(i64::from(i) * 1_001);
                let record = ProgressRecord::new(topic, f64::from(i), true, at).unwrap();
                repo.upsert_progress(&record).await.map(|()| record)
            })
        })
        .collect();

    let mut written = Vec::new();
    for handle in handles {
        written.push(handle.await.unwrap().unwrap());
    }

    let all = repo.list_progress().await.unwrap();
    assert_eq!(all.len(), 1);
    assert!(written.contains(&all[0]));
}

#[tokio::test]
async fn sqlite_progress_for_unknown_topic_is_rejected() {
    let repo = seeded_repo("memdb_fk").await;
    let record = ProgressRecord::new(TopicId::new(99), 50.0, true, fixed_now()).unwrap();

    let err = repo.upsert_progress(&record).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound));
    assert!(repo.list_progress().await.unwrap().is_empty());
}

#[tokio::test]
async fn sqlite_migrations_are_idempotent() {
    let repo = seeded_repo("memdb_migrate_twice").await;
    repo.migrate().await.expect("second migrate");
    assert_eq!(repo.topic_count().await.unwrap(), 6);
}

#[tokio::test]
async fn storage_sqlite_wires_both_repositories() {
    let storage = Storage::sqlite("sqlite:file:memdb_storage?mode=memory&cache=shared")
        .await
        .expect("storage");
    assert_eq!(storage.catalog.topic_count().await.unwrap(), 0);

    storage
        .catalog
        .seed_catalog(&Catalog::seeded().unwrap())
        .await
        .unwrap();
    let record = ProgressRecord::new(TopicId::new(1), 80.0, true, fixed_now()).unwrap();
    storage.progress.upsert_progress(&record).await.unwrap();

    assert_eq!(storage.progress.list_progress().await.unwrap(), vec![record]);
}
