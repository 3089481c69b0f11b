use std::sync::Arc;

use quiz_core::Catalog;
use storage::repository::Storage;

use crate::assistant_service::AssistantService;
use crate::catalog_service::CatalogService;
use crate::error::AppServicesError;
use crate::progress_service::ProgressService;
use crate::quiz_service::QuizService;
use crate::Clock;

/// Assembles app-facing services over one loaded catalog.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<Catalog>,
    quiz: Arc<QuizService>,
    progress: Arc<ProgressService>,
    assistant: Arc<AssistantService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage, seeding the catalog on first run.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization or catalog loading fails.
    pub async fn new_sqlite(db_url: &str, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::from_storage(storage, clock).await
    }

    /// Build services over fresh in-memory repositories.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the built-in catalog cannot be loaded.
    pub async fn in_memory(clock: Clock) -> Result<Self, AppServicesError> {
        Self::from_storage(Storage::in_memory(), clock).await
    }

    /// Build services over already-constructed repositories.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the catalog cannot be seeded or loaded.
    pub async fn from_storage(storage: Storage, clock: Clock) -> Result<Self, AppServicesError> {
        let catalog = Arc::new(
            CatalogService::new(Arc::clone(&storage.catalog))
                .load()
                .await?,
        );

        let quiz = Arc::new(QuizService::new(
            clock,
            Arc::clone(&catalog),
            Arc::clone(&storage.progress),
        ));
        let progress = Arc::new(ProgressService::new(
            clock,
            Arc::clone(&catalog),
            Arc::clone(&storage.progress),
        ));
        let assistant = Arc::new(AssistantService::new(Arc::clone(&catalog)));

        Ok(Self {
            catalog,
            quiz,
            progress,
            assistant,
        })
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn assistant(&self) -> Arc<AssistantService> {
        Arc::clone(&self.assistant)
    }
}
