use std::sync::Arc;

use quiz_core::Catalog;
use storage::repository::CatalogRepository;

use crate::error::CatalogServiceError;

/// Seeds the catalog store on first use and loads it into memory.
#[derive(Clone)]
pub struct CatalogService {
    catalog: Arc<dyn CatalogRepository>,
}

impl CatalogService {
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog }
    }

    /// Write the built-in course data if the store holds no topics.
    ///
    /// Returns `true` when seeding happened.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::Storage` if the store cannot be read or written.
    pub async fn ensure_seeded(&self) -> Result<bool, CatalogServiceError> {
        if self.catalog.topic_count().await? > 0 {
            return Ok(false);
        }
        let seed = Catalog::seeded()?;
        self.catalog.seed_catalog(&seed).await?;
        tracing::info!(topics = seed.topic_count(), "seeded empty catalog store");
        Ok(true)
    }

    /// Seed if needed, then materialise the stored topics and questions.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::Storage` on repository failures, or
    /// `CatalogServiceError::Catalog` if the stored rows do not form a valid catalog.
    pub async fn load(&self) -> Result<Catalog, CatalogServiceError> {
        self.ensure_seeded().await?;
        let topics = self.catalog.list_topics().await?;
        let questions = self.catalog.list_questions().await?;
        let catalog = Catalog::new(topics, questions)?;
        tracing::debug!(topics = catalog.topic_count(), "loaded catalog");
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::repository::InMemoryRepository;

    #[tokio::test]
    async fn load_seeds_once() {
        let repo = InMemoryRepository::new();
        let service = CatalogService::new(Arc::new(repo.clone()));

        let first = service.load().await.unwrap();
        assert_eq!(first.topic_count(), 6);
        assert!(!service.ensure_seeded().await.unwrap());

        let second = service.load().await.unwrap();
        assert_eq!(first, second);
        assert_eq!(repo.list_questions().await.unwrap().len(), 30);
    }
}
