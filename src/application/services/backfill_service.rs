use std::sync::Arc;

use crate::application::ports::{
    Embedder, EmbedderError, ProductRepository, RepositoryError, VectorStore, VectorStoreError,
};
use crate::domain::VectorRecord;

/// Populates the vector store from the product catalog.
///
/// Products that already carry a stored embedding are skipped, never
/// refreshed, so repeated runs over an unchanged catalog insert nothing.
pub struct BackfillService<R, V>
where
    R: ProductRepository,
    V: VectorStore,
{
    embedder: Arc<dyn Embedder>,
    repository: Arc<R>,
    vector_store: Arc<V>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BackfillReport {
    pub total: usize,
    pub generated: usize,
    pub skipped: usize,
}

impl<R, V> BackfillService<R, V>
where
    R: ProductRepository,
    V: VectorStore,
{
    pub fn new(embedder: Arc<dyn Embedder>, repository: Arc<R>, vector_store: Arc<V>) -> Self {
        Self {
            embedder,
            repository,
            vector_store,
        }
    }

    pub async fn run(&self) -> Result<BackfillReport, BackfillError> {
        let products = self.repository.list_all().await?;
        let mut report = BackfillReport {
            total: products.len(),
            ..BackfillReport::default()
        };

        let (embedded, pending): (Vec<_>, Vec<_>) =
            products.into_iter().partition(|p| p.has_embedding());

        for product in &embedded {
            tracing::info!(product = %product.name, "Embedding already exists for product");
        }
        report.skipped = embedded.len();

        if !pending.is_empty() {
            let embeddings = {
                let texts: Vec<&str> = pending.iter().map(|p| p.embedding_text()).collect();
                self.embedder.embed_batch(&texts).await?
            };
            if embeddings.len() != pending.len() {
                return Err(EmbedderError::InvalidResponse(format!(
                    "expected {} embeddings, got {}",
                    pending.len(),
                    embeddings.len()
                ))
                .into());
            }

            for (product, embedding) in pending.into_iter().zip(embeddings) {
                self.repository
                    .save_embedding(&product.id, &embedding)
                    .await?;

                let record = VectorRecord::new(product.id.as_str(), embedding, product.metadata());
                self.vector_store.insert(record).await?;

                tracing::info!(product = %product.name, id = %product.id, "Generated embedding for product");
                report.generated += 1;
            }
        }

        tracing::info!(
            total = report.total,
            generated = report.generated,
            skipped = report.skipped,
            "Backfill finished"
        );

        Ok(report)
    }

    /// Inserts embeddings already persisted on products, without regenerating them.
    pub async fn load_stored(&self) -> Result<usize, BackfillError> {
        let products = self.repository.list_all().await?;
        let mut loaded = 0;

        for product in products {
            let Some(embedding) = product.stored_embedding() else {
                continue;
            };
            let record = VectorRecord::new(product.id.as_str(), embedding, product.metadata());
            self.vector_store.insert(record).await?;
            loaded += 1;
        }

        tracing::debug!(loaded, "Stored embeddings loaded into vector store");
        Ok(loaded)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BackfillError {
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
    #[error("embedding: {0}")]
    Embedding(#[from] EmbedderError),
    #[error("storage: {0}")]
    Storage(#[from] VectorStoreError),
}
