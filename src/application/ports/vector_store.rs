use async_trait::async_trait;

use super::{ScoredRecord, VectorStoreError};
use crate::domain::{Embedding, VectorRecord};

#[async_trait]
pub trait VectorStore: Send + Sync {
    async fn insert(&self, record: VectorRecord) -> Result<(), VectorStoreError>;

    /// Returns at most `top_k` records ordered by descending cosine similarity.
    async fn query(
        &self,
        embedding: &Embedding,
        top_k: usize,
    ) -> Result<Vec<ScoredRecord>, VectorStoreError>;

    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
