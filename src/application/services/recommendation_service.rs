use std::sync::Arc;

use crate::application::ports::{Embedder, EmbedderError, VectorStore, VectorStoreError};
use crate::domain::Recommendation;

pub const DEFAULT_TOP_K: usize = 5;

pub struct RecommendationService<V>
where
    V: VectorStore,
{
    embedder: Arc<dyn Embedder>,
    vector_store: Arc<V>,
    default_top_k: usize,
}

impl<V> RecommendationService<V>
where
    V: VectorStore,
{
    pub fn new(embedder: Arc<dyn Embedder>, vector_store: Arc<V>, default_top_k: usize) -> Self {
        Self {
            embedder,
            vector_store,
            default_top_k,
        }
    }

    /// Ranks stored records against free-text `query`.
    ///
    /// `top_k` falls back to the configured default when absent. A missing,
    /// empty or whitespace-only query is rejected before the embedder runs.
    pub async fn recommend(
        &self,
        query: Option<&str>,
        top_k: Option<usize>,
    ) -> Result<Vec<Recommendation>, RecommendationError> {
        let query = query
            .filter(|q| !q.trim().is_empty())
            .ok_or(RecommendationError::QueryRequired)?;
        let top_k = top_k.unwrap_or(self.default_top_k);

        let query_embedding = self
            .embedder
            .embed(query)
            .await
            .map_err(RecommendationError::Embedding)?;

        let results = self
            .vector_store
            .query(&query_embedding, top_k)
            .await
            .map_err(RecommendationError::Search)?;

        tracing::debug!(
            top_k,
            matches = results.len(),
            best = results.first().map(|r| r.similarity),
            "Vector store queried"
        );

        Ok(results
            .into_iter()
            .map(|scored| Recommendation::from(scored.record))
            .collect())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RecommendationError {
    #[error("query is required")]
    QueryRequired,
    #[error("embedding: {0}")]
    Embedding(EmbedderError),
    #[error("search: {0}")]
    Search(#[from] VectorStoreError),
}

impl RecommendationError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::QueryRequired)
    }
}
