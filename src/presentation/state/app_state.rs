use std::sync::Arc;

use crate::application::ports::VectorStore;
use crate::application::services::RecommendationService;

pub struct AppState<V>
where
    V: VectorStore,
{
    pub recommendation_service: Arc<RecommendationService<V>>,
    pub vector_store: Arc<V>,
}

impl<V> Clone for AppState<V>
where
    V: VectorStore,
{
    fn clone(&self) -> Self {
        Self {
            recommendation_service: Arc::clone(&self.recommendation_service),
            vector_store: Arc::clone(&self.vector_store),
        }
    }
}
