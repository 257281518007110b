use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Embedding, Product, ProductId};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Product>, RepositoryError>;

    async fn save_embedding(
        &self,
        id: &ProductId,
        embedding: &Embedding,
    ) -> Result<(), RepositoryError>;
}
