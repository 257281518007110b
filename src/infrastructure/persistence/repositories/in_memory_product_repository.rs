use tokio::sync::RwLock;

use crate::application::ports::{ProductRepository, RepositoryError};
use crate::domain::{Embedding, Product, ProductId};

pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }
}

#[async_trait::async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.products.read().await.clone())
    }

    async fn save_embedding(
        &self,
        id: &ProductId,
        embedding: &Embedding,
    ) -> Result<(), RepositoryError> {
        let mut products = self.products.write().await;
        let product = products
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;
        product.embedding = embedding.values.clone();
        Ok(())
    }
}
