use std::path::{Path, PathBuf};

use tokio::sync::RwLock;

use crate::application::ports::{ProductRepository, RepositoryError};
use crate::domain::{Embedding, Product, ProductId};

/// Product catalog kept in a JSON array on disk.
///
/// The whole file is rewritten on every embedding save; writes go through a
/// sibling temp file and a rename.
pub struct JsonFileProductRepository {
    path: PathBuf,
    products: RwLock<Vec<Product>>,
}

impl JsonFileProductRepository {
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, RepositoryError> {
        let path = path.into();
        let raw = tokio::fs::read(&path).await?;
        let products: Vec<Product> = serde_json::from_slice(&raw)?;

        tracing::debug!(path = %path.display(), products = products.len(), "Product catalog loaded");

        Ok(Self {
            path,
            products: RwLock::new(products),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, products: &[Product]) -> Result<(), RepositoryError> {
        let json = serde_json::to_vec_pretty(products)?;
        let staging = self.path.with_extension("json.tmp");
        tokio::fs::write(&staging, json).await?;
        tokio::fs::rename(&staging, &self.path).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl ProductRepository for JsonFileProductRepository {
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

        self.persist(&products).await
    }
}
