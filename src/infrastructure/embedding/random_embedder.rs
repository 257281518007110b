use rand::Rng;

use crate::application::ports::{Embedder, EmbedderError};
use crate::domain::{EMBEDDING_DIM, Embedding};

/// Placeholder embedder: uniform noise in `[0, 1)`, independent of the input text.
pub struct RandomEmbedder {
    dimensions: usize,
}

impl RandomEmbedder {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    fn sample(&self) -> Embedding {
        let mut rng = rand::thread_rng();
        Embedding::new((0..self.dimensions).map(|_| rng.r#gen::<f32>()).collect())
    }
}

impl Default for RandomEmbedder {
    fn default() -> Self {
        Self::new(EMBEDDING_DIM)
    }
}

#[async_trait::async_trait]
impl Embedder for RandomEmbedder {
    async fn embed(&self, _text: &str) -> Result<Embedding, EmbedderError> {
        Ok(self.sample())
    }

    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Embedding>, EmbedderError> {
        Ok(texts.iter().map(|_| self.sample()).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}
