mod embedder;
mod product_repository;
mod repository_error;
mod scored_record;
mod vector_store;
mod vector_store_error;

pub use embedder::{Embedder, EmbedderError};
pub use product_repository::ProductRepository;
pub use repository_error::RepositoryError;
pub use scored_record::ScoredRecord;
pub use vector_store::VectorStore;
pub use vector_store_error::VectorStoreError;
