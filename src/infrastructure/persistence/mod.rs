mod repositories;
mod vector_store;

pub use repositories::{InMemoryProductRepository, JsonFileProductRepository};
pub use vector_store::InMemoryVectorStore;
