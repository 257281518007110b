mod embedding;
mod product;
mod recommendation;
mod vector_record;

pub use embedding::{EMBEDDING_DIM, Embedding};
pub use product::{Product, ProductId};
pub use recommendation::Recommendation;
pub use vector_record::{RecordMetadata, VectorRecord};
