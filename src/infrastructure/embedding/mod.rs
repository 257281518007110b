mod random_embedder;

pub use random_embedder::RandomEmbedder;
