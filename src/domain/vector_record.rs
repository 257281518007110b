use serde_json::{Map, Value};

use super::Embedding;

pub type RecordMetadata = Map<String, Value>;

#[derive(Debug, Clone, PartialEq)]
pub struct VectorRecord {
    pub id: String,
    pub embedding: Embedding,
    pub metadata: RecordMetadata,
}

impl VectorRecord {
    pub fn new(id: impl Into<String>, embedding: Embedding, metadata: RecordMetadata) -> Self {
        Self {
            id: id.into(),
            embedding,
            metadata,
        }
    }

    pub fn metadata_str(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).and_then(Value::as_str)
    }
}
