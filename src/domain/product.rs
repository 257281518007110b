use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Embedding, RecordMetadata};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A catalog entry as stored by the product repository.
///
/// `embedding` is empty until a backfill run has generated one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(alias = "_id")]
    pub id: ProductId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub embedding: Vec<f32>,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            description,
            price: 0.0,
            category: None,
            brand: None,
            tags: Vec::new(),
            embedding: Vec::new(),
        }
    }

    pub fn has_embedding(&self) -> bool {
        !self.embedding.is_empty()
    }

    pub fn stored_embedding(&self) -> Option<Embedding> {
        self.has_embedding()
            .then(|| Embedding::new(self.embedding.clone()))
    }

    pub fn embedding_text(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    pub fn metadata(&self) -> RecordMetadata {
        let mut metadata = RecordMetadata::new();
        metadata.insert("name".to_string(), Value::String(self.name.clone()));
        metadata.insert(
            "description".to_string(),
            self.description
                .clone()
                .map(Value::String)
                .unwrap_or(Value::Null),
        );
        metadata
    }
}
