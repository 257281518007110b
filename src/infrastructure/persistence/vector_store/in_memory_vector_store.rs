use std::cmp::Ordering;

use tokio::sync::RwLock;

use crate::application::ports::{ScoredRecord, VectorStore, VectorStoreError};
use crate::domain::{Embedding, VectorRecord};

/// Append-only record list scanned linearly on every query.
///
/// Every stored and queried vector must have exactly `dimensions` finite
/// components.
pub struct InMemoryVectorStore {
    dimensions: usize,
    records: RwLock<Vec<VectorRecord>>,
}

impl InMemoryVectorStore {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions,
            records: RwLock::new(Vec::new()),
        }
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Snapshot in insertion order.
    pub async fn records(&self) -> Vec<VectorRecord> {
        self.records.read().await.clone()
    }

    fn validate(&self, embedding: &Embedding) -> Result<(), VectorStoreError> {
        if embedding.dimensions() != self.dimensions {
            return Err(VectorStoreError::DimensionMismatch {
                expected: self.dimensions,
                actual: embedding.dimensions(),
            });
        }
        if !embedding.is_finite() {
            return Err(VectorStoreError::NonFiniteEmbedding);
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl VectorStore for InMemoryVectorStore {
    async fn insert(&self, record: VectorRecord) -> Result<(), VectorStoreError> {
        self.validate(&record.embedding)?;

        let mut records = self.records.write().await;
        tracing::trace!(id = %record.id, position = records.len(), "Inserting vector record");
        records.push(record);
        Ok(())
    }

    async fn query(
        &self,
        embedding: &Embedding,
        top_k: usize,
    ) -> Result<Vec<ScoredRecord>, VectorStoreError> {
        self.validate(embedding)?;
        if top_k == 0 {
            return Ok(Vec::new());
        }

        let records = self.records.read().await;

        let mut scores: Vec<(usize, f32)> = records
            .iter()
            .enumerate()
            .map(|(index, record)| (index, embedding.cosine_similarity(&record.embedding)))
            .collect();

        // stable: equal scores keep insertion order
        scores.sort_by(|a, b| descending_nan_last(a.1, b.1));

        Ok(scores
            .into_iter()
            .take(top_k)
            .map(|(index, similarity)| ScoredRecord {
                record: records[index].clone(),
                similarity,
            })
            .collect())
    }

    async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

fn descending_nan_last(a: f32, b: f32) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
