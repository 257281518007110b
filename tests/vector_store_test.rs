use std::collections::HashSet;
use std::sync::Arc;

use serde_json::json;
use storefront::application::ports::{VectorStore, VectorStoreError};
use storefront::domain::{Embedding, RecordMetadata, VectorRecord};
use storefront::infrastructure::persistence::InMemoryVectorStore;

fn metadata(name: &str) -> RecordMetadata {
    let mut metadata = RecordMetadata::new();
    metadata.insert("name".to_string(), json!(name));
    metadata
}

fn record(id: &str, values: Vec<f32>) -> VectorRecord {
    VectorRecord::new(id, Embedding::new(values), metadata(id))
}

#[tokio::test]
async fn given_empty_store_when_querying_then_returns_empty() {
    let store = InMemoryVectorStore::new(2);

    let results = store.query(&Embedding::new(vec![1.0, 0.0]), 5).await.unwrap();

    assert!(results.is_empty());
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn given_three_records_when_querying_top_two_then_returns_closest_in_order() {
    let store = InMemoryVectorStore::new(2);
    store.insert(record("A", vec![1.0, 0.0])).await.unwrap();
    store.insert(record("B", vec![0.0, 1.0])).await.unwrap();
    store.insert(record("C", vec![0.9, 0.1])).await.unwrap();

    let results = store.query(&Embedding::new(vec![1.0, 0.0]), 2).await.unwrap();

    let ids: Vec<&str> = results.iter().map(|r| r.record.id.as_str()).collect();
    assert_eq!(ids, vec!["A", "C"]);
    assert!((results[0].similarity - 1.0).abs() < 1e-6);
    assert!((results[1].similarity - 0.9939).abs() < 1e-3);
}

#[tokio::test]
async fn given_top_k_larger_than_store_when_querying_then_returns_every_record_once() {
    let store = InMemoryVectorStore::new(3);
    for (i, values) in [[0.1, 0.2, 0.3], [0.9, 0.1, 0.0], [0.4, 0.4, 0.4], [0.0, 0.0, 1.0]]
        .into_iter()
        .enumerate()
    {
        store
            .insert(record(&format!("r{i}"), values.to_vec()))
            .await
            .unwrap();
    }

    let results = store
        .query(&Embedding::new(vec![0.5, 0.5, 0.5]), 10)
        .await
        .unwrap();

    assert_eq!(results.len(), 4);
    let ids: HashSet<&str> = results.iter().map(|r| r.record.id.as_str()).collect();
    assert_eq!(ids.len(), 4);
    assert!(results.iter().all(|r| r.similarity.is_finite()));
    assert!(
        results
            .windows(2)
            .all(|pair| pair[0].similarity >= pair[1].similarity)
    );
}

#[tokio::test]
async fn given_record_when_queried_with_own_embedding_then_similarity_is_one() {
    let store = InMemoryVectorStore::new(4);
    let values = vec![0.25, 0.5, 0.75, 0.1];
    store.insert(record("self", values.clone())).await.unwrap();

    let results = store.query(&Embedding::new(values), 1).await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].record.id, "self");
    assert!((results[0].similarity - 1.0).abs() < 1e-5);
}

#[tokio::test]
async fn given_duplicate_ids_when_inserting_then_both_records_are_kept() {
    let store = InMemoryVectorStore::new(2);
    store.insert(record("dup", vec![1.0, 0.0])).await.unwrap();
    store.insert(record("dup", vec![0.0, 1.0])).await.unwrap();

    let results = store.query(&Embedding::new(vec![1.0, 1.0]), 5).await.unwrap();

    assert_eq!(store.len().await, 2);
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.record.id == "dup"));
}

#[tokio::test]
async fn given_equal_scores_when_querying_then_insertion_order_is_kept() {
    let store = InMemoryVectorStore::new(2);
    store.insert(record("first", vec![1.0, 0.0])).await.unwrap();
    store.insert(record("second", vec![2.0, 0.0])).await.unwrap();
    store.insert(record("third", vec![3.0, 0.0])).await.unwrap();

    let results = store.query(&Embedding::new(vec![1.0, 0.0]), 3).await.unwrap();

    let ids: Vec<&str> = results.iter().map(|r| r.record.id.as_str()).collect();
    assert_eq!(ids, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn given_zero_top_k_when_querying_then_returns_empty() {
    let store = InMemoryVectorStore::new(2);
    store.insert(record("A", vec![1.0, 0.0])).await.unwrap();

    let results = store.query(&Embedding::new(vec![1.0, 0.0]), 0).await.unwrap();

    assert!(results.is_empty());
}

#[tokio::test]
async fn given_zero_vector_record_when_querying_then_it_ranks_below_positive_matches() {
    let store = InMemoryVectorStore::new(2);
    store.insert(record("zero", vec![0.0, 0.0])).await.unwrap();
    store.insert(record("match", vec![1.0, 1.0])).await.unwrap();

    let results = store.query(&Embedding::new(vec![1.0, 0.5]), 2).await.unwrap();

    assert_eq!(results[0].record.id, "match");
    assert_eq!(results[1].record.id, "zero");
    assert_eq!(results[1].similarity, 0.0);
}

#[tokio::test]
async fn given_wrong_dimension_when_inserting_then_returns_dimension_mismatch() {
    let store = InMemoryVectorStore::new(3);

    let err = store.insert(record("short", vec![1.0, 0.0])).await.unwrap_err();

    assert!(matches!(
        err,
        VectorStoreError::DimensionMismatch {
            expected: 3,
            actual: 2
        }
    ));
    assert_eq!(store.len().await, 0);
}

#[tokio::test]
async fn given_wrong_dimension_when_querying_then_returns_dimension_mismatch() {
    let store = InMemoryVectorStore::new(3);
    store.insert(record("A", vec![1.0, 0.0, 0.0])).await.unwrap();

    let err = store
        .query(&Embedding::new(vec![1.0, 0.0]), 1)
        .await
        .unwrap_err();

    assert!(matches!(err, VectorStoreError::DimensionMismatch { .. }));
}

#[tokio::test]
async fn given_nan_embedding_when_inserting_then_returns_non_finite_error() {
    let store = InMemoryVectorStore::new(2);

    let err = store
        .insert(record("nan", vec![f32::NAN, 1.0]))
        .await
        .unwrap_err();

    assert!(matches!(err, VectorStoreError::NonFiniteEmbedding));
}

#[tokio::test]
async fn given_inserts_when_reading_records_then_insertion_order_is_preserved() {
    let store = InMemoryVectorStore::new(2);
    store.insert(record("x", vec![0.0, 1.0])).await.unwrap();
    store.insert(record("y", vec![1.0, 0.0])).await.unwrap();

    let ids: Vec<String> = store.records().await.into_iter().map(|r| r.id).collect();

    assert_eq!(ids, vec!["x", "y"]);
    assert_eq!(store.dimensions(), 2);
}

#[tokio::test]
async fn given_concurrent_writers_and_readers_when_running_then_no_record_is_lost() {
    let store = Arc::new(InMemoryVectorStore::new(2));
    let mut handles = Vec::new();

    for writer in 0..8 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            for i in 0..25 {
                store
                    .insert(record(&format!("w{writer}-{i}"), vec![1.0, i as f32]))
                    .await
                    .unwrap();
                let results = store.query(&Embedding::new(vec![1.0, 0.0]), 3).await.unwrap();
                assert!(results.len() <= 3);
            }
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(store.len().await, 200);
}

#[tokio::test]
async fn given_huge_finite_components_when_querying_then_parallel_record_ranks_first() {
    let store = InMemoryVectorStore::new(2);
    store.insert(record("huge", vec![1e30, 1e30])).await.unwrap();
    store.insert(record("ok", vec![0.0, 1.0])).await.unwrap();

    let results = store.query(&Embedding::new(vec![1.0, 1.0]), 2).await.unwrap();

    assert_eq!(results[0].record.id, "huge");
    assert!((results[0].similarity - 1.0).abs() < 1e-6);
    assert_eq!(results[1].record.id, "ok");
    assert!((results[1].similarity - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-5);
}

#[tokio::test]
async fn given_nan_query_when_querying_then_returns_non_finite_error() {
    let store = InMemoryVectorStore::new(2);
    store.insert(record("A", vec![1.0, 0.0])).await.unwrap();

    let err = store
        .query(&Embedding::new(vec![f32::NAN, 1.0]), 1)
        .await
        .unwrap_err();

    assert!(matches!(err, VectorStoreError::NonFiniteEmbedding));
}

#[tokio::test]
async fn given_infinite_query_when_querying_then_returns_non_finite_error() {
    let store = InMemoryVectorStore::new(2);

    let err = store
        .query(&Embedding::new(vec![f32::INFINITY, 0.0]), 1)
        .await
        .unwrap_err();

    assert!(matches!(err, VectorStoreError::NonFiniteEmbedding));
}
