use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::VectorStore;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub records: usize,
}

#[tracing::instrument(skip(state))]
pub async fn health_handler<V>(State(state): State<AppState<V>>) -> impl IntoResponse
where
    V: VectorStore + 'static,
{
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            records: state.vector_store.len().await,
        }),
    )
}
