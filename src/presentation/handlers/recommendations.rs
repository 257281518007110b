use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;
use serde_json::Value;

use crate::application::ports::VectorStore;
use crate::domain::Recommendation;
use crate::infrastructure::observability::sanitize_query;
use crate::presentation::state::AppState;

pub const QUERY_REQUIRED_MESSAGE: &str = "Query is required";
pub const RECOMMEND_FAILED_MESSAGE: &str = "Failed to recommend products";
pub const INVALID_TOP_K_MESSAGE: &str = "topK must be a non-negative integer";

#[derive(Debug, Default, PartialEq, Eq)]
pub struct RecommendationRequest {
    pub query: Option<String>,
    pub top_k: Option<usize>,
}

#[derive(Debug, thiserror::Error)]
#[error("invalid topK: {0}")]
pub struct InvalidTopK(Value);

impl RecommendationRequest {
    /// Reads the body field by field so a bad optional `topK` is not
    /// mistaken for a missing `query`. A non-string `query` counts as absent.
    pub fn from_body(body: &Value) -> Result<Self, InvalidTopK> {
        let query = body
            .get("query")
            .and_then(Value::as_str)
            .map(String::from);

        let top_k = match body.get("topK") {
            None | Some(Value::Null) => None,
            Some(raw) => Some(
                raw.as_u64()
                    .and_then(|k| usize::try_from(k).ok())
                    .ok_or_else(|| InvalidTopK(raw.clone()))?,
            ),
        };

        Ok(Self { query, top_k })
    }
}

#[derive(Serialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<RecommendationItem>,
}

#[derive(Serialize)]
pub struct RecommendationItem {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<Recommendation> for RecommendationItem {
    fn from(r: Recommendation) -> Self {
        Self {
            id: r.id,
            name: r.name,
            description: r.description,
        }
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, payload))]
pub async fn recommendations_handler<V>(
    State(state): State<AppState<V>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> impl IntoResponse
where
    V: VectorStore + 'static,
{
    // an unreadable body carries no query, so it is reported like a missing one
    let request = match payload {
        Ok(Json(body)) => match RecommendationRequest::from_body(&body) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!(error = %e, "Recommendation request rejected");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: INVALID_TOP_K_MESSAGE.to_string(),
                    }),
                )
                    .into_response();
            }
        },
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Unreadable recommendation request body");
            RecommendationRequest::default()
        }
    };

    tracing::debug!(
        query = %sanitize_query(request.query.as_deref().unwrap_or_default()),
        top_k = ?request.top_k,
        "Processing recommendation request"
    );

    match state
        .recommendation_service
        .recommend(request.query.as_deref(), request.top_k)
        .await
    {
        Ok(recommendations) => {
            tracing::info!(count = recommendations.len(), "Recommendations served");
            (
                StatusCode::OK,
                Json(RecommendationResponse {
                    recommendations: recommendations.into_iter().map(Into::into).collect(),
                }),
            )
                .into_response()
        }
        Err(e) if e.is_validation() => {
            tracing::warn!(error = %e, "Recommendation request rejected");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: QUERY_REQUIRED_MESSAGE.to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Recommendation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: RECOMMEND_FAILED_MESSAGE.to_string(),
                }),
            )
                .into_response()
        }
    }
}
