mod health;
mod recommendations;

pub use health::{HealthResponse, health_handler};
pub use recommendations::{
    ErrorResponse, INVALID_TOP_K_MESSAGE, InvalidTopK, QUERY_REQUIRED_MESSAGE,
    RECOMMEND_FAILED_MESSAGE, RecommendationItem, RecommendationRequest, RecommendationResponse,
    recommendations_handler,
};
