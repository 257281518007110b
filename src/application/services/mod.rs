mod backfill_service;
mod recommendation_service;

pub use backfill_service::{BackfillError, BackfillReport, BackfillService};
pub use recommendation_service::{DEFAULT_TOP_K, RecommendationError, RecommendationService};
