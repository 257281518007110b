mod init_tracing;
mod query_sanitizer;
mod request_id;
mod tracing_config;

pub use init_tracing::init_tracing;
pub use query_sanitizer::sanitize_query;
pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
pub use tracing_config::{DEFAULT_FILTER, TracingConfig};
