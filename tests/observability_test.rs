use axum::http::HeaderMap;
use storefront::infrastructure::observability::{
    REQUEST_ID_HEADER, RequestId, TracingConfig, sanitize_query,
};

#[test]
fn given_blank_query_when_sanitizing_then_marks_empty() {
    assert_eq!(sanitize_query("   "), "[EMPTY]");
}

#[test]
fn given_short_query_when_sanitizing_then_returns_trimmed_text() {
    assert_eq!(sanitize_query("  wireless headphones "), "wireless headphones");
}

#[test]
fn given_long_multibyte_query_when_sanitizing_then_truncates_on_char_boundary() {
    let query = "é".repeat(200);

    let sanitized = sanitize_query(&query);

    assert!(sanitized.starts_with(&"é".repeat(80)));
    assert!(sanitized.ends_with("(200 chars total)"));
}

#[test]
fn given_credentials_in_query_when_sanitizing_then_redacts_them() {
    let sanitized = sanitize_query("phones token=abc123 Bearer xyz password=hunter2");

    assert_eq!(
        sanitized,
        "phones token=[REDACTED] Bearer [REDACTED] password=[REDACTED]"
    );
}

#[test]
fn given_header_when_extracting_request_id_then_reuses_it() {
    let mut headers = HeaderMap::new();
    headers.insert(REQUEST_ID_HEADER, "abc-123".parse().unwrap());

    assert_eq!(RequestId::from_headers(&headers).as_str(), "abc-123");
}

#[test]
fn given_no_header_when_extracting_request_id_then_generates_uuid() {
    let id = RequestId::from_headers(&HeaderMap::new());

    assert_eq!(id.as_str().len(), 36);
}

#[test]
fn given_explicit_values_when_building_tracing_config_then_keeps_them() {
    let config = TracingConfig::new("test", true, "debug");

    assert_eq!(config.environment, "test");
    assert!(config.json_format);
    assert_eq!(config.filter, "debug");
}
