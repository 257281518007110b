pub const DEFAULT_FILTER: &str = "info,storefront=debug,tower_http=debug";

pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    pub filter: String,
}

impl TracingConfig {
    pub fn new(environment: impl Into<String>, json_format: bool, filter: impl Into<String>) -> Self {
        Self {
            environment: environment.into(),
            json_format,
            filter: filter.into(),
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "local".to_string()),
            json_format: std::env::var("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
            filter: DEFAULT_FILTER.to_string(),
        }
    }
}
