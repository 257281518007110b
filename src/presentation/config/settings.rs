use std::path::PathBuf;

use config::Environment as EnvironmentSource;
use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;
use crate::application::services::DEFAULT_TOP_K;
use crate::domain::EMBEDDING_DIM;
use crate::infrastructure::observability::DEFAULT_FILTER;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub embeddings: EmbeddingsSettings,
    pub recommendations: RecommendationSettings,
    pub catalog: CatalogSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddingsSettings {
    pub dimension: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationSettings {
    pub default_top_k: usize,
    pub backfill_on_startup: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Layers built-in defaults, then `appsettings.<env>.*` if present, then
    /// `APP_`-prefixed variables such as `APP_SERVER__PORT=8080`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000_i64)?
            .set_default("embeddings.dimension", EMBEDDING_DIM as i64)?
            .set_default("recommendations.default_top_k", DEFAULT_TOP_K as i64)?
            .set_default("recommendations.backfill_on_startup", false)?
            .set_default("catalog.path", "data/products.json")?
            .set_default("logging.level", DEFAULT_FILTER)?
            .set_default("logging.enable_json", false)?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
