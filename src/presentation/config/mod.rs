mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment, InvalidEnvironment};
pub use settings::{
    CatalogSettings, EmbeddingsSettings, LoggingSettings, RecommendationSettings, ServerSettings,
    Settings,
};
