use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use storefront::application::ports::Embedder;
use storefront::application::services::{BackfillService, RecommendationService};
use storefront::infrastructure::embedding::RandomEmbedder;
use storefront::infrastructure::observability::{TracingConfig, init_tracing};
use storefront::infrastructure::persistence::{InMemoryVectorStore, JsonFileProductRepository};
use storefront::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env()?;
    let settings = Settings::load(environment).context("failed to load settings")?;

    init_tracing(&TracingConfig::new(
        environment.as_str(),
        settings.logging.enable_json,
        settings.logging.level.clone(),
    ));

    let embedder: Arc<dyn Embedder> = Arc::new(RandomEmbedder::new(settings.embeddings.dimension));
    let vector_store = Arc::new(InMemoryVectorStore::new(embedder.dimensions()));

    if settings.recommendations.backfill_on_startup {
        let catalog = &settings.catalog.path;
        let repository = Arc::new(
            JsonFileProductRepository::open(catalog)
                .await
                .with_context(|| format!("failed to open catalog {}", catalog.display()))?,
        );
        let backfill = BackfillService::new(
            Arc::clone(&embedder),
            repository,
            Arc::clone(&vector_store),
        );

        let loaded = backfill.load_stored().await?;
        let report = backfill.run().await?;
        tracing::info!(
            loaded,
            generated = report.generated,
            "Vector store populated from catalog"
        );
    }

    let recommendation_service = Arc::new(RecommendationService::new(
        embedder,
        Arc::clone(&vector_store),
        settings.recommendations.default_top_k,
    ));

    let state = AppState {
        recommendation_service,
        vector_store,
    };

    let router = create_router(state);

    let address = settings.server.address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    tracing::info!(address = %address, environment = %environment, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
