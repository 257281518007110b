//! Generates embeddings for every catalog product that lacks one and writes
//! them back to the catalog file. Takes no arguments.

use std::sync::Arc;

use anyhow::Context;

use storefront::application::ports::Embedder;
use storefront::application::services::BackfillService;
use storefront::infrastructure::embedding::RandomEmbedder;
use storefront::infrastructure::observability::{TracingConfig, init_tracing};
use storefront::infrastructure::persistence::{InMemoryVectorStore, JsonFileProductRepository};
use storefront::presentation::{Environment, Settings};

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

    let catalog = &settings.catalog.path;
    let repository = Arc::new(
        JsonFileProductRepository::open(catalog)
            .await
            .with_context(|| format!("failed to open catalog {}", catalog.display()))?,
    );

    let embedder: Arc<dyn Embedder> = Arc::new(RandomEmbedder::new(settings.embeddings.dimension));
    let vector_store = Arc::new(InMemoryVectorStore::new(embedder.dimensions()));

    tracing::info!(catalog = %repository.path().display(), "Backfilling catalog");

    let report = BackfillService::new(embedder, repository, vector_store)
        .run()
        .await
        .context("backfill failed")?;

    tracing::info!(
        total = report.total,
        generated = report.generated,
        skipped = report.skipped,
        "Catalog backfill complete"
    );

    Ok(())
}
