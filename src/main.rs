use fmp_financials::{CachedSource, FmpClientBuilder, PipelineConfig, pipeline};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let config = PipelineConfig::default();
    let client = FmpClientBuilder::from_env()?.build()?;
    if !client.has_api_key() {
        tracing::debug!("FMP_API_KEY is not set; requests go out unauthenticated");
    }

    let source = CachedSource::new(client, config.disk_cache()).cache_mode(config.cache_mode);
    let summary = pipeline::run(&source, &config).await?;

    tracing::info!(
        processed = summary.processed.len(),
        skipped = summary.skipped.len(),
        rows = summary.rows_written,
        "Done"
    );
    Ok(())
}
