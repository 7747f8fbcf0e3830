use std::net::SocketAddr;

use tracing_subscriber::{fmt, EnvFilter};

use cadence_api::api::{create_router, AppState};
use cadence_api::config::Config;
use cadence_api::storage::{load_catalog, S3BlobStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;

    // Bootstrap the catalog before binding the listener: no request is ever
    // served against a partially loaded store, and a missing dataset is fatal.
    tracing::info!(bucket = %config.s3_bucket_name, "loading catalog from blob store");
    let store = S3BlobStore::from_config(&config).await;
    let catalog = load_catalog(&store, &config).await?;

    let state = AppState::new(catalog, config.max_events_per_user);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
