use anyhow::Context;
use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use activities_api::config::ServerConfig;
use activities_api::database::ActivityStore;
use activities_api::web;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // 1. Logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. In-memory catalog, seeded once per process
    let store = ActivityStore::seeded();
    let app = web::router(store);

    // 3. Bind (with fallback port)
    let config = ServerConfig::from_env();
    let addr = config.addr()?;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_addr()?;
            warn!("could not bind {}: {}. Trying fallback {}", addr, e, fallback);
            tokio::net::TcpListener::bind(fallback)
                .await
                .with_context(|| format!("could not bind fallback {}", fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("activities api listening on http://{}", bound_addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
