mod config;
mod routes;

use anyhow::Context;
use bridge_core::location::RegionCatalog;
use config::ServerConfig;
use routes::AppState;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;
    let catalog = load_catalog(&config).await?;
    info!(
        "Region catalog ready: {} states, {} districts",
        catalog.state_count(),
        catalog.district_count()
    );

    let shared_state = Arc::new(AppState::new(catalog));

    let mut app = routes::router(shared_state);
    if let Some(dir) = &config.static_dir {
        info!("Serving form frontend from {}", dir.display());
        app = app.fallback_service(ServeDir::new(dir));
    }
    // Form dev server runs on another origin
    let app = app
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!("listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn load_catalog(config: &ServerConfig) -> anyhow::Result<RegionCatalog> {
    let Some(path) = &config.regions_file else {
        return RegionCatalog::bundled().context("bundled region catalog is invalid");
    };

    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read region catalog {}", path.display()))?;
    RegionCatalog::from_json(&json).with_context(|| format!("failed to load region catalog {}", path.display()))
}
