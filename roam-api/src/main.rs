use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use roam_api::{app, state::projection_options, AppState};
use roam_store::{Config, HttpPackageSource};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roam_api=debug,roam_core=debug,roam_store=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting Roam on port {}", config.server.port);
    tracing::info!("Fetching packages from {}", config.backend.base_url);

    let source = HttpPackageSource::new(&config.backend).context("Failed to build HTTP client")?;

    let projection = projection_options(&config.presentation);
    let app = app(AppState::new(Arc::new(source), projection));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
