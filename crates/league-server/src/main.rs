//! League records HTTP server
//!
//! Provides the REST API for leagues, teams and match results.

use anyhow::Result;
use league_engine::LeagueEngineBuilder;
use league_server::{api, config::ServerConfig, telemetry};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;

    // Initialize tracing; keep the guard so buffered file logs are flushed
    let _log_guard = telemetry::init_tracing(&config)?;
    info!("Loaded configuration: {:?}", config);

    // Initialize engine
    let engine = LeagueEngineBuilder::new()
        .with_repository(config.repository.to_repository_config())
        .build()
        .await?;
    info!("League engine initialized");

    let app = api::create_router(engine);

    // Start server
    let addr = config.bind_address();
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    info!("  Health check: http://{}/health", addr);
    info!("  Leagues: http://{}/v1/leagues", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
