//! FuturoConecta API server.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use futuro_conecta::adapters::http::{app_router, ProfileHandlers};
use futuro_conecta::adapters::sqlite::{self, SqliteProfileReader, SqliteProfileRepository};
use futuro_conecta::config::AppConfig;
use futuro_conecta::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;

    init_tracing(&config.server);

    let pool = sqlite::connect(&config.database)
        .await
        .with_context(|| format!("failed to open database {}", config.database.url))?;

    if config.database.run_migrations {
        sqlite::migrate(&pool)
            .await
            .context("failed to run migrations")?;
        tracing::info!("database migrations applied");
    }

    let handlers = ProfileHandlers::new(
        Arc::new(SqliteProfileRepository::new(pool.clone())),
        Arc::new(SqliteProfileReader::new(pool.clone())),
        config.profiles.clone(),
    );
    let app = app_router(handlers, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!(%addr, environment = ?config.server.environment, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    pool.close().await;
    tracing::info!("server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
