//! Loads a JSON fixture of profiles into the database.
//!
//! ```text
//! seed --fixture fixtures/profiles.json [--keep-existing]
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use futuro_conecta::adapters::fixture::load_fixture;
use futuro_conecta::adapters::sqlite::{self, SqliteProfileReader, SqliteProfileRepository};
use futuro_conecta::application::handlers::{SeedProfilesCommand, SeedProfilesHandler};
use futuro_conecta::config::AppConfig;
use futuro_conecta::telemetry::init_tracing;

#[derive(Debug, Parser)]
#[command(name = "seed", version, about = "Seed the profile database from a JSON fixture")]
struct Cli {
    /// Path to the fixture file (a JSON array of profiles).
    #[arg(long, default_value = "fixtures/profiles.json")]
    fixture: PathBuf,

    /// Append to the existing profiles instead of replacing them.
    #[arg(long)]
    keep_existing: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;
    init_tracing(&config.server);

    let pool = sqlite::connect(&config.database)
        .await
        .with_context(|| format!("failed to open database {}", config.database.url))?;
    sqlite::migrate(&pool)
        .await
        .context("failed to run migrations")?;

    let records = load_fixture(&cli.fixture)?
        .into_iter()
        .map(|record| record.map_err(|e| e.to_string()))
        .collect();

    let handler = SeedProfilesHandler::new(
        Arc::new(SqliteProfileRepository::new(pool.clone())),
        Arc::new(SqliteProfileReader::new(pool.clone())),
    );
    let report = handler
        .handle(SeedProfilesCommand {
            records,
            keep_existing: cli.keep_existing,
        })
        .await
        .context("seeding failed")?;

    tracing::info!(
        inserted = report.inserted,
        rejected = report.rejected,
        success_rate = %format!("{:.1}%", report.success_rate()),
        "seed finished"
    );
    for (area, count) in &report.by_area {
        tracing::info!(%area, count, "profiles by area");
    }

    tracing::info!(total = report.total_stored, "verification");
    for profile in &report.sample {
        tracing::info!(
            id = %profile.id,
            name = %profile.name,
            role = %profile.role,
            area = %profile.area,
            "stored profile"
        );
    }

    pool.close().await;
    Ok(())
}
