// Truncate every table of the configured entity registry.
// Run with: cargo run --bin cleanup-test-db

use anyhow::{anyhow, Context, Result};
use cleanup::EntityCatalog;
use config::TestConfig;
use database::Database;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load .env file if present (ignore errors if not found)
    let _ = dotenvy::dotenv();

    if let Err(e) = run().await {
        error!("Failed to clean up test database: {:#}", e);
        eprintln!("Failed to clean up test database: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = TestConfig::load_or_env().context("Failed to load configuration")?;
    database::init_tracing(&config.logging);

    let catalog = EntityCatalog::from_config(&config.cleanup.entities);
    if catalog.is_empty() {
        return Err(anyhow!("No entities listed under cleanup.entities"));
    }
    info!("Loaded {} managed type(s)", catalog.len());

    let database = Database::from_config(&config.database)
        .await
        .context("Failed to connect to database")?;

    let cleanup = database.cleanup_service(&config.cleanup, &catalog)?;
    cleanup.truncate().await?;

    info!("Truncated {}", cleanup.joined_table_names());
    Ok(())
}
