#![allow(dead_code)]

use anyhow::{Context, Result};
use database::DbPool;
use deadpool_postgres::{Config, ManagerConfig, RecyclingMethod, Runtime};
use tokio_postgres::NoTls;

pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::level_filters::LevelFilter::DEBUG)
        .try_init();
}

/// Helper function to create test database configuration
pub fn db_config_for_tests() -> config::DatabaseConfig {
    let _ = dotenvy::dotenv();

    // Falls back to localhost defaults if neither a config file nor env is available
    match config::TestConfig::load_or_env() {
        Ok(config) => config.database,
        Err(_) => config::DatabaseConfig {
            host: "localhost".to_string(),
            port: 5432,
            database: "cleanup_test".to_string(),
            username: "postgres".to_string(),
            password: "postgres".to_string(),
            max_connections: 2,
        },
    }
}

/// Admin pool plus a pool whose connections resolve unqualified names in `schema`.
///
/// Each test gets its own schema so tests sharing the database stay isolated.
pub async fn pools_for_schema(schema: &str) -> Result<(DbPool, DbPool)> {
    let config = db_config_for_tests();

    let admin = database::create_pool(&config)
        .await
        .context("Failed to connect to test database")?;
    admin
        .get()
        .await?
        .batch_execute(&format!(
            "DROP SCHEMA IF EXISTS {schema} CASCADE; CREATE SCHEMA {schema};"
        ))
        .await?;

    let mut cfg = Config::new();
    cfg.host = Some(config.host.clone());
    cfg.port = Some(config.port);
    cfg.dbname = Some(config.database.clone());
    cfg.user = Some(config.username.clone());
    cfg.password = Some(config.password.clone());
    cfg.options = Some(format!("-c search_path={schema}"));
    cfg.manager = Some(ManagerConfig {
        recycling_method: RecyclingMethod::Fast,
    });
    let scoped = cfg.create_pool(Some(Runtime::Tokio1), NoTls)?;

    Ok((admin, scoped))
}

pub async fn drop_schema(admin: &DbPool, schema: &str) -> Result<()> {
    admin
        .get()
        .await?
        .batch_execute(&format!("DROP SCHEMA IF EXISTS {schema} CASCADE"))
        .await?;
    Ok(())
}

pub async fn count_rows(pool: &DbPool, table: &str) -> Result<i64> {
    let client = pool.get().await?;
    let row = client
        .query_one(&format!("SELECT COUNT(*) FROM {table}"), &[])
        .await?;
    Ok(row.get(0))
}
