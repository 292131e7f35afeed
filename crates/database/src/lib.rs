pub mod error;
pub mod logging;
pub mod pool;
pub mod session;

pub use error::{map_db_error, map_pool_error};
pub use logging::init_tracing;
pub use pool::{create_pool, DbPool};
pub use session::PgSession;

use anyhow::Result;
use cleanup::{CleanupError, DatabaseCleanupService, EntityCatalog};
use std::sync::Arc;

/// Database handle used by the test suite
pub struct Database {
    pool: DbPool,
}

impl Database {
    /// Create a new database service from a connection pool
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create a new database service from configuration
    pub async fn from_config(config: &config::DatabaseConfig) -> Result<Self> {
        let pool = create_pool(config).await?;
        Ok(Self::new(pool))
    }

    /// Session over this database's pool
    pub fn session(&self) -> Arc<PgSession> {
        Arc::new(PgSession::new(self.pool.clone()))
    }

    /// Cleanup service for `catalog`, refused outside the configured test profile
    pub fn cleanup_service(
        &self,
        config: &config::CleanupConfig,
        catalog: &EntityCatalog,
    ) -> Result<DatabaseCleanupService, CleanupError> {
        DatabaseCleanupService::for_profile(config, catalog, self.session())
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}
