use async_trait::async_trait;
use cleanup::{SessionError, SqlSession};
use tracing::debug;

use crate::error::{map_db_error, map_pool_error};
use crate::pool::DbPool;

/// `SqlSession` backed by the shared PostgreSQL pool
pub struct PgSession {
    pool: DbPool,
}

impl PgSession {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SqlSession for PgSession {
    async fn execute_in_transaction(&self, sql: &str) -> Result<(), SessionError> {
        let mut client = self.pool.get().await.map_err(map_pool_error)?;

        // Dropping the transaction without commit rolls it back
        let transaction = client.transaction().await.map_err(map_db_error)?;
        transaction.batch_execute(sql).await.map_err(map_db_error)?;
        transaction.commit().await.map_err(map_db_error)?;

        debug!("Committed statement: {}", sql);
        Ok(())
    }
}
