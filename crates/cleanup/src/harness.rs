use std::sync::Arc;

use tracing::info;

use crate::error::CleanupError;
use crate::service::DatabaseCleanupService;

/// Per-test setup for database-backed integration tests.
///
/// Call `before_each` at the top of every test; a failure should abort the test.
#[derive(Clone)]
pub struct IntegrationTestBase {
    cleanup: Arc<DatabaseCleanupService>,
}

impl IntegrationTestBase {
    pub fn new(cleanup: Arc<DatabaseCleanupService>) -> Self {
        Self { cleanup }
    }

    pub async fn before_each(&self) -> Result<(), CleanupError> {
        info!("Cleaning up database before test.");
        self.cleanup.truncate().await?;
        info!("Completed database clean up.");
        Ok(())
    }

    pub fn cleanup(&self) -> &DatabaseCleanupService {
        &self.cleanup
    }
}
