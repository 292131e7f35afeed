use std::sync::Arc;

use config::CleanupConfig;
use tracing::{debug, error, info};

use crate::catalog::EntityCatalog;
use crate::error::CleanupError;
use crate::ports::SqlSession;
use crate::resolver::{resolve_table_names, ResolvedTable};

/// Resets the database between integration tests.
///
/// Table names are resolved once when the service is built and reused by every
/// `truncate` call. A constructed service is always ready to truncate.
pub struct DatabaseCleanupService {
    session: Arc<dyn SqlSession>,
    tables: Vec<ResolvedTable>,
    joined_table_names: String,
    truncate_statement: String,
}

impl DatabaseCleanupService {
    pub fn new(
        catalog: &EntityCatalog,
        session: Arc<dyn SqlSession>,
    ) -> Result<Self, CleanupError> {
        let tables = resolve_table_names(catalog)?;
        let joined_table_names = tables
            .iter()
            .map(|t| t.name.as_str())
            .collect::<Vec<_>>()
            .join(",");
        let truncate_statement = format!("TRUNCATE TABLE {joined_table_names} CASCADE");

        info!(
            "Database cleanup prepared for {} table(s): {}",
            tables.len(),
            joined_table_names
        );

        Ok(Self {
            session,
            tables,
            joined_table_names,
            truncate_statement,
        })
    }

    /// Build the service only when the configured profile allows it
    pub fn for_profile(
        config: &CleanupConfig,
        catalog: &EntityCatalog,
        session: Arc<dyn SqlSession>,
    ) -> Result<Self, CleanupError> {
        if !config.is_active() {
            return Err(CleanupError::ProfileInactive {
                profile: config.profile.clone(),
                active_profile: config.active_profile.clone(),
            });
        }

        Self::new(catalog, session)
    }

    /// Remove all rows from every resolved table, cascading to referencing tables.
    ///
    /// No retries: an error here means the database state is unknown and the
    /// calling test must not proceed.
    pub async fn truncate(&self) -> Result<(), CleanupError> {
        debug!("Executing: {}", self.truncate_statement);

        self.session
            .execute_in_transaction(&self.truncate_statement)
            .await
            .map_err(|e| {
                error!("Failed to truncate tables {}: {}", self.joined_table_names, e);
                CleanupError::Execution(e)
            })
    }

    pub fn tables(&self) -> &[ResolvedTable] {
        &self.tables
    }

    pub fn table_names(&self) -> Vec<&str> {
        self.tables.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn joined_table_names(&self) -> &str {
        &self.joined_table_names
    }

    pub fn truncate_statement(&self) -> &str {
        &self.truncate_statement
    }
}
