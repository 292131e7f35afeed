use async_trait::async_trait;

#[cfg(any(test, feature = "test-mocks"))]
use mockall::automock;

/// Failures reported by the persistence session
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Statement rejected by database ({code}): {message}")]
    StatementRejected { code: String, message: String },
    #[error("Transaction conflict: {0}")]
    TransactionConflict(String),
    #[error("Database connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Database authentication failed")]
    AuthenticationFailed,
    #[error("Database connection pool error: {0}")]
    PoolError(#[source] anyhow::Error),
    #[error("Database operation error: {0}")]
    DatabaseError(#[source] anyhow::Error),
}

/// Session able to run native SQL against the persistence backend.
///
/// The connection behind it belongs to the caller; implementations only borrow it
/// for the duration of one call.
#[cfg_attr(any(test, feature = "test-mocks"), automock)]
#[async_trait]
pub trait SqlSession: Send + Sync {
    /// Run `sql` in its own transaction. Commits on success, rolls back on error.
    async fn execute_in_transaction(&self, sql: &str) -> Result<(), SessionError>;
}
