use cleanup::SessionError;
use tokio_postgres::error::SqlState;

/// Convert tokio_postgres::Error to SessionError
pub fn map_db_error(err: tokio_postgres::Error) -> SessionError {
    if err.is_closed() {
        return SessionError::ConnectionFailed("Connection closed".to_string());
    }

    if let Some(db_err) = err.as_db_error() {
        let message = db_err.message().to_string();

        return match db_err.code() {
            &SqlState::T_R_SERIALIZATION_FAILURE
            | &SqlState::T_R_DEADLOCK_DETECTED
            | &SqlState::LOCK_NOT_AVAILABLE => SessionError::TransactionConflict(message),

            &SqlState::INVALID_PASSWORD | &SqlState::INVALID_AUTHORIZATION_SPECIFICATION => {
                SessionError::AuthenticationFailed
            }

            &SqlState::CONNECTION_EXCEPTION
            | &SqlState::CONNECTION_DOES_NOT_EXIST
            | &SqlState::CONNECTION_FAILURE => SessionError::ConnectionFailed(message),

            // Missing tables, permissions, syntax and everything else the server rejects
            code => SessionError::StatementRejected {
                code: code.code().to_string(),
                message,
            },
        };
    }

    // Non-SQL errors (connection issues, etc.)
    SessionError::DatabaseError(err.into())
}

/// Convert deadpool pool errors to SessionError
pub fn map_pool_error(err: deadpool_postgres::PoolError) -> SessionError {
    match err {
        deadpool_postgres::PoolError::Backend(e) => map_db_error(e),
        other => SessionError::PoolError(other.into()),
    }
}
