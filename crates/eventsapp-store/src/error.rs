//! Store error types and `sqlx` error translation.

use eventsapp_core::error::DomainError;
use sqlx::error::ErrorKind;
use thiserror::Error;

/// Errors raised while opening the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Invalid connection string or failed connection.
    #[error("database connection failed: {0}")]
    Connect(#[from] sqlx::Error),

    /// A migration could not be applied.
    #[error("database migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Wraps any `sqlx` failure as an infrastructure error.
pub(crate) fn infrastructure(err: &sqlx::Error) -> DomainError {
    DomainError::Infrastructure(err.to_string())
}

/// Returns `true` if `err` is a foreign key constraint violation.
pub(crate) fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => matches!(db.kind(), ErrorKind::ForeignKeyViolation),
        _ => false,
    }
}
