//! Events App Store — `SQLite` persistence for categories and events.
//!
//! Implements the `eventsapp-core` repository traits on top of a shared
//! `sqlx` pool. Schema changes are applied from the workspace `migrations/`
//! directory.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod error;
mod schema;
pub mod sqlite_category_repository;
pub mod sqlite_event_repository;

pub use error::StoreError;
pub use sqlite_category_repository::SqliteCategoryRepository;
pub use sqlite_event_repository::SqliteEventRepository;

/// Embedded migrations for the `category` and `event` tables.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Opens a connection pool with foreign keys enforced and applies pending
/// migrations.
///
/// # Errors
///
/// Returns `StoreError::Connect` if the URL is invalid or the database cannot
/// be opened, and `StoreError::Migrate` if a migration fails.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, StoreError> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    MIGRATOR.run(&pool).await?;
    tracing::info!("database migrations applied");

    Ok(pool)
}
