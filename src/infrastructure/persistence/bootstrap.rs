//! Schema bootstrap and connection pool setup.

use sqlx::PgPool;
use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

use crate::config::Config;

/// Builds the connection pool from the configured limits.
///
/// # Errors
///
/// Returns an error if the first connection cannot be established.
pub async fn connect(config: &Config) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
}

/// Creates the `users` and `advertisements` tables if they are absent.
///
/// Safe to run on every start, including against a database whose tables
/// were created by an earlier deployment.
///
/// # Errors
///
/// Returns an error if the migration cannot be applied.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
