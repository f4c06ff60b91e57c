//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, schema bootstrap, and Axum server lifecycle.

use crate::config::Config;
use crate::infrastructure::persistence::PgSessionFactory;
use crate::infrastructure::persistence::bootstrap::{connect, ensure_schema};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - `users` / `advertisements` tables (created if absent)
/// - Axum HTTP server with graceful shutdown on Ctrl-C / SIGTERM
///
/// The pool is closed exactly once after the server stops, whether it
/// stopped cleanly or with an error.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Schema bootstrap fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect(&config)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    let result = serve(&config, pool.clone()).await;

    pool.close().await;
    tracing::info!("Database pool closed");

    result
}

async fn serve(config: &Config, pool: PgPool) -> Result<()> {
    ensure_schema(&pool)
        .await
        .context("Failed to create database schema")?;
    tracing::info!("Database schema ready");

    let state = AppState::new(Arc::new(PgSessionFactory::new(pool)));
    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
