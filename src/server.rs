//! HTTP server initialization and runtime setup.
//!
//! Handles database connection, schema setup, and Axum server lifecycle.

use crate::application::services::LinkService;
use crate::config::Config;
use crate::infrastructure::persistence::SqliteLinkRepository;
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::code_generator::HashCodeGenerator;

use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool (creating the database file if needed)
/// - Links table
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if the database connection, schema setup, or server
/// bind fails.
pub async fn run(config: Config) -> Result<()> {
    let options =
        SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect_with(options)
        .await?;
    tracing::info!("Connected to database");

    let pool = Arc::new(pool);

    let link_repository = Arc::new(SqliteLinkRepository::new(pool.clone()));
    link_repository.init().await?;

    let link_service = Arc::new(LinkService::new(
        link_repository,
        Arc::new(HashCodeGenerator),
    ));

    let state = AppState {
        db: pool.as_ref().clone(),
        base_url: config.base_url,
        link_service,
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
