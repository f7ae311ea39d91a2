//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, migrations, redirect-policy wiring, and the
//! Axum server lifecycle.

use crate::application::services::ShortenerService;
use crate::config::{Config, RedirectPolicyKind};
use crate::infrastructure::persistence::PgMappingRepository;
use crate::infrastructure::template::FsTemplateStore;
use crate::routes::app_router;
use crate::state::{AppState, RedirectPolicy};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Embedded migrations
/// - Redirect policy (direct redirect or templated page)
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let repository = Arc::new(PgMappingRepository::new(Arc::new(pool)));
    let shortener = Arc::new(ShortenerService::new(
        repository,
        config.base_url.clone(),
        config.code_length,
    ));

    let redirect_policy = match config.redirect_policy {
        RedirectPolicyKind::Redirect => RedirectPolicy::Http,
        RedirectPolicyKind::TemplatePage => {
            let dir = config
                .template_dir
                .clone()
                .context("TEMPLATE_DIR must be set when REDIRECT_POLICY is 'template'")?;
            tracing::info!(
                "Redirect template: {}/{}",
                dir.trim_end_matches('/'),
                config.template_file
            );
            RedirectPolicy::Page(Arc::new(FsTemplateStore::new(
                dir,
                config.template_file.clone(),
            )))
        }
    };

    let state = AppState {
        shortener,
        redirect_policy,
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when the process receives Ctrl-C / SIGINT.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install shutdown signal handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
