//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, image table loading, and the Axum
//! server lifecycle.

use crate::application::images::{ImageMap, ImageResolver};
use crate::application::services::SessionService;
use crate::config::Config;
use crate::infrastructure::persistence::{
    PgContactRepository, PgIndustryRepository, PgJobRepository, PgOfferingRepository,
    PgTestimonialRepository,
};
use crate::routes::app_router;
use crate::state::{AppState, Repositories};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Creates the PostgreSQL pool from the configured limits.
///
/// The pool connects lazily, so the site can start (and serve catalog
/// content) while the database is still unreachable.
///
/// # Errors
///
/// Returns an error if the connection URL cannot be parsed.
pub fn connect_pool(config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect_lazy(&config.database_url)
        .context("Invalid database URL")?;

    Ok(pool)
}

/// Loads the keyword to image table, from `IMAGE_MAP_PATH` when set.
///
/// # Errors
///
/// Returns an error if the configured file is unreadable or invalid.
pub fn load_image_map(config: &Config) -> Result<ImageMap> {
    match &config.image_map_path {
        Some(path) => {
            let map = ImageMap::from_file(path)
                .with_context(|| format!("Failed to load image map from {path}"))?;
            tracing::info!(path = %path, rules = map.rules().len(), "Image map loaded");
            Ok(map)
        }
        None => Ok(ImageMap::builtin()),
    }
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations (a failure is logged and the site keeps serving fallbacks)
/// - Image resolution table
/// - Admin session service
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - The database URL or image map is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_pool(&config)?;

    match sqlx::migrate!("./migrations").run(&pool).await {
        Ok(()) => tracing::info!("Database migrations applied"),
        Err(e) => tracing::warn!(error = %e, "Failed to apply migrations; serving fallback content"),
    }

    let pool = Arc::new(pool);
    let repositories = Repositories {
        industries: Arc::new(PgIndustryRepository::new(pool.clone())),
        offerings: Arc::new(PgOfferingRepository::new(pool.clone())),
        testimonials: Arc::new(PgTestimonialRepository::new(pool.clone())),
        jobs: Arc::new(PgJobRepository::new(pool.clone())),
        contacts: Arc::new(PgContactRepository::new(pool)),
    };

    let images = Arc::new(ImageResolver::new(load_image_map(&config)?));

    let sessions = SessionService::new(
        config.admin_password.clone(),
        config.session_signing_secret.clone().unwrap_or_default(),
        chrono::Duration::minutes(config.admin_session_ttl_minutes),
    );

    let state = AppState::new(repositories, images, sessions, config.catalog_fallback);

    let app = app_router(state, &config.assets_dir);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
