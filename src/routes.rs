//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /health`         - Health check: database and local catalog (public)
//! - `/api/*`               - Content JSON API (public reads)
//! - `POST /api/contact`    - Contact form (rate limited)
//! - `/api/admin/*`         - Admin session login and counters
//! - `/industries`, `/services` - Server-rendered pages
//! - `/landing/*`, `/static/*`  - Local asset bundle
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on the contact form and admin login
//! - **Authentication** - Bearer session token on admin routes
//! - **Path normalization** - Trailing slash handling

use std::path::Path;

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use crate::web::handlers::not_found_handler;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `assets_dir` - directory holding the `landing/` and `static/` bundles
///   that resolved image paths point into
pub fn app_router(state: AppState, assets_dir: &str) -> NormalizePath<Router> {
    let admin_router = api::routes::admin_protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .merge(api::routes::admin_login_routes().layer(rate_limit::login_layer()));

    let api_router = api::routes::content_routes()
        .merge(api::routes::contact_routes().layer(rate_limit::contact_layer()))
        .merge(admin_router);

    let assets = Path::new(assets_dir);

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .merge(web::routes::page_routes())
        .nest_service("/landing", ServeDir::new(assets.join("landing")))
        .nest_service("/static", ServeDir::new(assets.join("static")))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
