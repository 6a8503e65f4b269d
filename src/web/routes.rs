//! Page route configuration.

use crate::state::AppState;
use crate::web::handlers::{industries_page_handler, industry_page_handler, services_page_handler};
use axum::{Router, routing::get};

/// Public pages.
///
/// # Endpoints
///
/// - `GET /industries` - Industry grid
/// - `GET /industries/{slug}` - Industry detail page
/// - `GET /services` - Services overview
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/industries", get(industries_page_handler))
        .route("/industries/{slug}", get(industry_page_handler))
        .route("/services", get(services_page_handler))
}
