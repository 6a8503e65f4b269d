//! API route configuration.

use crate::api::handlers::{
    admin_login_handler, admin_stats_handler, contact_handler, industry_handler,
    industry_list_handler, industry_slugs_handler, job_handler, job_list_handler,
    service_handler, service_list_handler, service_slugs_handler, testimonial_list_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public content reads.
///
/// # Endpoints
///
/// - `GET /industries`         - Visible industries
/// - `GET /industries/slugs`   - Industry slugs
/// - `GET /industries/{slug}`  - One industry
/// - `GET /services`           - Visible services
/// - `GET /services/slugs`     - Service slugs
/// - `GET /services/{slug}`    - One service
/// - `GET /testimonials`       - Testimonials (`?featured=true`)
/// - `GET /jobs`               - Open positions
/// - `GET /jobs/{slug}`        - One position
pub fn content_routes() -> Router<AppState> {
    Router::new()
        .route("/industries", get(industry_list_handler))
        .route("/industries/slugs", get(industry_slugs_handler))
        .route("/industries/{slug}", get(industry_handler))
        .route("/services", get(service_list_handler))
        .route("/services/slugs", get(service_slugs_handler))
        .route("/services/{slug}", get(service_handler))
        .route("/testimonials", get(testimonial_list_handler))
        .route("/jobs", get(job_list_handler))
        .route("/jobs/{slug}", get(job_handler))
}

/// Contact form submission. Rate limited by the caller.
///
/// - `POST /contact`
pub fn contact_routes() -> Router<AppState> {
    Router::new().route("/contact", post(contact_handler))
}

/// Admin login. Rate limited by the caller.
///
/// - `POST /admin/session`
pub fn admin_login_routes() -> Router<AppState> {
    Router::new().route("/admin/session", post(admin_login_handler))
}

/// Admin routes protected by [`crate::api::middleware::auth`].
///
/// - `GET /admin/stats` - Dashboard counters
pub fn admin_protected_routes() -> Router<AppState> {
    Router::new().route("/admin/stats", get(admin_stats_handler))
}
