//! Services overview page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::application::views::{OfferingView, TestimonialView};
use crate::state::AppState;

/// Template for the services overview.
///
/// Renders `templates/services.html` with every visible service and the
/// featured testimonials underneath.
#[derive(Template, WebTemplate)]
#[template(path = "services.html")]
pub struct ServicesTemplate {
    pub services: Vec<OfferingView>,
    pub testimonials: Vec<TestimonialView>,
}

/// Renders the services overview.
///
/// # Endpoint
///
/// `GET /services`
pub async fn services_page_handler(State(state): State<AppState>) -> impl IntoResponse {
    let (services, testimonials) = tokio::join!(
        state.offering_service.list_offerings(),
        state.testimonial_service.list_testimonials(true)
    );

    ServicesTemplate {
        services,
        testimonials,
    }
}
