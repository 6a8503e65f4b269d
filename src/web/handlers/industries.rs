//! Industry page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::application::views::IndustryView;
use crate::domain::entities::is_addressable_slug;
use crate::state::AppState;
use crate::web::handlers::NotFoundTemplate;

/// Template for the industry grid.
///
/// Renders `templates/industries.html`. An empty `industries` list renders
/// the empty-state message instead of the grid.
#[derive(Template, WebTemplate)]
#[template(path = "industries.html")]
pub struct IndustriesTemplate {
    pub industries: Vec<IndustryView>,
}

/// Template for a single industry page.
#[derive(Template, WebTemplate)]
#[template(path = "industry.html")]
pub struct IndustryTemplate {
    pub industry: IndustryView,
    /// Other visible industries, for the "explore more" strip.
    pub related: Vec<IndustryView>,
}

/// Renders the industry grid.
///
/// # Endpoint
///
/// `GET /industries`
pub async fn industries_page_handler(State(state): State<AppState>) -> impl IntoResponse {
    IndustriesTemplate {
        industries: state.industry_service.list_industries().await,
    }
}

/// Renders one industry.
///
/// # Endpoint
///
/// `GET /industries/{slug}`
///
/// Unknown, inactive or unaddressable slugs render the not-found page with
/// status 404.
pub async fn industry_page_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Response {
    let industry = if is_addressable_slug(&slug) {
        state.industry_service.get_industry(&slug).await
    } else {
        None
    };

    let Some(industry) = industry else {
        return (
            StatusCode::NOT_FOUND,
            NotFoundTemplate::new("Industry not found", "/industries", "Browse all industries"),
        )
            .into_response();
    };

    let related = state
        .industry_service
        .list_industries()
        .await
        .into_iter()
        .filter(|i| i.slug != industry.slug)
        .take(3)
        .collect();

    IndustryTemplate { industry, related }.into_response()
}
