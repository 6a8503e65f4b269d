//! Not-found page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{http::StatusCode, response::IntoResponse};

/// Template for `templates/not_found.html`.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub title: String,
    pub back_href: String,
    pub back_label: String,
}

impl NotFoundTemplate {
    pub fn new(
        title: impl Into<String>,
        back_href: impl Into<String>,
        back_label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            back_href: back_href.into(),
            back_label: back_label.into(),
        }
    }
}

/// Fallback for unmatched routes.
pub async fn not_found_handler() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        NotFoundTemplate::new("Page not found", "/industries", "Browse industries"),
    )
}
