//! HTML template rendering handlers for the public pages.

mod industries;
mod not_found;
mod services;

pub use industries::{industries_page_handler, industry_page_handler};
pub use not_found::{NotFoundTemplate, not_found_handler};
pub use services::services_page_handler;
