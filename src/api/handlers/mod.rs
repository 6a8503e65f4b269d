//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod admin;
pub mod contact;
pub mod health;
pub mod industries;
pub mod jobs;
pub mod services;
pub mod testimonials;

pub use admin::{admin_login_handler, admin_stats_handler};
pub use contact::contact_handler;
pub use health::health_handler;
pub use industries::{industry_handler, industry_list_handler, industry_slugs_handler};
pub use jobs::{job_handler, job_list_handler};
pub use services::{service_handler, service_list_handler, service_slugs_handler};
pub use testimonials::testimonial_list_handler;
